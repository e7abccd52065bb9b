use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::AtlasEngine;
use crate::core::{ScreenPoint, SurfaceKind};
use crate::error::AtlasResult;
use crate::render::{CairoContextRenderer, Renderer};

const FRAME_INTERVAL_MS: u64 = 16;

/// GTK4 host for an [`AtlasEngine`]: a map and a chart drawing area, the
/// attribute dropdown overlaid on the map, pointer routing, and a frame timer
/// driving transitions.
pub struct GtkAtlasAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<AtlasEngine<R>>>,
    root: gtk::Box,
    map_area: gtk::DrawingArea,
    chart_area: gtk::DrawingArea,
    dropdown: gtk::DropDown,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkAtlasAdapter<R> {
    #[must_use]
    pub fn new(engine: AtlasEngine<R>) -> Self {
        let map_viewport = engine.config().map_viewport();
        let chart_viewport = engine.config().chart_viewport();
        let labels: Vec<String> = engine
            .selector()
            .options()
            .iter()
            .map(|option| option.label.clone())
            .collect();
        let displayed = engine.selector().displayed_index();
        let engine = Rc::new(RefCell::new(engine));

        let map_area = surface_area(map_viewport.width, map_viewport.height);
        let chart_area = surface_area(chart_viewport.width, chart_viewport.height);
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let dropdown = gtk::DropDown::from_strings(&label_refs);
        dropdown.set_selected(u32::try_from(displayed).unwrap_or(0));
        dropdown.set_halign(gtk::Align::Start);
        dropdown.set_valign(gtk::Align::Start);

        let overlay = gtk::Overlay::new();
        overlay.set_child(Some(&map_area));
        overlay.add_overlay(&dropdown);
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.append(&overlay);
        root.append(&chart_area);

        let adapter = Self {
            engine,
            root,
            map_area,
            chart_area,
            dropdown,
        };
        adapter.install_draw_funcs();
        adapter.install_pointer_controllers();
        adapter.install_selector();
        adapter.install_frame_timer();
        adapter
    }

    /// Root widget to place in a window.
    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<AtlasEngine<R>>> {
        Rc::clone(&self.engine)
    }

    /// Runs `update` against the engine and redraws both surfaces.
    pub fn update_engine<F>(&self, update: F) -> AtlasResult<()>
    where
        F: FnOnce(&mut AtlasEngine<R>) -> AtlasResult<()>,
    {
        let result = update(&mut *self.engine.borrow_mut());
        self.map_area.queue_draw();
        self.chart_area.queue_draw();
        result
    }

    fn install_draw_funcs(&self) {
        for (area, surface) in [
            (&self.map_area, SurfaceKind::Map),
            (&self.chart_area, SurfaceKind::Chart),
        ] {
            let engine = Rc::clone(&self.engine);
            area.set_draw_func(move |_, context, _, _| {
                let Ok(mut engine) = engine.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = engine.render_on_cairo_context(surface, context) {
                    warn!(error = %err, ?surface, "draw failed");
                }
            });
        }
    }

    fn install_pointer_controllers(&self) {
        for (area, surface) in [
            (&self.map_area, SurfaceKind::Map),
            (&self.chart_area, SurfaceKind::Chart),
        ] {
            let motion = gtk::EventControllerMotion::new();
            {
                let engine = Rc::clone(&self.engine);
                let map_area = self.map_area.clone();
                let chart_area = self.chart_area.clone();
                motion.connect_motion(move |_, x, y| {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        if let Err(err) = engine.pointer_move(surface, ScreenPoint::new(x, y)) {
                            warn!(error = %err, "pointer move failed");
                        }
                    }
                    map_area.queue_draw();
                    chart_area.queue_draw();
                });
            }
            {
                let engine = Rc::clone(&self.engine);
                let map_area = self.map_area.clone();
                let chart_area = self.chart_area.clone();
                motion.connect_leave(move |_| {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        if let Err(err) = engine.pointer_leave() {
                            warn!(error = %err, "pointer leave failed");
                        }
                    }
                    map_area.queue_draw();
                    chart_area.queue_draw();
                });
            }
            area.add_controller(motion);
        }
    }

    fn install_selector(&self) {
        let engine = Rc::clone(&self.engine);
        let map_area = self.map_area.clone();
        let chart_area = self.chart_area.clone();
        self.dropdown.connect_selected_notify(move |dropdown| {
            let Ok(mut engine) = engine.try_borrow_mut() else {
                return;
            };
            let index = dropdown.selected() as usize;
            let Some(label) = engine
                .selector()
                .options()
                .get(index)
                .map(|option| option.label.clone())
            else {
                return;
            };
            if let Err(err) = engine.select_attribute_label(&label) {
                debug!(error = %err, "selection rejected");
                let displayed = engine.selector().displayed_index();
                drop(engine);
                dropdown.set_selected(u32::try_from(displayed).unwrap_or(0));
                return;
            }
            map_area.queue_draw();
            chart_area.queue_draw();
        });
    }

    fn install_frame_timer(&self) {
        let engine = Rc::clone(&self.engine);
        let map_area = self.map_area.clone();
        let chart_area = self.chart_area.clone();
        gtk::glib::timeout_add_local(Duration::from_millis(FRAME_INTERVAL_MS), move || {
            if let Ok(mut engine) = engine.try_borrow_mut() {
                if engine.is_animating() {
                    if let Err(err) = engine.advance_transitions(FRAME_INTERVAL_MS as f64) {
                        warn!(error = %err, "transition step failed");
                    }
                    map_area.queue_draw();
                    chart_area.queue_draw();
                }
            }
            gtk::glib::ControlFlow::Continue
        });
    }
}

fn surface_area(width: u32, height: u32) -> gtk::DrawingArea {
    gtk::DrawingArea::builder()
        .content_width(i32::try_from(width).unwrap_or(i32::MAX))
        .content_height(i32::try_from(height).unwrap_or(i32::MAX))
        .build()
}
