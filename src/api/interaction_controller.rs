use tracing::debug;

use crate::core::{Attribute, ElementId, ScreenPoint, SurfaceKind, format_tooltip_value};
use crate::error::{AtlasError, AtlasResult};
use crate::interaction::{InfoLabel, StrokeChanges};
use crate::render::Renderer;

use super::AtlasEngine;
use super::engine_core::EngineCore;
use super::scene::ElementShape;

impl EngineCore {
    /// Value shown for `key`: the joined region value, else the bar's own.
    pub(super) fn value_for_key(&self, key: &str, attribute: Attribute) -> Option<f64> {
        self.region_value(key, attribute).or_else(|| {
            self.observations
                .iter()
                .find(|observation| observation.state == key)
                .and_then(|observation| observation.finite_value(attribute))
        })
    }

    fn display_name(&self, key: &str) -> String {
        self.region_shapes
            .get(key)
            .map_or_else(|| key.to_owned(), |region| region.name.clone())
    }

    fn client_point(&self, surface: SurfaceKind, local: ScreenPoint) -> ScreenPoint {
        let origin = match surface {
            SurfaceKind::Map => self.config.layout.map_origin,
            SurfaceKind::Chart => self.config.layout.chart_origin,
        };
        local.offset(origin.x, origin.y)
    }

    fn apply_strokes(&mut self, changes: StrokeChanges) {
        for (id, stroke) in changes {
            if let Some(element) = self.scene_mut(id.surface).get_mut(&id) {
                element.stroke = stroke;
            }
        }
    }

    /// Topmost element of `surface` under the surface-local `point`.
    pub(super) fn hit_test(&self, surface: SurfaceKind, point: ScreenPoint) -> Option<ElementId> {
        if !point.is_finite() {
            return None;
        }
        self.scene(surface)
            .iter()
            .rev()
            .find(|element| match &element.shape {
                ElementShape::Region(shape) => shape.contains(point),
                ElementShape::Bar(_) => self
                    .displayed(&element.id)
                    .and_then(|props| props.bar)
                    .is_some_and(|bar| bar.height > 0.0 && bar.contains(point)),
            })
            .map(|element| element.id.clone())
    }

    fn enter(&mut self, id: &ElementId, local: ScreenPoint) -> AtlasResult<()> {
        if self.scene(id.surface).get(id).is_none() {
            return Err(AtlasError::UnknownElement(id.to_string()));
        }
        let attribute = self.state.attribute;
        let label = InfoLabel {
            key: id.key.clone(),
            title: format_tooltip_value(self.value_for_key(&id.key, attribute)),
            subtitle: attribute.label().to_owned(),
            name: self.display_name(&id.key),
            surface: id.surface,
            position: ScreenPoint::new(0.0, 0.0),
        };
        let pointer = self.client_point(id.surface, local);
        let viewport_width = f64::from(self.config.window.width);
        let changes = self.highlight.enter(label, pointer, viewport_width);
        debug!(element = %id, changed = changes.len(), "pointer entered");
        self.apply_strokes(changes);
        Ok(())
    }

    fn leave(&mut self) -> bool {
        let changes = self.highlight.leave();
        if changes.is_empty() {
            return false;
        }
        debug!(changed = changes.len(), "pointer left");
        self.apply_strokes(changes);
        true
    }
}

impl<R: Renderer> AtlasEngine<R> {
    /// Pointer entered element `id` at surface-local `local`.
    pub fn pointer_enter(&mut self, id: &ElementId, local: ScreenPoint) -> AtlasResult<()> {
        self.core.enter(id, local)?;
        self.render()
    }

    /// Pointer moved within the highlighted element; only the label follows.
    pub fn pointer_move_label(&mut self, surface: SurfaceKind, local: ScreenPoint) -> AtlasResult<()> {
        let pointer = self.core.client_point(surface, local);
        let viewport_width = f64::from(self.core.config.window.width);
        self.core.highlight.move_label(surface, pointer, viewport_width);
        self.render()
    }

    /// Pointer left the highlighted element (or the surface).
    pub fn pointer_leave(&mut self) -> AtlasResult<()> {
        if self.core.leave() {
            self.render()?;
        }
        Ok(())
    }

    /// Routes a raw pointer position on `surface` to enter, move or leave.
    ///
    /// Returns the element under the pointer, if any.
    pub fn pointer_move(
        &mut self,
        surface: SurfaceKind,
        local: ScreenPoint,
    ) -> AtlasResult<Option<ElementId>> {
        let hit = self.core.hit_test(surface, local);
        match &hit {
            Some(id) if self.core.highlight.highlighted_key() == Some(id.key.as_str()) => {
                self.pointer_move_label(surface, local)?;
            }
            Some(id) => self.pointer_enter(id, local)?,
            None => self.pointer_leave()?,
        }
        Ok(hit)
    }

    /// Topmost element of `surface` under surface-local `local`.
    #[must_use]
    pub fn hit_test(&self, surface: SurfaceKind, local: ScreenPoint) -> Option<ElementId> {
        self.core.hit_test(surface, local)
    }
}
