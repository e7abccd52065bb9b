use tracing::debug;

use crate::core::{Attribute, ElementId, SurfaceKind};

use super::chart_layout::bar_geometry;
use super::engine_core::EngineCore;
use super::reconcile::{SceneOp, reconcile};
use super::scene::{ElementShape, SceneElement};
use super::transition::AnimatedProps;

impl EngineCore {
    /// Joined numeric value of the region with `key`.
    pub(super) fn region_value(&self, key: &str, attribute: Attribute) -> Option<f64> {
        self.regions
            .iter()
            .filter(|region| region.key == key)
            .find_map(|region| region.value(attribute))
    }

    pub(super) fn desired_map_elements(&self) -> Vec<SceneElement> {
        let attribute = self.state.attribute;
        self.region_shapes
            .values()
            .map(|region| SceneElement {
                id: ElementId::map(region.key.as_str()),
                shape: ElementShape::Region(region.shape.clone()),
                fill: self
                    .state
                    .color_scale
                    .color_for(self.region_value(&region.key, attribute)),
                stroke: self.config.map.resting_stroke,
            })
            .collect()
    }

    pub(super) fn desired_chart_elements(&self) -> Vec<SceneElement> {
        let attribute = self.state.attribute;
        let count = self.state.bar_order.len();
        self.state
            .bar_order
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let observation = &self.observations[index];
                let value = observation.finite_value(attribute);
                SceneElement {
                    id: ElementId::bar(observation.state.as_str()),
                    shape: ElementShape::Bar(bar_geometry(
                        self.metrics,
                        position,
                        count,
                        value,
                        self.state.vertical_scale,
                    )),
                    fill: self.state.color_scale.color_for(value),
                    stroke: self.config.chart.resting_stroke,
                }
            })
            .collect()
    }

    /// Reconciles both scenes against the current state.
    ///
    /// With `animate` set, changed fills and bar geometry transition from
    /// their displayed values; otherwise they jump.
    pub(super) fn sync_scenes(&mut self, animate: bool) {
        let desired = self.desired_map_elements();
        self.sync_surface(SurfaceKind::Map, desired, animate);
        let desired = self.desired_chart_elements();
        self.sync_surface(SurfaceKind::Chart, desired, animate);
    }

    fn sync_surface(&mut self, surface: SurfaceKind, desired: Vec<SceneElement>, animate: bool) {
        let order: Vec<ElementId> = desired.iter().map(|element| element.id.clone()).collect();
        let ops = reconcile(self.scene(surface), desired);
        debug!(?surface, ops = ops.len(), animate, "reconciled scene");

        for op in ops {
            match op {
                SceneOp::Remove(id) => {
                    self.scene_mut(surface).remove(&id);
                    self.highlight.forget(&id);
                    self.timeline.cancel(&id);
                }
                SceneOp::Create { element, .. } => {
                    self.highlight.register(element.id.clone(), element.stroke);
                    self.scene_mut(surface).insert(element);
                }
                SceneOp::Update { mut element, index } => {
                    let Some(existing) = self.scene(surface).get(&element.id) else {
                        continue;
                    };
                    element.stroke = existing.stroke;
                    if animate {
                        let from = self
                            .timeline
                            .sample(&element.id)
                            .unwrap_or_else(|| displayed_props(existing));
                        let (delay_ms, duration_ms) = self.transition_timing(surface, index);
                        self.timeline.schedule(
                            element.id.clone(),
                            from,
                            displayed_props(&element),
                            delay_ms,
                            duration_ms,
                        );
                    } else {
                        self.timeline.cancel(&element.id);
                    }
                    self.scene_mut(surface).insert(element);
                }
            }
        }
        self.scene_mut(surface).reorder(&order);
    }

    fn transition_timing(&self, surface: SurfaceKind, index: usize) -> (f64, f64) {
        match surface {
            SurfaceKind::Map => (0.0, self.config.map.fill_transition_ms),
            SurfaceKind::Chart => (
                index as f64 * self.config.chart.bar_stagger_ms,
                self.config.chart.bar_transition_ms,
            ),
        }
    }

    /// Fill and bar geometry of `id` as currently drawn.
    pub(super) fn displayed(&self, id: &ElementId) -> Option<AnimatedProps> {
        self.timeline
            .sample(id)
            .or_else(|| self.scene(id.surface).get(id).map(displayed_props))
    }
}

fn displayed_props(element: &SceneElement) -> AnimatedProps {
    AnimatedProps {
        fill: element.fill,
        bar: element.bar_geometry(),
    }
}
