use crate::core::{
    Attribute, ColorScale, ElementId, JoinReport, LinearScale, Observation, Region, SurfaceKind,
};
use crate::interaction::{HoverState, InfoLabel};
use crate::render::{Color, Renderer, StrokeStyle};

use super::chart_layout::{AxisTick, ChartMetrics, axis_ticks};
use super::scene::{BarGeometry, Scene};
use super::selector::AttributeSelector;
use super::{AtlasEngine, AtlasEngineConfig};

impl<R: Renderer> AtlasEngine<R> {
    #[must_use]
    pub fn config(&self) -> &AtlasEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn chart_metrics(&self) -> ChartMetrics {
        self.core.metrics
    }

    #[must_use]
    pub fn attribute(&self) -> Attribute {
        self.core.state.attribute
    }

    #[must_use]
    pub fn color_scale(&self) -> &ColorScale {
        &self.core.state.color_scale
    }

    #[must_use]
    pub fn vertical_scale(&self) -> LinearScale {
        self.core.state.vertical_scale
    }

    #[must_use]
    pub fn axis_ticks(&self) -> Vec<AxisTick> {
        axis_ticks(
            self.core.state.vertical_scale,
            self.core.metrics,
            self.core.config.chart.tick_count,
        )
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.core.observations
    }

    /// Regions after the join.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.core.regions
    }

    #[must_use]
    pub fn join_report(&self) -> &JoinReport {
        &self.core.join_report
    }

    #[must_use]
    pub fn selector(&self) -> &AttributeSelector {
        &self.core.selector
    }

    #[must_use]
    pub fn scene(&self, surface: SurfaceKind) -> &Scene {
        self.core.scene(surface)
    }

    /// State keys of the bars, left to right.
    #[must_use]
    pub fn bar_order(&self) -> Vec<String> {
        self.core.chart_scene.keys_in_order()
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.core.highlight.state()
    }

    #[must_use]
    pub fn info_label(&self) -> Option<&InfoLabel> {
        self.core.highlight.label()
    }

    /// Stroke currently applied to `id`.
    #[must_use]
    pub fn element_stroke(&self, id: &ElementId) -> Option<StrokeStyle> {
        self.core.scene(id.surface).get(id).map(|element| element.stroke)
    }

    /// Stroke `id` returns to when not highlighted.
    #[must_use]
    pub fn resting_stroke(&self, id: &ElementId) -> Option<StrokeStyle> {
        self.core.highlight.snapshot(id)
    }

    /// Fill as currently drawn, mid-transition values included.
    #[must_use]
    pub fn displayed_fill(&self, id: &ElementId) -> Option<Color> {
        self.core.displayed(id).map(|props| props.fill)
    }

    /// Bar rectangle as currently drawn, mid-transition values included.
    #[must_use]
    pub fn displayed_bar(&self, id: &ElementId) -> Option<BarGeometry> {
        self.core.displayed(id).and_then(|props| props.bar)
    }

    /// Bar rectangle once running transitions finish.
    #[must_use]
    pub fn target_bar(&self, id: &ElementId) -> Option<BarGeometry> {
        self.core
            .chart_scene
            .get(id)
            .and_then(|element| element.bar_geometry())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.core.timeline.is_idle()
    }
}
