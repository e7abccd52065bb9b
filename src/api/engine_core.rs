use indexmap::IndexMap;

use crate::core::{JoinReport, Observation, Region, SurfaceKind};
use crate::interaction::HighlightController;

use super::chart_layout::ChartMetrics;
use super::map_layout::RegionShape;
use super::scene::Scene;
use super::selector::AttributeSelector;
use super::state::AtlasState;
use super::transition::TransitionTimeline;
use super::AtlasEngineConfig;

/// Internal engine state behind the public facade (`AtlasEngine`).
pub(super) struct EngineCore {
    pub(super) config: AtlasEngineConfig,
    pub(super) metrics: ChartMetrics,
    pub(super) observations: Vec<Observation>,
    pub(super) regions: Vec<Region>,
    pub(super) region_shapes: IndexMap<String, RegionShape>,
    pub(super) join_report: JoinReport,
    pub(super) state: AtlasState,
    pub(super) selector: AttributeSelector,
    pub(super) map_scene: Scene,
    pub(super) chart_scene: Scene,
    pub(super) timeline: TransitionTimeline,
    pub(super) highlight: HighlightController,
}

impl EngineCore {
    pub(super) fn scene(&self, surface: SurfaceKind) -> &Scene {
        match surface {
            SurfaceKind::Map => &self.map_scene,
            SurfaceKind::Chart => &self.chart_scene,
        }
    }

    pub(super) fn scene_mut(&mut self, surface: SurfaceKind) -> &mut Scene {
        match surface {
            SurfaceKind::Map => &mut self.map_scene,
            SurfaceKind::Chart => &mut self.chart_scene,
        }
    }
}
