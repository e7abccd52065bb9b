use std::collections::HashSet;

use tracing::{info, warn};

use crate::core::{Observation, join_observations};
use crate::error::AtlasResult;
use crate::interaction::HighlightController;
use crate::render::Renderer;

use super::chart_layout::ChartMetrics;
use super::data_loader::{AtlasData, DataSource, load_atlas_data};
use super::engine_core::EngineCore;
use super::map_layout::{map_projection, project_regions};
use super::scene::Scene;
use super::selector::AttributeSelector;
use super::state::AtlasState;
use super::transition::{Easing, TransitionTimeline};
use super::{AtlasEngine, AtlasEngineConfig};

impl<R: Renderer> AtlasEngine<R> {
    /// Joins `data`, classifies the initial attribute and builds both scenes.
    ///
    /// Nothing is drawn until [`AtlasEngine::render`] is called; the first
    /// draw shows final values without transitions.
    pub fn new(renderer: R, config: AtlasEngineConfig, data: AtlasData) -> AtlasResult<Self> {
        config.validate()?;

        let AtlasData {
            observations,
            mut regions,
        } = data;
        let observations = dedupe_observations(observations);
        let join_report = join_observations(&mut regions, &observations);

        let projection = map_projection(&config)?;
        let region_shapes = project_regions(&regions, &projection);
        let metrics = ChartMetrics::from_config(&config);
        let state = AtlasState::compute(
            &observations,
            config.initial_attribute,
            &config.palette,
            metrics,
        )?;
        let highlight = HighlightController::new(config.highlight_stroke, config.tooltip);

        let mut engine = Self {
            renderer,
            core: EngineCore {
                config,
                metrics,
                observations,
                regions,
                region_shapes,
                join_report,
                state,
                selector: AttributeSelector::default(),
                map_scene: Scene::default(),
                chart_scene: Scene::default(),
                timeline: TransitionTimeline::new(Easing::CubicInOut),
                highlight,
            },
        };
        engine.core.sync_scenes(false);

        info!(
            attribute = %engine.core.state.attribute,
            shapes = engine.core.map_scene.len(),
            bars = engine.core.chart_scene.len(),
            "atlas engine ready"
        );
        Ok(engine)
    }

    /// Loads both sources, then builds the engine as [`AtlasEngine::new`].
    pub fn from_sources(
        renderer: R,
        config: AtlasEngineConfig,
        tabular: &DataSource,
        boundary: &DataSource,
    ) -> AtlasResult<Self> {
        let data = load_atlas_data(tabular, boundary, config.topology_object.as_deref())?;
        Self::new(renderer, config, data)
    }
}

/// Keeps the first row of every state key; each key draws a single bar.
fn dedupe_observations(observations: Vec<Observation>) -> Vec<Observation> {
    let mut seen = HashSet::with_capacity(observations.len());
    observations
        .into_iter()
        .filter(|observation| {
            let first = seen.insert(observation.state.clone());
            if !first {
                warn!(key = %observation.state, "dropping repeated tabular row");
            }
            first
        })
        .collect()
}
