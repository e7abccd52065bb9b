mod attribute_controller;
mod chart_layout;
mod data_loader;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod map_layout;
mod reconcile;
mod render_coordinator;
mod render_frame_builder;
mod scene;
mod scene_sync;
mod selector;
mod state;
mod transition;
mod transition_controller;

pub use chart_layout::{AxisTick, ChartMetrics, axis_ticks, bar_geometry, sort_bar_order, vertical_scale};
pub use data_loader::{AtlasData, DataSource, load_atlas_data, load_observations, load_regions};
pub use engine::AtlasEngine;
pub use engine_config::{
    AtlasEngineConfig, AtlasEngineConfigJsonContractV1, ChartSurfaceConfig,
    ENGINE_CONFIG_JSON_SCHEMA_V1, MapSurfaceConfig, SurfaceLayout,
};
pub use engine_snapshot::AtlasSnapshot;
pub use json_contract::{ATLAS_SNAPSHOT_JSON_SCHEMA_V1, AtlasSnapshotJsonContractV1};
pub use map_layout::{RegionShape, map_projection, project_regions};
pub use reconcile::{SceneOp, reconcile};
pub use scene::{BarGeometry, ElementShape, Scene, SceneElement};
pub use selector::{AttributeSelector, PLACEHOLDER_LABEL, SelectorOption};
pub use state::AtlasState;
pub use transition::{AnimatedProps, Easing, TransitionTimeline};
