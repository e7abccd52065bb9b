//! fencing-atlas: coordinated choropleth map and bar chart of US fencing
//! participation.
//!
//! Tabular state statistics are joined onto state boundaries, classified into
//! natural-break color classes, and drawn on two linked surfaces that share
//! hover highlighting and an attribute selection.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{AtlasEngine, AtlasEngineConfig};
pub use error::{AtlasError, AtlasResult};
