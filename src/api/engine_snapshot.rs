use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Attribute, JoinReport};
use crate::interaction::{HoverState, InfoLabel};
use crate::render::{Color, Renderer};

use super::AtlasEngine;
use super::scene::BarGeometry;

/// Serializable deterministic state snapshot used by regression tests and
/// the SVG export tool.
///
/// Fills and bars are target values, independent of running transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasSnapshot {
    pub attribute: Attribute,
    pub breakpoints: Vec<f64>,
    pub vertical_domain: (f64, f64),
    /// Label of the highest axis tick.
    pub top_axis_label: Option<String>,
    pub bar_order: Vec<String>,
    pub map_fills: IndexMap<String, Color>,
    pub bars: IndexMap<String, BarGeometry>,
    pub hover: HoverState,
    pub label: Option<InfoLabel>,
    pub join: JoinReport,
}

impl<R: Renderer> AtlasEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> AtlasSnapshot {
        let core = &self.core;
        AtlasSnapshot {
            attribute: core.state.attribute,
            breakpoints: core.state.color_scale.breakpoints().to_vec(),
            vertical_domain: core.state.vertical_scale.domain(),
            top_axis_label: self.axis_ticks().pop().map(|tick| tick.label),
            bar_order: self.bar_order(),
            map_fills: core
                .map_scene
                .iter()
                .map(|element| (element.id.key.clone(), element.fill))
                .collect(),
            bars: core
                .chart_scene
                .iter()
                .filter_map(|element| {
                    element
                        .bar_geometry()
                        .map(|bar| (element.id.key.clone(), bar))
                })
                .collect(),
            hover: core.highlight.state().clone(),
            label: core.highlight.label().cloned(),
            join: core.join_report.clone(),
        }
    }
}
