use crate::core::{Attribute, ClassPalette, ColorScale, LinearScale, Observation};
use crate::error::AtlasResult;

use super::chart_layout::{ChartMetrics, sort_bar_order, vertical_scale};

/// Everything derived from the currently selected attribute.
///
/// Rebuilt as a whole on every selection and handed to the frame builders,
/// so no renderer reads the selection from anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasState {
    pub attribute: Attribute,
    pub color_scale: ColorScale,
    pub vertical_scale: LinearScale,
    /// Observation indices in bar draw order.
    pub bar_order: Vec<usize>,
}

impl AtlasState {
    pub fn compute(
        observations: &[Observation],
        attribute: Attribute,
        palette: &ClassPalette,
        metrics: ChartMetrics,
    ) -> AtlasResult<Self> {
        Ok(Self {
            attribute,
            color_scale: ColorScale::natural_breaks(observations, attribute, palette.clone())?,
            vertical_scale: vertical_scale(observations, attribute, metrics)?,
            bar_order: sort_bar_order(observations, attribute),
        })
    }
}
