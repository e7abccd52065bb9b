use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Attribute, LinearScale, Observation, format_axis_tick};
use crate::error::AtlasResult;

use super::AtlasEngineConfig;
use super::scene::BarGeometry;

/// Resolved pixel metrics of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMetrics {
    pub inner_width: f64,
    pub inner_height: f64,
    pub left_padding: f64,
    pub top_bottom_padding: f64,
    pub baseline: f64,
    pub bar_inset: f64,
    pub bar_gutter: f64,
}

impl ChartMetrics {
    #[must_use]
    pub fn from_config(config: &AtlasEngineConfig) -> Self {
        Self {
            inner_width: config.chart_inner_width(),
            inner_height: config.chart_inner_height(),
            left_padding: config.chart.left_padding,
            top_bottom_padding: config.chart.top_bottom_padding,
            baseline: config.chart.baseline,
            bar_inset: config.chart.bar_inset,
            bar_gutter: config.chart.bar_gutter,
        }
    }
}

/// One labelled tick of the vertical axis, in chart-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Observation indices sorted by descending value of `attribute`.
///
/// Ties keep input order; missing values go last, also in input order.
#[must_use]
pub fn sort_bar_order(observations: &[Observation], attribute: Attribute) -> Vec<usize> {
    let mut order: Vec<usize> = (0..observations.len()).collect();
    order.sort_by_key(|&index| {
        let value = observations[index].finite_value(attribute);
        (value.is_none(), Reverse(OrderedFloat(value.unwrap_or(0.0))))
    });
    order
}

/// Vertical scale mapping `[0, max]` of `attribute` onto `[baseline, 0]`.
///
/// Falls back to `[0, 1]` when no positive finite value exists.
pub fn vertical_scale(
    observations: &[Observation],
    attribute: Attribute,
    metrics: ChartMetrics,
) -> AtlasResult<LinearScale> {
    let max = observations
        .iter()
        .filter_map(|o| o.finite_value(attribute))
        .fold(f64::NEG_INFINITY, f64::max);
    let domain_max = if max.is_finite() && max > 0.0 { max } else { 1.0 };
    LinearScale::new((0.0, domain_max), (metrics.baseline, 0.0))
}

/// Rectangle of the bar at sorted position `index` of `count`.
#[must_use]
pub fn bar_geometry(
    metrics: ChartMetrics,
    index: usize,
    count: usize,
    value: Option<f64>,
    scale: LinearScale,
) -> BarGeometry {
    let slot = metrics.inner_width / count.max(1) as f64;
    let (_, domain_max) = scale.domain();
    let value = value.filter(|v| v.is_finite());

    let height = match value {
        Some(v) if v <= domain_max => (metrics.baseline - scale.map(v)).max(0.0),
        _ => 0.0,
    };
    let y = (scale.map(value.unwrap_or(0.0)) + metrics.bar_inset).max(0.0);

    BarGeometry {
        x: index as f64 * slot + metrics.left_padding,
        y,
        width: (slot - metrics.bar_gutter).max(0.0),
        height,
    }
}

/// Axis ticks of `scale`, positioned in chart-local pixels.
#[must_use]
pub fn axis_ticks(scale: LinearScale, metrics: ChartMetrics, tick_count: usize) -> Vec<AxisTick> {
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            y: scale.map(value) + metrics.top_bottom_padding,
            label: format_axis_tick(value),
        })
        .collect()
}
