use serde::{Deserialize, Serialize};

use crate::core::{AlbersParams, Attribute, ClassPalette, ScreenPoint, Viewport};
use crate::error::{AtlasError, AtlasResult};
use crate::interaction::TooltipPlacement;
use crate::render::{Color, StrokeStyle};

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Map surface sizing, projection and animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSurfaceConfig {
    /// Fraction of the window width used by the map.
    pub width_ratio: f64,
    pub height: u32,
    pub projection: AlbersParams,
    /// Stroke every shape returns to when not highlighted.
    pub resting_stroke: StrokeStyle,
    pub fill_transition_ms: f64,
}

impl Default for MapSurfaceConfig {
    fn default() -> Self {
        Self {
            width_ratio: 0.95,
            height: 700,
            projection: AlbersParams::default(),
            resting_stroke: StrokeStyle::new(Color::BLACK, 0.5),
            fill_transition_ms: 1200.0,
        }
    }
}

/// Chart surface sizing, bar geometry, axis and animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSurfaceConfig {
    /// Fraction of the window width used by the chart.
    pub width_ratio: f64,
    pub height: u32,
    pub left_padding: f64,
    pub right_padding: f64,
    pub top_bottom_padding: f64,
    /// Pixel row of value zero; bar heights are measured up from here.
    pub baseline: f64,
    /// Vertical offset added to every bar's top edge.
    pub bar_inset: f64,
    /// Horizontal gap between neighbouring bars.
    pub bar_gutter: f64,
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub axis_font_size: f64,
    pub axis_color: Color,
    pub title_position: ScreenPoint,
    pub title_font_size: f64,
    pub frame_stroke: StrokeStyle,
    pub resting_stroke: StrokeStyle,
    pub bar_transition_ms: f64,
    /// Per-bar delay, multiplied by the bar's sorted index.
    pub bar_stagger_ms: f64,
}

impl Default for ChartSurfaceConfig {
    fn default() -> Self {
        Self {
            width_ratio: 0.425,
            height: 300,
            left_padding: 25.0,
            right_padding: 2.0,
            top_bottom_padding: 5.0,
            baseline: 290.0,
            bar_inset: 5.0,
            bar_gutter: 1.0,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            axis_font_size: 10.0,
            axis_color: Color::BLACK,
            title_position: ScreenPoint::new(60.0, 30.0),
            title_font_size: 14.0,
            frame_stroke: StrokeStyle::new(Color::BLACK, 1.0),
            resting_stroke: StrokeStyle::none(),
            bar_transition_ms: 500.0,
            bar_stagger_ms: 20.0,
        }
    }
}

/// Where each surface sits in client (window) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceLayout {
    pub map_origin: ScreenPoint,
    pub chart_origin: ScreenPoint,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            map_origin: ScreenPoint::new(0.0, 0.0),
            chart_origin: ScreenPoint::new(0.0, 700.0),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist and reload the atlas setup; every field
/// falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasEngineConfig {
    /// Host window size; surface widths derive from its width.
    pub window: Viewport,
    pub initial_attribute: Attribute,
    pub map: MapSurfaceConfig,
    pub chart: ChartSurfaceConfig,
    pub palette: ClassPalette,
    pub highlight_stroke: StrokeStyle,
    pub tooltip: TooltipPlacement,
    pub layout: SurfaceLayout,
    /// Topology object holding the state boundaries; `None` takes the first.
    pub topology_object: Option<String>,
}

impl Default for AtlasEngineConfig {
    fn default() -> Self {
        Self {
            window: Viewport::new(1280, 1024),
            initial_attribute: Attribute::default(),
            map: MapSurfaceConfig::default(),
            chart: ChartSurfaceConfig::default(),
            palette: ClassPalette::default(),
            highlight_stroke: StrokeStyle::new(Color::WHITE, 3.0),
            tooltip: TooltipPlacement::default(),
            layout: SurfaceLayout::default(),
            topology_object: Some("USAstates".to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: AtlasEngineConfig,
}

impl AtlasEngineConfig {
    /// Default config for a host window of `window` size.
    #[must_use]
    pub fn new(window: Viewport) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_attribute(mut self, attribute: Attribute) -> Self {
        self.initial_attribute = attribute;
        self
    }

    #[must_use]
    pub fn map_viewport(&self) -> Viewport {
        Viewport::new(
            scaled_width(self.window.width, self.map.width_ratio),
            self.map.height,
        )
    }

    #[must_use]
    pub fn chart_viewport(&self) -> Viewport {
        Viewport::new(
            scaled_width(self.window.width, self.chart.width_ratio),
            self.chart.height,
        )
    }

    /// Chart width left for bars once the paddings are removed.
    #[must_use]
    pub fn chart_inner_width(&self) -> f64 {
        f64::from(self.chart_viewport().width) - self.chart.left_padding - self.chart.right_padding
    }

    #[must_use]
    pub fn chart_inner_height(&self) -> f64 {
        f64::from(self.chart.height) - 2.0 * self.chart.top_bottom_padding
    }

    pub fn validate(&self) -> AtlasResult<()> {
        if !self.window.is_valid() {
            return Err(AtlasError::InvalidViewport {
                width: self.window.width,
                height: self.window.height,
            });
        }
        for viewport in [self.map_viewport(), self.chart_viewport()] {
            if !viewport.is_valid() {
                return Err(AtlasError::InvalidViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
        }
        if self.chart_inner_width() <= 0.0 || self.chart_inner_height() <= 0.0 {
            return Err(AtlasError::InvalidData(
                "chart paddings leave no room for bars".to_owned(),
            ));
        }
        let chart = &self.chart;
        let finite_non_negative = [
            ("baseline", chart.baseline),
            ("bar inset", chart.bar_inset),
            ("bar gutter", chart.bar_gutter),
            ("bar transition", chart.bar_transition_ms),
            ("bar stagger", chart.bar_stagger_ms),
            ("fill transition", self.map.fill_transition_ms),
            ("tooltip label width", self.tooltip.label_width),
            ("tooltip label height", self.tooltip.label_height),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(AtlasError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if chart.baseline == 0.0 {
            return Err(AtlasError::InvalidData(
                "chart baseline must be > 0".to_owned(),
            ));
        }
        self.map.projection.validate()?;
        self.map.resting_stroke.validate()?;
        chart.resting_stroke.validate()?;
        chart.frame_stroke.validate()?;
        self.highlight_stroke.validate()?;
        self.palette.validate()
    }

    pub fn to_json_contract_v1_pretty(&self) -> AtlasResult<String> {
        let payload = AtlasEngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AtlasError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AtlasResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| AtlasError::InvalidData(format!("failed to parse config json: {e}")))?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value)
                .map_err(|e| AtlasError::InvalidData(format!("invalid config json: {e}")));
        }
        let payload: AtlasEngineConfigJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| AtlasError::InvalidData(format!("invalid config contract: {e}")))?;
        if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
            return Err(AtlasError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn scaled_width(window_width: u32, ratio: f64) -> u32 {
    let scaled = f64::from(window_width) * ratio;
    if scaled.is_finite() && scaled > 0.0 {
        scaled.floor() as u32
    } else {
        0
    }
}
