mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::{FrameCounts, NullRenderer};
pub use primitives::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, StrokeStyle, TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderer, render_svg_document};

use crate::error::AtlasResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` per
/// surface, so drawing code stays isolated from data, classification and
/// hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AtlasResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
