use tracing::trace;

use crate::core::SurfaceKind;
use crate::error::AtlasResult;
use crate::render::Renderer;

use super::AtlasEngine;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut AtlasEngine<R>) -> AtlasResult<()> {
        Self::render_surface(engine, SurfaceKind::Map)?;
        Self::render_surface(engine, SurfaceKind::Chart)
    }

    pub(super) fn render_surface<R: Renderer>(
        engine: &mut AtlasEngine<R>,
        surface: SurfaceKind,
    ) -> AtlasResult<()> {
        let frame = engine.build_render_frame(surface)?;
        trace!(
            ?surface,
            paths = frame.paths.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        engine.renderer.render(&frame)
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut AtlasEngine<R>,
        surface: SurfaceKind,
        context: &cairo::Context,
    ) -> AtlasResult<()> {
        let frame = engine.build_render_frame(surface)?;
        engine.renderer.render_on_cairo_context(context, &frame)
    }
}
