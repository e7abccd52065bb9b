use crate::core::SurfaceKind;
use crate::error::AtlasResult;
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::render_coordinator::RenderCoordinator;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `AtlasEngine` owns the joined data, the state derived from the selected
/// attribute, both persistent scenes, running transitions and hover state,
/// and hands one `RenderFrame` per surface to its renderer.
pub struct AtlasEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> AtlasEngine<R> {
    /// Draws both surfaces.
    pub fn render(&mut self) -> AtlasResult<()> {
        RenderCoordinator::render(self)
    }

    pub fn render_surface(&mut self, surface: SurfaceKind) -> AtlasResult<()> {
        RenderCoordinator::render_surface(self, surface)
    }

    /// Draws one surface into an external cairo context.
    ///
    /// GTK draw callbacks use this path; the renderer never sees GTK types.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        surface: SurfaceKind,
        context: &cairo::Context,
    ) -> AtlasResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, surface, context)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
