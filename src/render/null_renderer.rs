use crate::core::SurfaceKind;
use crate::error::AtlasResult;
use crate::render::{RenderFrame, Renderer};

/// Primitive counts of the last frame a [`NullRenderer`] received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub paths: usize,
    pub rects: usize,
    pub lines: usize,
    pub texts: usize,
}

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_map: Option<FrameCounts>,
    pub last_chart: Option<FrameCounts>,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> AtlasResult<()> {
        frame.validate()?;
        let counts = FrameCounts {
            paths: frame.paths.len(),
            rects: frame.rects.len(),
            lines: frame.lines.len(),
            texts: frame.texts.len(),
        };
        match frame.surface {
            SurfaceKind::Map => self.last_map = Some(counts),
            SurfaceKind::Chart => self.last_chart = Some(counts),
        }
        self.frames_rendered += 1;
        Ok(())
    }
}
