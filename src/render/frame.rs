use crate::core::{SurfaceKind, Viewport};
use crate::error::{AtlasError, AtlasResult};
use crate::render::{LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one draw pass of one surface.
///
/// Backends draw paths, then rects, then lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: SurfaceKind,
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: SurfaceKind, viewport: Viewport) -> Self {
        Self {
            surface,
            viewport,
            paths: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> AtlasResult<()> {
        if !self.viewport.is_valid() {
            return Err(AtlasError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.rects.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }

    /// Rect tagged with `class_name`, if any.
    #[must_use]
    pub fn rect_with_class(&self, class_name: &str) -> Option<&RectPrimitive> {
        self.rects
            .iter()
            .find(|r| r.class_name.as_deref() == Some(class_name))
    }

    /// Path tagged with `class_name`, if any.
    #[must_use]
    pub fn path_with_class(&self, class_name: &str) -> Option<&PathPrimitive> {
        self.paths
            .iter()
            .find(|p| p.class_name.as_deref() == Some(class_name))
    }
}
