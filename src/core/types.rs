use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel-space position, either surface-local or window ("client") space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The two drawing surfaces of the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SurfaceKind {
    Map,
    Chart,
}

impl SurfaceKind {
    #[must_use]
    pub const fn class_prefix(self) -> &'static str {
        match self {
            Self::Map => "states",
            Self::Chart => "bar",
        }
    }
}

/// Identity of one drawn element: a map shape or a bar of one region key.
///
/// The map shape and the bar of a region share `key`, which is what hover
/// highlighting matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId {
    pub surface: SurfaceKind,
    pub key: String,
}

impl ElementId {
    #[must_use]
    pub fn new(surface: SurfaceKind, key: impl Into<String>) -> Self {
        Self {
            surface,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn map(key: impl Into<String>) -> Self {
        Self::new(SurfaceKind::Map, key)
    }

    #[must_use]
    pub fn bar(key: impl Into<String>) -> Self {
        Self::new(SurfaceKind::Chart, key)
    }

    /// Class attribute of the element, e.g. `states 06` or `bar 06`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{} {}", self.surface.class_prefix(), self.key)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class_name())
    }
}
