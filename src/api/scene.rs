use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ElementId, ProjectedShape, ScreenPoint};
use crate::render::{Color, StrokeStyle};

/// Axis-aligned bar rectangle in chart-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            x: mix(self.x, target.x),
            y: mix(self.y, target.y),
            width: mix(self.width, target.width),
            height: mix(self.height, target.height),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementShape {
    Region(ProjectedShape),
    Bar(BarGeometry),
}

/// One drawn element with its target (post-transition) properties.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    pub shape: ElementShape,
    pub fill: Color,
    pub stroke: StrokeStyle,
}

impl SceneElement {
    #[must_use]
    pub fn bar_geometry(&self) -> Option<BarGeometry> {
        match &self.shape {
            ElementShape::Bar(bar) => Some(*bar),
            ElementShape::Region(_) => None,
        }
    }
}

/// Persistent element set of one surface, in draw order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: IndexMap<ElementId, SceneElement>,
}

impl Scene {
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&SceneElement> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut SceneElement> {
        self.elements.get_mut(id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SceneElement> {
        self.elements.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn insert(&mut self, element: SceneElement) {
        self.elements.insert(element.id.clone(), element);
    }

    pub(crate) fn remove(&mut self, id: &ElementId) -> Option<SceneElement> {
        self.elements.shift_remove(id)
    }

    /// Moves `id` to draw position `index`, clamped to the scene length.
    pub(crate) fn move_to(&mut self, id: &ElementId, index: usize) {
        if let Some(from) = self.elements.get_index_of(id) {
            let last = self.elements.len().saturating_sub(1);
            self.elements.move_index(from, index.min(last));
        }
    }

    /// Puts the listed elements first, in the listed order.
    pub(crate) fn reorder(&mut self, order: &[ElementId]) {
        for (index, id) in order.iter().enumerate() {
            self.move_to(id, index);
        }
    }

    #[must_use]
    pub fn keys_in_order(&self) -> Vec<String> {
        self.elements.keys().map(|id| id.key.clone()).collect()
    }
}
