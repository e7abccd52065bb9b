use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ElementId, ScreenPoint, SurfaceKind};
use crate::render::StrokeStyle;

/// Stroke changes produced by a hover transition; usually one map shape and
/// one bar per key.
pub type StrokeChanges = SmallVec<[(ElementId, StrokeStyle); 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverState {
    Normal,
    Highlighted { key: String },
}

/// Offsets of the floating label relative to the pointer, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    /// Horizontal gap between pointer and label on either side.
    pub offset_x: f64,
    /// Distance the label is lifted above the pointer.
    pub offset_above: f64,
    /// Distance the label is dropped below the pointer near the top edge.
    pub offset_below: f64,
    /// Extra room kept from the right edge before mirroring.
    pub right_margin: f64,
    pub label_width: f64,
    pub label_height: f64,
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            offset_above: 75.0,
            offset_below: 25.0,
            right_margin: 20.0,
            label_width: 200.0,
            label_height: 72.0,
        }
    }
}

impl TooltipPlacement {
    /// Top-left corner of the label for a pointer at `pointer` (client space).
    ///
    /// Labels that would overflow the right edge mirror to the left of the
    /// pointer; labels that would overflow the top drop below it.
    #[must_use]
    pub fn place(self, pointer: ScreenPoint, viewport_width: f64) -> ScreenPoint {
        let x = if pointer.x > viewport_width - self.label_width - self.right_margin {
            pointer.x - self.label_width - self.offset_x
        } else {
            pointer.x + self.offset_x
        };
        let y = if pointer.y < self.offset_above {
            pointer.y + self.offset_below
        } else {
            pointer.y - self.offset_above
        };
        ScreenPoint::new(x, y)
    }
}

/// Floating label content and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoLabel {
    pub key: String,
    /// Current value of the selected attribute.
    pub title: String,
    /// Selected attribute name.
    pub subtitle: String,
    /// Region display name.
    pub name: String,
    /// Surface the pointer was over when the label last moved.
    pub surface: SurfaceKind,
    /// Top-left corner in client space.
    pub position: ScreenPoint,
}

/// Shared hover behavior of both surfaces.
///
/// Every element registers its resting stroke when created; leaving a key
/// restores each element from that snapshot rather than from a default.
#[derive(Debug, Clone)]
pub struct HighlightController {
    snapshots: HashMap<ElementId, StrokeStyle>,
    highlight: StrokeStyle,
    placement: TooltipPlacement,
    state: HoverState,
    label: Option<InfoLabel>,
}

impl HighlightController {
    #[must_use]
    pub fn new(highlight: StrokeStyle, placement: TooltipPlacement) -> Self {
        Self {
            snapshots: HashMap::new(),
            highlight,
            placement,
            state: HoverState::Normal,
            label: None,
        }
    }

    /// Records the resting stroke of a newly created element.
    pub fn register(&mut self, id: ElementId, resting: StrokeStyle) {
        self.snapshots.insert(id, resting);
    }

    /// Drops the snapshot of a removed element.
    pub fn forget(&mut self, id: &ElementId) {
        self.snapshots.remove(id);
    }

    #[must_use]
    pub fn snapshot(&self, id: &ElementId) -> Option<StrokeStyle> {
        self.snapshots.get(id).copied()
    }

    #[must_use]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    #[must_use]
    pub fn highlighted_key(&self) -> Option<&str> {
        match &self.state {
            HoverState::Highlighted { key } => Some(key),
            HoverState::Normal => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&InfoLabel> {
        self.label.as_ref()
    }

    #[must_use]
    pub fn placement(&self) -> TooltipPlacement {
        self.placement
    }

    /// Highlights every registered element sharing `label.key` and shows the
    /// label at `pointer`.
    ///
    /// Entering a new key while another is highlighted restores the old one
    /// first; both sets of changes are returned.
    pub fn enter(
        &mut self,
        mut label: InfoLabel,
        pointer: ScreenPoint,
        viewport_width: f64,
    ) -> StrokeChanges {
        let mut changes = StrokeChanges::new();
        if let Some(previous) = self.highlighted_key().map(str::to_owned) {
            if previous == label.key {
                self.move_label(label.surface, pointer, viewport_width);
                return changes;
            }
            changes.extend(self.leave());
        }

        let mut ids: Vec<&ElementId> = self
            .snapshots
            .keys()
            .filter(|id| id.key == label.key)
            .collect();
        ids.sort();
        changes.extend(ids.into_iter().map(|id| (id.clone(), self.highlight)));

        trace!(key = %label.key, elements = changes.len(), "highlight");
        label.position = self.placement.place(pointer, viewport_width);
        self.state = HoverState::Highlighted {
            key: label.key.clone(),
        };
        self.label = Some(label);
        changes
    }

    /// Repositions the label; no-op when nothing is highlighted.
    pub fn move_label(&mut self, surface: SurfaceKind, pointer: ScreenPoint, viewport_width: f64) {
        if let Some(label) = self.label.as_mut() {
            label.surface = surface;
            label.position = self.placement.place(pointer, viewport_width);
        }
    }

    /// Restores every element of the highlighted key and removes the label.
    pub fn leave(&mut self) -> StrokeChanges {
        let HoverState::Highlighted { key } =
            std::mem::replace(&mut self.state, HoverState::Normal)
        else {
            return StrokeChanges::new();
        };
        self.label = None;

        let mut changes: StrokeChanges = self
            .snapshots
            .iter()
            .filter(|(id, _)| id.key == key)
            .map(|(id, stroke)| (id.clone(), *stroke))
            .collect();
        changes.sort_by(|a, b| a.0.cmp(&b.0));
        trace!(key = %key, elements = changes.len(), "dehighlight");
        changes
    }

    /// Refreshes the label text after the attribute changed under a hover.
    pub fn update_label_text(&mut self, title: String, subtitle: String) {
        if let Some(label) = self.label.as_mut() {
            label.title = title;
            label.subtitle = subtitle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TooltipPlacement;
    use crate::core::ScreenPoint;

    #[test]
    fn label_sits_right_and_above_pointer_by_default() {
        let placement = TooltipPlacement::default();
        let at = placement.place(ScreenPoint::new(300.0, 400.0), 1200.0);
        assert_eq!(at, ScreenPoint::new(310.0, 325.0));
    }

    #[test]
    fn label_mirrors_near_right_edge_and_drops_near_top() {
        let placement = TooltipPlacement::default();
        let at = placement.place(ScreenPoint::new(1100.0, 40.0), 1200.0);
        assert_eq!(at, ScreenPoint::new(890.0, 65.0));
    }
}
