use std::collections::HashSet;

use crate::core::ElementId;

use super::scene::{Scene, SceneElement};

/// One keyed change between the drawn scene and a freshly computed one.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOp {
    Create { element: SceneElement, index: usize },
    /// Geometry, fill or draw position changed.
    Update { element: SceneElement, index: usize },
    Remove(ElementId),
}

impl SceneOp {
    #[must_use]
    pub fn id(&self) -> &ElementId {
        match self {
            Self::Create { element, .. } | Self::Update { element, .. } => &element.id,
            Self::Remove(id) => id,
        }
    }
}

/// Diffs `desired` (in draw order) against `current` by element id.
///
/// Strokes are not compared; they belong to the highlight controller once an
/// element exists. Removals come first, then creates and updates in draw
/// order.
#[must_use]
pub fn reconcile(current: &Scene, desired: Vec<SceneElement>) -> Vec<SceneOp> {
    let wanted: HashSet<&ElementId> = desired.iter().map(|element| &element.id).collect();
    let mut ops: Vec<SceneOp> = current
        .iter()
        .filter(|element| !wanted.contains(&element.id))
        .map(|element| SceneOp::Remove(element.id.clone()))
        .collect();

    let kept_order: Vec<&ElementId> = current
        .iter()
        .map(|element| &element.id)
        .filter(|id| wanted.contains(id))
        .collect();

    let mut updates = Vec::with_capacity(desired.len());
    for (index, element) in desired.iter().enumerate() {
        match current.get(&element.id) {
            None => updates.push(SceneOp::Create {
                element: element.clone(),
                index,
            }),
            Some(existing) => {
                let moved = kept_order.get(index) != Some(&&element.id);
                if moved || existing.shape != element.shape || existing.fill != element.fill {
                    updates.push(SceneOp::Update {
                        element: element.clone(),
                        index,
                    });
                }
            }
        }
    }
    ops.extend(updates);
    ops
}
