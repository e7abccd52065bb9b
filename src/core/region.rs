use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Attribute, Geometry};

/// One geographic unit (a state) of the boundary source.
///
/// `values` starts empty and is filled once by the join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub key: String,
    pub name: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub values: IndexMap<Attribute, f64>,
}

impl Region {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            geometry,
            values: IndexMap::new(),
        }
    }

    /// Value for `attribute` when joined and numeric.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> Option<f64> {
        self.values
            .get(&attribute)
            .copied()
            .filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn has_joined_values(&self) -> bool {
        !self.values.is_empty()
    }
}
