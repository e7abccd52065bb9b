use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AtlasResult<T> = Result<T, AtlasError>;

/// Identifies which of the two input payloads a load failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSourceKind {
    Tabular,
    Boundary,
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabular => f.write_str("tabular"),
            Self::Boundary => f.write_str("boundary"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load {kind} data: {reason}")]
    Load {
        kind: DataSourceKind,
        reason: String,
    },

    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("the placeholder option cannot be selected")]
    PlaceholderSelected,

    #[error("unknown element `{0}`")]
    UnknownElement(String),
}

impl AtlasError {
    pub(crate) fn load(kind: DataSourceKind, reason: impl Into<String>) -> Self {
        Self::Load {
            kind,
            reason: reason.into(),
        }
    }
}
