use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, AtlasResult};

use super::AtlasSnapshot;

pub const ATLAS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: AtlasSnapshot,
}

impl AtlasSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> AtlasResult<String> {
        let payload = AtlasSnapshotJsonContractV1 {
            schema_version: ATLAS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AtlasError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> AtlasResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<AtlasSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: AtlasSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AtlasError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ATLAS_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(AtlasError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
