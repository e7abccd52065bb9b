use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::core::observation::parse_numeric_cell;
use crate::core::{Attribute, Observation};
use crate::error::{AtlasError, AtlasResult};

/// Column holding the join key.
pub const KEY_COLUMN: &str = "STATE";

/// Parses CSV text into observations.
///
/// The `STATE` column is required. A missing metric column leaves that metric
/// `NaN` for every row; unparseable cells become `NaN` individually.
pub fn parse_observations(text: &str) -> AtlasResult<Vec<Observation>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AtlasError::InvalidData(format!("failed to read csv header: {e}")))?
        .clone();
    let key_index = column_index(&headers, KEY_COLUMN).ok_or_else(|| {
        AtlasError::InvalidData(format!("csv header has no `{KEY_COLUMN}` column"))
    })?;

    let columns: Vec<(Attribute, Option<usize>)> = Attribute::ALL
        .into_iter()
        .map(|attr| (attr, column_index(&headers, attr.label())))
        .collect();
    for (attr, index) in &columns {
        if index.is_none() {
            warn!(attribute = %attr, "csv has no column for attribute");
        }
    }

    let mut observations = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| AtlasError::InvalidData(format!("failed to read csv row {row}: {e}")))?;
        let Some(key) = record.get(key_index) else {
            warn!(row, "skipping csv row without a state key");
            continue;
        };

        let mut observation = Observation::new(key);
        for (attr, index) in &columns {
            let value = index
                .and_then(|i| record.get(i))
                .map_or(f64::NAN, parse_numeric_cell);
            observation.values.insert(*attr, value);
        }
        observations.push(observation);
    }

    debug!(rows = observations.len(), "parsed tabular observations");
    Ok(observations)
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}
