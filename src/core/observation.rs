use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Attribute;

/// One tabular row: a state key plus the eight tracked metric values.
///
/// Unparseable or missing cells are stored as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub state: String,
    pub values: IndexMap<Attribute, f64>,
}

impl Observation {
    /// Creates an observation with every attribute set to `NaN`.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            values: Attribute::ALL
                .into_iter()
                .map(|attr| (attr, f64::NAN))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, attribute: Attribute, value: f64) -> Self {
        self.values.insert(attribute, value);
        self
    }

    /// Raw stored value; `NaN` when absent or unparseable.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> f64 {
        self.values.get(&attribute).copied().unwrap_or(f64::NAN)
    }

    /// Value usable by scales, `None` for missing or non-finite cells.
    #[must_use]
    pub fn finite_value(&self, attribute: Attribute) -> Option<f64> {
        Some(self.value(attribute)).filter(|v| v.is_finite())
    }
}

/// Parses a cell the way the source data expects to be read: the longest
/// leading float literal wins and trailing text is ignored.
///
/// Returns `NaN` when the cell has no numeric prefix.
#[must_use]
pub fn parse_numeric_cell(cell: &str) -> f64 {
    let text = cell.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    if text[pos..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut mantissa_digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            pos = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_end = pos + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            pos = exp_end;
        }
    }

    text[..pos].parse::<f64>().unwrap_or(f64::NAN)
}
