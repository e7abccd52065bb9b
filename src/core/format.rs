//! Text formatting for axis ticks and tooltip values.

/// Formats a vertical-axis tick.
///
/// Values of at least one thousand are shown in thousands with a `K` suffix.
/// The million branch is only consulted when the thousand branch fails, which
/// never happens for a value of at least one million, so million-scale ticks
/// also read as thousands (`35000K`).
#[must_use]
pub fn format_axis_tick(value: f64) -> String {
    if value / 1000.0 >= 1.0 {
        format!("{}K", format_number(value / 1000.0))
    } else if value / 1_000_000.0 >= 1.0 {
        format!("{}M", format_number(value / 1_000_000.0))
    } else {
        format_number(value)
    }
}

/// Shortest decimal text that reads back as `value`, without a trailing `.0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Tooltip title for a possibly missing value.
#[must_use]
pub fn format_tooltip_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_number(v),
        _ => "No data".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_axis_tick, format_number, format_tooltip_value};

    #[test]
    fn thousands_get_k_suffix() {
        assert_eq!(format_axis_tick(5_000.0), "5K");
        assert_eq!(format_axis_tick(2_500.0), "2.5K");
        assert_eq!(format_axis_tick(1_000.0), "1K");
    }

    #[test]
    fn millions_never_reach_m_suffix() {
        assert_eq!(format_axis_tick(35_000_000.0), "35000K");
        assert_eq!(format_axis_tick(1_000_000.0), "1000K");
    }

    #[test]
    fn small_values_print_plainly() {
        assert_eq!(format_axis_tick(0.0), "0");
        assert_eq!(format_axis_tick(999.0), "999");
        assert_eq!(format_axis_tick(0.00005), "0.00005");
    }

    #[test]
    fn numbers_drop_integral_fraction() {
        assert_eq!(format_number(39_000_000.0), "39000000");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_tooltip_value(None), "No data");
        assert_eq!(format_tooltip_value(Some(f64::NAN)), "No data");
    }
}
