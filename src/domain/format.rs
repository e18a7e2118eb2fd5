//! Display formatting for metric values. The presentation contract for the
//! sentinel: `None` and anything non-finite renders as "N/A".

/// Format a fractional value as a percentage with two decimals.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v * 100.0),
        _ => "N/A".to_string(),
    }
}

/// Format a plain ratio with two decimals.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "N/A".to_string(),
    }
}
