//! Number and text formatting shared by the renderers.
//!
//! Hours, rates and costs are always shown with two decimals, in tables as
//! well as in CSV, so totals read the same wherever they appear.

/// Formats a money or hour amount with two decimals.
///
/// ```rust
/// use worklog::libs::formatter::format_amount;
///
/// assert_eq!(format_amount(1750.0), "1750.00");
/// assert_eq!(format_amount(0.126), "0.13");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Rounds to two decimals for numeric (JSON) output.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shortens `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}
