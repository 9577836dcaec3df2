//! Human-readable rendering of large totals for dashboard cards.

use crate::services::aggregation::round_one;

/// Suffix per power of 1000.
const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Abbreviate a number with a K/M/B/T suffix and exactly one decimal.
///
/// Rounding is half away from zero. A value that rounds up to 1000 of its
/// unit moves to the next suffix, so 999 960 renders as `1.0M`.
pub fn abbreviate(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut magnitude = value.abs();
    let mut tier = 0;
    while magnitude >= 1000.0 && tier < SUFFIXES.len() - 1 {
        magnitude /= 1000.0;
        tier += 1;
    }

    let mut rounded = round_one(magnitude);
    if rounded >= 1000.0 && tier < SUFFIXES.len() - 1 {
        rounded = round_one(rounded / 1000.0);
        tier += 1;
    }

    // -0.04 must not render as "-0.0"
    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.1}{}", SUFFIXES[tier])
}

/// Abbreviated currency amount with a leading `$`, sign first.
pub fn currency(value: f64) -> String {
    let abbreviated = abbreviate(value);
    match abbreviated.strip_prefix('-') {
        Some(positive) => format!("-${positive}"),
        None => format!("${abbreviated}"),
    }
}
