//! Money formatting for reports and share text.

use obra_core::constants::{CURRENCY, NOT_AVAILABLE};

/// Compact amount: `N/D`, `0 MZN`, `1.2M MZN`, or `260K MZN`.
///
/// `None`, NaN and infinities are not available. Values from one million up use one
/// decimal in millions, everything below rounds to whole thousands.
pub fn safe_display(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    if v == 0.0 {
        return format!("0 {CURRENCY}");
    }
    if v >= 1_000_000.0 {
        return format!("{:.1}M {CURRENCY}", v / 1_000_000.0);
    }
    // Half rounds up, also for negatives.
    let thousands = (v / 1000.0 + 0.5).floor();
    format!("{thousands:.0}K {CURRENCY}")
}

/// Full amount with space-grouped thousands and no decimals:
/// `260 000 MZN`. Non-finite values are not available.
pub fn format_mzn(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{} {CURRENCY}", group_thousands(value))
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
