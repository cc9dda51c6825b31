//! Rounding and formatting of asset amounts

/// Accuracies above this are treated as this; `f64` carries no more
/// significant digits anyway.
pub const MAX_ACCURACY: u32 = 18;

/// Rounds `value` to `accuracy` fractional digits, halves away from zero.
///
/// Scaled values are nudged by a few ulps first so that decimal inputs
/// like `1.005` round the way they read instead of the way they are stored.
pub fn money_round(value: f64, accuracy: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(accuracy.min(MAX_ACCURACY) as i32);
    let scaled = value * factor;
    let nudge = scaled.abs().max(1.0) * f64::EPSILON * 2.0;
    let rounded = if scaled >= 0.0 {
        (scaled + nudge).round()
    } else {
        (scaled - nudge).round()
    };
    rounded / factor
}

/// Formats an amount with at most `accuracy` fractional digits, without
/// trailing zeros.
///
/// ```
/// use contracts::shared::money::format_amount;
/// assert_eq!(format_amount(100.0001, 8), "100.0001");
/// assert_eq!(format_amount(300.0, 8), "300");
/// ```
pub fn format_amount(value: f64, accuracy: u32) -> String {
    let accuracy = accuracy.min(MAX_ACCURACY);
    let fixed = format!("{:.*}", accuracy as usize, money_round(value, accuracy));
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
