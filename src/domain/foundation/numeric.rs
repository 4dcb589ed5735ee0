//! Floating-point comparison helpers shared across the comparators.

/// Fixed epsilon for all float equality checks.
///
/// Spec values arrive from scraped sheets with at most three decimal
/// places; anything closer than this is rounding noise, not a winner.
pub const EPSILON: f64 = 0.001;

/// True if `a` and `b` are equal within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Percentage difference of `value` relative to `base`.
///
/// Returns `None` when the base is zero or either input is non-finite,
/// since a relative difference is meaningless there.
pub fn pct_diff(value: f64, base: f64) -> Option<f64> {
    if !value.is_finite() || !base.is_finite() || approx_eq(base, 0.0) {
        return None;
    }
    Some((value - base) / base.abs() * 100.0)
}

/// Formats a spec number the way comparison strings display it:
/// whole numbers without a decimal point, fractional with one digit.
pub fn format_number(value: f64) -> String {
    if approx_eq(value, value.round()) {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}
