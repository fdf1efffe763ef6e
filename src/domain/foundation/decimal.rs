//! Fixed-point rendering of scores and coefficients.

/// Renders `value` with exactly two decimals.
///
/// Exact halfway cases round away from zero (`0.125` renders `"0.13"`),
/// unlike `format!("{:.2}")` which rounds them to even.
pub fn format_two_decimals(value: f64) -> String {
    // An exact tie at the third decimal is an odd multiple of 1/8.
    let eighths = value * 8.0;
    let halfway = eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0;

    if halfway {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
