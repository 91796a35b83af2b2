/// Round `value` to `places` decimal places.
///
/// Rounds to nearest based on the exact binary value, so `1.005` (stored as
/// 1.00499...) becomes `1.0`. Exact ties such as `0.125` go away from zero.
pub fn round_to_places(value: f64, places: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;

    // A product with no rounding error sitting on .5 is a true tie
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if exact && (scaled - scaled.trunc()).abs() == 0.5 {
        return scaled.round() / scale;
    }

    // Formatting rounds the exact value correctly; parsing back gives the
    // nearest f64 to the printed decimal
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Shortest decimal text for a value that has already been rounded
/// (`60` rather than `60.00`).
pub fn display_value(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}
