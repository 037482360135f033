/// Renders a number the way the program prints it.
///
/// Shortest round-trip decimal (`17`, `78.53975`), `NaN` / `Infinity` /
/// `-Infinity` for non-finite values, `0` for negative zero, and exponent
/// form with an explicit sign outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}e{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}e+{}", mantissa, exponent),
        None => exponential,
    }
}
