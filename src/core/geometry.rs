/// Fixed approximation of π used by every area computation.
///
/// Deliberately not [`std::f64::consts::PI`]: results must match `3.14159 * r²`.
pub const PI: f64 = 3.14159;

/// Product of `a` and `b`. NaN and infinities follow IEEE-754.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Area of a circle with the given radius, computed as `multiply(PI, r * r)`.
///
/// The sign of `radius` is not checked.
pub fn circle_area(radius: f64) -> f64 {
    multiply(PI, radius * radius)
}
