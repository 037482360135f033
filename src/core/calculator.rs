/// Accumulator holding a single running total.
///
/// The total always equals the initial value plus every delta passed to
/// [`Calculator::add`], in call order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Calculator {
    total: f64,
}

impl Calculator {
    pub fn new(initial_value: f64) -> Self {
        Self {
            total: initial_value,
        }
    }

    /// Adds `delta` to the running total and returns the new total.
    pub fn add(&mut self, delta: f64) -> f64 {
        self.total += delta;
        self.total
    }

    pub fn current_value(&self) -> f64 {
        self.total
    }
}
