/// Source of the inputs one demo run works with.
///
/// Implemented by the resolved [`Scenario`](crate::domain::model::Scenario)
/// and by the TOML config file.
pub trait ScenarioProvider {
    fn radius(&self) -> f64;
    fn initial_value(&self) -> f64;
    fn deltas(&self) -> &[f64];
    fn greeting_name(&self) -> Option<&str>;
}
