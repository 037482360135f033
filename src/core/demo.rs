use crate::core::calculator::Calculator;
use crate::core::geometry::circle_area;
use crate::core::greeting::greet;
use crate::domain::model::DemoReport;
use crate::domain::ports::ScenarioProvider;

pub struct DemoEngine<S: ScenarioProvider> {
    scenario: S,
}

impl<S: ScenarioProvider> DemoEngine<S> {
    pub fn new(scenario: S) -> Self {
        Self { scenario }
    }

    pub fn run(&self) -> DemoReport {
        tracing::info!("Starting demo run");

        let radius = self.scenario.radius();
        let area = circle_area(radius);
        tracing::debug!("Circle area for radius {}: {}", radius, area);

        let mut calculator = Calculator::new(self.scenario.initial_value());
        for delta in self.scenario.deltas() {
            let total = calculator.add(*delta);
            tracing::debug!("Calculator add({}) -> {}", delta, total);
        }
        let calculator_value = calculator.current_value();

        let greeting = self.scenario.greeting_name().map(greet);

        tracing::info!("Demo run completed");

        DemoReport {
            radius,
            area,
            calculator_value,
            greeting,
        }
    }
}
