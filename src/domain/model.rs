use crate::core::format::format_number;
use crate::domain::ports::ScenarioProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_RADIUS: f64 = 5.0;
pub const DEFAULT_INITIAL_VALUE: f64 = 10.0;
pub const DEFAULT_DELTA: f64 = 7.0;

/// Inputs for one run: the circle radius, the accumulator's starting value,
/// the deltas fed to it in order, and an optional name to greet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub radius: f64,
    pub initial_value: f64,
    pub deltas: Vec<f64>,
    pub greeting_name: Option<String>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            initial_value: DEFAULT_INITIAL_VALUE,
            deltas: vec![DEFAULT_DELTA],
            greeting_name: None,
        }
    }
}

impl Scenario {
    pub fn from_provider<P: ScenarioProvider>(provider: &P) -> Self {
        Self {
            radius: provider.radius(),
            initial_value: provider.initial_value(),
            deltas: provider.deltas().to_vec(),
            greeting_name: provider.greeting_name().map(str::to_string),
        }
    }
}

impl ScenarioProvider for Scenario {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn initial_value(&self) -> f64 {
        self.initial_value
    }

    fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    fn greeting_name(&self) -> Option<&str> {
        self.greeting_name.as_deref()
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        // Non-finite numbers are accepted and propagate through the arithmetic.
        if let Some(name) = &self.greeting_name {
            validate_non_empty_string("greeting.name", name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    #[serde(serialize_with = "serialize_number")]
    pub radius: f64,
    #[serde(serialize_with = "serialize_number")]
    pub area: f64,
    #[serde(serialize_with = "serialize_number")]
    pub calculator_value: f64,
    pub greeting: Option<String>,
}

/// JSON has no NaN or infinities; those are written as the same strings the
/// text output prints.
fn serialize_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_number(*value))
    }
}

impl DemoReport {
    pub fn area_line(&self) -> String {
        format!(
            "The area of a circle with radius {} is: {}",
            format_number(self.radius),
            format_number(self.area)
        )
    }

    pub fn calculator_line(&self) -> String {
        format!(
            "Calculator current value: {}",
            format_number(self.calculator_value)
        )
    }

    /// Output lines in print order; the greeting only when one was requested.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.area_line(), self.calculator_line()];
        if let Some(greeting) = &self.greeting {
            lines.push(greeting.clone());
        }
        lines
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.lines().join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
