use crate::core::greeting::DEFAULT_GREETING_NAME;
use crate::core::ScenarioProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scenario file.
///
/// ```toml
/// [circle]
/// radius = 5.0
///
/// [calculator]
/// initial_value = 10.0
/// deltas = [7.0]
///
/// [greeting]
/// name = "TypeScript User"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub circle: CircleConfig,
    pub calculator: Option<CalculatorConfig>,
    pub greeting: Option<GreetingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleConfig {
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub initial_value: Option<f64>,
    pub deltas: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub name: Option<String>,
}

impl DemoConfig {
    /// Reads and parses a scenario file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses scenario TOML already held in memory.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ScenarioProvider for DemoConfig {
    fn radius(&self) -> f64 {
        self.circle.radius
    }

    fn initial_value(&self) -> f64 {
        // Same default as a calculator built without an initial value.
        self.calculator
            .as_ref()
            .and_then(|c| c.initial_value)
            .unwrap_or_default()
    }

    fn deltas(&self) -> &[f64] {
        self.calculator
            .as_ref()
            .and_then(|c| c.deltas.as_deref())
            .unwrap_or(&[])
    }

    fn greeting_name(&self) -> Option<&str> {
        self.greeting
            .as_ref()
            .map(|g| g.name.as_deref().unwrap_or(DEFAULT_GREETING_NAME))
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.greeting_name() {
            validate_non_empty_string("greeting.name", name)?;
        }
        Ok(())
    }
}
