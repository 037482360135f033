use crate::config::toml_config::DemoConfig;
use crate::core::greeting::DEFAULT_GREETING_NAME;
use crate::core::{OutputFormat, Scenario};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "circle-calc")]
#[command(about = "Computes a circle's area and exercises a running-total calculator")]
pub struct CliConfig {
    /// Circle radius [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Calculator initial value [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub initial: Option<f64>,

    /// Value added to the calculator; repeat or comma-separate for several [default: 7]
    #[arg(long = "add", value_delimiter = ',', allow_negative_numbers = true)]
    pub deltas: Vec<f64>,

    /// Print a greeting as a third line
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = DEFAULT_GREETING_NAME)]
    pub greet: Option<String>,

    /// Path to a TOML scenario file; explicit flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the scenario to run: the config file (or the built-in
    /// scenario when none is given), then every flag set explicitly.
    pub fn resolve_scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.config {
            Some(path) => {
                tracing::info!("Loading scenario from: {}", path);
                let file_config = DemoConfig::from_file(path)?;
                file_config.validate()?;
                Scenario::from_provider(&file_config)
            }
            None => Scenario::default(),
        };

        if let Some(radius) = self.radius {
            scenario.radius = radius;
        }
        if let Some(initial) = self.initial {
            scenario.initial_value = initial;
        }
        if !self.deltas.is_empty() {
            scenario.deltas = self.deltas.clone();
        }
        if let Some(name) = &self.greet {
            scenario.greeting_name = Some(name.clone());
        }

        tracing::debug!("Resolved scenario: {:?}", scenario);
        Ok(scenario)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(name) = &self.greet {
            validate_non_empty_string("greet", name)?;
        }
        Ok(())
    }
}
