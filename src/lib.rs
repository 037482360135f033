pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DemoConfig;

pub use crate::core::{
    calculator::Calculator,
    demo::DemoEngine,
    format::format_number,
    geometry::{circle_area, multiply, PI},
    greeting::greet,
};
pub use domain::model::{DemoReport, OutputFormat, Scenario};
pub use domain::ports::ScenarioProvider;
pub use utils::error::{DemoError, Result};
