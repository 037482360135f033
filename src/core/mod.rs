pub mod calculator;
pub mod demo;
pub mod format;
pub mod geometry;
pub mod greeting;

pub use crate::domain::model::{DemoReport, OutputFormat, Scenario};
pub use crate::domain::ports::ScenarioProvider;
pub use crate::utils::error::Result;
