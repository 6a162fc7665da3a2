pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{local::LocalStorage, toml_config::TomlConfig};
pub use crate::core::numeral::{analyze_line, decode, encode, minimize, savings, Symbol};
pub use crate::core::{etl::SavingsEngine, pipeline::SavingsPipeline};
pub use domain::model::{LineSavings, NumeralRecord, ReportFormat, SavingsReport};
pub use utils::error::{Result, RomanError};
