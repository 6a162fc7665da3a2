#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_INPUT_PATH: &str = "roman.txt";
