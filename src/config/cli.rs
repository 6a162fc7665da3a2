use crate::config::DEFAULT_INPUT_PATH;
use crate::core::{ConfigProvider, ReportFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-minimizer")]
#[command(about = "Counts the characters saved by writing Roman numerals in minimal form")]
pub struct CliConfig {
    /// File with one Roman numeral per line
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write a per-line breakdown to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }

    fn report_format(&self) -> ReportFormat {
        self.report_format.unwrap_or_default()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", self.input_path())?;
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["roman-minimizer"]);
        assert_eq!(config.input_path(), "roman.txt");
        assert_eq!(config.report_path(), None);
        assert_eq!(config.report_format(), ReportFormat::Csv);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "roman-minimizer",
            "numerals.txt",
            "--report",
            "out.json",
            "--report-format",
            "json",
            "--monitor",
            "-v",
        ]);
        assert_eq!(config.input_path(), "numerals.txt");
        assert_eq!(config.report_path(), Some("out.json"));
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert!(config.monitoring_enabled());
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_report_path_rejected() {
        let config = CliConfig::parse_from(["roman-minimizer", "--report", ""]);
        assert!(config.validate().is_err());
    }
}
