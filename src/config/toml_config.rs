use crate::core::{ConfigProvider, ReportFormat};
use crate::utils::error::{Result, RomanError};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    pub report: Option<ReportConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub path: String,
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| {
            RomanError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read {}: {}", path.as_ref().display(), source),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，${VAR} 以環境變數替換
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_vars(content, |name| std::env::var(name).ok())
    }

    /// 從 TOML 字串解析配置，${VAR} 以 `lookup` 的結果替換
    pub fn from_toml_str_with_vars<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup);

        toml::from_str(&processed_content).map_err(|e| RomanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換變數 (例如 ${ROMAN_INPUT})，未定義的保持原樣
    fn substitute_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        let input = validate_required_field("input.path", &self.input.path)?;
        validate_path("input.path", input)?;

        if let Some(report) = &self.report {
            validate_path("report.path", &report.path)?;
        }

        Ok(())
    }

    pub fn set_input(&mut self, path: impl Into<String>) {
        self.input.path = Some(path.into());
    }

    pub fn set_report(&mut self, path: impl Into<String>) {
        let path = path.into();
        match &mut self.report {
            Some(report) => report.path = path,
            None => {
                self.report = Some(ReportConfig { path, format: None });
            }
        }
    }

    pub fn set_report_format(&mut self, format: ReportFormat) {
        if let Some(report) = &mut self.report {
            report.format = Some(format);
        }
    }

    pub fn set_monitoring(&mut self, enabled: bool) {
        self.monitoring = Some(MonitoringConfig { enabled });
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input
            .path
            .as_deref()
            .unwrap_or(crate::config::DEFAULT_INPUT_PATH)
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.path.as_str())
    }

    fn report_format(&self) -> ReportFormat {
        self.report
            .as_ref()
            .and_then(|r| r.format)
            .unwrap_or_default()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
path = "data/roman.txt"

[report]
path = "out/savings.json"
format = "json"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/roman.txt");
        assert_eq!(config.report_path(), Some("out/savings.json"));
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_input_path() {
        let config = TomlConfig::from_toml_str("[monitoring]\nenabled = false\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(RomanError::MissingConfigError { .. })
        ));
        assert_eq!(config.input_path(), "roman.txt");
    }

    #[test]
    fn test_var_substitution() {
        let vars: HashMap<&str, &str> = [("ROMAN_INPUT", "from-env.txt")].into_iter().collect();

        let toml_content = r#"
[input]
path = "${ROMAN_INPUT}"
"#;

        let config = TomlConfig::from_toml_str_with_vars(toml_content, |name| {
            vars.get(name).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(config.input_path(), "from-env.txt");
    }

    #[test]
    fn test_unknown_var_is_kept() {
        let config =
            TomlConfig::from_toml_str_with_vars("[input]\npath = \"${ROMAN_INPUT}\"\n", |_| None)
                .unwrap();
        assert_eq!(config.input_path(), "${ROMAN_INPUT}");
    }

    #[test]
    fn test_invalid_report_format() {
        let toml_content = r#"
[input]
path = "roman.txt"

[report]
path = "out.xml"
format = "xml"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(RomanError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_report_format_defaults_to_csv() {
        let toml_content = r#"
[input]
path = "roman.txt"

[report]
path = "out.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report_format(), ReportFormat::Csv);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[input\npath ="),
            Err(RomanError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = TomlConfig::default();
        config.set_input("numerals.txt");
        config.set_report("out.json");
        config.set_report_format(ReportFormat::Json);
        config.set_monitoring(true);

        assert_eq!(config.input_path(), "numerals.txt");
        assert_eq!(config.report_path(), Some("out.json"));
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"roman.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "roman.txt");
    }
}
