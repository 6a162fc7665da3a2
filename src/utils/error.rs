use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Malformed numeral on line {line} ({numeral:?}): unknown symbol {symbol:?} at position {position}")]
    MalformedLine {
        line: usize,
        numeral: String,
        symbol: char,
        position: usize,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::SourceUnavailable { .. } => ErrorCategory::Input,
            RomanError::UnknownSymbol { .. } | RomanError::MalformedLine { .. } => {
                ErrorCategory::Data
            }
            RomanError::IoError(_)
            | RomanError::SerializationError(_)
            | RomanError::CsvError(_) => ErrorCategory::Output,
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. }
            | RomanError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Data | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::SourceUnavailable { path, .. } => {
                format!("Cannot open input file '{}'", path)
            }
            RomanError::MalformedLine {
                line,
                numeral,
                symbol,
                ..
            } => format!(
                "Line {} is not a Roman numeral: {:?} contains {:?}",
                line, numeral, symbol
            ),
            RomanError::UnknownSymbol { symbol, .. } => {
                format!("{:?} is not a Roman numeral symbol", symbol)
            }
            RomanError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input path exists and is readable",
            ErrorCategory::Data => "Only the symbols I, V, X, L, C, D and M are allowed, one numeral per line",
            ErrorCategory::Output => "Check that the report path is writable",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
