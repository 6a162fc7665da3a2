use serde::{Deserialize, Serialize};

/// 輸入檔中的一行，已去除行尾換行符號
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralRecord {
    pub line: usize,
    pub text: String,
}

impl NumeralRecord {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSavings {
    pub line: usize,
    pub original: String,
    pub value: u64,
    pub minimal: String,
    pub original_len: usize,
    pub minimal_len: usize,
    pub saved: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub lines: usize,
    pub original_chars: usize,
    pub minimal_chars: usize,
    pub total_saved: i64,
    pub details: Vec<LineSavings>,
}

impl SavingsReport {
    pub fn push(&mut self, entry: LineSavings) {
        self.lines += 1;
        self.original_chars += entry.original_len;
        self.minimal_chars += entry.minimal_len;
        self.total_saved += entry.saved;
        self.details.push(entry);
    }
}

impl FromIterator<LineSavings> for SavingsReport {
    fn from_iter<T: IntoIterator<Item = LineSavings>>(iter: T) -> Self {
        let mut report = SavingsReport::default();
        for entry in iter {
            report.push(entry);
        }
        report
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}
