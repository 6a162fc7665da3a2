use crate::core::numeral::analyze_line;
use crate::core::{ConfigProvider, NumeralRecord, Pipeline, ReportFormat, SavingsReport, Storage};
use crate::utils::error::Result;

pub struct SavingsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SavingsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SavingsPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<NumeralRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading numerals from: {}", path);

        let records = self
            .storage
            .read_lines(path)
            .await?
            .into_iter()
            .enumerate()
            .map(|(idx, text)| NumeralRecord::new(idx + 1, text))
            .collect();

        Ok(records)
    }

    async fn transform(&self, data: Vec<NumeralRecord>) -> Result<SavingsReport> {
        let mut report = SavingsReport::default();

        // 任何一行無法解析即中止整個流程
        for record in &data {
            let entry = analyze_line(record)?;

            if entry.saved < 0 {
                tracing::warn!(
                    "⚠️ Line {}: {:?} is longer once minimized ({} -> {:?})",
                    entry.line,
                    entry.original,
                    entry.value,
                    entry.minimal
                );
            } else {
                tracing::debug!(
                    "Line {}: {} = {} -> {} (saved {})",
                    entry.line,
                    entry.original,
                    entry.value,
                    entry.minimal,
                    entry.saved
                );
            }

            report.push(entry);
        }

        Ok(report)
    }

    async fn load(&self, report: SavingsReport) -> Result<SavingsReport> {
        let Some(path) = self.config.report_path() else {
            return Ok(report);
        };

        let format = self.config.report_format();
        let data = match format {
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                for entry in &report.details {
                    writer.serialize(entry)?;
                }
                writer
                    .into_inner()
                    .map_err(|e| std::io::Error::other(e.to_string()))?
            }
            ReportFormat::Json => serde_json::to_vec_pretty(&report)?,
        };

        tracing::debug!(
            "Writing {} report ({} bytes) to {}",
            format.as_str(),
            data.len(),
            path
        );
        self.storage.write_file(path, &data).await?;
        tracing::info!("📁 Report saved to: {}", path);

        Ok(report)
    }
}
