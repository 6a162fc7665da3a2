use crate::core::{Pipeline, SavingsReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct SavingsEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SavingsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<SavingsReport> {
        tracing::info!("Starting numeral minimization...");
        self.monitor.log_stats("Start");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} numerals", records.len());
        self.monitor.log_stats("Extract");

        // Transform
        let report = self.pipeline.transform(records).await?;
        tracing::info!(
            "Minimized {} numerals: {} -> {} chars",
            report.lines,
            report.original_chars,
            report.minimal_chars
        );
        self.monitor.log_stats("Transform");

        // Load
        let report = self.pipeline.load(report).await?;
        tracing::info!("Saved {} characters in total", report.total_saved);
        self.monitor.log_final_stats();

        Ok(report)
    }
}
