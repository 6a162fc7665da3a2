use crate::domain::model::{NumeralRecord, ReportFormat, SavingsReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_lines(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn report_path(&self) -> Option<&str>;
    fn report_format(&self) -> ReportFormat;
    fn monitoring_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<NumeralRecord>>;
    async fn transform(&self, data: Vec<NumeralRecord>) -> Result<SavingsReport>;
    async fn load(&self, report: SavingsReport) -> Result<SavingsReport>;
}
