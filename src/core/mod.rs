pub mod etl;
pub mod numeral;
pub mod pipeline;

pub use crate::domain::model::{LineSavings, NumeralRecord, ReportFormat, SavingsReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
