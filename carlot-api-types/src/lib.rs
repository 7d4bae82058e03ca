mod dimension;
mod report;
mod sale;

pub mod result;

pub use dimension::{InvalidDimension, SaleDimension};
pub use report::{AggregationResult, ReportArtifact};
pub use sale::{EmptyGroupingField, SaleRecord, SaleRecordForm};
