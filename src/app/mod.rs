pub mod export;
pub mod report;
pub mod runner;

pub use export::CsvExporter;
pub use report::ReportFormatter;
pub use runner::{Mode, Runner};
