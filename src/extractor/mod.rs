pub mod pipeline;
pub mod report_writer;
pub mod run_report;

pub use pipeline::ExtractionPipeline;
pub use report_writer::{OutputRecord, ReportWriter};
pub use run_report::{
    EntryOutcome, EntryStatus, LogLevel, LogLine, OutputRecords, RunObserver, RunProgress,
    RunReport, SilentObserver,
};
