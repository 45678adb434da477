use crate::config::ScanConfig;
use crate::error::{GameTitlesError, Result};
use crate::extractor::report_writer::ReportWriter;
use crate::extractor::run_report::{
    EntryOutcome, EntryStatus, LogLine, OutputRecords, RunObserver, RunProgress, RunReport,
};
use crate::registry::{ConsoleEntry, ConsoleRegistry};
use crate::scanner::ZipScanner;
use crate::ui::GracefulShutdown;

/// Turns each registered console directory into at most one report.
pub struct ExtractionPipeline<'a> {
    scanner: ZipScanner,
    writer: ReportWriter,
    shutdown: Option<&'a GracefulShutdown>,
}

impl<'a> ExtractionPipeline<'a> {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            scanner: ZipScanner::new(config),
            writer: ReportWriter::new(),
            shutdown: None,
        }
    }

    pub fn with_writer(mut self, writer: ReportWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn with_shutdown(mut self, shutdown: &'a GracefulShutdown) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    /// Process every registry entry in order.
    ///
    /// Only an unready registry is returned as an error. Failures on
    /// individual entries are logged and recorded in the report, and the
    /// run moves on to the next entry.
    pub fn run_all(
        &self,
        registry: &ConsoleRegistry,
        records: &mut OutputRecords,
        observer: &dyn RunObserver,
    ) -> Result<RunReport> {
        registry.validate_ready()?;

        let entries = registry.all_entries();
        let mut progress = RunProgress::new(entries.len());
        observer.on_progress(&progress);

        for entry in entries {
            if self.is_cancelled() {
                progress.cancelled = true;
                let line = LogLine::warning(format!(
                    "Run cancelled with {} of {} consoles processed.",
                    progress.entries_processed, progress.total_entries
                ));
                emit(&mut progress, observer, line);
                break;
            }

            progress.start_entry(&entry.console_name);
            observer.on_progress(&progress);

            let status = self.process_entry(entry, records, &mut progress, observer);
            progress.finish_entry(EntryOutcome {
                console_name: entry.console_name.clone(),
                directory: entry.directory_path.clone(),
                status,
            });
            observer.on_progress(&progress);
        }

        if !progress.cancelled {
            emit(&mut progress, observer, LogLine::info("Process completed."));
        }

        Ok(progress.into_report())
    }

    fn process_entry(
        &self,
        entry: &ConsoleEntry,
        records: &mut OutputRecords,
        progress: &mut RunProgress,
        observer: &dyn RunObserver,
    ) -> EntryStatus {
        let directory = entry.directory_path.as_path();
        emit(
            progress,
            observer,
            LogLine::info(format!(
                "Processing {} with directory '{}'...",
                entry.console_name,
                directory.display()
            )),
        );

        if !directory.exists() {
            let error = GameTitlesError::DirectoryNotFound {
                path: directory.to_path_buf(),
            };
            return fail(progress, observer, error);
        }

        let titles = match self.scanner.scan_zip_titles(directory) {
            Ok(titles) => titles,
            Err(error) => return fail(progress, observer, error),
        };

        emit(
            progress,
            observer,
            LogLine::info(format!(
                "Attempting to write file to: {}",
                self.writer
                    .report_path(directory, &entry.console_name)
                    .display()
            )),
        );

        match self
            .writer
            .write_report(directory, &entry.console_name, &titles)
        {
            Ok(Some(record)) => {
                emit(
                    progress,
                    observer,
                    LogLine::success(format!(
                        "Game titles have been written to {}",
                        record.report_file_path.display()
                    )),
                );
                let report_path = record.report_file_path.clone();
                records.record(record);
                EntryStatus::Written {
                    report_path,
                    title_count: titles.len(),
                }
            }
            Ok(None) => {
                emit(
                    progress,
                    observer,
                    LogLine::warning(format!(
                        "No game titles found in the directory: {}",
                        directory.display()
                    )),
                );
                EntryStatus::NoTitles
            }
            Err(error) => fail(progress, observer, error),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.shutdown.is_some_and(|shutdown| !shutdown.is_running())
    }
}

fn emit(progress: &mut RunProgress, observer: &dyn RunObserver, line: LogLine) {
    observer.on_log(&line);
    progress.push_log(line);
}

fn fail(
    progress: &mut RunProgress,
    observer: &dyn RunObserver,
    error: GameTitlesError,
) -> EntryStatus {
    log::warn!("{}", error);
    let message = format!("Error: {}", error);
    emit(progress, observer, LogLine::error(message));
    EntryStatus::Failed {
        error: error.to_string(),
    }
}
