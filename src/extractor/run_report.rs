use crate::extractor::report_writer::OutputRecord;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One line of the run log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

impl LogLine {
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success<S: Into<String>>(message: S) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn warning<S: Into<String>>(message: S) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self::new(LogLevel::Error, message)
    }

    fn new<S: Into<String>>(level: LogLevel, message: S) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Written {
        report_path: PathBuf,
        title_count: usize,
    },
    NoTitles,
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryOutcome {
    pub console_name: String,
    pub directory: PathBuf,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, EntryStatus::Failed { .. })
    }
}

/// Live state of a run, handed to observers after every change.
#[derive(Debug, Clone)]
pub struct RunProgress {
    pub entries_processed: usize,
    pub total_entries: usize,
    pub current_console: Option<String>,
    pub started_at: DateTime<Local>,
    pub start_time: Instant,
    pub outcomes: Vec<EntryOutcome>,
    pub log: Vec<LogLine>,
    pub errors: Vec<String>,
    pub cancelled: bool,
}

impl RunProgress {
    pub fn new(total_entries: usize) -> Self {
        Self {
            entries_processed: 0,
            total_entries,
            current_console: None,
            started_at: Local::now(),
            start_time: Instant::now(),
            outcomes: Vec::new(),
            log: Vec::new(),
            errors: Vec::new(),
            cancelled: false,
        }
    }

    pub fn start_entry(&mut self, console_name: &str) {
        self.current_console = Some(console_name.to_string());
    }

    pub fn finish_entry(&mut self, outcome: EntryOutcome) {
        if let EntryStatus::Failed { ref error } = outcome.status {
            self.errors.push(format!("{}: {}", outcome.console_name, error));
        }
        self.outcomes.push(outcome);
        self.entries_processed += 1;
        self.current_console = None;
    }

    pub fn push_log(&mut self, line: LogLine) {
        self.log.push(line);
    }

    /// Share of entries attempted so far, from 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        if self.total_entries == 0 {
            0.0
        } else {
            self.entries_processed as f64 / self.total_entries as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn into_report(self) -> RunReport {
        let duration = self.elapsed();
        RunReport {
            started_at: self.started_at,
            duration,
            total_entries: self.total_entries,
            entries_processed: self.entries_processed,
            outcomes: self.outcomes,
            log: self.log,
            errors: self.errors,
            cancelled: self.cancelled,
        }
    }
}

/// Final result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Local>,
    pub duration: Duration,
    pub total_entries: usize,
    pub entries_processed: usize,
    pub outcomes: Vec<EntryOutcome>,
    pub log: Vec<LogLine>,
    pub errors: Vec<String>,
    pub cancelled: bool,
}

impl RunReport {
    pub fn reports_written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, EntryStatus::Written { .. }))
            .count()
    }

    pub fn titles_found(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome.status {
                EntryStatus::Written { title_count, .. } => title_count,
                _ => 0,
            })
            .sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.entries_processed == self.total_entries
    }
}

/// Latest report per console, for the post-run open actions.
#[derive(Debug, Clone, Default)]
pub struct OutputRecords {
    records: HashMap<String, OutputRecord>,
}

impl OutputRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: OutputRecord) {
        self.records.insert(record.console_name.clone(), record);
    }

    pub fn get(&self, console_name: &str) -> Option<&OutputRecord> {
        self.records.get(console_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Receives log lines and progress updates while a run is in flight.
pub trait RunObserver {
    fn on_log(&self, _line: &LogLine) {}
    fn on_progress(&self, _progress: &RunProgress) {}
}

/// Observer that discards everything.
pub struct SilentObserver;

impl RunObserver for SilentObserver {}
