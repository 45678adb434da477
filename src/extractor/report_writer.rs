use crate::error::{GameTitlesError, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the latest report for a console was written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub console_name: String,
    pub report_file_path: PathBuf,
}

/// Number of lines written ahead of the title list.
pub const HEADER_LINES: usize = 3;

pub struct ReportWriter {
    fixed_date: Option<NaiveDate>,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self { fixed_date: None }
    }

    /// Stamp every report with `date` instead of the current local date.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    pub fn report_date(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn report_path(&self, directory: &Path, console_name: &str) -> PathBuf {
        directory.join(report_file_name(console_name, self.report_date()))
    }

    /// Write `titles` to `{console_name}_{date}.txt` inside `directory`.
    ///
    /// Nothing is written for an empty list. An existing report from the
    /// same day is replaced.
    pub fn write_report(
        &self,
        directory: &Path,
        console_name: &str,
        titles: &[String],
    ) -> Result<Option<OutputRecord>> {
        if titles.is_empty() {
            log::debug!("No titles for {}, skipping report", console_name);
            return Ok(None);
        }

        let report_path = self.report_path(directory, console_name);
        let content = render_report(console_name, titles);
        let io_error = |e| GameTitlesError::from_io(e, &report_path, directory);

        let file = fs::File::create(&report_path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes()).map_err(io_error)?;
        writer.flush().map_err(io_error)?;

        Ok(Some(OutputRecord {
            console_name: console_name.to_string(),
            report_file_path: report_path,
        }))
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn report_file_name(console_name: &str, date: NaiveDate) -> String {
    format!("{}_{}.txt", console_name, date.format("%Y-%m-%d"))
}

pub fn render_report(console_name: &str, titles: &[String]) -> String {
    let mut content = String::new();
    content.push_str(&format!("Console: {}\n", console_name));
    content.push_str(&format!(
        "Warning: We do not know if the list below is actual {} game titles or not. \
         Please double-check by yourself.\n",
        console_name
    ));
    content.push('\n');

    for title in titles {
        content.push_str(title);
        content.push('\n');
    }

    content
}
