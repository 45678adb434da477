use crate::error::{GameTitlesError, Result};
use crate::extractor::OutputRecord;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    File,
    Folder,
}

/// Open the report file itself with the platform's default handler.
pub fn open_report_file(record: &OutputRecord) -> Result<()> {
    open_path(&record.report_file_path)
}

/// Open the directory holding the report in the file manager.
pub fn reveal_report_folder(record: &OutputRecord) -> Result<()> {
    open_path(&report_folder(record))
}

pub fn open_report(record: &OutputRecord, target: OpenTarget) -> Result<()> {
    match target {
        OpenTarget::File => open_report_file(record),
        OpenTarget::Folder => reveal_report_folder(record),
    }
}

pub fn report_folder(record: &OutputRecord) -> PathBuf {
    record
        .report_file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Name of the opener program for the current platform.
pub fn opener_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn open_path(path: &Path) -> Result<()> {
    spawn_detached(opener_command(), path).map(|_pid| ())
}

/// Start `command path` and return without waiting. The opener owns the
/// window from here on, so its exit status is never collected.
fn spawn_detached(command: &str, path: &Path) -> Result<u32> {
    log::debug!("Executing: {} \"{}\"", command, path.display());

    let child = Command::new(command)
        .arg(path)
        .spawn()
        .map_err(|source| GameTitlesError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Spawned {} (pid {}) for {}", command, child.id(), path.display());
    Ok(child.id())
}
