pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod registry;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, ConsoleArg, OutputFormat};
pub use config::{CatalogConfig, CliOverrides, Config, ConsoleDirectory, ScanConfig};
pub use error::{GameTitlesError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    EntryOutcome, EntryStatus, ExtractionPipeline, LogLevel, LogLine, OutputRecord,
    OutputRecords, ReportWriter, RunObserver, RunProgress, RunReport, SilentObserver,
};
pub use registry::{ConsoleEntry, ConsoleRegistry, CONSOLE_CATALOG};
pub use scanner::{GameTitleList, TitleFilter, ZipScanner};
pub use ui::{
    GracefulShutdown, OpenTarget, OutputFormatter, OutputMode, ProgressAwareOutput,
    ProgressManager, RunDisplay,
};

use std::path::Path;

/// Main library interface for GameTitles functionality
pub struct GameTitles {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
    shutdown: GracefulShutdown,
}

impl GameTitles {
    /// Create a new GameTitles instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);
        let shutdown = GracefulShutdown::new()?;

        Ok(Self {
            config,
            output_formatter,
            progress_manager,
            shutdown,
        })
    }

    /// Create a new GameTitles instance without installing a Ctrl+C handler
    pub fn new_for_test(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(false);
        let shutdown = GracefulShutdown::new_for_test();

        Self {
            config,
            output_formatter,
            progress_manager,
            shutdown,
        }
    }

    /// Create GameTitles instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        Self::new(
            config,
            cli_args.output_format.into(),
            cli_args.verbose,
            cli_args.quiet,
        )
    }

    /// Scan every registered console directory and write its report.
    ///
    /// Fails only when the registry has nothing to run; per-console
    /// failures are logged and collected in the returned report.
    pub fn run_extraction(
        &self,
        registry: &ConsoleRegistry,
        records: &mut OutputRecords,
    ) -> Result<RunReport> {
        registry.validate_ready()?;

        self.output_formatter.start_operation("Extracting game titles");
        self.output_formatter.debug(&format!(
            "Matching entries ending in '{}' ({})",
            self.config.scan.suffix,
            if self.config.scan.case_sensitive {
                "case-sensitive"
            } else {
                "case-insensitive"
            }
        ));

        let progress_bar = self
            .progress_manager
            .create_run_progress(registry.len() as u64);
        let display = RunDisplay::new(
            ProgressAwareOutput::new(&self.output_formatter, Some(&self.progress_manager)),
            progress_bar,
        );

        let pipeline = ExtractionPipeline::new(&self.config.scan).with_shutdown(&self.shutdown);
        let report = pipeline.run_all(registry, records, &display)?;

        ui::progress::finish_progress_with_summary(
            display.progress_bar(),
            &format!("Processed {} consoles", report.entries_processed),
            report.duration,
        );

        Ok(report)
    }

    /// Where the report for `console_name` would be written today.
    pub fn planned_report_path(&self, directory: &Path, console_name: &str) -> std::path::PathBuf {
        ReportWriter::new().report_path(directory, console_name)
    }

    /// Open the latest report (or its folder) for `console_name`.
    pub fn open_last_report(
        &self,
        records: &OutputRecords,
        console_name: &str,
        target: OpenTarget,
    ) -> Result<()> {
        let record = records
            .get(console_name)
            .ok_or_else(|| GameTitlesError::NoReport {
                console: console_name.to_string(),
            })?;

        ui::opener::open_report(record, target)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        Config::default().save_to_file(output_path)
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &GameTitlesError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Run one extraction with default settings and no terminal output.
pub fn extract_titles_simple(entries: &[(&str, &Path)]) -> Result<RunReport> {
    let mut registry = ConsoleRegistry::new();
    for (console_name, directory) in entries {
        registry.submit_console_directory(*console_name, *directory);
    }

    let pipeline = ExtractionPipeline::new(&ScanConfig::default());
    pipeline.run_all(&registry, &mut OutputRecords::new(), &SilentObserver)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_extraction_records_reports() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Wave Race 64.zip"), b"").unwrap();

        let game_titles = GameTitles::new_for_test(Config::default(), OutputMode::Plain, 0, true);
        let mut registry = ConsoleRegistry::new();
        registry.submit_console_directory("Nintendo 64", temp_dir.path());
        let mut records = OutputRecords::new();

        let report = game_titles.run_extraction(&registry, &mut records).unwrap();

        assert!(report.is_complete());
        let record = records.get("Nintendo 64").unwrap();
        assert_eq!(
            record.report_file_path,
            game_titles.planned_report_path(temp_dir.path(), "Nintendo 64")
        );
        assert!(record.report_file_path.exists());
    }

    #[test]
    fn test_run_extraction_requires_console() {
        let game_titles = GameTitles::new_for_test(Config::default(), OutputMode::Plain, 0, true);

        let result = game_titles.run_extraction(&ConsoleRegistry::new(), &mut OutputRecords::new());

        assert!(matches!(result, Err(GameTitlesError::NoConsoleSelected)));
    }

    #[test]
    fn test_open_last_report_without_record() {
        let game_titles = GameTitles::new_for_test(Config::default(), OutputMode::Plain, 0, true);

        let result = game_titles.open_last_report(&OutputRecords::new(), "NES", OpenTarget::File);

        assert!(matches!(result, Err(GameTitlesError::NoReport { .. })));
    }

    #[test]
    fn test_extract_titles_simple() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Sonic.zip"), b"").unwrap();
        fs::write(temp_dir.path().join("Sonic.srm"), b"").unwrap();

        let report = extract_titles_simple(&[("Sega Genesis", temp_dir.path())]).unwrap();

        assert_eq!(report.reports_written(), 1);
        assert_eq!(report.titles_found(), 1);
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        GameTitles::generate_sample_config(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[scan]"));
        assert!(content.contains("suffix = \".zip\""));
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
