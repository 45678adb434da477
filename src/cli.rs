use crate::config::{has_path_separator, CliOverrides, Config};
use crate::error::{GameTitlesError, Result};
use crate::registry::{catalog, ConsoleRegistry};
use crate::ui::{OpenTarget, OutputMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gametitles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List the .zip game titles in per-console ROM directories")]
#[command(
    long_about = "GameTitles scans one directory per game console for .zip files and writes \
                  the names it finds to a dated report inside that directory."
)]
#[command(before_help = "🎮 GameTitles - Game Title Extraction Tool")]
#[command(after_help = "EXAMPLES:\n  \
    gametitles --console \"Nintendo 64=/roms/n64\"\n  \
    gametitles -c \"Sega Genesis=/roms/genesis\" -c \"Atari 2600=/roms/a2600\" --open-file\n  \
    gametitles -c \"Xbox=D:\\roms\\xbox\" --ignore-case --output-format json\n  \
    gametitles --config my-consoles.toml --dry-run\n  \
    gametitles --list-consoles")]
pub struct Cli {
    /// Console and its ROM directory as NAME=DIR (repeatable)
    #[arg(
        short,
        long = "console",
        value_name = "NAME[=DIR]",
        value_parser = parse_console_arg,
        help = "Console and directory to scan, e.g. \"Nintendo 64=/roms/n64\". A bare NAME only selects the console."
    )]
    pub consoles: Vec<ConsoleArg>,

    /// Configuration file path
    #[arg(long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// File name suffix that marks a game title
    #[arg(long, help = "Suffix to match (default: .zip)")]
    pub suffix: Option<String>,

    /// Match the suffix regardless of case
    #[arg(long, help = "Also match .ZIP, .Zip, ...")]
    pub ignore_case: bool,

    /// Only accept console names from the built-in catalog
    #[arg(long)]
    pub strict: bool,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "Show which reports would be written without writing them")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,

    /// Print the console catalog and exit
    #[arg(long)]
    pub list_consoles: bool,

    /// Open the selected console's report when the run finishes
    #[arg(long, conflicts_with = "dry_run")]
    pub open_file: bool,

    /// Open the folder holding the selected console's report when the run finishes
    #[arg(long, conflicts_with = "dry_run")]
    pub open_folder: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

/// A `--console` value: a console name and, optionally, its directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleArg {
    pub name: String,
    pub directory: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_suffix(self.suffix.clone())
            .with_ignore_case(self.ignore_case)
            .with_strict(self.strict)
    }

    /// Build the registry from the config file's consoles followed by the
    /// `--console` arguments, in that order.
    ///
    /// The last console named on the command line becomes the selected
    /// one; without any, the last configured console is selected.
    pub fn build_registry(&self, config: &Config) -> Result<ConsoleRegistry> {
        let mut registry = ConsoleRegistry::new();

        for console in &config.consoles {
            registry.submit_console_directory(console.name.clone(), console.directory.clone());
        }

        for console in &self.consoles {
            let name = if config.catalog.strict {
                // Strict mode accepts any casing and stores the catalog spelling
                catalog::find_console(&console.name)
                    .ok_or_else(|| GameTitlesError::UnknownConsole {
                        name: console.name.clone(),
                    })?
                    .to_string()
            } else {
                console.name.clone()
            };

            match console.directory {
                Some(ref directory) => registry.submit_console_directory(name, directory.clone()),
                None => registry.select_console(name),
            }
        }

        Ok(registry)
    }

    pub fn open_targets(&self) -> Vec<OpenTarget> {
        let mut targets = Vec::new();
        if self.open_folder {
            targets.push(OpenTarget::Folder);
        }
        if self.open_file {
            targets.push(OpenTarget::File);
        }
        targets
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

pub fn parse_console_arg(s: &str) -> std::result::Result<ConsoleArg, String> {
    let (name, directory) = match s.split_once('=') {
        Some((name, directory)) => (name.trim(), Some(directory.trim())),
        None => (s.trim(), None),
    };

    if name.is_empty() {
        return Err("Console name must not be empty (expected NAME=DIR)".to_string());
    }

    if has_path_separator(name) {
        return Err("Console name cannot contain path separators".to_string());
    }

    let directory = directory
        .filter(|directory| !directory.is_empty())
        .map(PathBuf::from);

    Ok(ConsoleArg {
        name: name.to_string(),
        directory,
    })
}
