use crate::error::{GameTitlesError, Result};
use crate::registry::catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Console directories registered before any `--console` arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consoles: Vec<ConsoleDirectory>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub suffix: String,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConsoleDirectory {
    pub name: String,
    pub directory: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            suffix: ".zip".to_string(),
            case_sensitive: true,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GameTitlesError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| GameTitlesError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| GameTitlesError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["gametitles.toml", ".gametitles.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref suffix) = cli_args.suffix {
            self.scan.suffix = suffix.clone();
        }

        if cli_args.ignore_case {
            self.scan.case_sensitive = false;
        }

        if cli_args.strict {
            self.catalog.strict = true;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| GameTitlesError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| GameTitlesError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.suffix.is_empty() {
            return Err(GameTitlesError::Config {
                message: "The file suffix to scan for must not be empty".to_string(),
            });
        }

        for console in &self.consoles {
            if console.name.trim().is_empty() {
                return Err(GameTitlesError::Config {
                    message: format!(
                        "Console entry for {} has an empty name",
                        console.directory.display()
                    ),
                });
            }

            if has_path_separator(&console.name) {
                return Err(GameTitlesError::Config {
                    message: format!(
                        "Console name '{}' cannot contain path separators",
                        console.name
                    ),
                });
            }

            if self.catalog.strict && !catalog::is_known_console(&console.name) {
                return Err(GameTitlesError::UnknownConsole {
                    name: console.name.clone(),
                });
            }
        }

        Ok(())
    }

}

/// Console names end up in report file names, so they must not name a path.
pub fn has_path_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub suffix: Option<String>,
    pub ignore_case: bool,
    pub strict: bool,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
