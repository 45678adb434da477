use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameTitlesError {
    #[error("No console selected")]
    NoConsoleSelected,

    #[error("No directory selected for console: {console}")]
    NoDirectorySelected { console: String },

    #[error("The directory '{}' does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Unexpected I/O error at '{}': {source}", path.display())]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown console: {name}")]
    UnknownConsole { name: String },

    #[error("No report has been written for console: {console}")]
    NoReport { console: String },

    #[error("Failed to open '{}': {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameTitlesError {
    /// Sort an I/O failure at `path` into the scan/write taxonomy.
    ///
    /// `not_found_path` is the directory reported when the failure is a
    /// missing path, which for report writes is the report's parent rather
    /// than the report file itself.
    pub fn from_io(error: io::Error, path: &Path, not_found_path: &Path) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => GameTitlesError::DirectoryNotFound {
                path: not_found_path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => GameTitlesError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => GameTitlesError::UnexpectedIo {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for GameTitlesError {
    fn user_message(&self) -> String {
        match self {
            GameTitlesError::NoConsoleSelected => {
                "You need to select a console first!".to_string()
            }
            GameTitlesError::NoDirectorySelected { console } => {
                format!("You need to select a directory for {} first!", console)
            }
            GameTitlesError::DirectoryNotFound { path } => {
                format!("The directory '{}' does not exist.", path.display())
            }
            GameTitlesError::PermissionDenied { path } => {
                format!("Permission denied accessing: {}", path.display())
            }
            GameTitlesError::UnknownConsole { name } => {
                format!("'{}' is not in the console catalog", name)
            }
            GameTitlesError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            GameTitlesError::NoReport { console } => {
                format!("No report was written for {} in this run", console)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            GameTitlesError::NoConsoleSelected => Some(
                "Pass at least one console with --console \"NAME=DIR\" or add a [[consoles]] entry to the config file.".to_string()
            ),
            GameTitlesError::NoDirectorySelected { console } => Some(format!(
                "Give the console a directory, e.g. --console \"{}=/path/to/roms\".",
                console
            )),
            GameTitlesError::DirectoryNotFound { .. } => Some(
                "Check the directory path for typos and make sure the drive is mounted.".to_string()
            ),
            GameTitlesError::PermissionDenied { .. } => Some(
                "Ensure you have read and write permissions for the console directory.".to_string()
            ),
            GameTitlesError::UnknownConsole { .. } => Some(
                "Run with --list-consoles to see the catalog, or drop --strict to allow custom names.".to_string()
            ),
            GameTitlesError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            GameTitlesError::NoReport { .. } => Some(
                "A report is only written when the directory contains at least one matching file.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for GameTitlesError {
    fn from(error: toml::de::Error) -> Self {
        GameTitlesError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameTitlesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_classification() {
        let dir = Path::new("/roms/nes");
        let file = dir.join("NES_2024-05-18.txt");

        let err = GameTitlesError::from_io(io::Error::from(io::ErrorKind::NotFound), &file, dir);
        match err {
            GameTitlesError::DirectoryNotFound { path } => assert_eq!(path, dir),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = GameTitlesError::from_io(
            io::Error::from(io::ErrorKind::PermissionDenied),
            &file,
            dir,
        );
        match err {
            GameTitlesError::PermissionDenied { path } => assert_eq!(path, file),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = GameTitlesError::from_io(io::Error::other("disk on fire"), &file, dir);
        assert!(matches!(err, GameTitlesError::UnexpectedIo { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = GameTitlesError::NoConsoleSelected;
        assert!(error.user_message().contains("select a console"));
        assert!(error.suggestion().is_some());

        let error = GameTitlesError::DirectoryNotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(error.user_message(), "The directory '/missing' does not exist.");
    }
}
