use crate::error::{GameTitlesError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleEntry {
    pub console_name: String,
    pub directory_path: PathBuf,
}

/// Console-to-directory selections for one session.
///
/// Entries keep the position of their first assignment; re-assigning a
/// console only replaces its directory. Directories are not checked here,
/// only when a run scans them.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRegistry {
    entries: Vec<ConsoleEntry>,
    selected: Option<String>,
}

impl ConsoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_directory<S, P>(&mut self, console_name: S, directory_path: P)
    where
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let console_name = console_name.into();
        let directory_path = directory_path.into();

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.console_name == console_name)
        {
            Some(entry) => entry.directory_path = directory_path,
            None => self.entries.push(ConsoleEntry {
                console_name,
                directory_path,
            }),
        }
    }

    pub fn get_directory(&self, console_name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|entry| entry.console_name == console_name)
            .map(|entry| entry.directory_path.as_path())
    }

    pub fn all_entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn select_console<S: Into<String>>(&mut self, console_name: S) {
        self.selected = Some(console_name.into());
    }

    /// Select `console_name` and assign it `directory_path`.
    ///
    /// An empty path only selects the console.
    pub fn submit_console_directory<S, P>(&mut self, console_name: S, directory_path: P)
    where
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let console_name = console_name.into();
        let directory_path = directory_path.into();

        self.select_console(console_name.clone());
        if !directory_path.as_os_str().is_empty() {
            self.set_directory(console_name, directory_path);
        }
    }

    pub fn selected_console(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that a run has something to do.
    pub fn validate_ready(&self) -> Result<()> {
        if let Some(console) = self.selected_console() {
            if self.get_directory(console).is_none() {
                return Err(GameTitlesError::NoDirectorySelected {
                    console: console.to_string(),
                });
            }
        }

        if self.is_empty() {
            return Err(GameTitlesError::NoConsoleSelected);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_directory() {
        let mut registry = ConsoleRegistry::new();
        assert!(registry.get_directory("NES").is_none());

        registry.set_directory("NES", "/roms/nes");
        assert_eq!(registry.get_directory("NES"), Some(Path::new("/roms/nes")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut registry = ConsoleRegistry::new();
        registry.set_directory("NES", "/roms/nes");
        registry.set_directory("Nintendo 64", "/roms/n64");
        registry.set_directory("NES", "/mnt/usb/nes");

        let names: Vec<&str> = registry
            .all_entries()
            .iter()
            .map(|entry| entry.console_name.as_str())
            .collect();
        assert_eq!(names, vec!["NES", "Nintendo 64"]);
        assert_eq!(
            registry.get_directory("NES"),
            Some(Path::new("/mnt/usb/nes"))
        );
    }

    #[test]
    fn test_submit_selects_console() {
        let mut registry = ConsoleRegistry::new();
        registry.submit_console_directory("Sega Genesis", "/roms/genesis");
        registry.submit_console_directory("Xbox", "/roms/xbox");

        assert_eq!(registry.selected_console(), Some("Xbox"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_submit_with_empty_path_only_selects() {
        let mut registry = ConsoleRegistry::new();
        registry.submit_console_directory("Atari Lynx", "");

        assert_eq!(registry.selected_console(), Some("Atari Lynx"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_validate_ready() {
        let mut registry = ConsoleRegistry::new();
        assert!(matches!(
            registry.validate_ready(),
            Err(GameTitlesError::NoConsoleSelected)
        ));

        registry.select_console("Nintendo DS");
        match registry.validate_ready() {
            Err(GameTitlesError::NoDirectorySelected { console }) => {
                assert_eq!(console, "Nintendo DS")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        registry.set_directory("Nintendo DS", "/roms/nds");
        assert!(registry.validate_ready().is_ok());
    }

    #[test]
    fn test_entries_without_selection_are_ready() {
        let mut registry = ConsoleRegistry::new();
        registry.set_directory("Sony PlayStation", "/roms/psx");
        assert!(registry.validate_ready().is_ok());
    }
}
