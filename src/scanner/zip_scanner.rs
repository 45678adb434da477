use crate::config::ScanConfig;
use crate::error::{GameTitlesError, Result};
use crate::scanner::title_filter::TitleFilter;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// File names found by one scan, in directory listing order.
pub type GameTitleList = Vec<String>;

pub struct ZipScanner {
    filter: TitleFilter,
}

impl ZipScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: TitleFilter::new(config),
        }
    }

    /// List the immediate entries of `directory` whose names carry the
    /// title suffix. Subdirectories are not descended into and no sorting
    /// is applied.
    pub fn scan_zip_titles<P: AsRef<Path>>(&self, directory: P) -> Result<GameTitleList> {
        let directory = directory.as_ref();

        let metadata = fs::metadata(directory)
            .map_err(|e| GameTitlesError::from_io(e, directory, directory))?;
        if !metadata.is_dir() {
            return Err(GameTitlesError::UnexpectedIo {
                path: directory.to_path_buf(),
                source: io::Error::other("not a directory"),
            });
        }

        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut titles = GameTitleList::new();
        for entry in walker {
            let entry = entry.map_err(|err| {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                GameTitlesError::from_io(source, directory, directory)
            })?;

            let file_name = entry.file_name().to_string_lossy();
            if self.filter.is_title(&file_name) {
                titles.push(file_name.into_owned());
            }
        }

        log::debug!(
            "Found {} {} entries in {}",
            titles.len(),
            self.filter.suffix(),
            directory.display()
        );

        Ok(titles)
    }
}

impl Default for ZipScanner {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
