use crate::config::ScanConfig;

/// Matches directory entry names against the configured suffix.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    suffix: String,
    case_sensitive: bool,
}

impl TitleFilter {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            suffix: config.suffix.clone(),
            case_sensitive: config.case_sensitive,
        }
    }

    pub fn is_title(&self, file_name: &str) -> bool {
        if self.case_sensitive {
            file_name.ends_with(&self.suffix)
        } else {
            file_name
                .to_lowercase()
                .ends_with(&self.suffix.to_lowercase())
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for TitleFilter {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
