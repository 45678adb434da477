pub mod title_filter;
pub mod zip_scanner;

pub use title_filter::TitleFilter;
pub use zip_scanner::{GameTitleList, ZipScanner};
