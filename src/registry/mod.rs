pub mod catalog;
pub mod console_registry;

pub use catalog::CONSOLE_CATALOG;
pub use console_registry::{ConsoleEntry, ConsoleRegistry};
