pub mod opener;
pub mod output;
pub mod progress;
pub mod signals;

pub use opener::OpenTarget;
pub use output::{OutputFormatter, OutputMode, ProgressAwareOutput};
pub use progress::{ProgressManager, RunDisplay};
pub use signals::GracefulShutdown;
