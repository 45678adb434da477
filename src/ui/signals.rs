use crate::error::{GameTitlesError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ctrl+C flag polled between console entries.
pub struct GracefulShutdown {
    running: Arc<AtomicBool>,
}

impl GracefulShutdown {
    /// Install the Ctrl+C handler. A second Ctrl+C exits with 130 at once.
    pub fn new() -> Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let handler_flag = running.clone();

        ctrlc::set_handler(move || {
            if handler_flag.swap(false, Ordering::SeqCst) {
                eprintln!(
                    "\n🛑 Stopping after the current console... (press Ctrl+C again to force exit)"
                );
            } else {
                eprintln!("\n💀 Force stopping...");
                std::process::exit(130);
            }
        })
        .map_err(|e| GameTitlesError::Config {
            message: format!("Failed to set signal handler: {}", e),
        })?;

        Ok(Self { running })
    }

    /// Create an instance without registering a signal handler.
    pub fn new_for_test() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn request_shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
