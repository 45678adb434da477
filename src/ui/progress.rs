use crate::extractor::{LogLine, RunObserver, RunProgress};
use crate::ui::output::ProgressAwareOutput;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressManager {
    multi_progress: MultiProgress,
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            enabled,
        }
    }

    pub fn create_run_progress(&self, total_consoles: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = self.multi_progress.add(ProgressBar::new(total_consoles));
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}/{len:3} consoles {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if self.enabled {
            self.multi_progress.suspend(f)
        } else {
            f()
        }
    }
}

pub fn update_run_progress(pb: &ProgressBar, progress: &RunProgress) {
    pb.set_position(progress.entries_processed as u64);

    match progress.current_console {
        Some(ref console) => pb.set_message(format!("Processing {}", console)),
        None => pb.set_message(format!("{:.0}%", progress.percentage())),
    }
}

pub fn finish_progress_with_summary(pb: &ProgressBar, message: &str, duration: Duration) {
    let final_message = format!("{} (completed in {})", message, format_duration(duration));
    pb.finish_with_message(final_message);
}

pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Feeds a run's log lines to the terminal and its progress to a bar.
pub struct RunDisplay<'a> {
    output: ProgressAwareOutput<'a>,
    progress_bar: ProgressBar,
}

impl<'a> RunDisplay<'a> {
    pub fn new(output: ProgressAwareOutput<'a>, progress_bar: ProgressBar) -> Self {
        Self {
            output,
            progress_bar,
        }
    }

    pub fn progress_bar(&self) -> &ProgressBar {
        &self.progress_bar
    }
}

impl RunObserver for RunDisplay<'_> {
    fn on_log(&self, line: &LogLine) {
        self.output.log_line(line);
    }

    fn on_progress(&self, progress: &RunProgress) {
        update_run_progress(&self.progress_bar, progress);
    }
}
