//! Progress display for batch rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar over a batch of pattern renders
///
/// Hidden in quiet mode so callers can report unconditionally.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a progress display for `total` renders
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(Self::style());
        Self { bar }
    }

    /// Announce the render that is about to start
    pub fn start(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Mark the current render as finished
    pub fn complete(&self) {
        self.bar.inc(1);
    }

    /// Number of renders completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Tear down the display, reporting total time taken
    pub fn finish(&self) -> Duration {
        self.bar.finish_and_clear();
        self.bar.elapsed()
    }

    fn style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
