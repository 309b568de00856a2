//! Batch progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of files
///
/// Safe to update from rayon workers; `ProgressBar` is internally shared.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar for `file_count` files
    pub fn new(file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden(file_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(file_count as u64);
        Self { bar }
    }

    /// Show the file currently being measured
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one file as processed, measured or failed
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Number of files processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of files in the batch
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or_default()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
