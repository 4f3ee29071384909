//! Batch progress reporting
//!
//! A solve is a single opaque computation with no iteration counter to
//! drive a bounded bar, so each file gets an elapsed-time spinner instead.
//! Large batches collapse to a single batch bar to avoid terminal spam.

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, SPINNER_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch solving
///
/// Shows one spinner per file for small batches and a single counting bar
/// for large ones.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_names: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_names: Vec::new(),
        }
    }

    /// Initialize progress display for a batch of files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_names = vec![String::new(); file_count];

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..file_count {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Mark a file as being solved
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if let Some(name) = self.file_names.get_mut(index) {
            display_name.clone_into(name);
        }

        if let Some(bar) = self.file_bars.get(index) {
            bar.set_message(display_name);
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
    }

    /// Mark a file as solved, reporting its solution count and elapsed time
    pub fn complete_file(&mut self, index: usize, solution_count: usize, elapsed: Duration) {
        let name = self
            .file_names
            .get(index)
            .cloned()
            .unwrap_or_default();

        if let Some(bar) = self.file_bars.get(index) {
            bar.finish_with_message(format!(
                "{name}: {solution_count} solutions in {:.3}s",
                elapsed.as_secs_f64()
            ));
        }
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Finish all remaining progress bars
    pub fn finish(&mut self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish();
        }
        for bar in &self.file_bars {
            if !bar.is_finished() {
                bar.finish();
            }
        }
    }
}
