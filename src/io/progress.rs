//! Multi-map progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a regeneration run
///
/// Shows one bar per map (rows extracted out of total rows) for the most recent
/// maps, plus a single batch bar when there are more maps than fit on screen
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_bars: Vec<ProgressBar>,
    /// Stores (`name`, `rows_done`, `total_rows`) for rolling window display
    map_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_bars: Vec::new(),
            map_states: Vec::new(),
        }
    }

    /// Create a manager that draws nothing, for quiet runs and tests
    pub fn hidden() -> Self {
        let manager = Self::new();
        manager
            .multi_progress
            .set_draw_target(indicatif::ProgressDrawTarget::hidden());
        manager
    }

    /// Initialize progress bars based on map count
    pub fn initialize(&mut self, map_count: usize) {
        // Switch to batch mode for large sets to avoid terminal spam
        if map_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(map_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = map_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(ROW_STYLE.clone());
            self.map_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new map
    pub fn start_map(&mut self, index: usize, name: &str, total_rows: usize) {
        if index >= self.map_states.len() {
            self.map_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.map_states.get_mut(index) {
            *state = (name.to_string(), 0, total_rows);
        }
        self.update_bars();
    }

    /// Report the number of completed rows
    pub fn update_rows(&mut self, index: usize, rows_done: usize) {
        if let Some(state) = self.map_states.get_mut(index) {
            state.1 = rows_done;
        }
        self.update_bars();
    }

    /// Mark a map as written
    pub fn complete_map(&mut self, index: usize) {
        self.close_map(index, '✓');
    }

    /// Mark a map as skipped or failed
    pub fn abandon_map(&mut self, index: usize) {
        self.close_map(index, '✗');
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Current (`name`, `rows_done`, `total_rows`) of a map
    pub fn map_state(&self, index: usize) -> Option<(&str, usize, usize)> {
        self.map_states
            .get(index)
            .map(|(name, done, total)| (name.as_str(), *done, *total))
    }

    fn close_map(&mut self, index: usize, mark: char) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.map_states.get_mut(index) {
            state.0 = format!("{mark} {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Update all progress bars to show the last N active maps
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .map_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, current, max)) in visible.iter().enumerate() {
            if let Some(bar) = self.map_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                bar.set_message(format!("{current:>max_width$}/{max}"));
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible.len()..self.map_bars.len() {
            if let Some(bar) = self.map_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
