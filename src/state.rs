use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::SeriesColors;
use crate::data::loader::load_samples;
use crate::data::model::{SeriesKind, SeriesPair, SeriesStats};
use crate::ui::plot::PlotStyle;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the current series were read from.
    pub source: PathBuf,

    /// De-interleaved samples.
    pub series: SeriesPair,

    /// Cached summaries, one per series (None for an empty series).
    pub cpu_stats: Option<SeriesStats>,
    pub gpu_stats: Option<SeriesStats>,

    /// Median of the per-coordinate cpu/gpu ratio.
    pub median_speedup: Option<f64>,

    pub colors: SeriesColors,
    pub style: PlotStyle,

    pub show_cpu: bool,
    pub show_gpu: bool,

    /// Constrain the axes to `style` bounds instead of fitting the data.
    pub fixed_axes: bool,

    /// Set when the plot should re-apply its bounds on the next frame.
    pub bounds_dirty: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: PathBuf, series: SeriesPair) -> Self {
        let mut state = Self {
            source,
            series: SeriesPair::default(),
            cpu_stats: None,
            gpu_stats: None,
            median_speedup: None,
            colors: SeriesColors::default(),
            style: PlotStyle::default(),
            show_cpu: true,
            show_gpu: true,
            fixed_axes: true,
            bounds_dirty: true,
            status_message: None,
        };
        state.set_series(series);
        state
    }

    /// Read and split `path` in one go.
    pub fn open(path: &Path) -> Result<Self> {
        let series = read_series(path)?;
        Ok(Self::new(path.to_path_buf(), series))
    }

    /// Replace the series and refresh the cached summaries.
    pub fn set_series(&mut self, series: SeriesPair) {
        self.cpu_stats = SeriesStats::of(&series.cpu);
        self.gpu_stats = SeriesStats::of(&series.gpu);

        let ratios: Vec<f64> = series.speedup().iter().map(|p| p[1]).collect();
        self.median_speedup = SeriesStats::of(&ratios).map(|s| s.median);

        self.series = series;
        self.bounds_dirty = true;
        self.status_message = None;
    }

    /// Load another file. On failure the current series are kept and the
    /// error is surfaced in the status line.
    pub fn load(&mut self, path: &Path) {
        match read_series(path) {
            Ok(series) => {
                log::info!(
                    "Loaded {} samples ({} cpu, {} gpu) from {}",
                    series.len(),
                    series.cpu.len(),
                    series.gpu.len(),
                    path.display()
                );
                self.source = path.to_path_buf();
                self.set_series(series);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-read the current source file.
    pub fn reload(&mut self) {
        let path = self.source.clone();
        self.load(&path);
    }

    /// Switch between the fixed `style` bounds and fitting the data.
    pub fn toggle_fixed_axes(&mut self) {
        self.fixed_axes = !self.fixed_axes;
        self.bounds_dirty = true;
    }

    pub fn is_visible(&self, kind: SeriesKind) -> bool {
        match kind {
            SeriesKind::Cpu => self.show_cpu,
            SeriesKind::Gpu => self.show_gpu,
        }
    }

    pub fn stats(&self, kind: SeriesKind) -> Option<&SeriesStats> {
        match kind {
            SeriesKind::Cpu => self.cpu_stats.as_ref(),
            SeriesKind::Gpu => self.gpu_stats.as_ref(),
        }
    }
}

fn read_series(path: &Path) -> Result<SeriesPair> {
    let samples = load_samples(path)
        .with_context(|| format!("loading samples from {}", path.display()))?;
    Ok(SeriesPair::split(&samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "timing-compare-state-{tag}-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn new_state_caches_summaries() {
        let state = AppState::new(
            PathBuf::from("data.txt"),
            SeriesPair::split(&[4.0, 2.0, 6.0, 2.0]),
        );
        assert_eq!(state.cpu_stats.map(|s| s.mean), Some(5.0));
        assert_eq!(state.gpu_stats.map(|s| s.max), Some(2.0));
        assert_eq!(state.median_speedup, Some(2.5));
        assert!(state.is_visible(SeriesKind::Cpu));
        assert!(state.is_visible(SeriesKind::Gpu));
    }

    #[test]
    fn toggling_fixed_axes_requests_new_bounds() {
        let mut state = AppState::new(PathBuf::from("data.txt"), SeriesPair::default());
        assert!(state.fixed_axes);
        assert!(state.bounds_dirty);

        state.bounds_dirty = false;
        state.toggle_fixed_axes();
        assert!(!state.fixed_axes);
        assert!(state.bounds_dirty);

        state.bounds_dirty = false;
        state.set_series(SeriesPair::split(&[1.0, 2.0]));
        assert!(state.bounds_dirty, "new series should re-apply bounds");
    }

    #[test]
    fn empty_series_has_no_summaries() {
        let state = AppState::new(PathBuf::from("data.txt"), SeriesPair::default());
        assert!(state.stats(SeriesKind::Cpu).is_none());
        assert!(state.stats(SeriesKind::Gpu).is_none());
        assert!(state.median_speedup.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_series() {
        let good = SeriesPair::split(&[1.0, 2.0]);
        let mut state = AppState::new(PathBuf::from("data.txt"), good.clone());

        let bad = temp_file("bad", "1.0\nabc\n");
        state.load(&bad);
        std::fs::remove_file(&bad).unwrap();

        assert_eq!(state.series, good);
        assert_eq!(state.source, PathBuf::from("data.txt"));
        let msg = state.status_message.expect("error should be surfaced");
        assert!(msg.contains("abc"), "unexpected message: {msg}");
    }

    #[test]
    fn successful_load_replaces_series_and_clears_status() {
        let mut state = AppState::new(PathBuf::from("data.txt"), SeriesPair::default());
        state.status_message = Some("stale".into());

        let path = temp_file("good", "1.0\n2.0\n3.0\n");
        state.load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(state.series.cpu, vec![1.0, 3.0]);
        assert_eq!(state.series.gpu, vec![2.0]);
        assert_eq!(state.source, path);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn open_missing_file_fails() {
        let path = std::env::temp_dir().join("timing-compare-state-missing.txt");
        assert!(AppState::open(&path).is_err());
    }
}
