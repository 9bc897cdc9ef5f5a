use std::ops::RangeInclusive;

use eframe::egui::{Style, Ui};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::data::model::SeriesKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Plot styling
// ---------------------------------------------------------------------------

/// Cosmetic settings for the timing plot. Passed to the render call rather
/// than installed on the whole context.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Point size applied to every text style inside the plot.
    pub font_size: f32,
    /// Matrix size range.
    pub x_bounds: RangeInclusive<f64>,
    /// Seconds.
    pub y_bounds: RangeInclusive<f64>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            x_bounds: 1.0..=1024.0,
            y_bounds: 0.0..=0.002,
        }
    }
}

impl PlotStyle {
    /// Resize all text styles of `style` to `font_size`.
    pub fn apply_font(&self, style: &mut Style) {
        for font_id in style.text_styles.values_mut() {
            font_id.size = self.font_size;
        }
    }

    /// Lower-left and upper-right corners of the fixed axis ranges.
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        (
            [*self.x_bounds.start(), *self.y_bounds.start()],
            [*self.x_bounds.end(), *self.y_bounds.end()],
        )
    }

    pub fn plot_bounds(&self) -> PlotBounds {
        let (min, max) = self.corners();
        PlotBounds::from_min_max(min, max)
    }
}

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render both series against the shared matrix-size axis.
pub fn timing_plot(ui: &mut Ui, state: &mut AppState) {
    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!(
                "No samples in {}  (File → Open…)",
                state.source.display()
            ));
        });
        return;
    }

    // Bounds are only pushed when they change so the user can still pan
    // and zoom in between.
    let bounds_dirty = std::mem::take(&mut state.bounds_dirty);
    let fixed_bounds = (bounds_dirty && state.fixed_axes).then(|| state.style.plot_bounds());
    let refit = bounds_dirty && !state.fixed_axes;
    let state = &*state;

    // Scoped so the font size does not leak into the other panels.
    ui.scope(|ui: &mut Ui| {
        state.style.apply_font(ui.style_mut());

        let mut plot = Plot::new("timing_plot")
            .legend(Legend::default())
            .x_axis_label("Matrix size")
            .y_axis_label("Time (s)")
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true);

        if refit {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            if let Some(bounds) = fixed_bounds {
                plot_ui.set_plot_bounds(bounds);
            }

            for kind in SeriesKind::ALL {
                if !state.is_visible(kind) {
                    continue;
                }

                let points = PlotPoints::from(state.series.points(kind));
                let line = Line::new(points)
                    .name(kind.to_string())
                    .color(state.colors.color_for(kind))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_benchmark_range() {
        let style = PlotStyle::default();
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.x_bounds, 1.0..=1024.0);
        assert_eq!(style.y_bounds, 0.0..=0.002);
    }

    #[test]
    fn fixed_bounds_span_benchmark_range() {
        let (min, max) = PlotStyle::default().corners();
        assert_eq!(min, [1.0, 0.0]);
        assert_eq!(max, [1024.0, 0.002]);
    }

    #[test]
    fn apply_font_resizes_every_text_style() {
        let mut style = Style::default();
        PlotStyle {
            font_size: 31.0,
            ..PlotStyle::default()
        }
        .apply_font(&mut style);

        assert!(!style.text_styles.is_empty());
        assert!(style.text_styles.values().all(|f| f.size == 31.0));
    }
}
