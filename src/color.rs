use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::SeriesKind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Offset so the first hue is a blue rather than pure red.
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Fixed colour per series, shared by the plot lines and the side panel.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    cpu: Color32,
    gpu: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        let palette = generate_palette(SeriesKind::ALL.len());
        SeriesColors {
            cpu: palette[0],
            gpu: palette[1],
        }
    }
}

impl SeriesColors {
    pub fn color_for(&self, kind: SeriesKind) -> Color32 {
        match kind {
            SeriesKind::Cpu => self.cpu,
            SeriesKind::Gpu => self.gpu,
        }
    }
}
