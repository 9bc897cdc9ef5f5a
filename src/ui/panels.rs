use eframe::egui::{self, Color32, Grid, RichText, Ui};

use crate::data::model::SeriesKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series summaries
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Series");
    ui.separator();

    ui.label(format!("Source: {}", state.source.display()));
    ui.add_space(4.0);

    for kind in SeriesKind::ALL {
        let color = state.colors.color_for(kind);
        ui.strong(RichText::new(kind.to_string()).color(color));

        let Some(stats) = state.stats(kind) else {
            ui.label("no samples");
            ui.add_space(4.0);
            continue;
        };

        Grid::new(("series_stats", kind))
            .num_columns(2)
            .striped(true)
            .show(ui, |ui: &mut Ui| {
                let rows = [
                    ("count", stats.count.to_string()),
                    ("min", format!("{:.6}", stats.min)),
                    ("median", format!("{:.6}", stats.median)),
                    ("mean", format!("{:.6}", stats.mean)),
                    ("max", format!("{:.6}", stats.max)),
                ];
                for (name, value) in rows {
                    ui.label(name);
                    ui.monospace(value);
                    ui.end_row();
                }
            });
        ui.add_space(4.0);
    }

    ui.separator();
    match state.median_speedup {
        Some(s) => ui.label(format!("Median cpu/gpu: {s:.2}×")),
        None => ui.label("Median cpu/gpu: –"),
    };
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} samples, {} sizes",
            state.series.len(),
            state.series.coordinates.len()
        ));

        ui.separator();

        for kind in SeriesKind::ALL {
            let visible = state.is_visible(kind);
            let text = RichText::new(kind.to_string()).color(state.colors.color_for(kind));
            if ui.selectable_label(visible, text).clicked() {
                match kind {
                    SeriesKind::Cpu => state.show_cpu = !visible,
                    SeriesKind::Gpu => state.show_gpu = !visible,
                }
            }
        }

        ui.separator();

        if ui.selectable_label(state.fixed_axes, "Fixed axes").clicked() {
            state.toggle_fixed_axes();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open timing samples")
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"]);

    if let Some(dir) = state.source.parent().filter(|d| !d.as_os_str().is_empty()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        state.load(&path);
    }
}
