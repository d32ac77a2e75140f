use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui};
use eframe::epaint::Mesh;

use crate::data::model::{OutcomeSummary, SiteSelector};
use crate::state::AppState;

/// Arc segments in a full circle.
const CIRCLE_SEGMENTS: f32 = 96.0;
/// Slices smaller than this share of the pie get no inline label.
const MIN_LABELLED_FRACTION: f32 = 0.04;

// ---------------------------------------------------------------------------
// Slice geometry
// ---------------------------------------------------------------------------

/// One slice of the pie, angles in radians measured clockwise from 12 o'clock
/// in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice<'a> {
    pub key: &'a str,
    pub count: usize,
    pub fraction: f32,
    pub start: f32,
    pub sweep: f32,
}

/// Lay out the slices of a summary. Zero-count keys produce zero-width
/// slices; an all-zero summary produces no slices.
pub fn pie_slices(summary: &OutcomeSummary) -> Vec<PieSlice<'_>> {
    let total = summary.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    summary
        .entries()
        .iter()
        .map(|entry| {
            let fraction = entry.count as f32 / total as f32;
            let slice = PieSlice {
                key: &entry.key,
                count: entry.count,
                fraction,
                start,
                sweep: fraction * TAU,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

pub fn pie_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Successful Launches by Site".to_string(),
        SiteSelector::Site(site) => format!("Total Success vs Failure Launches for Site {site}"),
    }
}

// ---------------------------------------------------------------------------
// Pie chart (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Render the success pie with its legend.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let summary = &state.update.summary;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(pie_title(&state.update.selector));
    });

    ui.horizontal(|ui: &mut Ui| {
        let size = ui
            .available_height()
            .min(ui.available_width() * 0.6)
            .max(80.0);
        let (response, painter) = ui.allocate_painter(egui::vec2(size, size), Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.45;
        let weak = ui.visuals().weak_text_color();

        let slices = pie_slices(summary);
        if slices.is_empty() {
            painter.circle_stroke(center, radius, Stroke::new(1.0, weak));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No launches in range",
                FontId::proportional(14.0),
                weak,
            );
        }

        for slice in &slices {
            let color = state.pie_colors.color_for(slice.key);
            painter.add(wedge(center, radius, slice.start, slice.sweep, color));

            if slice.fraction >= MIN_LABELLED_FRACTION {
                let mid = slice.start + slice.sweep / 2.0;
                let pos = center + egui::vec2(mid.cos(), mid.sin()) * radius * 0.65;
                painter.text(
                    pos,
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", slice.fraction * 100.0),
                    FontId::proportional(13.0),
                    Color32::WHITE,
                );
            }
        }

        // ---- Legend ----
        ui.vertical(|ui: &mut Ui| {
            let total = summary.total();
            for entry in summary.entries() {
                let color = state.pie_colors.color_for(&entry.key);
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, color);
                    let pct = if total == 0 {
                        0.0
                    } else {
                        entry.count as f64 * 100.0 / total as f64
                    };
                    ui.label(format!("{}: {} ({pct:.1}%)", entry.key, entry.count));
                });
            }
        });
    });
}

/// Filled circular sector as a triangle fan around `center`.
fn wedge(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> egui::Shape {
    let steps = ((sweep / TAU) * CIRCLE_SEGMENTS).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..=steps {
        let angle = start + sweep * i as f32 / steps as f32;
        mesh.colored_vertex(center + egui::vec2(angle.cos(), angle.sin()) * radius, color);
    }
    for i in 1..=steps {
        mesh.add_triangle(0, i, i + 1);
    }
    egui::Shape::mesh(mesh)
}
