use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::{ScatterPoint, SiteSelector, COL_PAYLOAD_MASS};
use crate::state::AppState;

pub fn scatter_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelector::Site(site) => format!("Payload vs. Outcome for Site {site}"),
    }
}

/// Split scatter points into one series per category, in `categories`
/// order. Categories without points are skipped.
pub fn series_by_category<'a>(
    points: &[ScatterPoint],
    categories: &'a [String],
) -> Vec<(&'a str, Vec<[f64; 2]>)> {
    categories
        .iter()
        .filter_map(|cat| {
            let xy: Vec<[f64; 2]> = points
                .iter()
                .filter(|p| p.booster_version_category == *cat)
                .map(|p| [p.payload_mass_kg, f64::from(p.class)])
                .collect();
            (!xy.is_empty()).then_some((cat.as_str(), xy))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Render the payload vs. mission outcome scatter, coloured by booster
/// version category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let update = &state.update;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(scatter_title(&update.selector));
    });

    let series = series_by_category(&update.scatter_points, &state.dataset().booster_categories);

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label(COL_PAYLOAD_MASS)
        .y_axis_label("Mission Outcome")
        .include_x(0.0)
        .include_x(state.slider_max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, xy) in series {
                let points: PlotPoints = xy.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.category_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
