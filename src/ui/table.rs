use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{
    COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, FAILURE_LABEL,
    SUCCESS_LABEL,
};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Render the records passing the current controls.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let records = &state.update.records;
    ui.strong(format!("Launch records ({})", records.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [COL_LAUNCH_SITE, COL_PAYLOAD_MASS, COL_CLASS, COL_BOOSTER_CATEGORY] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let rec = &records[row.index()];
                row.col(|ui| {
                    ui.label(rec.launch_site.as_str());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    let outcome = if rec.is_success() {
                        SUCCESS_LABEL
                    } else {
                        FAILURE_LABEL
                    };
                    let color = state.pie_colors.color_for(outcome);
                    ui.label(RichText::new(rec.class.to_string()).color(color));
                });
                row.col(|ui| {
                    let cat = &rec.booster_version_category;
                    ui.label(RichText::new(cat).color(state.category_colors.color_for(cat)));
                });
            });
        });
}
