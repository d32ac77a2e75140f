use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::SiteSelector;
use crate::state::{AppState, SLIDER_STEP};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

// ---------------------------------------------------------------------------
// Left side panel – site dropdown and payload range
// ---------------------------------------------------------------------------

/// Dropdown text for a selector.
pub fn selector_label(selector: &SiteSelector) -> &str {
    match selector {
        SiteSelector::All => "All Sites",
        SiteSelector::Site(name) => name,
    }
}

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let mut selected = state.selector.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selector_label(&selected).to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut selected, SiteSelector::All, "All Sites");
            for site in &state.dataset().sites {
                let value = SiteSelector::site(site.as_str());
                ui.selectable_value(&mut selected, value, site.as_str());
            }
        });
    state.set_selector(selected);

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let max = state.slider_max;

    let mut low = state.payload_low;
    let low_slider = egui::Slider::new(&mut low, 0.0..=max)
        .step_by(SLIDER_STEP)
        .suffix(" kg")
        .text("min");
    if ui.add(low_slider).changed() {
        state.set_payload_low(low);
    }

    let mut high = state.payload_high;
    let high_slider = egui::Slider::new(&mut high, 0.0..=max)
        .step_by(SLIDER_STEP)
        .suffix(" kg")
        .text("max");
    if ui.add(high_slider).changed() {
        state.set_payload_high(high);
    }

    // Marks every SLIDER_STEP kg.
    ui.horizontal_wrapped(|ui: &mut Ui| {
        let n_marks = (max / SLIDER_STEP).round() as usize;
        for i in 0..=n_marks {
            ui.weak(format!("{} kg", i as f64 * SLIDER_STEP));
        }
    });

    if ui.small_button("Reset range").clicked() {
        state.reset_range();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(DASHBOARD_TITLE)
                .size(32.0)
                .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
        );
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches loaded, {} visible",
            state.dataset().len(),
            state.update.records.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
