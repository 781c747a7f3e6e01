//! Detail view for a single vehicle.

use eframe::egui::{self, RichText, Ui};

use crsp_app::CatalogBrowser;
use crsp_types::Vehicle;

use crate::browse_panel::format_price;

/// Navigation result of the detail view
pub enum DetailAction {
    Stay,
    Back,
}

/// Render the detail view for a make/model pair.
///
/// The pair may no longer exist in the current view (filters can change
/// between render and navigation); in that case a "not found" notice is
/// shown instead of the details.
pub fn ui(ui: &mut Ui, browser: &CatalogBrowser, make: &str, model: &str) -> DetailAction {
    let mut action = DetailAction::Stay;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            action = DetailAction::Back;
        }
    });
    ui.add_space(8.0);

    match browser.find_vehicle(make, model) {
        Some(vehicle) => render_details(ui, vehicle),
        None => {
            ui.label(
                RichText::new(format!("{make} {model} is not in the current list"))
                    .color(egui::Color32::LIGHT_RED),
            );
            ui.label("The filters may have changed. Go back and pick a vehicle again.");
        }
    }

    action
}

fn render_details(ui: &mut Ui, vehicle: &Vehicle) {
    ui.heading(format!(
        "{} {}",
        vehicle.make.as_deref().unwrap_or("Unknown Make"),
        vehicle.model.as_deref().unwrap_or("Unknown Model"),
    ));
    ui.add_space(8.0);

    egui::Grid::new("vehicle_details")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            detail_row(ui, "Model Number", vehicle.model_number.as_deref());
            detail_row(ui, "Body Type", vehicle.body_type.as_deref());
            detail_row(ui, "Fuel", vehicle.fuel.as_deref());
            detail_row(ui, "Transmission", vehicle.transmission.as_deref());
            detail_row(ui, "Drive", vehicle.drive_configuration.as_deref());
            detail_row(ui, "Engine Capacity", vehicle.engine_capacity.as_deref());

            let seating = vehicle.seating.map(|s| s.to_string());
            detail_row(ui, "Seating", seating.as_deref());

            let gvw = vehicle.gvw.map(|w| format!("{w} kg"));
            detail_row(ui, "GVW", gvw.as_deref());

            ui.label(RichText::new("CRSP (KES)").strong());
            ui.label(format_price(vehicle.crsp));
            ui.end_row();
        });
}

fn detail_row(ui: &mut Ui, label: &str, value: Option<&str>) {
    ui.label(RichText::new(label).strong());
    ui.label(value.unwrap_or("Not specified"));
    ui.end_row();
}
