//! Motorcycle list panel: the plain sorted catalog, no filters.

use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crsp_app::CatalogBrowser;

use crate::browse_panel::format_price;

pub fn ui(ui: &mut Ui, browser: &CatalogBrowser) {
    let motorcycles = browser.motorcycles();

    ui.label(format!("{} motorcycles", motorcycles.len()));
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in [
                "Make",
                "Model",
                "Model No.",
                "Fuel",
                "Transmission",
                "Engine (cc)",
                "CRSP (KES)",
            ] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for bike in &motorcycles {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(bike.make.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(bike.model.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(bike.model_number.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(bike.fuel.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(bike.transmission.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(
                            bike.engine_capacity
                                .map(|cc| cc.to_string())
                                .unwrap_or_else(|| "—".to_string()),
                        );
                    });
                    row.col(|ui| {
                        ui.label(format_price(bike.crsp));
                    });
                });
            }
        });
}
