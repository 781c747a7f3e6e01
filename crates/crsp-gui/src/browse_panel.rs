//! Vehicle browse panel: filter combo boxes, sort controls, and the
//! derived-list table.

use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crsp_app::CatalogBrowser;
use crsp_domain::FilterDimension;
use crsp_types::{SortKey, SortOrder};

/// Panel for browsing the filtered, sorted vehicle list
pub struct BrowsePanel {}

impl BrowsePanel {
    pub fn new() -> Self {
        Self {}
    }

    /// Render the panel. Returns the make/model pair of a clicked row,
    /// to be opened in the detail view.
    pub fn ui(&mut self, ui: &mut Ui, browser: &mut CatalogBrowser) -> Option<(String, String)> {
        self.render_filter_row(ui, browser);
        ui.add_space(4.0);
        self.render_sort_row(ui, browser);
        ui.add_space(4.0);
        ui.separator();

        ui.label(format!(
            "{} of {} vehicles",
            browser.vehicles().len(),
            browser.total_vehicles()
        ));
        ui.add_space(4.0);

        self.render_table(ui, browser)
    }

    fn render_filter_row(&mut self, ui: &mut Ui, browser: &mut CatalogBrowser) {
        // Mutations are deferred past the combo closures so the options
        // queries can borrow the browser while the UI is being built
        let mut change: Option<(FilterDimension, Option<String>)> = None;

        ui.horizontal_wrapped(|ui| {
            for dimension in FilterDimension::all() {
                let current = browser
                    .selection()
                    .filters
                    .get(dimension)
                    .map(str::to_string);
                let selected_text = match &current {
                    Some(value) => format!("{}: {}", dimension.label(), value),
                    None => format!("{}: All", dimension.label()),
                };

                egui::ComboBox::from_id_salt(dimension.label())
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(current.is_none(), "All").clicked() {
                            change = Some((dimension, None));
                        }
                        for option in browser.options(dimension) {
                            let active = current.as_deref() == Some(option.as_str());
                            if ui.selectable_label(active, option.as_str()).clicked() {
                                change = Some((dimension, Some(option.clone())));
                            }
                        }
                    });
            }

            if browser.selection().filters.active_count() > 0 && ui.button("Clear all").clicked() {
                browser.clear_all();
            }
        });

        if let Some((dimension, value)) = change {
            browser.set_filter(dimension, value);
        }
    }

    fn render_sort_row(&mut self, ui: &mut Ui, browser: &mut CatalogBrowser) {
        ui.horizontal(|ui| {
            ui.label("Sort by:");
            for key in [SortKey::Make, SortKey::Price, SortKey::Seats] {
                let sort = browser.selection().sort;
                let label = if sort.key == key {
                    let suffix = match sort.order {
                        SortOrder::Ascending => " (Asc)",
                        SortOrder::Descending => " (Desc)",
                    };
                    format!("{}{}", key.label(), suffix)
                } else {
                    key.label().to_string()
                };

                if ui
                    .selectable_label(sort.key == key, label)
                    .clicked()
                {
                    browser.select_sort_key(key);
                }
            }
        });
    }

    fn render_table(&mut self, ui: &mut Ui, browser: &CatalogBrowser) -> Option<(String, String)> {
        let mut selected = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for title in [
                    "Make",
                    "Model",
                    "Body",
                    "Fuel",
                    "Transmission",
                    "Engine",
                    "Seats",
                    "CRSP (KES)",
                ] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for vehicle in browser.vehicles() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(vehicle.make.as_deref().unwrap_or("—"));
                        });
                        row.col(|ui| {
                            // Detail navigation needs both halves of the
                            // identity; rows missing either are plain text
                            match (&vehicle.make, &vehicle.model) {
                                (Some(make), Some(model)) => {
                                    if ui.link(model.as_str()).clicked() {
                                        selected = Some((make.clone(), model.clone()));
                                    }
                                }
                                _ => {
                                    ui.label(vehicle.model.as_deref().unwrap_or("—"));
                                }
                            }
                        });
                        row.col(|ui| {
                            ui.label(vehicle.body_type.as_deref().unwrap_or("—"));
                        });
                        row.col(|ui| {
                            ui.label(vehicle.fuel.as_deref().unwrap_or("—"));
                        });
                        row.col(|ui| {
                            ui.label(vehicle.transmission.as_deref().unwrap_or("—"));
                        });
                        row.col(|ui| {
                            ui.label(vehicle.engine_capacity.as_deref().unwrap_or("—"));
                        });
                        row.col(|ui| {
                            ui.label(
                                vehicle
                                    .seating
                                    .map(|s| s.to_string())
                                    .unwrap_or_else(|| "—".to_string()),
                            );
                        });
                        row.col(|ui| {
                            ui.label(format_price(vehicle.crsp));
                        });
                    });
                }
            });

        selected
    }
}

/// Price with thousands separators, or a dash when missing
pub fn format_price(crsp: Option<f64>) -> String {
    let Some(price) = crsp else {
        return "—".to_string();
    };

    let whole = price.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
