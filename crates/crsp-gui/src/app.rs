//! Main application structure with tab navigation and startup load

use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crsp_app::{spawn_load, Catalog, CatalogBrowser, LoadState};
use crsp_types::Result;

use crate::browse_panel::BrowsePanel;
use crate::detail_panel::{self, DetailAction};
use crate::motorcycle_panel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Vehicles,
    Motorcycles,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Vehicles => "Vehicles",
            Tab::Motorcycles => "Motorcycles",
        }
    }
}

/// Main application state
pub struct CrspApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Startup load progress
    load_state: LoadState,
    /// Receiver for the one-shot background load
    load_rx: Option<Receiver<Result<Catalog>>>,
    /// Browser over the loaded catalog; present once the load succeeds
    browser: Option<CatalogBrowser>,
    /// Browse panel state
    browse_panel: BrowsePanel,
    /// Make/model pair currently shown in the detail view
    detail: Option<(String, String)>,
}

impl CrspApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Slightly quicker feedback for the combo-box heavy UI
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        Self {
            current_tab: Tab::default(),
            load_state: LoadState::Loading,
            load_rx: Some(spawn_load()),
            browser: None,
            browse_panel: BrowsePanel::new(),
            detail: None,
        }
    }

    /// Poll the load channel until its single message arrives
    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Disconnected) => None,
            Err(TryRecvError::Empty) => return,
        };

        let (state, catalog) = LoadState::from_result(result);
        if let Some(catalog) = catalog {
            log::info!(
                "catalog ready: {} vehicles, {} motorcycles",
                catalog.vehicle_count(),
                catalog.motorcycle_count()
            );
            self.browser = Some(CatalogBrowser::new(catalog));
        }
        self.load_state = state;
        self.load_rx = None;
    }
}

impl eframe::App for CrspApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("CRSP Catalog");
                ui.separator();
                for tab in [Tab::Vehicles, Tab::Motorcycles] {
                    if ui
                        .selectable_label(self.current_tab == tab, tab.label())
                        .clicked()
                    {
                        self.current_tab = tab;
                        self.detail = None;
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.load_state {
                LoadState::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading catalog…");
                        });
                    });
                    // Keep polling while the worker runs
                    ctx.request_repaint();
                    return;
                }
                LoadState::Failed(message) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Catalog failed to load: {message}"))
                                .color(egui::Color32::LIGHT_RED),
                        );
                    });
                    return;
                }
                LoadState::Ready => {}
            }

            let Some(browser) = &mut self.browser else {
                return;
            };

            match self.current_tab {
                Tab::Vehicles => {
                    if let Some((make, model)) = self.detail.clone() {
                        match detail_panel::ui(ui, browser, &make, &model) {
                            DetailAction::Stay => {}
                            DetailAction::Back => self.detail = None,
                        }
                    } else if let Some(selected) = self.browse_panel.ui(ui, browser) {
                        self.detail = Some(selected);
                    }
                }
                Tab::Motorcycles => motorcycle_panel::ui(ui, browser),
            }
        });
    }
}
