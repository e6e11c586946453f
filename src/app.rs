//! Dashboard controller
//!
//! Owns every piece of page state and turns user [`Action`]s into
//! [`Effect`]s. The web layer only applies effects to the DOM, so the whole
//! interaction flow is testable without a browser.

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::modal::{ModalController, ModalView};
use crate::navigation::{self, FeatureAction, PlotKind, PlotSwitcher};
use crate::overlay::{Dismissal, OverlayId};
use crate::store::StatsStore;
use crate::summary::{self, PortfolioSummary};
use crate::tiles;
use crate::types::PortfolioStats;
use crate::view::{Action, Node};

/// A change for the web layer to apply
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the children of the tile container
    RenderTiles(Vec<Node>),
    /// Make the main plot images expandable
    WireMainPlots,
    ShowModal(ModalView),
    HideModal,
    ExpandImage { src: String, title: String },
    DismissOverlay { id: OverlayId, via: Dismissal },
    ActivatePlot(PlotKind),
    ScrollTo(String),
    Alert(String),
}

pub struct Dashboard {
    config: Config,
    store: StatsStore,
    modal: ModalController,
    plots: PlotSwitcher,
}

impl Dashboard {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: StatsStore::new(),
            modal: ModalController::new(),
            plots: PlotSwitcher::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &StatsStore {
        &self.store
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn plots(&self) -> &PlotSwitcher {
        &self.plots
    }

    /// Apply the outcome of the one stats fetch
    pub fn on_loaded(&mut self, fetched: Result<PortfolioStats>) -> Vec<Effect> {
        match loader::install_stats(&mut self.store, fetched) {
            Ok(()) => {
                let tiles = self.store.ready().map(tiles::render_tiles).unwrap_or_default();
                log::info!("Dashboard rendering complete ({} tiles)", tiles.len());
                vec![Effect::RenderTiles(tiles), Effect::WireMainPlots]
            }
            Err(message) => vec![Effect::RenderTiles(vec![tiles::render_error(&message)])],
        }
    }

    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        self.handle_at(action, chrono::Local::now().date_naive())
    }

    /// `today` dates the portfolio summary
    pub fn handle_at(&mut self, action: Action, today: NaiveDate) -> Vec<Effect> {
        match action {
            Action::OpenModal(symbol) => self.open_modal(&symbol),
            Action::CloseModal => self.close_modal(),
            Action::ExpandImage { src, title } => vec![Effect::ExpandImage { src, title }],
            Action::DismissOverlay { id, via } => vec![Effect::DismissOverlay { id, via }],
            Action::TogglePlotMode => {
                let kind = self.plots.cycle();
                vec![
                    Effect::ActivatePlot(kind),
                    Effect::ScrollTo(navigation::COMBINED_TRENDS.to_string()),
                ]
            }
            Action::ScrollTo(section) => vec![Effect::ScrollTo(section)],
            Action::Feature(feature) => self.feature(feature, today),
        }
    }

    /// Dispatch a feature card by its `data-action`
    pub fn feature_named(&mut self, name: &str) -> Vec<Effect> {
        match name.parse::<FeatureAction>() {
            Ok(feature) => {
                log::info!("Feature card clicked: {}", feature.key());
                self.handle(Action::Feature(feature))
            }
            Err(e) => {
                log::info!("{e}");
                Vec::new()
            }
        }
    }

    /// Switch plots by `data-plot`; unknown names do nothing
    pub fn show_plot_named(&mut self, name: &str) -> Vec<Effect> {
        self.plots
            .show_named(name)
            .map(|kind| vec![Effect::ActivatePlot(kind)])
            .unwrap_or_default()
    }

    /// Global Escape: hides the modal (overlays handle their own)
    pub fn on_escape(&mut self) -> Vec<Effect> {
        self.close_modal()
    }

    fn open_modal(&mut self, symbol: &str) -> Vec<Effect> {
        match self.modal.open(&self.store, &self.config, symbol) {
            Some(view) => vec![Effect::ShowModal(view.clone())],
            None => {
                log::debug!("No statistics for {symbol}, modal stays closed");
                Vec::new()
            }
        }
    }

    fn close_modal(&mut self) -> Vec<Effect> {
        self.modal.close();
        vec![Effect::HideModal]
    }

    fn feature(&mut self, feature: FeatureAction, today: NaiveDate) -> Vec<Effect> {
        match feature {
            FeatureAction::Trends => {
                vec![Effect::ScrollTo(navigation::COMBINED_TRENDS.to_string())]
            }
            FeatureAction::Companies => vec![Effect::ScrollTo(navigation::COMPANIES.to_string())],
            FeatureAction::Performance => {
                let report = self
                    .store
                    .ready()
                    .and_then(|stats| PortfolioSummary::compute(stats, today))
                    .map_or_else(|| summary::NOT_READY_MESSAGE.to_string(), |s| s.report());
                vec![Effect::Alert(report)]
            }
            FeatureAction::Sectors => {
                let report = self.store.ready().map_or_else(
                    || summary::NOT_READY_MESSAGE.to_string(),
                    |stats| summary::sector_report(&summary::sector_overview(stats)),
                );
                vec![Effect::Alert(report)]
            }
        }
    }
}

/// Main plot images and the action a click on each triggers
pub fn main_plot_actions(current_src: impl Fn(PlotKind) -> String) -> Vec<(PlotKind, Action)> {
    PlotKind::ALL
        .into_iter()
        .map(|kind| {
            let action = Action::ExpandImage {
                src: current_src(kind),
                title: kind.expand_title().to_string(),
            };
            (kind, action)
        })
        .collect()
}
