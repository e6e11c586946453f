//! Company detail modal
//!
//! A singleton view that is either hidden or showing one company. Nothing
//! but the visibility survives a close: every open repopulates all fields.

use crate::config::Config;
use crate::metadata;
use crate::metrics::{self, Trend};
use crate::store::StatsStore;
use crate::types::StockStat;
use crate::view::Action;

/// Element ids the modal writes into
pub mod ids {
    pub const MODAL: &str = "company-modal";
    pub const CLOSE: &str = "modal-close";
    pub const TITLE: &str = "modal-company-name";
    pub const PLOT: &str = "modal-plot";
    pub const LATEST: &str = "modal-latest";
    pub const MEAN: &str = "modal-mean";
    pub const MIN: &str = "modal-min";
    pub const MAX: &str = "modal-max";
    pub const SD: &str = "modal-sd";
    pub const PERFORMANCE: &str = "modal-performance";
}

/// Populated modal contents
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    /// Title used when the detail chart is expanded full screen
    pub expand_title: String,
    pub latest: String,
    pub mean: String,
    pub min: String,
    pub max: String,
    pub sd: String,
    pub performance: String,
    pub trend: Trend,
}

impl ModalView {
    pub fn new(config: &Config, symbol: &str, stat: &StockStat) -> Self {
        let meta = metadata::lookup(symbol);
        let performance = metrics::performance_percent(stat);
        let volatility = metrics::volatility_percent(stat);
        let title = format!("{} ({symbol})", meta.name);

        Self {
            expand_title: format!("{title} - Detailed Chart"),
            title,
            image_src: config.trend_image(symbol),
            image_alt: format!("{symbol} Stock Trend"),
            latest: metrics::format_price(stat.latest),
            mean: metrics::format_price(stat.mean),
            min: metrics::format_price(stat.min),
            max: metrics::format_price(stat.max),
            sd: format!(
                "{} ({})",
                metrics::format_price(stat.sd),
                metrics::format_percent(volatility, 1)
            ),
            performance: metrics::format_change(performance, 2),
            trend: Trend::from_performance(performance),
        }
    }

    /// (element id, text) pairs for the plain text fields
    pub fn text_fields(&self) -> [(&'static str, &str); 6] {
        [
            (ids::TITLE, &self.title),
            (ids::LATEST, &self.latest),
            (ids::MEAN, &self.mean),
            (ids::MIN, &self.min),
            (ids::MAX, &self.max),
            (ids::SD, &self.sd),
        ]
    }

    /// Full class attribute for the performance field
    pub fn performance_class(&self) -> String {
        format!("stat-value {}", self.trend.css_class())
    }

    pub fn expand_action(&self) -> Action {
        Action::ExpandImage {
            src: self.image_src.clone(),
            title: self.expand_title.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible(ModalView),
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `symbol`. Returns the populated view, or `None` (and leaves the
    /// modal untouched) when the statistics are not loaded or lack the symbol.
    pub fn open(&mut self, store: &StatsStore, config: &Config, symbol: &str) -> Option<&ModalView> {
        let stat = store.ready()?.get(symbol)?;
        self.state = ModalState::Visible(ModalView::new(config, symbol, stat));
        self.view()
    }

    pub fn close(&mut self) {
        self.state = ModalState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, ModalState::Visible(_))
    }

    pub fn view(&self) -> Option<&ModalView> {
        match &self.state {
            ModalState::Visible(view) => Some(view),
            ModalState::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortfolioStats;

    fn loaded_store() -> StatsStore {
        let mut store = StatsStore::new();
        store
            .install(PortfolioStats::from_entries([
                ("BHP.AX", StockStat { latest: 45.5, mean: 40.0, min: 35.0, max: 50.0, sd: 3.2 }),
                ("WBC.AX", StockStat { latest: 28.0, mean: 30.0, min: 26.0, max: 33.0, sd: 1.5 }),
            ]))
            .unwrap();
        store
    }

    #[test]
    fn test_open_populates_every_field() {
        let store = loaded_store();
        let mut modal = ModalController::new();
        let view = modal.open(&store, &Config::default(), "BHP.AX").unwrap().clone();

        assert!(modal.is_visible());
        assert_eq!(view.title, "BHP Group (BHP.AX)");
        assert_eq!(view.image_src, "plots/BHP.AX_trend.png");
        assert_eq!(view.image_alt, "BHP.AX Stock Trend");
        assert_eq!(view.latest, "$45.50");
        assert_eq!(view.mean, "$40.00");
        assert_eq!(view.min, "$35.00");
        assert_eq!(view.max, "$50.00");
        assert_eq!(view.sd, "$3.20 (8.0%)");
        assert_eq!(view.performance, "+13.75%");
        assert_eq!(view.performance_class(), "stat-value positive");
        assert_eq!(
            view.expand_action(),
            Action::ExpandImage {
                src: "plots/BHP.AX_trend.png".into(),
                title: "BHP Group (BHP.AX) - Detailed Chart".into(),
            }
        );
    }

    #[test]
    fn test_missing_symbol_is_silent_noop() {
        let store = loaded_store();
        let mut modal = ModalController::new();
        assert!(modal.open(&store, &Config::default(), "FMG.AX").is_none());
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_missing_symbol_keeps_current_view() {
        let store = loaded_store();
        let config = Config::default();
        let mut modal = ModalController::new();
        modal.open(&store, &config, "WBC.AX");
        modal.open(&store, &config, "FMG.AX");
        assert_eq!(modal.view().unwrap().title, "Westpac Banking Corp (WBC.AX)");
        assert_eq!(modal.view().unwrap().performance_class(), "stat-value negative");
    }

    #[test]
    fn test_open_before_load_is_noop() {
        let mut modal = ModalController::new();
        assert!(modal.open(&StatsStore::new(), &Config::default(), "BHP.AX").is_none());
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_close_is_idempotent() {
        let store = loaded_store();
        let mut modal = ModalController::new();
        modal.open(&store, &Config::default(), "BHP.AX");
        modal.close();
        modal.close();
        assert!(!modal.is_visible());
        assert!(modal.view().is_none());
    }
}
