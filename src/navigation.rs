//! Navigation helpers
//!
//! Plot switching, feature-card dispatch and the section highlight timers.

use std::fmt;
use std::str::FromStr;

/// Section holding the three main plots
pub const COMBINED_TRENDS: &str = "combined-trends";
/// Section holding the company tiles
pub const COMPANIES: &str = "companies";

/// The main dashboard plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    StockTrends,
    StockTrendsMa,
    FortnightlyMa,
}

impl PlotKind {
    /// Display and cycling order
    pub const ALL: [PlotKind; 3] = [
        PlotKind::StockTrends,
        PlotKind::StockTrendsMa,
        PlotKind::FortnightlyMa,
    ];

    /// Name used by the plot buttons' `data-plot`
    pub fn key(self) -> &'static str {
        match self {
            PlotKind::StockTrends => "stock-trends",
            PlotKind::StockTrendsMa => "stock-trends-ma",
            PlotKind::FortnightlyMa => "fortnightly-ma",
        }
    }

    /// Id of the `<img>` element
    pub fn element_id(self) -> &'static str {
        match self {
            PlotKind::StockTrends => "stock-trends-plot",
            PlotKind::StockTrendsMa => "stock-trends-ma-plot",
            PlotKind::FortnightlyMa => "fortnightly-ma-plot",
        }
    }

    /// Image file written by the upstream plot generator
    pub fn file_name(self) -> &'static str {
        match self {
            PlotKind::StockTrends => "stock_trends.png",
            PlotKind::StockTrendsMa => "stock_trends_with_ma.png",
            PlotKind::FortnightlyMa => "fortnightly_moving_average.png",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            PlotKind::StockTrends => "Price Trends",
            PlotKind::StockTrendsMa => "Prices + Moving Average",
            PlotKind::FortnightlyMa => "Fortnightly MA",
        }
    }

    /// Title shown when the plot is expanded full screen
    pub fn expand_title(self) -> &'static str {
        match self {
            PlotKind::StockTrends => "Stock Price Trends - Major Australian Companies",
            PlotKind::StockTrendsMa => "Stock Prices with Moving Average Overlay",
            PlotKind::FortnightlyMa => "Fortnightly Moving Average Trends",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PlotKind::StockTrends => PlotKind::StockTrendsMa,
            PlotKind::StockTrendsMa => PlotKind::FortnightlyMa,
            PlotKind::FortnightlyMa => PlotKind::StockTrends,
        }
    }
}

impl FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlotKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| format!("unknown plot type '{s}'"))
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Exactly one main plot (and its button) is active at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSwitcher {
    active: PlotKind,
}

impl Default for PlotSwitcher {
    fn default() -> Self {
        Self { active: PlotKind::StockTrends }
    }
}

impl PlotSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> PlotKind {
        self.active
    }

    pub fn show(&mut self, kind: PlotKind) {
        self.active = kind;
    }

    /// Switch by `data-plot` name; unknown names leave everything as is
    pub fn show_named(&mut self, name: &str) -> Option<PlotKind> {
        match name.parse() {
            Ok(kind) => {
                self.show(kind);
                Some(kind)
            }
            Err(e) => {
                log::debug!("Ignoring plot switch: {e}");
                None
            }
        }
    }

    /// Advance to the next plot, wrapping around
    pub fn cycle(&mut self) -> PlotKind {
        self.active = self.active.next();
        self.active
    }

    /// Every plot with its active flag, for applying classes
    pub fn states(&self) -> impl Iterator<Item = (PlotKind, bool)> + '_ {
        PlotKind::ALL.into_iter().map(|kind| (kind, kind == self.active))
    }
}

/// Actions carried by the feature cards' `data-action`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureAction {
    Trends,
    Performance,
    Companies,
    Sectors,
}

impl FeatureAction {
    pub fn key(self) -> &'static str {
        match self {
            FeatureAction::Trends => "trends",
            FeatureAction::Performance => "performance",
            FeatureAction::Companies => "companies",
            FeatureAction::Sectors => "sectors",
        }
    }
}

impl FromStr for FeatureAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trends" => Ok(FeatureAction::Trends),
            "performance" => Ok(FeatureAction::Performance),
            "companies" => Ok(FeatureAction::Companies),
            "sectors" => Ok(FeatureAction::Sectors),
            other => Err(format!("Unknown feature card action: {other}")),
        }
    }
}

/// Pending highlight timers, one per section.
///
/// `T` is the timer handle; dropping it must cancel the timer. Starting a
/// new highlight on a section displaces (and so cancels) the old timer, so
/// a stale timer can never clear a newer highlight.
#[derive(Debug)]
pub struct HighlightTracker<T> {
    pending: Vec<(String, T)>,
}

impl<T> Default for HighlightTracker<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T> HighlightTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `timer` for `section`, returning the timer it replaces
    pub fn begin(&mut self, section: &str, timer: T) -> Option<T> {
        match self.pending.iter_mut().find(|(s, _)| *s == section) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, timer)),
            None => {
                self.pending.push((section.to_string(), timer));
                None
            }
        }
    }

    /// The timer for `section` fired; forget it
    pub fn finish(&mut self, section: &str) -> Option<T> {
        let index = self.pending.iter().position(|(s, _)| *s == section)?;
        Some(self.pending.remove(index).1)
    }

    #[cfg(test)]
    pub fn is_highlighted(&self, section: &str) -> bool {
        self.pending.iter().any(|(s, _)| *s == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_switching_plots_leaves_one_active() {
        let mut plots = PlotSwitcher::new();
        assert_eq!(plots.show_named("stock-trends"), Some(PlotKind::StockTrends));
        assert_eq!(plots.show_named("fortnightly-ma"), Some(PlotKind::FortnightlyMa));

        let active: Vec<_> = plots.states().filter(|(_, on)| *on).map(|(k, _)| k).collect();
        assert_eq!(active, [PlotKind::FortnightlyMa]);
        assert_eq!(active[0].element_id(), "fortnightly-ma-plot");
    }

    #[test]
    fn test_unknown_plot_is_noop() {
        let mut plots = PlotSwitcher::new();
        plots.show(PlotKind::StockTrendsMa);
        assert_eq!(plots.show_named("candles"), None);
        assert_eq!(plots.active(), PlotKind::StockTrendsMa);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut plots = PlotSwitcher::new();
        assert_eq!(plots.cycle(), PlotKind::StockTrendsMa);
        assert_eq!(plots.cycle(), PlotKind::FortnightlyMa);
        assert_eq!(plots.cycle(), PlotKind::StockTrends);
    }

    #[test]
    fn test_feature_actions() {
        assert_eq!("sectors".parse::<FeatureAction>(), Ok(FeatureAction::Sectors));
        for action in [
            FeatureAction::Trends,
            FeatureAction::Performance,
            FeatureAction::Companies,
            FeatureAction::Sectors,
        ] {
            assert_eq!(action.key().parse::<FeatureAction>(), Ok(action));
        }
        assert!("portfolio".parse::<FeatureAction>().is_err());
    }

    /// Timer handle that records whether it was cancelled
    struct FakeTimer(Rc<Cell<bool>>);

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_rehighlight_cancels_previous_timer() {
        let first_cancelled = Rc::new(Cell::new(false));
        let second_cancelled = Rc::new(Cell::new(false));
        let mut tracker = HighlightTracker::new();

        assert!(tracker.begin(COMPANIES, FakeTimer(Rc::clone(&first_cancelled))).is_none());
        drop(tracker.begin(COMPANIES, FakeTimer(Rc::clone(&second_cancelled))));

        assert!(first_cancelled.get());
        assert!(!second_cancelled.get());
        assert!(tracker.is_highlighted(COMPANIES));

        assert!(tracker.finish(COMPANIES).is_some());
        assert!(!tracker.is_highlighted(COMPANIES));
        assert!(tracker.finish(COMPANIES).is_none());
    }

    #[test]
    fn test_sections_are_independent() {
        let mut tracker = HighlightTracker::new();
        tracker.begin(COMPANIES, 1);
        tracker.begin(COMBINED_TRENDS, 2);
        assert_eq!(tracker.finish(COMBINED_TRENDS), Some(2));
        assert!(tracker.is_highlighted(COMPANIES));
    }
}
