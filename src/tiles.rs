//! Company tiles
//!
//! One summary tile per symbol, in the order the statistics document lists
//! them. Rendering is a pure function of the loaded statistics.

use crate::metadata;
use crate::metrics::{self, Trend};
use crate::types::{Category, PortfolioStats, StockStat};
use crate::view::{Action, Node};

/// Message shown in place of the tiles when loading fails
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data";

/// Everything a tile displays, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub symbol: String,
    pub name: String,
    pub category: Category,
    pub latest: String,
    pub performance: String,
    pub trend: Trend,
    pub range: String,
    pub volatility: String,
}

impl TileView {
    pub fn new(symbol: &str, stat: &StockStat) -> Self {
        let meta = metadata::lookup(symbol);
        let performance = metrics::performance_percent(stat);

        Self {
            symbol: symbol.to_string(),
            name: meta.name,
            category: meta.category,
            latest: metrics::format_price(stat.latest),
            performance: metrics::format_change(performance, 1),
            trend: Trend::from_performance(performance),
            range: metrics::format_range(stat.min, stat.max),
            volatility: metrics::format_price(stat.sd),
        }
    }

    pub fn render(&self) -> Node {
        let category = self.category.css_class();

        Node::el("div")
            .class("company-tile")
            .class(category)
            .attr("data-symbol", self.symbol.clone())
            .on_click(Action::OpenModal(self.symbol.clone()))
            .child(
                Node::el("div")
                    .class("category-badge")
                    .class(category)
                    .text(self.category.name()),
            )
            .child(
                Node::el("div")
                    .class("tile-header")
                    .child(Node::el("h3").class("company-name").text(self.name.clone()))
                    .child(Node::el("span").class("company-symbol").text(self.symbol.clone())),
            )
            .child(
                Node::el("div")
                    .class("tile-stats")
                    .child(stat_row("Latest Price", &self.latest, None))
                    .child(stat_row(
                        "vs Average",
                        &self.performance,
                        Some(self.trend.css_class()),
                    ))
                    .child(stat_row("Range", &self.range, None))
                    .child(stat_row("Volatility", &self.volatility, None)),
            )
            .into()
    }
}

fn stat_row(label: &str, value: &str, trend_class: Option<&str>) -> Node {
    let mut value_el = Node::el("span").class("tile-stat-value");
    if let Some(class) = trend_class {
        value_el = value_el.class("price-change").class(class);
    }

    Node::el("div")
        .class("tile-stat")
        .child(Node::el("span").class("tile-stat-label").text(label))
        .child(value_el.text(value))
        .into()
}

/// View-models for every symbol, in document order
pub fn tile_views(stats: &PortfolioStats) -> Vec<TileView> {
    stats.iter().map(|(symbol, stat)| TileView::new(symbol, stat)).collect()
}

/// Children of the `company-tiles` container
pub fn render_tiles(stats: &PortfolioStats) -> Vec<Node> {
    tile_views(stats).iter().map(TileView::render).collect()
}

/// Placeholder while the statistics are loading
pub fn render_loading() -> Node {
    Node::el("div").class("loading").text("Loading company data...").into()
}

/// Inline message replacing the tiles
pub fn render_error(message: &str) -> Node {
    Node::el("div").class("loading").text(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bhp() -> StockStat {
        StockStat { latest: 45.5, mean: 40.0, min: 35.0, max: 50.0, sd: 3.2 }
    }

    fn value_texts(node: &Node) -> Vec<String> {
        let stats = node.find_class("tile-stats").unwrap();
        stats
            .children
            .iter()
            .map(|row| row.as_element().unwrap().children[1].text_content())
            .collect()
    }

    #[test]
    fn test_bhp_tile() {
        let view = TileView::new("BHP.AX", &bhp());
        assert_eq!(view.name, "BHP Group");
        assert_eq!(view.category, Category::Mining);
        assert_eq!(view.latest, "$45.50");
        assert_eq!(view.performance, "+13.8%");
        assert_eq!(view.range, "$35.00 - $50.00");
        assert_eq!(view.volatility, "$3.20");

        let node = view.render();
        let tile = node.as_element().unwrap();
        assert!(tile.has_class("company-tile") && tile.has_class("mining"));
        assert_eq!(tile.on_click, Some(Action::OpenModal("BHP.AX".into())));
        assert_eq!(node.find_class("category-badge").unwrap().children[0], Node::text("Mining"));
        assert_eq!(node.find_class("company-name").unwrap().children[0], Node::text("BHP Group"));
        assert_eq!(value_texts(&node), ["$45.50", "+13.8%", "$35.00 - $50.00", "$3.20"]);
        assert!(node.find_class("price-change").unwrap().has_class("positive"));
    }

    #[test]
    fn test_flat_performance_uses_negative_styling() {
        let stat = StockStat { latest: 40.0, mean: 40.0, ..bhp() };
        let node = TileView::new("BHP.AX", &stat).render();
        let change = node.find_class("price-change").unwrap();
        assert!(change.has_class("negative"));
        assert_eq!(change.children[0], Node::text("0.0%"));
    }

    #[test]
    fn test_half_cent_values_round_up() {
        let stat = StockStat { latest: 42.5, mean: 40.0, min: 10.125, max: 50.0, sd: 3.125 };
        let view = TileView::new("RIO.AX", &stat);
        assert_eq!(view.performance, "+6.3%");
        assert_eq!(view.range, "$10.13 - $50.00");
        assert_eq!(view.volatility, "$3.13");
    }

    #[test]
    fn test_unknown_symbol_tile() {
        let node = TileView::new("ZZZ.AX", &bhp()).render();
        assert!(node.as_element().unwrap().has_class("other"));
        assert_eq!(node.find_class("category-badge").unwrap().children[0], Node::text("Other"));
        assert_eq!(node.find_class("company-name").unwrap().children[0], Node::text("ZZZ.AX"));
    }

    #[test]
    fn test_zero_mean_tile() {
        let stat = StockStat { latest: 1.0, mean: 0.0, min: 0.0, max: 2.0, sd: 0.5 };
        let view = TileView::new("AGL.AX", &stat);
        assert_eq!(view.performance, "N/A");
        assert_eq!(view.trend, Trend::Undefined);
    }

    #[test]
    fn test_one_tile_per_symbol_in_order() {
        let stats = PortfolioStats::from_entries([
            ("RIO.AX", bhp()),
            ("ANZ.AX", StockStat { latest: 27.0, mean: 28.0, min: 25.0, max: 30.0, sd: 1.0 }),
            ("XYZ.AX", bhp()),
        ]);
        let tiles = render_tiles(&stats);
        let symbols: Vec<_> = tiles
            .iter()
            .map(|t| t.as_element().unwrap().get_attr("data-symbol").unwrap().to_string())
            .collect();
        assert_eq!(symbols, ["RIO.AX", "ANZ.AX", "XYZ.AX"]);
        assert_eq!(render_tiles(&stats), tiles);
    }

    #[test]
    fn test_empty_stats_render_nothing() {
        assert!(render_tiles(&PortfolioStats::default()).is_empty());
    }

    #[test]
    fn test_error_message() {
        let node = render_error(LOAD_ERROR_MESSAGE);
        assert_eq!(node.to_html(), r#"<div class="loading">Failed to load dashboard data</div>"#);
    }
}
