//! Portfolio summary and sector overview
//!
//! Plain-text reports behind the "Market Performance" and "Sector Overview"
//! feature cards.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::metadata;
use crate::metrics::{self, format_change, format_price};
use crate::types::{Category, PortfolioStats};

/// Shown by both reports until the statistics are loaded
pub const NOT_READY_MESSAGE: &str = "Portfolio data is loading. Please try again in a moment.";

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_companies: usize,
    pub average_price: f64,
    /// Symbol with the highest latest price, and that price
    pub top_performer: (String, f64),
    pub as_of: NaiveDate,
}

impl PortfolioSummary {
    /// `None` for an empty portfolio
    pub fn compute(stats: &PortfolioStats, as_of: NaiveDate) -> Option<Self> {
        let mut top: Option<(&str, f64)> = None;
        let mut total = 0.0;
        for (symbol, stat) in stats.iter() {
            total += stat.latest;
            if top.is_none_or(|(_, best)| stat.latest > best) {
                top = Some((symbol, stat.latest));
            }
        }
        let (symbol, latest) = top?;

        Some(Self {
            total_companies: stats.len(),
            average_price: total / stats.len() as f64,
            top_performer: (symbol.to_string(), latest),
            as_of,
        })
    }

    pub fn report(&self) -> String {
        format!(
            "📊 Portfolio Summary:\n\
             • Total Companies: {}\n\
             • Average Stock Price: {}\n\
             • Top Performer: {} ({})\n\
             • Data Last Updated: {}",
            self.total_companies,
            format_price(self.average_price),
            self.top_performer.0,
            format_price(self.top_performer.1),
            self.as_of.format("%d/%m/%Y"),
        )
    }
}

/// Per-sector aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct SectorLine {
    pub category: Category,
    pub companies: usize,
    /// Mean performance over members with a defined performance
    pub average_performance: Option<f64>,
}

pub fn sector_overview(stats: &PortfolioStats) -> Vec<SectorLine> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<_> = stats
                .iter()
                .filter(|(symbol, _)| metadata::lookup(symbol).category == category)
                .collect();
            if members.is_empty() {
                return None;
            }

            let perfs: Vec<f64> = members
                .iter()
                .filter_map(|(_, stat)| metrics::performance_percent(stat))
                .collect();
            let average_performance =
                (!perfs.is_empty()).then(|| perfs.iter().sum::<f64>() / perfs.len() as f64);

            Some(SectorLine {
                category,
                companies: members.len(),
                average_performance,
            })
        })
        .collect()
}

pub fn sector_report(lines: &[SectorLine]) -> String {
    let mut report = String::from("🏭 Sector Overview:");
    for line in lines {
        let _ = write!(
            report,
            "\n• {}: {} {} (avg {} vs mean)",
            line.category,
            line.companies,
            if line.companies == 1 { "company" } else { "companies" },
            format_change(line.average_performance, 1),
        );
    }
    report
}
