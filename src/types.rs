//! Common types for the dashboard
//!
//! All shared data structures used across modules.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Company sector, used for the tile badge and sector overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Energy,
    Finance,
    Mining,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Energy,
        Category::Finance,
        Category::Mining,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Finance => "Finance",
            Category::Mining => "Mining",
            Category::Other => "Other",
        }
    }

    /// Lowercase CSS class for badges and tiles
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Finance => "finance",
            Category::Mining => "mining",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display metadata for a ticker
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyMeta {
    pub symbol: String,
    pub name: String,
    pub category: Category,
}

/// Precomputed price statistics for one symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockStat {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Standard deviation of the closing price
    pub sd: f64,
}

/// Same shape as `StockStat` but tolerant of the upstream `null`s
#[derive(Deserialize)]
struct RawStat {
    latest: Option<f64>,
    mean: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    sd: Option<f64>,
}

impl RawStat {
    fn complete(self) -> Option<StockStat> {
        Some(StockStat {
            latest: self.latest?,
            mean: self.mean?,
            min: self.min?,
            max: self.max?,
            sd: self.sd?,
        })
    }
}

/// Statistics for every tracked symbol, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioStats {
    entries: Vec<(String, StockStat)>,
    /// Symbols dropped at load because a field was null
    skipped: Vec<String>,
}

impl PortfolioStats {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, StockStat)>,
        S: Into<String>,
    {
        let mut stats = Self::default();
        for (symbol, stat) in entries {
            stats.insert(symbol.into(), stat);
        }
        stats
    }

    /// Parse the upstream stats document
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Later duplicates replace the earlier value but keep its position
    fn insert(&mut self, symbol: String, stat: StockStat) {
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = stat,
            None => self.entries.push((symbol, stat)),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&StockStat> {
        self.entries.iter().find(|(s, _)| s == symbol).map(|(_, stat)| stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StockStat)> {
        self.entries.iter().map(|(s, stat)| (s.as_str(), stat))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

impl<'de> Deserialize<'de> for PortfolioStats {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatsVisitor;

        impl<'de> Visitor<'de> for StatsVisitor {
            type Value = PortfolioStats;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping ticker symbols to statistics")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut stats = PortfolioStats::default();
                while let Some((symbol, raw)) = map.next_entry::<String, RawStat>()? {
                    match raw.complete() {
                        Some(stat) => stats.insert(symbol, stat),
                        None => stats.skipped.push(symbol),
                    }
                }
                Ok(stats)
            }
        }

        deserializer.deserialize_map(StatsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order_is_preserved() {
        let stats = PortfolioStats::from_json(
            r#"{
                "WBC.AX": {"latest": 30.1, "mean": 29.0, "min": 25.0, "max": 33.0, "sd": 1.1},
                "AGL.AX": {"latest": 10.0, "mean": 11.0, "min": 9.0, "max": 12.5, "sd": 0.7},
                "CBA.AX": {"latest": 120.0, "mean": 110.0, "min": 95.0, "max": 125.0, "sd": 6.4}
            }"#,
        )
        .unwrap();

        let order: Vec<_> = stats.symbols().collect();
        assert_eq!(order, ["WBC.AX", "AGL.AX", "CBA.AX"]);
        assert_eq!(stats.get("AGL.AX").unwrap().max, 12.5);
        assert!(stats.get("BHP.AX").is_none());
    }

    #[test]
    fn test_null_entries_are_skipped() {
        let stats = PortfolioStats::from_json(
            r#"{
                "ORG.AX": {"latest": null, "mean": null, "min": null, "max": null, "sd": null},
                "RIO.AX": {"latest": 118.2, "mean": 120.0, "min": 110.0, "max": 130.0, "sd": 4.0}
            }"#,
        )
        .unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats.skipped(), ["ORG.AX".to_string()]);
        assert!(stats.get("ORG.AX").is_none());
    }

    #[test]
    fn test_rejects_non_object_documents() {
        assert!(PortfolioStats::from_json("[1, 2, 3]").is_err());
        assert!(PortfolioStats::from_json(r#"{"BHP.AX": {"latest": "high"}}"#).is_err());
        assert!(PortfolioStats::from_json("<html>").is_err());
    }

    #[test]
    fn test_empty_document() {
        let stats = PortfolioStats::from_json("{}").unwrap();
        assert!(stats.is_empty());
    }
}
