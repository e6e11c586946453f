//! Derived display metrics and number formatting
//!
//! Nothing here is stored: performance and volatility are recomputed from a
//! `StockStat` wherever they are shown.

use rust_decimal::prelude::*;

use crate::types::StockStat;

/// Shown instead of a percentage when the mean is zero
pub const NOT_AVAILABLE: &str = "N/A";

/// Direction of latest price relative to the mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Strictly above the mean
    Positive,
    /// At or below the mean
    Negative,
    /// Performance is undefined (zero mean)
    Undefined,
}

impl Trend {
    pub fn from_performance(performance: Option<f64>) -> Self {
        match performance {
            Some(p) if p > 0.0 => Trend::Positive,
            Some(_) => Trend::Negative,
            None => Trend::Undefined,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
            Trend::Undefined => "neutral",
        }
    }
}

/// `(latest - mean) / mean * 100`, `None` when the mean is zero
pub fn performance_percent(stat: &StockStat) -> Option<f64> {
    finite((stat.latest - stat.mean) / stat.mean * 100.0)
}

/// `sd / mean * 100`, `None` when the mean is zero
pub fn volatility_percent(stat: &StockStat) -> Option<f64> {
    finite(stat.sd / stat.mean * 100.0)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Fixed-point text with ties rounded away from zero (`1.125` -> `1.13`).
///
/// Rounds the exact binary value, so `1.115` (stored just below the tie)
/// still gives `1.11`.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}

/// `$45.50`
pub fn format_price(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}

/// `$35.00 - $50.00`
pub fn format_range(min: f64, max: f64) -> String {
    format!("{} - {}", format_price(min), format_price(max))
}

/// Signed percentage: `+` only when strictly positive, `N/A` when undefined
pub fn format_change(percent: Option<f64>, decimals: u32) -> String {
    match percent {
        Some(p) if p > 0.0 => format!("+{}%", format_fixed(p, decimals)),
        Some(p) => format!("{}%", format_fixed(p, decimals)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Unsigned percentage, `N/A` when undefined
pub fn format_percent(percent: Option<f64>, decimals: u32) -> String {
    percent.map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("{}%", format_fixed(p, decimals)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(latest: f64, mean: f64) -> StockStat {
        StockStat { latest, mean, min: 0.0, max: 0.0, sd: 2.0 }
    }

    #[test]
    fn test_performance() {
        let p = performance_percent(&stat(45.5, 40.0)).unwrap();
        assert!((p - 13.75).abs() < 1e-9);
        assert_eq!(format_change(Some(p), 1), "+13.8%");
        assert_eq!(Trend::from_performance(Some(p)), Trend::Positive);
    }

    #[test]
    fn test_equal_latest_and_mean_is_negative() {
        let p = performance_percent(&stat(40.0, 40.0));
        assert_eq!(p, Some(0.0));
        assert_eq!(Trend::from_performance(p), Trend::Negative);
        assert_eq!(format_change(p, 1), "0.0%");
    }

    #[test]
    fn test_below_mean() {
        let p = performance_percent(&stat(36.0, 40.0));
        assert_eq!(format_change(p, 1), "-10.0%");
        assert_eq!(format_change(p, 2), "-10.00%");
        assert_eq!(Trend::from_performance(p).css_class(), "negative");
    }

    #[test]
    fn test_zero_mean_is_not_available() {
        let s = stat(1.0, 0.0);
        assert_eq!(performance_percent(&s), None);
        assert_eq!(volatility_percent(&s), None);
        assert_eq!(format_change(None, 1), "N/A");
        assert_eq!(format_percent(None, 1), "N/A");
        assert_eq!(Trend::from_performance(None).css_class(), "neutral");
    }

    #[test]
    fn test_volatility() {
        let v = volatility_percent(&stat(10.0, 40.0));
        assert_eq!(format_percent(v, 1), "5.0%");
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(45.5), "$45.50");
        assert_eq!(format_price(3.2), "$3.20");
        assert_eq!(format_range(35.0, 50.0), "$35.00 - $50.00");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_price(10.125), "$10.13");
        assert_eq!(format_price(3.125), "$3.13");
        assert_eq!(format_price(1.125), "$1.13");
        assert_eq!(format_range(10.125, 50.0), "$10.13 - $50.00");
        assert_eq!(format_change(Some(6.25), 1), "+6.3%");
        assert_eq!(format_change(Some(-6.25), 1), "-6.3%");
        assert_eq!(format_percent(Some(0.25), 1), "0.3%");
    }

    #[test]
    fn test_values_just_below_a_tie_round_down() {
        // 1.115 and 1.005 are stored slightly below the decimal tie
        assert_eq!(format_price(1.115), "$1.11");
        assert_eq!(format_price(1.005), "$1.00");
        assert_eq!(format_fixed(2.675, 2), "2.67");
    }
}
