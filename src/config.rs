//! Configuration management for the dashboard
//!
//! Values come from a key lookup. In the browser that lookup is the
//! `data-*` attributes of `<body>`; every key has a default so a bare page
//! works unchanged.

use crate::error::{DashboardError, Result};

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the statistics document, relative to the page
    pub stats_path: String,

    /// Directory holding the per-symbol trend images
    pub plots_dir: String,

    /// Extension of the per-symbol trend images
    pub image_ext: String,

    /// How long a scrolled-to section stays highlighted
    pub highlight_ms: u32,

    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stats_path: "plots/stats.json".to_string(),
            plots_dir: "plots".to_string(),
            image_ext: "png".to_string(),
            highlight_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a key lookup (`statsPath`, `plotsDir`,
    /// `imageExt`, `highlightMs`, `logLevel`)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            stats_path: lookup("statsPath").unwrap_or(defaults.stats_path),

            plots_dir: lookup("plotsDir")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.plots_dir),

            image_ext: lookup("imageExt")
                .map(|v| v.trim_start_matches('.').to_string())
                .unwrap_or(defaults.image_ext),

            highlight_ms: lookup("highlightMs")
                .map(|v| v.parse().unwrap_or(defaults.highlight_ms))
                .unwrap_or(defaults.highlight_ms),

            log_level: lookup("logLevel")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.stats_path.trim().is_empty() {
            return Err(DashboardError::Config("stats_path must not be empty".into()));
        }
        if self.image_ext.is_empty() {
            return Err(DashboardError::Config("image_ext must not be empty".into()));
        }
        if self.level().is_none() {
            return Err(DashboardError::Config(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Parsed log level, `None` when the configured name is unknown
    pub fn level(&self) -> Option<log::Level> {
        self.log_level.parse().ok()
    }

    /// Trend image for a single symbol, e.g. `plots/BHP.AX_trend.png`
    pub fn trend_image(&self, symbol: &str) -> String {
        if self.plots_dir.is_empty() {
            format!("{symbol}_trend.{}", self.image_ext)
        } else {
            format!("{}/{symbol}_trend.{}", self.plots_dir, self.image_ext)
        }
    }
}
