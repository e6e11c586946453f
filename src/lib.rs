//! ASX Dashboard - client side of the Australian stock portfolio dashboard
//!
//! Compiled to WebAssembly and loaded by the dashboard page.
//!
//! # Architecture
//! - Loader fetches `plots/stats.json` once and installs it into the store
//! - Tiles, modal and overlays are built as plain [`view::Node`] trees
//! - [`app::Dashboard`] turns clicks into effects; the `web` module applies
//!   them to the DOM (wasm32 only)
//!
//! # Features
//! - One tile per company with price, trend vs average, range and volatility
//! - Company detail modal with an expandable trend plot
//! - Switchable combined trend plots and smooth section navigation
//! - Portfolio summary and sector overview reports

// Clippy configuration for display code patterns
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::map_unwrap_or)] // Explicit fallback preference

pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod metrics;
pub mod modal;
pub mod navigation;
pub mod overlay;
pub mod store;
pub mod summary;
pub mod tiles;
pub mod types;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::{Dashboard, Effect};
pub use config::Config;
pub use error::{DashboardError, Result};
pub use store::StatsStore;
pub use types::*;
pub use view::{Action, Node};
