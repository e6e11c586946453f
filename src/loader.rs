//! Statistics loader
//!
//! One fetch of the stats document, no retries. The source is a trait so
//! the browser build can use reqwest while tests feed documents directly.

use futures::future::LocalBoxFuture;

use crate::error::{DashboardError, Result};
use crate::metadata;
use crate::store::StatsStore;
use crate::tiles::LOAD_ERROR_MESSAGE;
use crate::types::PortfolioStats;

/// Where the stats document comes from
pub trait StatsSource {
    /// Raw body of the document
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String>>;
}

/// Fetches the document over HTTP (browser fetch on wasm32)
pub struct HttpStatsSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpStatsSource {
    /// `path` is resolved against `base`, normally the page URL
    pub fn new(base: &str, path: &str) -> Result<Self> {
        let base = reqwest::Url::parse(base)
            .map_err(|e| DashboardError::Config(format!("invalid page url '{base}': {e}")))?;
        let url = base
            .join(path)
            .map_err(|e| DashboardError::Config(format!("invalid stats path '{path}': {e}")))?;
        Ok(Self { client: reqwest::Client::new(), url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl StatsSource for HttpStatsSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String>> {
        Box::pin(async move {
            let response = self.client.get(self.url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(DashboardError::Status {
                    status: status.as_u16(),
                    url: self.url.to_string(),
                });
            }
            Ok(response.text().await?)
        })
    }
}

/// Fetch and parse the statistics. One attempt, no retry.
pub async fn fetch_stats<S: StatsSource + ?Sized>(source: &S) -> Result<PortfolioStats> {
    log::info!("Loading dashboard data...");
    let body = source.fetch().await?;
    PortfolioStats::from_json(&body)
}

/// Record the outcome of [`fetch_stats`] in the store.
///
/// Never propagates the load error: it is logged and kept in the store, and
/// the returned `Err` is the message to show in place of the tiles.
pub fn install_stats(
    store: &mut StatsStore,
    fetched: Result<PortfolioStats>,
) -> std::result::Result<(), String> {
    let stats = match fetched {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Error loading data: {e}");
            if let Err(e) = store.fail(e.to_string()) {
                log::warn!("Ignoring late load failure: {e}");
            }
            return Err(LOAD_ERROR_MESSAGE.to_string());
        }
    };

    log::info!("Portfolio stats loaded: {} companies", stats.len());
    for symbol in stats.skipped() {
        log::warn!("No statistics for {symbol}, skipping");
    }
    for symbol in stats.symbols().filter(|s| !metadata::is_tracked(s)) {
        log::debug!("{symbol} has no metadata, showing it under Other");
    }

    if let Err(e) = store.install(stats) {
        log::warn!("Ignoring second load: {e}");
    }
    Ok(())
}
