//! Statistics store with an explicit readiness state
//!
//! The store is created `Pending`, receives the loaded statistics exactly
//! once, and is read-only afterwards. Readers go through [`StatsStore::ready`]
//! so nothing observes a half-initialised dashboard.

use crate::error::{DashboardError, Result};
use crate::types::PortfolioStats;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(PortfolioStats),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct StatsStore {
    state: LoadState,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded statistics. Only the first call succeeds.
    pub fn install(&mut self, stats: PortfolioStats) -> Result<()> {
        match self.state {
            LoadState::Pending => {
                self.state = LoadState::Ready(stats);
                Ok(())
            }
            _ => Err(DashboardError::AlreadyLoaded),
        }
    }

    /// Record a failed load. Only valid while pending.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<()> {
        match self.state {
            LoadState::Pending => {
                self.state = LoadState::Failed(message.into());
                Ok(())
            }
            _ => Err(DashboardError::AlreadyLoaded),
        }
    }

    /// The statistics, once loaded
    pub fn ready(&self) -> Option<&PortfolioStats> {
        match &self.state {
            LoadState::Ready(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StockStat;

    fn sample() -> PortfolioStats {
        PortfolioStats::from_entries([(
            "NAB.AX",
            StockStat { latest: 35.0, mean: 34.0, min: 30.0, max: 38.0, sd: 1.5 },
        )])
    }

    #[test]
    fn test_starts_pending() {
        let store = StatsStore::new();
        assert_eq!(store.state(), &LoadState::Pending);
        assert!(store.ready().is_none());
    }

    #[test]
    fn test_install_once() {
        let mut store = StatsStore::new();
        store.install(sample()).unwrap();
        assert!(store.is_ready());
        assert_eq!(store.ready().unwrap().len(), 1);

        let second = store.install(PortfolioStats::default());
        assert!(matches!(second, Err(DashboardError::AlreadyLoaded)));
        assert_eq!(store.ready().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_store_stays_unready() {
        let mut store = StatsStore::new();
        store.fail("offline").unwrap();
        assert!(store.ready().is_none());
        assert!(store.install(sample()).is_err());
        assert_eq!(store.state(), &LoadState::Failed("offline".into()));
    }
}
