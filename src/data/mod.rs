//! Dataset acquisition: fetch, parse, and the per-process cache.
//!
//! [`DataProvider`] owns one init-once cache per dataset. The first
//! accessor call fetches the configured location and parses the CSV into
//! typed rows; every later call returns the identical cached dataset
//! without refetching. There is no reload and no teardown.

pub mod fetch;
pub mod tables;
pub mod types;

pub use fetch::{Fetcher, Location};
pub use types::{BatterRunRow, DeliveryRow, MatchRow};

use crate::config::SourceConfig;
use crate::error::{Result, ScorebookError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;


/// Supplies the three datasets, fetching and parsing each at most once per
/// process.
///
/// Each dataset sits behind its own lock, held across the load, so
/// concurrent first callers cannot trigger duplicate fetches or observe a
/// partially loaded dataset. A failed load caches nothing and the next
/// call may try again; within a single call there is no retry.
pub struct DataProvider {
    sources: SourceConfig,
    fetcher: Fetcher,
    matches: Mutex<Option<Arc<Vec<MatchRow>>>>,
    batter_runs: Mutex<Option<Arc<Vec<BatterRunRow>>>>,
    deliveries: Mutex<Option<Arc<Vec<DeliveryRow>>>>,
    fetches: AtomicU64,
}

impl DataProvider {
    pub fn new(sources: SourceConfig) -> Self {
        Self {
            sources,
            fetcher: Fetcher::new(),
            matches: Mutex::new(None),
            batter_runs: Mutex::new(None),
            deliveries: Mutex::new(None),
            fetches: AtomicU64::new(0),
        }
    }

    pub fn sources(&self) -> &SourceConfig {
        &self.sources
    }

    /// Number of source fetches attempted so far. Stays flat across cache
    /// hits.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    /// The matches dataset, loaded on first use.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be fetched or parsed
    pub fn matches(&self) -> Result<Arc<Vec<MatchRow>>> {
        self.load_cached(
            &self.matches,
            "matches",
            &self.sources.matches,
            tables::parse_matches,
        )
    }

    /// The per-batter run totals dataset, loaded on first use.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be fetched or parsed
    pub fn batter_run_totals(&self) -> Result<Arc<Vec<BatterRunRow>>> {
        self.load_cached(
            &self.batter_runs,
            "batter run totals",
            &self.sources.batter_runs,
            tables::parse_batter_runs,
        )
    }

    /// The ball-by-ball deliveries dataset, loaded on first use.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be fetched or parsed
    pub fn deliveries(&self) -> Result<Arc<Vec<DeliveryRow>>> {
        self.load_cached(
            &self.deliveries,
            "deliveries",
            &self.sources.deliveries,
            tables::parse_deliveries,
        )
    }

    fn load_cached<R>(
        &self,
        cache: &Mutex<Option<Arc<Vec<R>>>>,
        name: &str,
        location: &str,
        parse: fn(String) -> Result<Vec<R>>,
    ) -> Result<Arc<Vec<R>>> {
        let mut slot = cache.lock().map_err(|_poisoned| {
            ScorebookError::data_unavailable(format!("{name} dataset cache lock is poisoned"))
        })?;
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        tracing::info!("loading {name} dataset from {location}");
        let started = Instant::now();
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let text = self.fetcher.fetch(location).inspect_err(|err| {
            tracing::error!("{name} dataset fetch failed: {err}");
        })?;
        let bytes = text.len();
        let dataset = Arc::new(parse(text).inspect_err(|err| {
            tracing::error!("{name} dataset parse failed: {err}");
        })?);
        tracing::info!(
            "loaded {name} dataset: {} rows from {bytes} bytes in {:.2?}",
            dataset.len(),
            started.elapsed()
        );
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }
}
