//! Pulldown Table Cache
//!
//! Memoizes the 5 x 4096 combined waveform table per chip model and variance
//! class. Lookup and build happen under one lock, so each configuration is
//! computed at most once no matter how many threads ask for it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::model::{ChipModel, CombinedWaveforms};
use crate::params::config_set;
use crate::pulldown::build_pulldown_table;
use crate::table::PulldownTable;

/// Number of distinct (model, variance class) configurations
pub const CACHE_SLOTS: usize = ChipModel::ALL.len() * CombinedWaveforms::ALL.len();

/// Slot of a configuration in the cache
#[inline]
const fn slot(model: ChipModel, cws: CombinedWaveforms) -> usize {
    model.index() * CombinedWaveforms::ALL.len() + cws.index()
}

/// Cache of built pulldown tables, keyed by (model, variance class)
///
/// Entries are never evicted. Returned tables are shared through [`Arc`] and
/// stay valid for as long as any holder keeps them.
pub struct PulldownCache {
    tables: Mutex<[Option<Arc<PulldownTable>>; CACHE_SLOTS]>,
    /// Number of tables actually computed
    builds: AtomicUsize,
}

impl PulldownCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Default::default()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Return the table for `model` and `cws`, building it on first request
    pub fn get_or_build(&self, model: ChipModel, cws: CombinedWaveforms) -> Arc<PulldownTable> {
        let mut tables = self.tables.lock();
        let entry = &mut tables[slot(model, cws)];

        if let Some(table) = entry.as_ref() {
            log::trace!("pulldown table cache hit: {model} {cws}");
            return Arc::clone(table);
        }

        let start = Instant::now();
        let table = Arc::new(build_pulldown_table(config_set(model, cws)));
        self.builds.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "built pulldown table for {model} {cws} in {:.1} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        *entry = Some(Arc::clone(&table));
        table
    }

    /// Table for `model` and `cws` if it has already been built
    pub fn get(&self, model: ChipModel, cws: CombinedWaveforms) -> Option<Arc<PulldownTable>> {
        self.tables.lock()[slot(model, cws)].clone()
    }

    /// Number of tables computed since creation
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Number of configurations currently resident
    pub fn len(&self) -> usize {
        self.tables.lock().iter().filter(|t| t.is_some()).count()
    }

    /// Whether no table has been built yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PulldownCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PulldownCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulldownCache")
            .field("resident", &self.len())
            .field("builds", &self.builds())
            .finish()
    }
}
