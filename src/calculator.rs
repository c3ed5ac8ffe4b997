//! Waveform Calculator
//!
//! Entry point consumed by the oscillator layer. Construct one per emulator
//! (or use [`WaveformCalculator::global`]) and share it by reference across
//! every chip instance.
//!
//! # Initialization
//! The basic table is fully built inside [`WaveformCalculator::new`], before
//! the value can be shared, and is never mutated afterwards. The global
//! instance is published through [`OnceLock`], whose one-time initialization
//! synchronizes with every reader, so concurrent unsynchronized reads of the
//! basic table are sound.

use std::sync::{Arc, OnceLock};

use crate::cache::PulldownCache;
use crate::config::TableConfig;
use crate::model::{ChipModel, CombinedWaveforms};
use crate::pulldown::build_basic_table;
use crate::table::{BasicTable, BasicWaveform, CombinedWaveform, PulldownTable};

/// Process-wide calculator
static GLOBAL: OnceLock<WaveformCalculator> = OnceLock::new();

/// Owner of the basic waveform table and the pulldown table cache
#[derive(Debug)]
pub struct WaveformCalculator {
    wftable: BasicTable,
    cache: PulldownCache,
}

impl WaveformCalculator {
    /// Build the basic waveform table and an empty pulldown cache
    pub fn new() -> Self {
        log::debug!("building basic waveform table");
        Self {
            wftable: build_basic_table(),
            cache: PulldownCache::new(),
        }
    }

    /// Shared process-wide instance, created on first use
    pub fn global() -> &'static WaveformCalculator {
        GLOBAL.get_or_init(WaveformCalculator::new)
    }

    /// Basic waveform table (constant-high, triangle, sawtooth, sawtooth-AND)
    #[inline]
    pub fn basic_table(&self) -> &BasicTable {
        &self.wftable
    }

    /// Basic waveform sample.
    ///
    /// # Panics
    /// If `phase` is not a 12-bit value.
    #[inline]
    pub fn basic(&self, kind: BasicWaveform, phase: u16) -> i16 {
        self.wftable.sample(kind, phase)
    }

    /// Combined waveform table for `model` and `cws`, built on first request
    pub fn build_pulldown_table(
        &self,
        model: ChipModel,
        cws: CombinedWaveforms,
    ) -> Arc<PulldownTable> {
        self.cache.get_or_build(model, cws)
    }

    /// Combined waveform table for a configuration
    pub fn build_for(&self, config: &TableConfig) -> Arc<PulldownTable> {
        self.build_pulldown_table(config.chip_model, config.combined_waveforms)
    }

    /// Single combined waveform sample, building the table if needed.
    ///
    /// Callers on a hot path should hold on to the table from
    /// [`build_pulldown_table`](Self::build_pulldown_table) instead.
    pub fn pulldown(
        &self,
        model: ChipModel,
        cws: CombinedWaveforms,
        combination: CombinedWaveform,
        phase: u16,
    ) -> i16 {
        let table = self.cache.get_or_build(model, cws);
        table.sample(combination, phase)
    }

    /// Number of pulldown tables computed by this calculator
    pub fn builds(&self) -> usize {
        self.cache.builds()
    }

    /// Number of pulldown tables currently cached
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for WaveformCalculator {
    fn default() -> Self {
        Self::new()
    }
}
