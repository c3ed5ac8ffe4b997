//! Combined Waveform Tables for the MOS 6581/8580 SID
//!
//! Enabling several oscillator waveforms at once on a real SID does not produce
//! a clean bitwise AND of their outputs. Neighbouring bit lines of the waveform
//! DAC load each other and pull some output bits low. This crate reproduces that
//! effect numerically and packages the result as 4096-entry lookup tables indexed
//! by the 12-bit oscillator phase.
//!
//! # Overview
//! - [`WaveformCalculator`]: owns the basic waveform table and the pulldown cache
//! - [`params`]: fitted model constants per chip model and variance class
//! - [`pulldown`]: the bit interaction model that turns constants into samples
//! - [`selector`]: maps control register waveform bits to table rows
//!
//! # Quick start
//! ```no_run
//! use sid_waveforms::{BasicWaveform, ChipModel, CombinedWaveform, CombinedWaveforms, WaveformCalculator};
//!
//! let calculator = WaveformCalculator::new();
//! let saw = calculator.basic(BasicWaveform::Sawtooth, 100);
//! assert_eq!(saw, 100);
//!
//! let table = calculator.build_pulldown_table(ChipModel::Mos6581, CombinedWaveforms::Average);
//! let sample = table.sample(CombinedWaveform::PulseTriangleSawtooth, 0x0abc);
//! # let _ = sample;
//! ```
//!
//! Tables are built once per configuration and shared through [`std::sync::Arc`],
//! so every emulated chip using the same model and variance class reads the same
//! backing storage.

#![warn(missing_docs)]

pub mod cache;
pub mod calculator;
pub mod config;
pub mod distance;
pub mod model;
pub mod params;
pub mod pulldown;
pub mod selector;
pub mod table;

/// Error types for waveform table selection
///
/// Table construction never fails. These errors only arise when decoding
/// user-facing names or raw tags into the closed enumerations of this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WaveformError {
    /// Chip model name not recognised
    #[error("Unknown chip model: {0}")]
    UnknownChipModel(String),

    /// Variance class name not recognised
    #[error("Unknown combined waveform strength: {0}")]
    UnknownCombinedWaveforms(String),

    /// Waveform tag outside the table row range
    #[error("Invalid waveform index {index} (expected 0..{rows})")]
    InvalidWaveform {
        /// Raw tag that was supplied
        index: u8,
        /// Number of rows in the addressed table
        rows: usize,
    },
}

/// Result type for waveform table operations
pub type Result<T> = std::result::Result<T, WaveformError>;

// Public API exports
pub use cache::PulldownCache;
pub use calculator::WaveformCalculator;
pub use config::TableConfig;
pub use distance::DistanceFunction;
pub use model::{ChipModel, CombinedWaveforms};
pub use params::CombinedWaveformConfig;
pub use selector::{WaveSelection, WaveformFlags};
pub use table::{BasicTable, BasicWaveform, CombinedWaveform, PulldownTable, WaveTable, TABLE_SIZE};
