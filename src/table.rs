//! Waveform Lookup Tables
//!
//! Fixed-size sample matrices indexed by waveform row and 12-bit phase.

use std::fmt;
use std::ops::Index;

use crate::WaveformError;

/// Number of phase values per waveform row (12-bit accumulator)
pub const TABLE_SIZE: usize = 1 << 12;

/// Basic waveform rows, selected by the low two waveform bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BasicWaveform {
    /// All bits set (pulse and noise paths)
    ConstantHigh = 0,
    /// Folded triangle, one bit left-shifted
    Triangle = 1,
    /// Raw accumulator
    Sawtooth = 2,
    /// Sawtooth ANDed with itself shifted left by one
    SawtoothAnd = 3,
}

impl BasicWaveform {
    /// Every basic waveform, in row order
    pub const ALL: [BasicWaveform; 4] = [
        BasicWaveform::ConstantHigh,
        BasicWaveform::Triangle,
        BasicWaveform::Sawtooth,
        BasicWaveform::SawtoothAnd,
    ];
}

/// Combined waveform rows of a pulldown table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CombinedWaveform {
    /// Triangle + sawtooth
    TriangleSawtooth = 0,
    /// Pulse + triangle
    PulseTriangle = 1,
    /// Pulse + sawtooth
    PulseSawtooth = 2,
    /// Pulse + triangle + sawtooth
    PulseTriangleSawtooth = 3,
    /// Noise + pulse (parameters guessed, no sampled data)
    NoisePulse = 4,
}

impl CombinedWaveform {
    /// Every combination, in row order
    pub const ALL: [CombinedWaveform; 5] = [
        CombinedWaveform::TriangleSawtooth,
        CombinedWaveform::PulseTriangle,
        CombinedWaveform::PulseSawtooth,
        CombinedWaveform::PulseTriangleSawtooth,
        CombinedWaveform::NoisePulse,
    ];

    /// Short label used in logs (`TS`, `PT`, `PS`, `PTS`, `NP`)
    pub const fn label(self) -> &'static str {
        match self {
            CombinedWaveform::TriangleSawtooth => "TS",
            CombinedWaveform::PulseTriangle => "PT",
            CombinedWaveform::PulseSawtooth => "PS",
            CombinedWaveform::PulseTriangleSawtooth => "PTS",
            CombinedWaveform::NoisePulse => "NP",
        }
    }
}

impl From<BasicWaveform> for usize {
    #[inline]
    fn from(kind: BasicWaveform) -> usize {
        kind as usize
    }
}

impl From<CombinedWaveform> for usize {
    #[inline]
    fn from(kind: CombinedWaveform) -> usize {
        kind as usize
    }
}

impl TryFrom<u8> for BasicWaveform {
    type Error = WaveformError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        BasicWaveform::ALL
            .get(value as usize)
            .copied()
            .ok_or(WaveformError::InvalidWaveform {
                index: value,
                rows: BasicWaveform::ALL.len(),
            })
    }
}

impl TryFrom<u8> for CombinedWaveform {
    type Error = WaveformError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CombinedWaveform::ALL
            .get(value as usize)
            .copied()
            .ok_or(WaveformError::InvalidWaveform {
                index: value,
                rows: CombinedWaveform::ALL.len(),
            })
    }
}

/// Immutable `ROWS x 4096` matrix of waveform samples
#[derive(Clone, PartialEq, Eq)]
pub struct WaveTable<const ROWS: usize> {
    rows: Box<[[i16; TABLE_SIZE]; ROWS]>,
}

/// Basic waveform table (constant-high, triangle, sawtooth, sawtooth-AND)
pub type BasicTable = WaveTable<4>;

/// Combined waveform table (TS, PT, PS, PTS, NP)
pub type PulldownTable = WaveTable<5>;

impl<const ROWS: usize> WaveTable<ROWS> {
    /// Build a table by evaluating `f(row, phase)` for every cell
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, u16) -> i16,
    {
        let mut rows = Box::new([[0i16; TABLE_SIZE]; ROWS]);
        for (row, samples) in rows.iter_mut().enumerate() {
            for (phase, sample) in samples.iter_mut().enumerate() {
                *sample = f(row, phase as u16);
            }
        }
        Self { rows }
    }

    /// Number of waveform rows
    #[inline]
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Full row of samples
    #[inline]
    pub fn row(&self, row: impl Into<usize>) -> &[i16; TABLE_SIZE] {
        &self.rows[row.into()]
    }

    /// Sample at `phase` in `row`.
    ///
    /// # Panics
    /// If `phase` is not a 12-bit value or `row` is out of range.
    #[inline]
    pub fn sample(&self, row: impl Into<usize>, phase: u16) -> i16 {
        assert!(
            (phase as usize) < TABLE_SIZE,
            "phase {phase:#x} exceeds 12 bits"
        );
        self.rows[row.into()][phase as usize]
    }

    /// Iterate rows in order
    pub fn iter(&self) -> impl Iterator<Item = &[i16; TABLE_SIZE]> {
        self.rows.iter()
    }
}

impl<const ROWS: usize> Index<usize> for WaveTable<ROWS> {
    type Output = [i16; TABLE_SIZE];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl Index<BasicWaveform> for BasicTable {
    type Output = [i16; TABLE_SIZE];

    #[inline]
    fn index(&self, kind: BasicWaveform) -> &Self::Output {
        &self.rows[kind as usize]
    }
}

impl Index<CombinedWaveform> for PulldownTable {
    type Output = [i16; TABLE_SIZE];

    #[inline]
    fn index(&self, kind: CombinedWaveform) -> &Self::Output {
        &self.rows[kind as usize]
    }
}

impl<const ROWS: usize> fmt::Debug for WaveTable<ROWS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveTable")
            .field("rows", &ROWS)
            .field("size", &TABLE_SIZE)
            .finish_non_exhaustive()
    }
}
