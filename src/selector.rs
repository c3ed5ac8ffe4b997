//! Waveform Selection
//!
//! Decodes the waveform bits of a voice control register (upper nibble) into
//! the basic table row and, when several waveforms are enabled, the pulldown
//! row that models their combination.

use bitflags::bitflags;

use crate::table::{BasicWaveform, CombinedWaveform};

bitflags! {
    /// Waveform select bits (control register bits 4-7, shifted down)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WaveformFlags: u8 {
        /// Triangle
        const TRIANGLE = 0x01;
        /// Sawtooth
        const SAWTOOTH = 0x02;
        /// Pulse
        const PULSE = 0x04;
        /// Noise
        const NOISE = 0x08;
    }
}

impl WaveformFlags {
    /// Extract the waveform bits from a raw control register value
    pub fn from_control(control: u8) -> Self {
        WaveformFlags::from_bits_truncate(control >> 4)
    }
}

/// Table rows used for a given waveform selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSelection {
    /// Row of the basic table
    pub basic: BasicWaveform,
    /// Row of the pulldown table, if the combination is modelled
    pub pulldown: Option<CombinedWaveform>,
}

impl WaveSelection {
    /// Resolve table rows for `flags`.
    ///
    /// Combinations that include noise behave like the same combination
    /// without it. Pulse alone uses no pulldown, pulse with noise uses the
    /// guessed `NP` row.
    pub fn from_flags(flags: WaveformFlags) -> Self {
        let bits = flags.bits();
        let basic = match bits & 0x3 {
            0 => BasicWaveform::ConstantHigh,
            1 => BasicWaveform::Triangle,
            2 => BasicWaveform::Sawtooth,
            _ => BasicWaveform::SawtoothAnd,
        };

        let pulldown = match bits & 0x7 {
            3 => Some(CombinedWaveform::TriangleSawtooth),
            4 if flags.contains(WaveformFlags::NOISE) => Some(CombinedWaveform::NoisePulse),
            5 => Some(CombinedWaveform::PulseTriangle),
            6 => Some(CombinedWaveform::PulseSawtooth),
            7 => Some(CombinedWaveform::PulseTriangleSawtooth),
            _ => None,
        };

        Self { basic, pulldown }
    }

    /// Resolve table rows from a raw control register value
    pub fn from_control(control: u8) -> Self {
        Self::from_flags(WaveformFlags::from_control(control))
    }
}
