//! Combined Waveform Pulldown Model
//!
//! When several waveforms drive the waveform DAC at once, each output bit is
//! loaded by every other bit line. A bit that is 0 pulls its neighbours
//! toward 0 with a strength given by the distance table, the pulse waveform
//! adds a constant pull, and what is left must still exceed a threshold for
//! the bit to read as 1.

use crate::params::{CombinedWaveformConfig, DISTANCE_TABLE_SIZE};
use crate::table::{BasicTable, PulldownTable, WaveTable, TABLE_SIZE};

/// Number of accumulator bits feeding the waveform DAC
const BITS: usize = 12;

/// Compute the pulled-down sample for one accumulator value.
///
/// `distancetable` is indexed by `sb - cb + 12` and must come from
/// [`CombinedWaveformConfig::distance_table`].
pub fn calculate_pulldown(
    distancetable: &[f32; DISTANCE_TABLE_SIZE],
    topbit: f32,
    pulsestrength: f32,
    threshold: f32,
    accumulator: u16,
) -> i16 {
    let mut bit = [0.0f32; BITS];
    for (i, b) in bit.iter_mut().enumerate() {
        *b = if accumulator & (1 << i) != 0 {
            1.0
        } else {
            0.0
        };
    }

    bit[11] *= topbit;

    let mut pulldown = [0.0f32; BITS];
    for (sb, pd) in pulldown.iter_mut().enumerate() {
        let mut avg = 0.0f32;
        let mut n = 0.0f32;

        for (cb, b) in bit.iter().enumerate() {
            if cb == sb {
                continue;
            }
            let weight = distancetable[sb + 12 - cb];
            avg += (1.0 - *b) * weight;
            n += weight;
        }

        avg -= pulsestrength;

        *pd = avg / n;
    }

    let mut value = 0i16;
    for (i, (b, pd)) in bit.iter().zip(&pulldown).enumerate() {
        let bit_value = if *b > 0.0 { 1.0 - *pd } else { 0.0 };
        if bit_value > threshold {
            value |= 1 << i;
        }
    }

    value
}

/// Evaluate one combination over all 4096 phase values
pub fn pulldown_row(config: &CombinedWaveformConfig) -> Box<[i16; TABLE_SIZE]> {
    let distancetable = config.distance_table();
    let mut row = Box::new([0i16; TABLE_SIZE]);
    for (phase, sample) in row.iter_mut().enumerate() {
        *sample = calculate_pulldown(
            &distancetable,
            config.topbit,
            config.pulsestrength,
            config.threshold,
            phase as u16,
        );
    }
    row
}

/// Build the full 5 x 4096 table for a parameter set
pub fn build_pulldown_table(configs: &[CombinedWaveformConfig; 5]) -> PulldownTable {
    let rows: Vec<Box<[i16; TABLE_SIZE]>> = configs.iter().map(pulldown_row).collect();
    WaveTable::from_fn(|row, phase| rows[row][phase as usize])
}

/// Folded triangle: bit 11 set inverts the lower bits, then shift left one
#[inline]
pub fn tri_xor(val: u16) -> u16 {
    (if val & 0x800 == 0 { val } else { val ^ 0xfff }) << 1
}

/// Build the basic waveform table
pub fn build_basic_table() -> BasicTable {
    WaveTable::from_fn(|row, idx| {
        let saw = idx as i16;
        match row {
            0 => 0xfff,
            1 => tri_xor(idx) as i16,
            2 => saw,
            _ => saw & (saw << 1),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChipModel, CombinedWaveforms};
    use crate::params::{config, config_set};
    use crate::table::{BasicWaveform, CombinedWaveform};

    fn uniform_table() -> [f32; DISTANCE_TABLE_SIZE] {
        [1.0; DISTANCE_TABLE_SIZE]
    }

    #[test]
    fn test_zero_accumulator_is_silent() {
        for model in ChipModel::ALL {
            for cws in CombinedWaveforms::ALL {
                for cfg in config_set(model, cws) {
                    let table = cfg.distance_table();
                    assert_eq!(
                        calculate_pulldown(&table, cfg.topbit, cfg.pulsestrength, cfg.threshold, 0),
                        0
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_pull_keeps_all_bits() {
        // every bit set, no pulse: nothing pulls
        let uniform = uniform_table();
        assert_eq!(calculate_pulldown(&uniform, 1.0, 0.0, 0.5, 0xfff), 0xfff);
    }

    #[test]
    fn test_output_never_sets_cleared_bits() {
        let cfg = config(
            ChipModel::Mos8580,
            CombinedWaveforms::Weak,
            CombinedWaveform::PulseTriangleSawtooth,
        );
        let table = cfg.distance_table();
        for acc in (0..TABLE_SIZE as u16).step_by(7) {
            let out = calculate_pulldown(&table, cfg.topbit, cfg.pulsestrength, cfg.threshold, acc);
            assert_eq!(out as u16 & !acc, 0, "acc={acc:#05x} out={out:#05x}");
        }
    }

    #[test]
    fn test_single_zero_bit_pulls_neighbours() {
        // bit 5 cleared, uniform weights: each other bit sees 1/11 pulldown
        let acc = 0xfff & !(1 << 5);
        let uniform = uniform_table();
        let kept = calculate_pulldown(&uniform, 1.0, 0.0, 0.90, acc);
        assert_eq!(kept, acc as i16);
        assert_eq!(calculate_pulldown(&uniform, 1.0, 0.0, 0.95, acc), 0);
    }

    #[test]
    fn test_pulse_strength_offsets_pulldown() {
        // four set bits, eight zero neighbours
        let uniform = uniform_table();
        assert_eq!(calculate_pulldown(&uniform, 1.0, 0.0, 0.95, 0x0f0), 0);
        assert_eq!(calculate_pulldown(&uniform, 1.0, 8.0, 0.95, 0x0f0), 0x0f0);
        // enough pulse lifts bits past a threshold above 1
        assert_eq!(calculate_pulldown(&uniform, 1.0, 11.0, 1.5, 0xfff), 0xfff);
    }

    #[test]
    fn test_topbit_only_affects_bit_11() {
        // with bit 11 clear the top bit scale is irrelevant
        for acc in [0x001u16, 0x3a5, 0x7ff] {
            assert_eq!(
                calculate_pulldown(&uniform_table(), 1.0, 0.5, 0.8, acc),
                calculate_pulldown(&uniform_table(), 3.0, 0.5, 0.8, acc)
            );
        }
    }

    #[test]
    fn test_pulldown_table_rows_match_row_builder() {
        let configs = config_set(ChipModel::Mos6581, CombinedWaveforms::Average);
        let table = build_pulldown_table(configs);
        for (i, cfg) in configs.iter().enumerate() {
            assert_eq!(table[i], *pulldown_row(cfg));
        }
    }

    #[test]
    fn test_tri_xor() {
        assert_eq!(tri_xor(0), 0);
        assert_eq!(tri_xor(1), 2);
        assert_eq!(tri_xor(0x7ff), 0xffe);
        assert_eq!(tri_xor(0x800), 0xffe);
        assert_eq!(tri_xor(0xfff), 0);
    }

    #[test]
    fn test_basic_table_golden_values() {
        let table = build_basic_table();
        assert_eq!(table[BasicWaveform::Triangle][0], 0);
        assert_eq!(table[BasicWaveform::Triangle][2048], 4094);
        assert_eq!(table[BasicWaveform::Sawtooth][100], 100);
        assert_eq!(table[BasicWaveform::SawtoothAnd][0b0110], 0b0100);
        let high = &table[BasicWaveform::ConstantHigh];
        assert!(high.iter().all(|&v| v == 4095));
    }

    #[test]
    fn test_basic_table_ranges() {
        let table = build_basic_table();
        for phase in 0..TABLE_SIZE {
            assert_eq!(table[BasicWaveform::Sawtooth][phase], phase as i16);
            assert!((0..=4094).contains(&table[BasicWaveform::Triangle][phase]));
            let masked = table[BasicWaveform::SawtoothAnd][phase];
            assert!((0..=4095).contains(&masked));
        }
    }
}
