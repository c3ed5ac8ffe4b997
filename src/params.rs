//! Combined Waveform Model Parameters
//!
//! Parameters derived with a Monte Carlo fit against samplings taken from real
//! machines (sampling program by Dag Lem, fitted data from the
//! libsidplayfp combined-waveforms project).
//!
//! The score next to each entry is the acoustic error obtained by XORing the
//! estimated and sampled values, with the number of mispredicted bits in
//! parentheses. `NP` entries have no sampled data and are guesses.

#![allow(clippy::excessive_precision)]

use crate::distance::DistanceFunction;
use crate::distance::DistanceFunction::{Exponential, Linear, Quadratic};
use crate::model::{ChipModel, CombinedWaveforms};
use crate::table::CombinedWaveform;

/// Number of entries in a distance table (offsets -12..=12)
pub const DISTANCE_TABLE_SIZE: usize = 12 * 2 + 1;

/// Fitted parameters for one combined waveform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombinedWaveformConfig {
    /// Weighting curve for neighbour influence
    pub distance_function: DistanceFunction,
    /// Minimum pulled value that still reads as a logical 1
    pub threshold: f32,
    /// Scale applied to bit 11 of the accumulator
    pub topbit: f32,
    /// Offset subtracted by the pulse waveform
    pub pulsestrength: f32,
    /// Distance parameter for influence from lower bits
    pub distance1: f32,
    /// Distance parameter for influence from higher bits
    pub distance2: f32,
}

impl CombinedWaveformConfig {
    const fn new(
        distance_function: DistanceFunction,
        threshold: f32,
        topbit: f32,
        pulsestrength: f32,
        distance1: f32,
        distance2: f32,
    ) -> Self {
        Self {
            distance_function,
            threshold,
            topbit,
            pulsestrength,
            distance1,
            distance2,
        }
    }

    /// Build the neighbour weight table indexed by `sb - cb + 12`.
    ///
    /// Index 12 (the bit itself) is 1.0. Lower indices are weighted with
    /// `distance1`, higher ones with `distance2`.
    pub fn distance_table(&self) -> [f32; DISTANCE_TABLE_SIZE] {
        let mut table = [0.0f32; DISTANCE_TABLE_SIZE];
        table[12] = 1.0;
        for i in 1..=12 {
            table[12 - i] = self.distance_function.weight(self.distance1, i as i32);
            table[12 + i] = self.distance_function.weight(self.distance2, i as i32);
        }
        table
    }
}

type C = CombinedWaveformConfig;

/// Average strength, indexed by `[model][combination]`
#[rustfmt::skip]
pub static CONFIG_AVERAGE: [[CombinedWaveformConfig; 5]; 2] = [
    [
        // 6581 R3 0486S sampled by Trurl
        // TS  error  3555 (324/32768) [RMS: 73.98]
        C::new(Exponential, 0.877322257, 1.11349654, 0.0, 2.14537621, 9.08618164),
        // PT  error  4590 (124/32768) [RMS: 68.90]
        C::new(Linear, 0.941692829, 1.0, 1.80072665, 0.033124879, 0.232303441),
        // PS  error 19352 (763/32768) [RMS: 96.91]
        C::new(Linear, 1.66494179, 1.03760982, 5.62705326, 0.291590303, 0.283631504),
        // PTS error  5068 ( 94/32768) [RMS: 41.69]
        C::new(Linear, 1.09762526, 0.975265801, 1.52196741, 0.151528224, 0.841949463),
        // NP  guessed
        C::new(Exponential, 0.96, 1.0, 2.5, 1.1, 1.2),
    ],
    [
        // 8580 R5 1088 sampled by reFX-Mike
        // TS  error 10788 (354/32768) [RMS: 58.31]
        C::new(Exponential, 0.841851234, 1.09233654, 0.0, 1.85262764, 6.22224379),
        // PT  error 10635 (289/32768) [RMS: 108.81]
        C::new(Exponential, 0.929835618, 1.0, 1.12836814, 1.10453653, 1.48065746),
        // PS  error 12255 (554/32768) [RMS: 102.27]
        C::new(Quadratic, 0.911938608, 0.996440411, 1.2278074, 0.000117214302, 0.18948476),
        // PTS error  6995 (139/32768) [RMS: 55.78]
        C::new(Exponential, 0.932317019, 1.03892183, 1.2068342, 0.891974986, 1.42451835),
        // NP  guessed
        C::new(Exponential, 0.95, 1.0, 1.15, 1.0, 1.45),
    ],
];

/// Weak strength, indexed by `[model][combination]`
#[rustfmt::skip]
pub static CONFIG_WEAK: [[CombinedWaveformConfig; 5]; 2] = [
    [
        // 6581 R2 4383 sampled by ltx128
        // TS  error 1858 (204/32768) [RMS: 62.49]
        C::new(Exponential, 0.886832297, 1.0, 0.0, 2.14438701, 9.51839447),
        // PT  error  612 (102/32768) [RMS: 43.71]
        C::new(Linear, 1.01262534, 1.0, 2.46070528, 0.0537485816, 0.0986242667),
        // PS  error 8135 (575/32768) [RMS: 75.10]
        C::new(Linear, 2.14896345, 1.0216713, 10.5400085, 0.244498149, 0.126134038),
        // PTS error 2505 (63/32768) [RMS: 24.37]
        C::new(Linear, 1.29061747, 0.9754318, 3.15377498, 0.0968349651, 0.318573922),
        // NP  guessed
        C::new(Exponential, 0.96, 1.0, 2.5, 1.1, 1.2),
    ],
    [
        // 8580 R5 4887 sampled by reFX-Mike
        // TS  error  745 (77/32768) [RMS: 53.74]
        C::new(Exponential, 0.816124022, 1.31208789, 0.0, 1.92347884, 2.35027933),
        // PT  error 7199 (192/32768) [RMS: 88.43]
        C::new(Exponential, 0.917997837, 1.0, 1.01248944, 1.05761552, 1.37529826),
        // PS  error 9864 (333/32768) [RMS: 86.29]
        C::new(Quadratic, 0.970038712, 1.00844693, 1.30298805, 0.0097996993, 0.146854922),
        // PTS error 4809 (60/32768) [RMS: 45.37]
        C::new(Exponential, 0.941834152, 1.06401193, 0.991132736, 0.995310068, 1.41105855),
        // NP  guessed
        C::new(Exponential, 0.95, 1.0, 1.15, 1.0, 1.45),
    ],
];

/// Strong strength, indexed by `[model][combination]`
#[rustfmt::skip]
pub static CONFIG_STRONG: [[CombinedWaveformConfig; 5]; 2] = [
    [
        // 6581 R2 0384 sampled by Trurl
        // TS  error 20337 (1579/32768) [RMS: 88.57]
        C::new(Exponential, 0.000637792516, 1.56725872, 0.0, 0.00036806846, 1.51800942),
        // PT  error  5194 (240/32768) [RMS: 83.54]
        C::new(Linear, 0.924824238, 1.0, 1.96749473, 0.0891806409, 0.234794483),
        // PS  error 31015 (2181/32768) [RMS: 114.99]
        C::new(Linear, 1.2328074, 0.73079139, 3.9719491, 0.00156516861, 0.314677745),
        // PTS error  9874 (201/32768) [RMS: 52.30]
        C::new(Linear, 1.08558261, 0.857638359, 1.52781796, 0.152927235, 1.02657032),
        // NP  guessed
        C::new(Exponential, 0.96, 1.0, 2.5, 1.1, 1.2),
    ],
    [
        // 8580 R5 1489 sampled by reFX-Mike
        // TS  error  4837 (388/32768) [RMS: 76.07]
        C::new(Exponential, 0.89762634, 56.7594185, 0.0, 7.68995237, 12.0754194),
        // PT  error  9298 (506/32768) [RMS: 128.15]
        C::new(Exponential, 0.867885351, 1.0, 1.4511894, 1.07057536, 1.43333757),
        // PS  error 13168 (718/32768) [RMS: 123.35]
        C::new(Quadratic, 0.89255774, 1.2253896, 1.75615835, 0.0245045591, 0.12982437),
        // PTS error  6702 (300/32768) [RMS: 71.01]
        C::new(Linear, 0.91124934, 0.963609755, 0.909965038, 1.07445884, 1.82399702),
        // NP  guessed
        C::new(Exponential, 0.95, 1.0, 1.15, 1.0, 1.45),
    ],
];

/// Parameter set for a chip model and variance class, in [`CombinedWaveform`] order
pub fn config_set(
    model: ChipModel,
    cws: CombinedWaveforms,
) -> &'static [CombinedWaveformConfig; 5] {
    let configs = match cws {
        CombinedWaveforms::Average => &CONFIG_AVERAGE,
        CombinedWaveforms::Weak => &CONFIG_WEAK,
        CombinedWaveforms::Strong => &CONFIG_STRONG,
    };
    &configs[model.index()]
}

/// Parameters of a single combination
#[inline]
pub fn config(
    model: ChipModel,
    cws: CombinedWaveforms,
    combination: CombinedWaveform,
) -> &'static CombinedWaveformConfig {
    &config_set(model, cws)[combination as usize]
}
