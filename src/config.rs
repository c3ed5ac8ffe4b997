//! Table Selection Configuration
//!
//! Serializable selection of which pulldown table an emulated chip uses.
//! The fitted parameters themselves are compiled in and cannot be changed here.

use serde::{Deserialize, Serialize};

use crate::model::{ChipModel, CombinedWaveforms};

/// Chip model and combined waveform strength for one emulated SID
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Silicon revision
    pub chip_model: ChipModel,
    /// Strength of the combined waveform pulldown
    pub combined_waveforms: CombinedWaveforms,
}

impl TableConfig {
    /// Create a configuration
    pub const fn new(chip_model: ChipModel, combined_waveforms: CombinedWaveforms) -> Self {
        Self {
            chip_model,
            combined_waveforms,
        }
    }

    /// Same configuration with a different strength
    pub const fn with_combined_waveforms(self, combined_waveforms: CombinedWaveforms) -> Self {
        Self {
            combined_waveforms,
            ..self
        }
    }
}
