use std::time::Duration;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Presentation variant of the wizard. Behavior is identical across skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    #[default]
    Indigo,
    Sky,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    pub generation_delay_ms: u64,
    pub carousel_interval_ms: u64,
    pub speech_rate: f32,
    pub speech_pitch: f32,
    pub skin: Skin,
    /// Block "Next" until the current step has input.
    pub require_step_input: bool,
}

impl WizardSettings {
    pub const SPEECH_RATE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;
    pub const SPEECH_PITCH_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

    /// Rejects values the carousel timer or the speech engine cannot use.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.carousel_interval_ms > 0,
            "carousel_interval_ms must be greater than zero"
        );
        ensure!(
            Self::SPEECH_RATE_RANGE.contains(&self.speech_rate),
            "speech_rate {} is outside {:?}",
            self.speech_rate,
            Self::SPEECH_RATE_RANGE
        );
        ensure!(
            Self::SPEECH_PITCH_RANGE.contains(&self.speech_pitch),
            "speech_pitch {} is outside {:?}",
            self.speech_pitch,
            Self::SPEECH_PITCH_RANGE
        );
        Ok(())
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            generation_delay_ms: 1500,
            carousel_interval_ms: 4000,
            speech_rate: 1.0,
            speech_pitch: 1.0,
            skin: Skin::Indigo,
            require_step_input: false,
        }
    }
}
