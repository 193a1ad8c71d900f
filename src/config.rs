use serde::{Deserialize, Serialize};

/// Highest value a single 8-bit DMX channel can carry.
pub const DMX_MAX: f64 = 255.0;
/// Channels per DMX universe.
pub const DMX_CHANNELS: u16 = 512;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    pub fixture: FixtureIntrinsics,
    pub sampling: SamplingParams,
}

/// Rotation ranges and channel assignments of a moving-head fixture.
///
/// The defaults match a common moving head: 540° of pan on channel 1,
/// 205° of tilt on channel 3. Channel numbers are 1-based as printed in
/// fixture manuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureIntrinsics {
    pub pan_range_deg: f64,
    pub tilt_range_deg: f64,
    pub pan_channel: u16,
    pub tilt_channel: u16,
}

impl Default for FixtureIntrinsics {
    fn default() -> Self {
        Self {
            pan_range_deg: 540.0,
            tilt_range_deg: 205.0,
            pan_channel: 1,
            tilt_channel: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    pub samples_per_axis: u16,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            samples_per_axis: 50,
        }
    }
}

/// Mustn't contain contradicting information like (non-finite rotation ranges or colliding channels)
///
/// Only obtainable through `TryFrom<BeamConfig>`.
pub struct ValidBeamConfig {
    fixture: FixtureIntrinsics,
    samples_per_axis: usize,
}

impl ValidBeamConfig {
    pub fn fixture(&self) -> &FixtureIntrinsics {
        &self.fixture
    }

    pub fn samples_per_axis(&self) -> usize {
        self.samples_per_axis
    }
}

impl TryFrom<BeamConfig> for ValidBeamConfig {
    type Error = InvalidConfig;

    fn try_from(value: BeamConfig) -> Result<Self, Self::Error> {
        if !value.fixture.pan_range_deg.is_finite() || !value.fixture.tilt_range_deg.is_finite() {
            return Err(InvalidConfig::new(format!(
                "Rotation ranges must be finite, got pan {} tilt {}",
                value.fixture.pan_range_deg, value.fixture.tilt_range_deg
            )));
        }
        for (name, channel) in [
            ("pan_channel", value.fixture.pan_channel),
            ("tilt_channel", value.fixture.tilt_channel),
        ] {
            if channel == 0 || channel > DMX_CHANNELS {
                return Err(InvalidConfig::new(format!(
                    "Expected {name} between 1 and {DMX_CHANNELS}, got {channel}"
                )));
            }
        }
        if value.fixture.pan_channel == value.fixture.tilt_channel {
            return Err(InvalidConfig::new(format!(
                "pan_channel and tilt_channel collide on {}",
                value.fixture.pan_channel
            )));
        }
        if value.sampling.samples_per_axis < 2 {
            return Err(InvalidConfig::new(format!(
                "Expected samples_per_axis of at least 2 to span 0..=255, got {}",
                value.sampling.samples_per_axis
            )));
        }

        Ok(Self {
            fixture: value.fixture,
            samples_per_axis: value.sampling.samples_per_axis as usize,
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct InvalidConfig {
    reason: String,
}

impl InvalidConfig {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let valid = ValidBeamConfig::try_from(BeamConfig::default()).unwrap();
        assert_eq!(540.0, valid.fixture().pan_range_deg);
        assert_eq!(205.0, valid.fixture().tilt_range_deg);
        assert_eq!(50, valid.samples_per_axis());
    }

    #[test]
    fn validated_configs_evaluate_without_panicking() {
        // Everything TryFrom admits must survive the panic-prone paths:
        // sample sequencing needs two points, frame reads need channel >= 1.
        let config: ValidBeamConfig = BeamConfig {
            sampling: SamplingParams { samples_per_axis: 2 },
            ..Default::default()
        }
        .try_into()
        .unwrap();
        let grid = crate::BeamGrid::evaluate(&config);
        assert_eq!((2, 2), grid.shape());
        assert!(config.beam_from_frame(&[0u8; 3]).is_ok());
    }

    #[test]
    fn rejects_single_sample() {
        let config = BeamConfig {
            sampling: SamplingParams { samples_per_axis: 1 },
            ..Default::default()
        };
        assert!(ValidBeamConfig::try_from(config).is_err());
    }

    #[test]
    fn rejects_colliding_channels() {
        let config = BeamConfig {
            fixture: FixtureIntrinsics {
                pan_channel: 3,
                tilt_channel: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(ValidBeamConfig::try_from(config).is_err());
    }

    #[test]
    fn rejects_channel_beyond_universe() {
        let config = BeamConfig {
            fixture: FixtureIntrinsics {
                tilt_channel: 513,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(ValidBeamConfig::try_from(config).is_err());
    }

    #[test]
    fn rejects_nan_range() {
        let config = BeamConfig {
            fixture: FixtureIntrinsics {
                pan_range_deg: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(ValidBeamConfig::try_from(config).is_err());
    }
}
