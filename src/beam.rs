use crate::{rotation::Mat3, ValidBeamConfig, DMX_MAX};

/// Beam vector of the fixture before any rotation: pointing forward along +Y.
pub const BEAM_LOCAL: [f64; 3] = [0., 1., 0.];

/// Unit direction a fixture's beam points toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamDirection {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BeamDirection {
    pub fn norm(&self) -> f64 {
        crate::rotation::norm((*self).into())
    }
}

impl From<BeamDirection> for [f64; 3] {
    fn from(value: BeamDirection) -> Self {
        [value.x, value.y, value.z]
    }
}

/// `repr(C)` single-precision point for hand-off to renderers and point-cloud
/// writers. A `&[BeamPoint]` casts to bytes via `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BeamPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<BeamDirection> for BeamPoint {
    fn from(value: BeamDirection) -> Self {
        Self {
            x: value.x as f32,
            y: value.y as f32,
            z: value.z as f32,
        }
    }
}

impl ValidBeamConfig {
    /// Maps raw pan/tilt channel values to the global beam direction.
    ///
    /// Values scale linearly against the fixture's rotation ranges, tilt is
    /// applied about X first, then pan about Z. Inputs are taken as-is:
    /// values outside 0..=255 rotate past the mechanical range and non-finite
    /// values propagate through the trigonometry unchanged.
    pub fn beam_direction(&self, dmx_pan: f64, dmx_tilt: f64) -> BeamDirection {
        let pan_rad = (dmx_pan / DMX_MAX * self.fixture().pan_range_deg).to_radians();
        let tilt_rad = (dmx_tilt / DMX_MAX * self.fixture().tilt_range_deg).to_radians();

        let tilted = Mat3::rotation_x(tilt_rad).mul_vec(BEAM_LOCAL);
        let [x, y, z] = Mat3::rotation_z(pan_rad).mul_vec(tilted);
        BeamDirection { x, y, z }
    }

    /// Reads the configured pan/tilt channels out of a raw DMX universe frame
    /// and maps them. Channels are 1-based, so channel 1 is `frame[0]`.
    pub fn beam_from_frame(&self, frame: &[u8]) -> Result<BeamDirection, FrameTooShort> {
        let read = |channel: u16| {
            frame
                .get(channel as usize - 1)
                .copied()
                .ok_or(FrameTooShort {
                    needed: channel as usize,
                    actual: frame.len(),
                })
        };
        let pan = read(self.fixture().pan_channel)?;
        let tilt = read(self.fixture().tilt_channel)?;
        Ok(self.beam_direction(pan as f64, tilt as f64))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("Frame with {actual} channels doesn't reach channel {needed}")]
pub struct FrameTooShort {
    needed: usize,
    actual: usize,
}
