//! Global brightness scaling
//!
//! Scaling is applied to the live frame in place. It is lossy: every pass
//! multiplies the stored values again, so two passes at `0.5` leave a quarter
//! of the original channel values.

use super::Filter;
use crate::color::Rgb;

/// Scales every channel by a floating point level
///
/// Levels of `1.0` and above leave the frame untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessFilter {
    level: f64,
}

impl Default for BrightnessFilter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl BrightnessFilter {
    pub const fn new(level: f64) -> Self {
        Self { level }
    }

    pub const fn level(self) -> f64 {
        self.level
    }

    pub fn set(&mut self, level: f64) {
        self.level = level;
    }

    /// Check if applying the filter changes anything
    pub fn is_dimming(self) -> bool {
        self.level < 1.0
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if !self.is_dimming() {
            return;
        }
        for pixel in frame {
            pixel.r = scale_channel(pixel.r, self.level);
            pixel.g = scale_channel(pixel.g, self.level);
            pixel.b = scale_channel(pixel.b, self.level);
        }
    }
}

/// Multiply a channel by `level`, rounding half to even
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, level: f64) -> u8 {
    libm::rint(f64::from(value) * level) as u8
}
