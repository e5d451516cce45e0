//! Rainbow spread along the strip
//!
//! Every pixel takes the next position of the 256-step color wheel, so a full
//! hue cycle spans 256 pixels.

use super::Effect;
use crate::color::{Rgb, wheel};

#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect {
    /// Phase offset on the wheel, taken modulo 256
    shift: usize,
}

impl RainbowEffect {
    pub const fn new(shift: usize) -> Self {
        Self { shift }
    }

    /// Wheel position of the pixel at `index`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn position(self, index: usize) -> u8 {
        (index as u8).wrapping_add(self.shift as u8)
    }
}

impl Effect for RainbowEffect {
    fn render(&self, first: usize, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = wheel(self.position(first + i));
        }
    }
}
