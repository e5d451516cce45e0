use super::Effect;
use crate::color::{Rgb, rgb_from_u32};

/// Repeats a short list of colors along the strip
///
/// Pixel `i` gets `colors[i % colors.len()]`, so two colors give an
/// alternating pattern.
#[derive(Debug, Clone, Copy)]
pub struct PaletteEffect<'a> {
    colors: &'a [u32],
}

impl<'a> PaletteEffect<'a> {
    /// Create a palette effect from 0xRRGGBB colors
    pub const fn new(colors: &'a [u32]) -> Self {
        Self { colors }
    }
}

impl Effect for PaletteEffect<'_> {
    fn render(&self, first: usize, leds: &mut [Rgb]) {
        if self.colors.is_empty() {
            return;
        }
        for (i, led) in leds.iter_mut().enumerate() {
            let index = (first + i) % self.colors.len();
            *led = rgb_from_u32(self.colors[index]);
        }
    }
}
