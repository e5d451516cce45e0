//! Frame generators used by the batch operations
//!
//! Effects render into a sub-slice of a frame. They receive the absolute
//! index of the first pixel so patterns stay anchored to the physical strip
//! regardless of the offset in use.

mod palette;
mod rainbow;

pub use palette::PaletteEffect;
pub use rainbow::RainbowEffect;

use crate::color::Rgb;

pub trait Effect {
    /// Render a frame where `leds[0]` is pixel `first` of the strip
    fn render(&self, first: usize, leds: &mut [Rgb]);
}
