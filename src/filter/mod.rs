use crate::color::Rgb;

mod brightness;

pub use brightness::BrightnessFilter;

pub trait Filter {
    /// Apply the filter to a frame in place
    fn apply(&mut self, frame: &mut [Rgb]);
}
