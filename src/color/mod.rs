mod utils;
mod wheel;

use smart_leds::RGB8;
pub use utils::{pack, rgb_from_u32, rgb_to_u32, unpack};
pub use wheel::wheel;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Dim white used by the on/off helpers
pub const ON_COLOR: Rgb = Rgb {
    r: 100,
    g: 100,
    b: 100,
};
