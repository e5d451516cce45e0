use crate::color::Rgb;

/// Length of one linear segment of the wheel
const SEGMENT: u8 = 85;

/// Map a position on the 256-step color wheel to a color
///
/// The wheel is made of three linear segments of 85 positions each. Inside a
/// segment one channel ramps up as `step * 3` while another ramps down as
/// `255 - step * 3`:
///
/// - `0..85`: green fades into red
/// - `85..170`: red fades into blue
/// - `170..=255`: blue fades into green
pub const fn wheel(pos: u8) -> Rgb {
    if pos < SEGMENT {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < SEGMENT * 2 {
        let step = pos - SEGMENT;
        Rgb {
            r: 255 - step * 3,
            g: 0,
            b: step * 3,
        }
    } else {
        let step = pos - SEGMENT * 2;
        Rgb {
            r: 0,
            g: step * 3,
            b: 255 - step * 3,
        }
    }
}
