use crate::color::Rgb;

/// Pack red, green, blue channels into a 24-bit color (0xRRGGBB format)
///
/// Only the low 8 bits of each channel are kept, so `pack(256, 0, 0)` is
/// black. Negative values wrap the same way (`-1` becomes `0xFF`).
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn pack(r: i32, g: i32, b: i32) -> u32 {
    (((r & 0xFF) as u32) << 16) | (((g & 0xFF) as u32) << 8) | ((b & 0xFF) as u32)
}

/// Split a 24-bit color into its red, green, blue channels
///
/// Bits above the low 24 are ignored.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    let (r, g, b) = unpack(color);
    Rgb { r, g, b }
}

/// Convert an RGB color to a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack(color.r as i32, color.g as i32, color.b as i32)
}
