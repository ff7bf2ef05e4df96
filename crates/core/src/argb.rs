//! Packed 32-bit ARGB colours.
//!
//! Colours are stored as `0xAARRGGBB`. Palette entries are packed opaque and
//! re-packed with a per-frame alpha right before drawing.

const ALPHA_SHIFT: u32 = 24;
const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;

const CHANNEL_MASK: u32 = 0xFF;

/// Pack an opaque colour from its red, green and blue channels.
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    pack_argb(0xFF, r, g, b)
}

/// Pack a colour from all four channels.
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << ALPHA_SHIFT)
        | ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
}

/// Replace the alpha channel of `color`, keeping RGB untouched.
pub const fn with_alpha(color: u32, alpha: u8) -> u32 {
    (color & 0x00FF_FFFF) | ((alpha as u32) << ALPHA_SHIFT)
}

/// Alpha channel of a packed colour.
pub const fn alpha(color: u32) -> u8 {
    ((color >> ALPHA_SHIFT) & CHANNEL_MASK) as u8
}

/// Red channel of a packed colour.
pub const fn red(color: u32) -> u8 {
    ((color >> RED_SHIFT) & CHANNEL_MASK) as u8
}

/// Green channel of a packed colour.
pub const fn green(color: u32) -> u8 {
    ((color >> GREEN_SHIFT) & CHANNEL_MASK) as u8
}

/// Blue channel of a packed colour.
pub const fn blue(color: u32) -> u8 {
    ((color >> BLUE_SHIFT) & CHANNEL_MASK) as u8
}

/// Map a normalized value in `[0, 1]` to an 8-bit channel.
///
/// Out-of-range input saturates; NaN maps to zero.
pub fn unit_to_byte(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
