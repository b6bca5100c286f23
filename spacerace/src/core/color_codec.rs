//! Conversions between the unsigned channel values used by images and packed colors, and the
//! signed bytes the game stores per flag channel.
//!
//! A stored byte is the unsigned value shifted down by 128, i.e. unsigned 0 is stored as -128 and
//! unsigned 255 as 127. Both directions use wrapping 8-bit arithmetic.

/// RGB triple in the unsigned domain [0, 255].
pub type Rgb = [u8; 3];

/// RGB triple in the stored domain [-128, 127].
pub type StoredRgb = [i8; 3];

/// pack combines three unsigned channels into a 24-bit color (r << 16 | g << 8 | b).
pub fn pack(rgb: Rgb) -> i32 {
    (rgb[0] as i32) << 16 | (rgb[1] as i32) << 8 | rgb[2] as i32
}

/// unpack splits a packed color into its three unsigned channels. Bits above the lowest 24 are
/// ignored.
pub fn unpack(color: i32) -> Rgb {
    [
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    ]
}

/// to_stored converts an unsigned channel value into its stored representation.
pub fn to_stored(u: u8) -> i8 {
    u.wrapping_sub(128) as i8
}

/// to_unsigned converts a stored channel value back into the unsigned domain.
pub fn to_unsigned(s: i8) -> u8 {
    (s as u8).wrapping_add(128)
}

pub fn rgb_to_stored(rgb: Rgb) -> StoredRgb {
    [to_stored(rgb[0]), to_stored(rgb[1]), to_stored(rgb[2])]
}

pub fn stored_to_rgb(stored: StoredRgb) -> Rgb {
    [
        to_unsigned(stored[0]),
        to_unsigned(stored[1]),
        to_unsigned(stored[2]),
    ]
}

/// stored_from_i64 interprets the lowest 8 bits of an integer field as a stored channel value.
/// Legacy saves keep each channel in a separate integer field of varying width.
pub fn stored_from_i64(val: i64) -> i8 {
    val as u8 as i8
}
