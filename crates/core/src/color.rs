//! Packed 24-bit RGB colors.

use serde::{Deserialize, Serialize};
use smart_leds::RGB8;

/// Mask of the meaningful color bits in a packed cell.
pub const COLOR_MASK: u32 = 0x00FF_FFFF;
/// Number of bytes sent over the wire for a single pixel.
pub const BYTES_PER_PIXEL: usize = 3;

/// A single pixel color packed as `(r << 16) | (g << 8) | b`.
///
/// The top 8 bits of the cell are always zero.
#[derive(
    Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default,
)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    /// Black, also used as the "transparent" value when a background is present.
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Packs separate channels into a single color value.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Creates a color from a packed value, the bits above 24 are dropped.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed & COLOR_MASK)
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        self.0 == 0
    }

    /// Returns the bytes of this color in the wire order: red, green, blue.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<RGB8> for Color {
    fn from(value: RGB8) -> Self {
        Self::new(value.r, value.g, value.b)
    }
}

impl From<Color> for RGB8 {
    fn from(value: Color) -> Self {
        Self {
            r: value.r(),
            g: value.g(),
            b: value.b(),
        }
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.packed()
    }
}
