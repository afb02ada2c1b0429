use crate::Color;

/// Upper bound (exclusive) of randomly generated packed colors.
pub const RANDOM_COLOR_LIMIT: u32 = 0x00FF_FFFF;

/// Source of pseudo-random numbers used by the randomized effects.
///
/// Boards usually implement it on top of a hardware RNG peripheral.
pub trait RandomSource {
    /// Returns the next random 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Returns a random packed color in the `[0, 0xFF_FFFE]` range.
    fn next_color(&mut self) -> Color {
        Color::from_packed(self.next_u32() % RANDOM_COLOR_LIMIT)
    }
}

impl<T: ?Sized + RandomSource> RandomSource for &mut T {
    fn next_u32(&mut self) -> u32 {
        T::next_u32(self)
    }
}

/// Tiny xorshift generator, good enough for blinking lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Creates a new generator, a zero seed is replaced by a fixed non-zero one.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
