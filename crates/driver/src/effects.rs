//! Canned animations.
//!
//! These are the only routines that interleave drawing and transmission. Each one runs
//! its sweep to the end, a caller that wants an interruptible animation should drive
//! the drawing primitives and [`Strip::show`] frame by frame instead.

use embedded_hal::delay::DelayNs;
use pixelgrid_core::{Canvas, Color, RandomSource};

use crate::{Strip, Transmitter};

/// Direction of the [`Strip::move_lines`] wipe.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Wipe {
    /// Full rows from the top row down.
    Down,
    /// Full rows from the bottom row up.
    Up,
    /// Full columns from the left column to the right.
    Right,
    /// Full columns from the right column to the left.
    Left,
}

impl<B, T> Strip<B, T>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
    T: Transmitter,
{
    /// Sends the frame and waits for the given number of milliseconds.
    fn show_and_wait<D: DelayNs>(&mut self, delay: &mut D, delay_ms: u32) -> Result<(), T::Error> {
        self.show()?;
        delay.delay_ms(delay_ms);
        Ok(())
    }

    /// Runs a single dot with a fading tail along the whole strip.
    ///
    /// The head enters from before the first LED and leaves past the last one, so the
    /// sweep takes `len + tail` frames. The tail brightness decreases by `255 / tail`
    /// per LED and each channel is limited to 254.
    ///
    /// The head LED itself is lit at full brightness and counts as the first tail cell,
    /// so at most `tail` LEDs glow at once. Older strip sketches left the head dark and
    /// started the fade one LED behind it.
    pub fn comet<D: DelayNs>(
        &mut self,
        delay: &mut D,
        delay_ms: u32,
        (r, g, b): (u8, u8, u8),
        tail: usize,
    ) -> Result<(), T::Error> {
        log::debug!("Starting comet, tail: {tail}");

        let step = 255_usize.checked_div(tail).unwrap_or_default();
        for head in 0..self.len() + tail {
            self.clear();
            for distance in 0..tail {
                let Some(index) = head.checked_sub(distance) else {
                    break;
                };

                let dim = u8::try_from(step * distance).unwrap_or(u8::MAX);
                let fade = |channel: u8| channel.saturating_sub(dim).min(254);
                self.set_pixel(index, Color::new(fade(r), fade(g), fade(b)));
            }
            self.show_and_wait(delay, delay_ms)?;
        }
        Ok(())
    }

    /// Shows `repeat` frames of random colors.
    pub fn twinkle<D, R>(
        &mut self,
        delay: &mut D,
        delay_ms: u32,
        repeat: usize,
        rng: &mut R,
    ) -> Result<(), T::Error>
    where
        D: DelayNs,
        R: RandomSource + ?Sized,
    {
        log::debug!("Starting twinkle, {repeat} cycles");

        for _ in 0..repeat {
            self.fill_random(rng);
            self.show_and_wait(delay, delay_ms)?;
        }
        Ok(())
    }

    /// Wipes full lines across the panel, then erases them along the same path.
    pub fn move_lines<D: DelayNs>(
        &mut self,
        delay: &mut D,
        wipe: Wipe,
        delay_ms: u32,
        color: Color,
    ) -> Result<(), T::Error> {
        log::debug!("Starting lines wipe {wipe:?}");

        let width = i32::from(self.geometry().width());
        let height = i32::from(self.geometry().height());
        let count = match wipe {
            Wipe::Down | Wipe::Up => height,
            Wipe::Right | Wipe::Left => width,
        };

        for color in [color, Color::BLACK] {
            for step in 0..count {
                match wipe {
                    Wipe::Down => self.line(0, step, width - 1, step, color),
                    Wipe::Up => {
                        let y = height - 1 - step;
                        self.line(0, y, width - 1, y, color);
                    }
                    Wipe::Right => self.line(step, 0, step, height - 1, color),
                    Wipe::Left => {
                        let x = width - 1 - step;
                        self.line(x, 0, x, height - 1, color);
                    }
                }
                self.show_and_wait(delay, delay_ms)?;
            }
        }
        Ok(())
    }

    /// Rotates a line through the panel, each line is erased right after it is shown.
    pub fn spin_line<D: DelayNs>(
        &mut self,
        delay: &mut D,
        delay_ms: u32,
        color: Color,
    ) -> Result<(), T::Error> {
        log::debug!("Starting spinning line");

        let width = i32::from(self.geometry().width());
        let height = i32::from(self.geometry().height());

        // Pivot across the width.
        for x in 0..width {
            self.line(x, 0, width - 1 - x, height - 1, color);
            self.show_and_wait(delay, delay_ms)?;
            self.line(x, 0, width - 1 - x, height - 1, Color::BLACK);
        }
        // Then across the height, the corners have already been visited.
        for y in 1..height - 1 {
            self.line(0, height - 1 - y, width - 1, y, color);
            self.show_and_wait(delay, delay_ms)?;
            self.line(0, height - 1 - y, width - 1, y, Color::BLACK);
        }
        Ok(())
    }
}
