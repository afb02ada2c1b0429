//! Manually clocked transmission over two output lines.

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use pixelgrid_core::Color;
use serde::{Deserialize, Serialize};

use crate::{frame_bytes, Transmitter};

/// Time the clock line should be held low to latch the received colors.
pub const DEFAULT_LATCH_US: u32 = 1_000;

/// Timings of the manually clocked bus.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitBangTiming {
    /// How long the clock line stays low before and after each frame, in microseconds.
    pub latch_us: u32,
    /// Extra delay after each clock edge, in nanoseconds. Zero toggles the lines as
    /// fast as the pins allow.
    pub half_period_ns: u32,
}

impl Default for BitBangTiming {
    fn default() -> Self {
        Self {
            latch_us: DEFAULT_LATCH_US,
            half_period_ns: 0,
        }
    }
}

/// Transmitter that toggles the clock and data lines directly.
///
/// For each bit the clock goes low, the data line takes the bit value and then the
/// clock goes high, the WS2801 samples data on the rising edge.
#[derive(Debug)]
pub struct BitBangTransmitter<CLK, DAT, D> {
    clock: CLK,
    data: DAT,
    delay: D,
    timing: BitBangTiming,
}

impl<CLK, DAT, D> BitBangTransmitter<CLK, DAT, D>
where
    CLK: OutputPin,
    DAT: OutputPin<Error = CLK::Error>,
    D: DelayNs,
{
    /// Creates a transmitter with the default timings.
    pub fn new(clock: CLK, data: DAT, delay: D) -> Self {
        Self::with_timing(clock, data, delay, BitBangTiming::default())
    }

    pub fn with_timing(clock: CLK, data: DAT, delay: D, timing: BitBangTiming) -> Self {
        Self {
            clock,
            data,
            delay,
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> BitBangTiming {
        self.timing
    }

    /// Releases the underlying pins and delay.
    pub fn release(self) -> (CLK, DAT, D) {
        (self.clock, self.data, self.delay)
    }

    /// Holds the clock line low long enough for the chips to latch or reset.
    pub fn latch(&mut self) -> Result<(), CLK::Error> {
        self.clock.set_low()?;
        self.delay.delay_us(self.timing.latch_us);
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), CLK::Error> {
        let mask = 0b1000_0000_u8;
        for i in 0..8 {
            self.clock.set_low()?;
            if (mask >> i) & byte == 0 {
                self.data.set_low()?;
            } else {
                self.data.set_high()?;
            }
            self.half_period();
            self.clock.set_high()?;
            self.half_period();
        }

        Ok(())
    }

    fn half_period(&mut self) {
        if self.timing.half_period_ns > 0 {
            self.delay.delay_ns(self.timing.half_period_ns);
        }
    }
}

impl<CLK, DAT, D> Transmitter for BitBangTransmitter<CLK, DAT, D>
where
    CLK: OutputPin,
    DAT: OutputPin<Error = CLK::Error>,
    D: DelayNs,
{
    type Error = CLK::Error;

    fn transmit<I>(&mut self, frame: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Color>,
    {
        // Reset the chain, then latch the last pixel after the frame.
        self.latch()?;
        for byte in frame_bytes(frame) {
            self.send_byte(byte)?;
        }
        self.latch()
    }
}
