//! Peripheral clocked transmission.
//!
//! The hardware SPI block does the shifting, it should be configured by the board in
//! [`SPI_MODE`]: master, clock idle low, sampling on the leading edge, most significant
//! bit first. The WS2801 handles clocks up to 25MHz, a couple of megahertz is a safe
//! choice for long strands.

use core::convert::Infallible;

use embedded_hal::{
    digital::{self, OutputPin},
    spi::{self, SpiBus},
};
use pixelgrid_core::Color;

use crate::{frame_bytes, Error, Transmitter};

/// SPI mode expected by the WS2801 chips.
pub const SPI_MODE: spi::Mode = spi::MODE_0;

/// A stand-in framing line for setups without a logic analyzer attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFraming;

impl digital::ErrorType for NoFraming {
    type Error = Infallible;
}

impl OutputPin for NoFraming {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Transmitter driven by a synchronous serial peripheral.
///
/// Every byte is written to the bus separately and the transmitter waits until the
/// peripheral reports the transfer completion before sending the next one. The
/// optional framing line is pulled low for the frame duration, it only helps
/// protocol analyzers to find frame boundaries and is not seen by the LEDs.
#[derive(Debug)]
pub struct SpiTransmitter<SPI, CS = NoFraming> {
    spi: SPI,
    framing: CS,
}

impl<SPI> SpiTransmitter<SPI, NoFraming> {
    /// Creates a transmitter without a framing line.
    pub fn new(spi: SPI) -> Self {
        Self::with_framing(spi, NoFraming)
    }
}

impl<SPI, CS> SpiTransmitter<SPI, CS> {
    /// Creates a transmitter that toggles the given line around each frame.
    pub fn with_framing(spi: SPI, framing: CS) -> Self {
        Self { spi, framing }
    }

    /// Releases the underlying peripherals.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.framing)
    }
}

impl<SPI, CS> Transmitter for SpiTransmitter<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = Error<SPI::Error, CS::Error>;

    fn transmit<I>(&mut self, frame: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Color>,
    {
        self.framing.set_low().map_err(Error::Pin)?;
        for byte in frame_bytes(frame) {
            self.spi.write(&[byte]).map_err(Error::Bus)?;
            // Wait until the byte has been shifted out.
            self.spi.flush().map_err(Error::Bus)?;
        }
        self.framing.set_high().map_err(Error::Pin)
    }
}
