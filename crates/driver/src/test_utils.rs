//! Test helpers
//!
//! Recording implementations of the `embedded-hal` traits, so the exact bus traffic
//! can be inspected without any hardware.

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin},
    spi::{self, SpiBus},
};
use pixelgrid_core::Color;

use crate::Transmitter;

/// Output line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
    Framing,
}

/// A single recorded interaction with the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// A byte has been written to the SPI peripheral.
    Write(u8),
    /// The SPI peripheral has been waited for.
    Flush,
    /// The line has been driven low.
    Low(Line),
    /// The line has been driven high.
    High(Line),
    /// Blocking delay, in nanoseconds.
    Delay(u64),
}

/// Shared log of the bus events.
#[derive(Debug, Clone, Default)]
pub struct BusLog(Rc<RefCell<Vec<BusEvent>>>);

impl BusLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: BusEvent) {
        self.0.borrow_mut().push(event);
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<BusEvent> {
        self.0.borrow().clone()
    }

    /// Returns the recorded events and clears the log.
    #[must_use]
    pub fn take(&self) -> Vec<BusEvent> {
        self.0.take()
    }

    /// Creates a SPI peripheral that writes to this log.
    #[must_use]
    pub fn spi(&self) -> RecordingSpi {
        RecordingSpi { log: self.clone() }
    }

    /// Creates an output line that writes to this log.
    #[must_use]
    pub fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            log: self.clone(),
        }
    }

    /// Creates a delay that writes to this log.
    #[must_use]
    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }
}

/// SPI peripheral stub.
#[derive(Debug, Clone)]
pub struct RecordingSpi {
    log: BusLog,
}

impl spi::ErrorType for RecordingSpi {
    type Error = Infallible;
}

impl SpiBus<u8> for RecordingSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &word in words {
            self.log.push(BusEvent::Write(word));
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)?;
        self.read(read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)?;
        self.read(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.push(BusEvent::Flush);
        Ok(())
    }
}

/// Output line stub.
#[derive(Debug, Clone)]
pub struct RecordingPin {
    line: Line,
    log: BusLog,
}

impl digital::ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(BusEvent::Low(self.line));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(BusEvent::High(self.line));
        Ok(())
    }
}

/// Delay stub that returns immediately.
#[derive(Debug, Clone)]
pub struct RecordingDelay {
    log: BusLog,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(BusEvent::Delay(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(BusEvent::Delay(u64::from(us) * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(BusEvent::Delay(u64::from(ms) * 1_000_000));
    }
}

/// Transmitter that keeps every sent frame.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<Vec<Color>>,
}

impl Transmitter for FrameRecorder {
    type Error = Infallible;

    fn transmit<I>(&mut self, frame: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Color>,
    {
        self.frames.push(frame.into_iter().collect());
        Ok(())
    }
}

/// Reassembles the bytes sampled by the chips on the rising clock edges.
#[must_use]
pub fn sampled_bytes(events: &[BusEvent]) -> Vec<u8> {
    let mut data = false;
    let mut bits = Vec::new();
    for event in events {
        match event {
            BusEvent::Low(Line::Data) => data = false,
            BusEvent::High(Line::Data) => data = true,
            BusEvent::High(Line::Clock) => bits.push(data),
            _ => {}
        }
    }

    bits.chunks(8)
        .map(|byte| byte.iter().fold(0_u8, |acc, &bit| acc << 1 | u8::from(bit)))
        .collect()
}
