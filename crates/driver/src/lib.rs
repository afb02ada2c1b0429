//! WS2801 LED panel driver.
//!
//! Pushes [`pixelgrid_core::Framebuffer`] frames to the strip using either a hardware
//! SPI peripheral ([`SpiTransmitter`]) or two manually toggled output lines
//! ([`BitBangTransmitter`]), and provides a few canned animations on top of [`Strip`].

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// Linter configuration
#![warn(unsafe_code, missing_copy_implementations)]
#![warn(clippy::pedantic)]
#![warn(clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub use pixelgrid_core as core;

pub use crate::{
    bitbang::{BitBangTiming, BitBangTransmitter},
    effects::Wipe,
    errors::Error,
    spi::{NoFraming, SpiTransmitter, SPI_MODE},
    strip::Strip,
    transmit::{frame_bytes, Transmitter},
};

pub mod bitbang;
pub mod effects;
pub mod errors;
pub mod spi;
pub mod strip;
pub mod transmit;

#[cfg(feature = "std")]
pub mod test_utils;
