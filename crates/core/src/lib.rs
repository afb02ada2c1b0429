//! Pixel buffer and raster drawing for serpentine LED panels.
//!
//! A physically one dimensional WS2801 strip is treated as a logical `width` x `height`
//! grid. This crate owns the in-memory image of the strip and the drawing primitives,
//! sending the image to the hardware is left to the `pixelgrid-driver` crate.

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

pub use crate::{
    canvas::{Canvas, Direction, Quadrants},
    color::{Color, BYTES_PER_PIXEL},
    config::Config,
    errors::{Error, Result},
    framebuffer::{Framebuffer, HeaplessFramebuffer},
    grid::{CoordinateMode, Geometry},
    random::{RandomSource, XorShift32},
};

pub mod canvas;
pub mod color;
pub mod config;
pub mod errors;
pub mod framebuffer;
pub mod grid;
pub mod random;
