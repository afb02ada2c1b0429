//! Serpentine grid addressing.
//!
//! The strip is wired in a zig-zag manner: even columns run top to bottom and odd
//! columns run bottom to top. For a 3x3 panel the physical indices are laid out as:
//!
//! ```text
//! 0 5 6
//! 1 4 7
//! 2 3 8
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What to do with coordinates that fall outside of the grid.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CoordinateMode {
    /// Out-of-range coordinates do not map to any pixel, so writes to them are dropped.
    #[default]
    Discard,
    /// Each out-of-range coordinate is replaced by zero before translating.
    ClampToOrigin,
}

/// Immutable shape of a LED panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Geometry {
    width: u16,
    height: u16,
    mode: CoordinateMode,
}

impl Geometry {
    /// Creates a geometry of a `width` x `height` serpentine panel.
    pub fn grid(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGeometry);
        }

        Ok(Self {
            width,
            height,
            mode: CoordinateMode::Discard,
        })
    }

    /// Creates a geometry of a plain strip with the given number of LEDs.
    ///
    /// A strip is a grid with a single row, so the translation degenerates to direct
    /// indexing.
    pub fn strip(len: u16) -> Result<Self> {
        Self::grid(len, 1)
    }

    /// Returns the same geometry with a different out-of-range coordinates policy.
    #[must_use]
    pub const fn with_mode(mut self, mode: CoordinateMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub const fn mode(&self) -> CoordinateMode {
        self.mode
    }

    /// Total number of LEDs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the point lies on the grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }

    /// Translates grid coordinates into an index of the LED in the strip.
    ///
    /// Returns `None` if the point lies outside of the grid and the coordinate mode is
    /// [`CoordinateMode::Discard`].
    #[must_use]
    pub fn translate(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = match self.mode {
            CoordinateMode::Discard => {
                if !self.contains(x, y) {
                    return None;
                }
                (x, y)
            }
            CoordinateMode::ClampToOrigin => {
                let x = if (0..i32::from(self.width)).contains(&x) { x } else { 0 };
                let y = if (0..i32::from(self.height)).contains(&y) { y } else { 0 };
                (x, y)
            }
        };

        // Both coordinates are within the grid here, so they are non-negative.
        let (x, y) = (x.unsigned_abs() as usize, y.unsigned_abs() as usize);
        let height = usize::from(self.height);
        let index = if x % 2 == 1 {
            (x + 1) * height - 1 - y
        } else {
            x * height + y
        };
        Some(index)
    }
}
