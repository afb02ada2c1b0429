use serde::{Deserialize, Serialize};

use crate::{grid::CoordinateMode, Geometry, Result};

/// Default panel width, a single 25 LEDs strand.
pub const DEFAULT_WIDTH: u16 = 25;
/// Default panel height.
pub const DEFAULT_HEIGHT: u16 = 1;

/// A LED panel configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The number of columns, or the number of LEDs for a plain strip.
    pub width: u16,
    /// The number of rows, `1` for a plain strip.
    pub height: u16,
    /// Policy for the coordinates outside of the panel.
    #[serde(default)]
    pub coordinates: CoordinateMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            coordinates: CoordinateMode::default(),
        }
    }
}

impl Config {
    /// Creates a configuration for a plain strip.
    #[must_use]
    pub fn strip(len: u16) -> Self {
        Self {
            width: len,
            height: 1,
            ..Self::default()
        }
    }

    /// Creates a configuration for a serpentine panel.
    #[must_use]
    pub fn grid(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validates this configuration and returns the panel geometry.
    pub fn geometry(&self) -> Result<Geometry> {
        Geometry::grid(self.width, self.height).map(|g| g.with_mode(self.coordinates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_config_geometry() {
        let config = Config {
            width: 8,
            height: 4,
            coordinates: CoordinateMode::ClampToOrigin,
        };

        let geometry = config.geometry().unwrap();
        assert_eq!(geometry.len(), 32);
        assert_eq!(geometry.mode(), CoordinateMode::ClampToOrigin);
    }

    #[test]
    fn test_config_strip() {
        let geometry = Config::strip(50).geometry().unwrap();
        assert_eq!(geometry.width(), 50);
        assert_eq!(geometry.height(), 1);
        assert_eq!(geometry.mode(), CoordinateMode::Discard);
    }

    #[test]
    fn test_config_invalid() {
        assert_eq!(Config::grid(0, 3).geometry(), Err(Error::EmptyGeometry));
    }
}
