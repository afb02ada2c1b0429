//! Raster drawing primitives on top of the serpentine grid.
//!
//! Every primitive boils down to `set_pixel(translate(x, y), color)`, so the bounds
//! checking happens in a single place and drawing partially outside of the panel is
//! perfectly fine. Coordinates are widened to `i64` internally, so any `i32` input is
//! valid, and with discarded coordinates the walks are clipped to the panel.

use core::{mem::swap, ops::BitOr};

use crate::{Color, CoordinateMode, Framebuffer, Geometry};

/// Axis aligned drawing direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Direction {
    /// Towards the increasing `x`.
    Right = 0,
    /// Towards the increasing `y`.
    Down = 1,
    /// Towards the decreasing `x`.
    Left = 2,
    /// Towards the decreasing `y`.
    Up = 3,
}

impl Direction {
    /// Decodes the legacy numeric direction: 0=right, 1=down, 2=left, 3=up.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Right),
            1 => Some(Self::Down),
            2 => Some(Self::Left),
            3 => Some(Self::Up),
            _ => None,
        }
    }

    const fn step(self) -> (i64, i64) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }
}

/// Set of circle quadrants to draw, see [`Canvas::circle_quadrants`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Quadrants(u8);

impl Quadrants {
    /// Mirrors the octant into `(-y, -x)` and `(-x, -y)`.
    pub const LOWER_LEFT: Self = Self(0x1);
    /// Mirrors the octant into `(+x, -y)` and `(+y, -x)`.
    pub const LOWER_RIGHT: Self = Self(0x2);
    /// Mirrors the octant into `(+x, +y)` and `(+y, +x)`.
    pub const UPPER_RIGHT: Self = Self(0x4);
    /// Mirrors the octant into `(-y, +x)` and `(-x, +y)`.
    pub const UPPER_LEFT: Self = Self(0x8);
    /// The whole circle.
    pub const ALL: Self = Self(0xF);

    /// Creates a quadrant set from the raw 4-bit corner mask.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Quadrants {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Something that can be painted using grid coordinates.
pub trait Canvas {
    /// Returns the geometry used to translate grid coordinates.
    fn geometry(&self) -> &Geometry;

    /// Sets the color of the LED with the given strip index, out of range indices must
    /// be ignored.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Paints a single grid cell.
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.geometry().translate(x, y) {
            self.set_pixel(index, color);
        }
    }

    /// Draws `len` consecutive cells starting at `(x, y)` in the given direction.
    fn hv_line(&mut self, x: i32, y: i32, len: i32, direction: Direction, color: Color) {
        walk(self, i64::from(x), i64::from(y), i64::from(len), direction, color);
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let delta_x = x1 - x0;
        let delta_y = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };

        let geometry = *self.geometry();
        let extent = if steep {
            geometry.height()
        } else {
            geometry.width()
        };
        let (first, last) = clip(&geometry, 0, 1, extent, (x0, x1));

        // Resume the error term at the first visible column, the state after `k` steps
        // is `k * dy - n * dx` with `n = (2 * k * dy + dx) / (2 * dx)` increments.
        let skipped = i128::from(first - x0);
        let increments = if delta_x == 0 {
            0
        } else {
            (2 * skipped * i128::from(delta_y) + i128::from(delta_x)) / (2 * i128::from(delta_x))
        };
        let mut error = (skipped * i128::from(delta_y) - increments * i128::from(delta_x)) as i64;
        let mut y = y0 + y_step * increments as i64;
        for x in first..=last {
            if steep {
                plot_wide(self, y, x, color);
            } else {
                plot_wide(self, x, y, color);
            }

            error += delta_y;
            if 2 * error >= delta_x {
                y += y_step;
                error -= delta_x;
            }
        }
    }

    /// Draws a rectangle outline with the given opposite corners.
    fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        // A rectangle without area is just a line.
        if x0 == x1 || y0 == y1 {
            self.line(x0, y0, x1, y1, color);
            return;
        }

        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (width, height) = (x1 - x0, y1 - y0);
        walk(self, x0, y0, width, Direction::Right, color);
        walk(self, x1, y0, height, Direction::Down, color);
        walk(self, x1, y1, width, Direction::Left, color);
        walk(self, x0, y1, height, Direction::Up, color);
    }

    /// Draws a filled rectangle with the given opposite corners.
    ///
    /// Both the `y0` and `y1` rows are filled, so the area covers the outline drawn by
    /// [`Canvas::rect`]. Older panel sketches stopped one row short of `y1`.
    fn rect_fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = (i64::from(x0.min(x1)), i64::from(x0.max(x1)));
        let (y0, y1) = (i64::from(y0.min(y1)), i64::from(y0.max(y1)));

        let geometry = *self.geometry();
        let (first, last) = clip(&geometry, 0, 1, geometry.width(), (x0, x1));
        for x in first..=last {
            walk(self, x, y0, y1 - y0 + 1, Direction::Down, color);
        }
    }

    /// Draws a triangle outline.
    fn triangle(&mut self, p0: (i32, i32), p1: (i32, i32), p2: (i32, i32), color: Color) {
        self.line(p0.0, p0.1, p1.0, p1.1, color);
        self.line(p1.0, p1.1, p2.0, p2.1, color);
        self.line(p2.0, p2.1, p0.0, p0.1, color);
    }

    /// Draws a circle outline using the midpoint circle algorithm.
    fn circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }

        let (cx, cy, radius) = (i64::from(x0), i64::from(y0), i64::from(r));
        plot_wide(self, cx, cy + radius, color);
        plot_wide(self, cx, cy - radius, color);
        plot_wide(self, cx + radius, cy, color);
        plot_wide(self, cx - radius, cy, color);

        self.circle_quadrants(x0, y0, r, Quadrants::ALL, color);
    }

    /// Walks a single octant of the circle and mirrors it into the selected quadrants.
    ///
    /// The four axis extrema are not drawn by this method.
    fn circle_quadrants(&mut self, x0: i32, y0: i32, r: i32, quadrants: Quadrants, color: Color) {
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));

        // Each mirrored point is offset by `x` along one of the axes, past the farthest
        // panel cell they are all invisible.
        let geometry = *self.geometry();
        let limit = match geometry.mode() {
            CoordinateMode::Discard => reach(x0, geometry.width()).max(reach(y0, geometry.height())),
            CoordinateMode::ClampToOrigin => i64::MAX,
        };

        let mut f = 1 - r;
        let mut dd_f_x = 1;
        let mut dd_f_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y && x < limit {
            if f >= 0 {
                y -= 1;
                dd_f_y += 2;
                f += dd_f_y;
            }
            x += 1;
            dd_f_x += 2;
            f += dd_f_x;

            if quadrants.contains(Quadrants::UPPER_RIGHT) {
                plot_wide(self, x0 + x, y0 + y, color);
                plot_wide(self, x0 + y, y0 + x, color);
            }
            if quadrants.contains(Quadrants::LOWER_RIGHT) {
                plot_wide(self, x0 + x, y0 - y, color);
                plot_wide(self, x0 + y, y0 - x, color);
            }
            if quadrants.contains(Quadrants::UPPER_LEFT) {
                plot_wide(self, x0 - y, y0 + x, color);
                plot_wide(self, x0 - x, y0 + y, color);
            }
            if quadrants.contains(Quadrants::LOWER_LEFT) {
                plot_wide(self, x0 - y, y0 - x, color);
                plot_wide(self, x0 - x, y0 - y, color);
            }
        }
    }
}

/// Plots a point of the widened plane, saturated coordinates are off the panel anyway.
fn plot_wide<C: Canvas + ?Sized>(canvas: &mut C, x: i64, y: i64, color: Color) {
    let narrow = |value: i64| value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    canvas.plot(narrow(x), narrow(y), color);
}

/// Narrows the inclusive parameter range of the walk `origin + step * t` to the values
/// that land inside `0..extent`.
///
/// Clamped geometries map off-panel points onto the panel, so their walks are kept whole.
fn clip(
    geometry: &Geometry,
    origin: i64,
    step: i64,
    extent: u16,
    (first, last): (i64, i64),
) -> (i64, i64) {
    if geometry.mode() == CoordinateMode::ClampToOrigin {
        return (first, last);
    }

    let extent = i64::from(extent);
    let (low, high) = if step > 0 {
        (-origin, extent - 1 - origin)
    } else {
        (origin - extent + 1, origin)
    };
    (first.max(low), last.min(high))
}

/// Distance from `center` to the farthest cell along an axis of the given extent.
fn reach(center: i64, extent: u16) -> i64 {
    let far = i64::from(extent) - 1;
    center.abs().max((center - far).abs())
}

fn walk<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i64,
    y: i64,
    len: i64,
    direction: Direction,
    color: Color,
) {
    let (dx, dy) = direction.step();
    let geometry = *canvas.geometry();
    let (first, last) = if dx == 0 {
        clip(&geometry, y, dy, geometry.height(), (0, len - 1))
    } else {
        clip(&geometry, x, dx, geometry.width(), (0, len - 1))
    };

    for t in first..=last {
        plot_wide(canvas, x + dx * t, y + dy * t, color);
    }
}

impl<B> Canvas for Framebuffer<B>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
{
    fn geometry(&self) -> &Geometry {
        Framebuffer::geometry(self)
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        Framebuffer::set_pixel(self, index, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::from_code(0), Some(Direction::Right));
        assert_eq!(Direction::from_code(1), Some(Direction::Down));
        assert_eq!(Direction::from_code(2), Some(Direction::Left));
        assert_eq!(Direction::from_code(3), Some(Direction::Up));
        assert_eq!(Direction::from_code(4), None);
    }

    #[test]
    fn test_quadrants_bits() {
        let mask = Quadrants::LOWER_LEFT | Quadrants::UPPER_RIGHT;
        assert_eq!(mask.bits(), 0x5);
        assert!(mask.contains(Quadrants::UPPER_RIGHT));
        assert!(!mask.contains(Quadrants::LOWER_RIGHT));
        assert_eq!(Quadrants::from_bits(0xFF), Quadrants::ALL);
        assert_eq!(
            Quadrants::LOWER_LEFT
                | Quadrants::LOWER_RIGHT
                | Quadrants::UPPER_RIGHT
                | Quadrants::UPPER_LEFT,
            Quadrants::ALL
        );
    }
}
