//! LED strip pixel buffer.

use crate::{Color, Error, Geometry, RandomSource, Result};

/// Pixel buffer with a fixed capacity known at compile time.
pub type HeaplessFramebuffer<const N: usize> = Framebuffer<heapless::Vec<Color, N>>;

/// The in-memory image of a LED strip.
///
/// The foreground holds one packed color per physical LED. An optional background of
/// the same shape shows through every foreground cell that is exactly black; this
/// substitution only happens in [`Framebuffer::composited`] and never mutates either
/// buffer.
#[derive(Debug)]
pub struct Framebuffer<B>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
{
    geometry: Geometry,
    pixels: B,
    background: Option<B>,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
{
    /// Creates a framebuffer on top of the given storage.
    ///
    /// The storage length must be equal to the number of LEDs, the storage is cleared.
    pub fn new(geometry: Geometry, mut pixels: B) -> Result<Self> {
        if pixels.as_ref().len() != geometry.len() {
            return Err(Error::BufferLengthMismatch);
        }
        pixels.as_mut().fill(Color::BLACK);

        Ok(Self {
            geometry,
            pixels,
            background: None,
        })
    }

    /// Attaches a background layer to this framebuffer.
    pub fn with_background(mut self, mut background: B) -> Result<Self> {
        if background.as_ref().len() != self.geometry.len() {
            return Err(Error::BackgroundShapeMismatch);
        }
        background.as_mut().fill(Color::BLACK);

        self.background = Some(background);
        Ok(self)
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the number of LEDs in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.as_ref().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Returns the foreground layer.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        self.pixels.as_ref()
    }

    /// Returns the background layer, if any.
    #[must_use]
    pub fn background(&self) -> Option<&[Color]> {
        self.background.as_ref().map(AsRef::as_ref)
    }

    /// Returns the foreground color of the LED with the given index.
    #[must_use]
    pub fn pixel(&self, index: usize) -> Option<Color> {
        self.pixels().get(index).copied()
    }

    /// Sets the color of the LED with the given index.
    ///
    /// This is the single place where the pixel index is validated: writes past the
    /// end of the strip are silently dropped.
    pub fn set_pixel(&mut self, index: usize, color: Color) {
        match self.pixels.as_mut().get_mut(index) {
            Some(cell) => *cell = color,
            None => log::trace!("Dropped write to pixel {index} of {}", self.geometry.len()),
        }
    }

    /// Sets the color of the LED with the given index from separate channels.
    pub fn set_pixel_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set_pixel(index, Color::new(r, g, b));
    }

    /// Sets the color of every LED in the inclusive range `[start, end]`.
    ///
    /// Does nothing if `start > end`.
    pub fn set_range(&mut self, start: usize, end: usize, color: Color) {
        if start > end {
            return;
        }
        for index in start..=end {
            self.set_pixel(index, color);
        }
    }

    /// Sets all LEDs to a single color.
    pub fn fill(&mut self, color: Color) {
        if let Some(last) = self.len().checked_sub(1) {
            self.set_range(0, last, color);
        }
    }

    /// Turns off all LEDs of the foreground layer.
    pub fn clear(&mut self) {
        self.pixels.as_mut().fill(Color::BLACK);
    }

    /// Assigns an independent random color to every LED.
    pub fn fill_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for index in 0..self.len() {
            self.set_pixel(index, rng.next_color());
        }
    }

    /// Sets the background color of the LED with the given index.
    ///
    /// Does nothing if there is no background layer or the index is out of range.
    pub fn set_background(&mut self, index: usize, color: Color) {
        if let Some(cell) = self
            .background
            .as_mut()
            .and_then(|background| background.as_mut().get_mut(index))
        {
            *cell = color;
        }
    }

    /// Sets the whole background layer to a single color.
    pub fn fill_background(&mut self, color: Color) {
        if let Some(background) = self.background.as_mut() {
            background.as_mut().fill(color);
        }
    }

    /// Turns off the background layer.
    pub fn clear_background(&mut self) {
        self.fill_background(Color::BLACK);
    }

    /// Returns the colors that should be shown on the strip, in the strip order.
    pub fn composited(&self) -> impl Iterator<Item = Color> + ExactSizeIterator + '_ {
        let background = self.background();
        self.pixels()
            .iter()
            .enumerate()
            .map(move |(index, &color)| match background {
                Some(background) if color.is_black() => background[index],
                _ => color,
            })
    }

    /// Splits the framebuffer into its geometry and storage layers.
    pub fn into_inner(self) -> (Geometry, B, Option<B>) {
        (self.geometry, self.pixels, self.background)
    }
}

impl<const N: usize> Framebuffer<heapless::Vec<Color, N>> {
    /// Creates a framebuffer backed by a fixed capacity vector.
    pub fn heapless(geometry: Geometry) -> Result<Self> {
        Self::new(geometry, zeroed(geometry.len())?)
    }

    /// Creates a framebuffer with a background layer backed by fixed capacity vectors.
    pub fn heapless_with_background(geometry: Geometry) -> Result<Self> {
        Self::heapless(geometry)?.with_background(zeroed(geometry.len())?)
    }
}

fn zeroed<const N: usize>(len: usize) -> Result<heapless::Vec<Color, N>> {
    let mut pixels = heapless::Vec::new();
    pixels
        .resize(len, Color::BLACK)
        .map_err(|()| Error::CapacityExceeded)?;
    Ok(pixels)
}
