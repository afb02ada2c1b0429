use core::ops::{Deref, DerefMut};

use pixelgrid_core::{Color, Framebuffer};

use crate::Transmitter;

/// A LED strip: the pixel buffer together with the way to send it to the hardware.
///
/// Drawing never transmits by itself, call [`Strip::show`] to push the current frame.
/// The strip dereferences to its [`Framebuffer`], so all buffer and
/// [`Canvas`](pixelgrid_core::Canvas) operations are available directly.
#[derive(Debug)]
pub struct Strip<B, T>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
{
    framebuffer: Framebuffer<B>,
    transmitter: T,
}

impl<B, T> Strip<B, T>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
    T: Transmitter,
{
    pub fn new(framebuffer: Framebuffer<B>, transmitter: T) -> Self {
        let geometry = framebuffer.geometry();
        log::debug!(
            "Created a LED strip {}x{}, {} LEDs, background: {}",
            geometry.width(),
            geometry.height(),
            geometry.len(),
            framebuffer.has_background(),
        );

        Self {
            framebuffer,
            transmitter,
        }
    }

    /// Pushes the current frame to the strip.
    ///
    /// Black foreground pixels are replaced by the background ones if the framebuffer
    /// has a background layer.
    pub fn show(&mut self) -> Result<(), T::Error> {
        log::trace!("Sending a frame of {} pixels", self.framebuffer.len());
        self.transmitter.transmit(self.framebuffer.composited())
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    #[must_use]
    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    /// Splits the strip into the framebuffer and the transmitter.
    pub fn release(self) -> (Framebuffer<B>, T) {
        (self.framebuffer, self.transmitter)
    }
}

impl<B, T> Deref for Strip<B, T>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
{
    type Target = Framebuffer<B>;

    fn deref(&self) -> &Self::Target {
        &self.framebuffer
    }
}

impl<B, T> DerefMut for Strip<B, T>
where
    B: AsRef<[Color]> + AsMut<[Color]>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.framebuffer
    }
}
