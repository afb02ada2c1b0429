//! Frame transmission to the WS2801 chain.
//!
//! Every pixel is sent as three bytes in the order red, green, blue, each byte most
//! significant bit first. There is no start or stop framing: the chips latch the
//! received colors once the clock line stays low for a while.

use pixelgrid_core::Color;

/// Something that is able to push a whole frame out to the LED strip.
///
/// The call blocks until every pixel has been fully clocked out.
pub trait Transmitter {
    /// Hardware error type.
    type Error;

    /// Sends the given colors to the strip, starting from the first LED.
    fn transmit<I>(&mut self, frame: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Color>;
}

impl<T: ?Sized + Transmitter> Transmitter for &mut T {
    type Error = T::Error;

    fn transmit<I>(&mut self, frame: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Color>,
    {
        T::transmit(self, frame)
    }
}

/// Returns the bytes of the frame in the wire order.
#[inline]
pub fn frame_bytes(frame: impl IntoIterator<Item = Color>) -> impl Iterator<Item = u8> {
    frame.into_iter().flat_map(Color::to_bytes)
}
