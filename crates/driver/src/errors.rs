use core::fmt::{self, Display};

/// Errors that can occur while pushing a frame through a serial peripheral.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error<B, P> {
    /// Unable to transfer a byte over the serial bus.
    Bus(B),
    /// Unable to drive the framing line.
    Pin(P),
}

impl<B, P> Display for Error<B, P>
where
    B: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Unable to transfer a byte over the serial bus: {err:?}"),
            Self::Pin(err) => write!(f, "Unable to drive the framing line: {err:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<B, P> std::error::Error for Error<B, P>
where
    B: fmt::Debug,
    P: fmt::Debug,
{
}
