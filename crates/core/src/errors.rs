use displaydoc::Display;

/// A specialized result type for the pixel grid.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when setting up a pixel grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
pub enum Error {
    /// The length of the pixel storage does not match the grid geometry.
    BufferLengthMismatch,
    /// The background storage does not have the same shape as the foreground.
    BackgroundShapeMismatch,
    /// The grid geometry cannot fit into the storage capacity.
    CapacityExceeded,
    /// The grid width and height must both be greater than zero.
    EmptyGeometry,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
