use core::fmt;

/// Errors reported by the strip controller
///
/// `E` is the error type of the underlying [`BusTransport`](crate::BusTransport).
/// Out of range pixel indices are not reported here, they panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Neither a hardware bus nor a complete clock/data pin pair was given
    MissingBus,
    /// The requested pixel count does not fit the strip buffers
    TooManyPixels { count: usize, capacity: usize },
    /// A fill was requested with no colors to repeat
    EmptyPalette,
    /// The bus refused a configure or write call
    Transport(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBus => {
                f.write_str("either a hardware bus or clock and data pins are required")
            }
            Self::TooManyPixels { count, capacity } => {
                write!(f, "{} pixels requested, strip holds at most {}", count, capacity)
            }
            Self::EmptyPalette => f.write_str("palette must contain at least one color"),
            Self::Transport(error) => write!(f, "bus transport failed: {:?}", error),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
