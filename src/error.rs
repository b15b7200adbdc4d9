use std::error::Error;
use std::fmt;

/// Errors raised while pulling windows from a lazy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError<E> {
    /// The underlying source failed; passed through unchanged
    Source(E),
    /// Wrap-around was requested over a source that produced no elements
    WrapWithoutElements,
}

impl<E: fmt::Display> fmt::Display for WindowError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::Source(err) => write!(f, "Source error: {}", err),
            WindowError::WrapWithoutElements => {
                write!(f, "Cannot wrap around a source that produced no elements")
            }
        }
    }
}

impl<E: Error + 'static> Error for WindowError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WindowError::Source(err) => Some(err),
            WindowError::WrapWithoutElements => None,
        }
    }
}
