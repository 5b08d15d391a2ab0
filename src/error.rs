//! Error types for trueno-canvas operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-canvas operations.
///
/// Figures and renderers are total over the integer grid, so the only
/// failure is constructing a canvas with an empty extent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_error_equality() {
        let a = Error::InvalidDimensions { width: 0, height: 0 };
        let b = Error::InvalidDimensions { width: 0, height: 0 };
        assert_eq!(a, b);
    }
}
