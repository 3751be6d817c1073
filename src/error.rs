use thiserror::Error;

//=====================================================================
// Crate-wide error type. Every variant describes a malformed table
// detected while constructing an entity; evaluation and sampling
// never return errors, they fall back to the documented boundary
// values instead.
//=====================================================================
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlateError {
    #[error("{context}: x ({x_len}) and y ({y_len}) vectors must be of the same length")]
    LengthMismatch {
        context: &'static str,
        x_len: usize,
        y_len: usize,
    },

    #[error("{context}: grid must be strictly increasing, violated at index {index}")]
    NonIncreasingGrid {
        context: &'static str,
        index: usize,
    },

    #[error("{context}: expected at least {required} points, got {actual}")]
    TableTooShort {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("{context}: breakpoints must partition the grid contiguously")]
    BadBreakpoints { context: &'static str },

    #[error("xss read out of bounds: index {index}, length {len}, array holds {array_len} values")]
    XssOutOfBounds {
        index: usize,
        len: usize,
        array_len: usize,
    },

    #[error("invalid interpolation scheme code: {0}")]
    InvalidInterpolationScheme(u32),
}
