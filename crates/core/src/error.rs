//! Error types for Verdex

use thiserror::Error;

/// Main error type for Verdex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Shape mismatch: {left:?} cannot be broadcast with {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Cannot convert element at {index:?} to f64: {value}")]
    TypeConversion { index: Vec<usize>, value: String },

    #[error("Invalid band dimensions: shape {shape:?} needs {} values, got {len}", .shape.iter().product::<usize>())]
    InvalidDimensions { shape: Vec<usize>, len: usize },

    #[error("Index out of bounds: {index:?} in band of shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type alias for Verdex operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = Error::ShapeMismatch {
            left: vec![2, 2],
            right: vec![3, 3],
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: [2, 2] cannot be broadcast with [3, 3]"
        );
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::InvalidDimensions {
            shape: vec![2, 3],
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid band dimensions: shape [2, 3] needs 6 values, got 5"
        );
    }
}
