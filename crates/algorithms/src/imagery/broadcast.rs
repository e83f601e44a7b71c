//! Shape broadcasting for band pairs
//!
//! Two shapes are aligned on their trailing axes, the shorter one padded
//! with leading length-1 axes. Per axis the lengths must match or one of
//! them must be 1, which is then stretched to the other. A length-1 axis
//! against a length-0 axis gives 0.

use ndarray::ArrayViewD;
use verdex_core::band::Band;
use verdex_core::{Error, Result};

/// Compute the shape two bands broadcast to
///
/// # Errors
/// [`Error::ShapeMismatch`] if any aligned axis pair has two different
/// lengths, neither of them 1.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> Result<Vec<usize>> {
    let ndim = left.len().max(right.len());
    let mut shape = vec![0; ndim];

    for i in 0..ndim {
        let l = trailing_len(left, i);
        let r = trailing_len(right, i);
        shape[ndim - 1 - i] = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => return Err(mismatch(left, right)),
        };
    }

    Ok(shape)
}

/// Views of both bands stretched to their common broadcast shape
///
/// Equal shapes are returned as plain views.
pub fn co_broadcast<'a>(
    left: &'a Band,
    right: &'a Band,
) -> Result<(ArrayViewD<'a, f64>, ArrayViewD<'a, f64>)> {
    if left.shape() == right.shape() {
        return Ok((left.view(), right.view()));
    }

    let shape = broadcast_shape(left.shape(), right.shape())?;
    let l = left
        .data()
        .broadcast(shape.clone())
        .ok_or_else(|| mismatch(left.shape(), right.shape()))?;
    let r = right
        .data()
        .broadcast(shape)
        .ok_or_else(|| mismatch(left.shape(), right.shape()))?;

    Ok((l, r))
}

/// Axis length counted from the end, 1 past the leading axis
fn trailing_len(shape: &[usize], i: usize) -> usize {
    if i < shape.len() {
        shape[shape.len() - 1 - i]
    } else {
        1
    }
}

fn mismatch(left: &[usize], right: &[usize]) -> Error {
    Error::ShapeMismatch {
        left: left.to_vec(),
        right: right.to_vec(),
    }
}
