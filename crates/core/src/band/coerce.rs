//! Conversion of array-likes into bands
//!
//! Everything that can be read as a grid of real numbers becomes a [`Band`]
//! here, before any index arithmetic runs:
//! - ndarray arrays and views of any dimensionality
//! - flat sequences (`Vec<T>`, `&[T]`, `[T; N]`) as 1-D bands
//! - nested sequences (`Vec<Vec<T>>`, `&[Vec<T>]`, `[[T; C]; R]`) as 2-D bands
//!
//! A cell without a real-number reading, or a ragged nested sequence, fails
//! the whole conversion with [`Error::TypeConversion`].

use crate::band::{Band, BandElement};
use crate::error::{Error, Result};
use ndarray::{ArrayBase, Data, Dimension};

/// Trait for inputs that can be coerced into a [`Band`]
pub trait IntoBand {
    /// Convert into a band of `f64` values
    fn into_band(self) -> Result<Band>;
}

impl IntoBand for Band {
    fn into_band(self) -> Result<Band> {
        Ok(self)
    }
}

impl IntoBand for &Band {
    fn into_band(self) -> Result<Band> {
        Ok(self.clone())
    }
}

impl<S, D> IntoBand for ArrayBase<S, D>
where
    S: Data,
    S::Elem: BandElement,
    D: Dimension,
{
    fn into_band(self) -> Result<Band> {
        coerce_array(&self)
    }
}

impl<S, D> IntoBand for &ArrayBase<S, D>
where
    S: Data,
    S::Elem: BandElement,
    D: Dimension,
{
    fn into_band(self) -> Result<Band> {
        coerce_array(self)
    }
}

impl<T: BandElement> IntoBand for Vec<T> {
    fn into_band(self) -> Result<Band> {
        coerce_flat(&self)
    }
}

impl<T: BandElement> IntoBand for &[T] {
    fn into_band(self) -> Result<Band> {
        coerce_flat(self)
    }
}

impl<T: BandElement, const N: usize> IntoBand for [T; N] {
    fn into_band(self) -> Result<Band> {
        coerce_flat(&self)
    }
}

impl<T: BandElement> IntoBand for Vec<Vec<T>> {
    fn into_band(self) -> Result<Band> {
        coerce_nested(&self)
    }
}

impl<T: BandElement> IntoBand for &[Vec<T>] {
    fn into_band(self) -> Result<Band> {
        coerce_nested(self)
    }
}

impl<T: BandElement, const C: usize, const R: usize> IntoBand for [[T; C]; R] {
    fn into_band(self) -> Result<Band> {
        coerce_nested(&self)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_cell<T: BandElement + ?Sized>(value: &T, index: impl FnOnce() -> Vec<usize>) -> Result<f64> {
    value.to_f64().ok_or_else(|| Error::TypeConversion {
        index: index(),
        value: format!("{:?}", value),
    })
}

fn coerce_array<S, D>(array: &ArrayBase<S, D>) -> Result<Band>
where
    S: Data,
    S::Elem: BandElement,
    D: Dimension,
{
    let shape = array.shape();
    let mut data = Vec::with_capacity(array.len());
    // `iter` walks logical row-major order regardless of memory layout
    for (flat, value) in array.iter().enumerate() {
        data.push(read_cell(value, || unravel_index(flat, shape))?);
    }
    Band::from_shape_vec(shape, data)
}

fn coerce_flat<T: BandElement>(values: &[T]) -> Result<Band> {
    let data = values
        .iter()
        .enumerate()
        .map(|(i, v)| read_cell(v, || vec![i]))
        .collect::<Result<Vec<f64>>>()?;
    Band::from_shape_vec(&[data.len()], data)
}

fn coerce_nested<T: BandElement, Row: AsRef<[T]>>(rows: &[Row]) -> Result<Band> {
    let cols = rows.first().map_or(0, |r| r.as_ref().len());
    let mut data = Vec::with_capacity(rows.len() * cols);

    for (row, values) in rows.iter().enumerate() {
        let values = values.as_ref();
        if values.len() != cols {
            return Err(Error::TypeConversion {
                index: vec![row],
                value: format!("ragged row of length {} (expected {})", values.len(), cols),
            });
        }
        for (col, v) in values.iter().enumerate() {
            data.push(read_cell(v, || vec![row, col])?);
        }
    }

    Band::from_shape_vec(&[rows.len(), cols], data)
}

/// Row-major flat position to multi-index
fn unravel_index(mut flat: usize, shape: &[usize]) -> Vec<usize> {
    let mut index = vec![0; shape.len()];
    for (axis, &len) in shape.iter().enumerate().rev() {
        if len > 0 {
            index[axis] = flat % len;
            flat /= len;
        }
    }
    index
}
