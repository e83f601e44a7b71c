//! Main Band type

use crate::band::IntoBand;
use crate::error::{Error, Result};
use ndarray::{Array, ArrayD, ArrayViewD, Dimension, IxDyn};

/// A single spectral channel as a grid of `f64` reflectance values.
///
/// The grid may have any number of dimensions. Values carry no range
/// constraint: surface reflectance in `[0, 1]` and scaled digital numbers in
/// `[0, 10000]` are both valid.
///
/// # Example
///
/// ```ignore
/// use verdex_core::Band;
///
/// let nir = Band::coerce(vec![vec![3200u16, 2900], vec![4100, 3800]])?;
/// assert_eq!(nir.shape(), &[2, 2]);
/// assert_eq!(nir.get(&[1, 0])?, 4100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Cell values in row-major logical order
    data: ArrayD<f64>,
}

impl Band {
    /// Coerce any array-like into a band
    pub fn coerce<I: IntoBand>(input: I) -> Result<Self> {
        input.into_band()
    }

    /// Create a band from an `f64` ndarray of any dimensionality
    pub fn from_array<D: Dimension>(data: Array<f64, D>) -> Self {
        Self {
            data: data.into_dyn(),
        }
    }

    /// Create a band from a shape and row-major values
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::InvalidDimensions {
                shape: shape.to_vec(),
                len: data.len(),
            });
        }

        let array = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| {
            Error::InvalidDimensions {
                shape: shape.to_vec(),
                len: expected,
            }
        })?;

        Ok(Self { data: array })
    }

    // Dimensions

    /// Length of every axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the band has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get the value at a multi-index
    pub fn get(&self, index: &[usize]) -> Result<f64> {
        if index.len() != self.ndim() {
            return Err(self.out_of_bounds(index));
        }
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Consume the band and return the underlying array
    pub fn into_array(self) -> ArrayD<f64> {
        self.data
    }

    fn out_of_bounds(&self, index: &[usize]) -> Error {
        Error::IndexOutOfBounds {
            index: index.to_vec(),
            shape: self.shape().to_vec(),
        }
    }
}

impl<D: Dimension> From<Array<f64, D>> for Band {
    fn from(data: Array<f64, D>) -> Self {
        Self::from_array(data)
    }
}
