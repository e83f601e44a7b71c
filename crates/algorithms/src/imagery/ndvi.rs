//! Normalized Difference Vegetation Index
//!
//! `NDVI = (NIR - Red) / (NIR + Red)`, evaluated independently per cell on
//! `f64` values, with a zero fallback where the band sum is within
//! [`NDVI_EPSILON`] of zero and a final clip to `[-1, 1]`.

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::broadcast::co_broadcast;
use crate::maybe_rayon::zip_map_collect;
use verdex_core::band::{Band, IntoBand};
use verdex_core::{Algorithm, Error, Result};

/// Band sums with an absolute value at or below this produce 0.0
pub const NDVI_EPSILON: f64 = 1e-10;

/// Lower clip bound
pub const NDVI_MIN: f64 = -1.0;

/// Upper clip bound
pub const NDVI_MAX: f64 = 1.0;

/// Parameters for NDVI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NdviParams {
    /// Near-zero threshold for `|NIR + Red|` (default: 1e-10)
    pub epsilon: f64,
}

impl Default for NdviParams {
    fn default() -> Self {
        Self {
            epsilon: NDVI_EPSILON,
        }
    }
}

impl NdviParams {
    /// Check that epsilon is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                value: self.epsilon.to_string(),
                reason: "must be finite and non-negative".to_string(),
            });
        }
        Ok(())
    }
}

/// NDVI algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct Ndvi;

impl Algorithm for Ndvi {
    type Input = (Band, Band);
    type Output = ArrayD<f64>;
    type Params = NdviParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "NDVI"
    }

    fn description(&self) -> &'static str {
        "Normalized Difference Vegetation Index from near-infrared and red bands, clipped to [-1, 1]"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (nir, red) = input;
        ndvi_with_params(&nir, &red, &params)
    }
}

/// NDVI for a single cell.
///
/// 1. `numerator = nir - red`
/// 2. `denominator = nir + red`
/// 3. `numerator / denominator` if `|denominator| > epsilon`
/// 4. `0.0` otherwise
/// 5. clip to `[-1, 1]`
///
/// A NaN denominator fails the test in step 3 and yields 0.0. A NaN ratio
/// (only `inf / inf`) is also mapped to 0.0, so the result is always in range.
#[inline]
pub fn ndvi_pixel(nir: f64, red: f64, epsilon: f64) -> f64 {
    let numerator = nir - red;
    let denominator = nir + red;

    let ratio = if denominator.abs() > epsilon {
        numerator / denominator
    } else {
        0.0
    };

    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(NDVI_MIN, NDVI_MAX)
    }
}

/// Calculate NDVI from any pair of array-likes.
///
/// Both inputs are coerced to `f64` bands first (NIR before Red), then
/// broadcast against each other and evaluated with [`ndvi`].
///
/// # Example
///
/// ```ignore
/// use verdex_algorithms::imagery::calculate_ndvi;
///
/// let out = calculate_ndvi(vec![0.8], vec![0.2])?;
/// assert!((out[[0]] - 0.6).abs() < 1e-12);
/// ```
///
/// # Errors
/// - [`Error::TypeConversion`] if a cell has no real-number reading or a
///   nested sequence is ragged
/// - [`Error::ShapeMismatch`] if the two shapes cannot be broadcast
pub fn calculate_ndvi<N: IntoBand, R: IntoBand>(nir: N, red: R) -> Result<ArrayD<f64>> {
    let nir = nir.into_band()?;
    let red = red.into_band()?;
    ndvi(&nir, &red)
}

/// Normalized Difference Vegetation Index
///
/// `NDVI = (NIR - Red) / (NIR + Red)`
///
/// Values range from -1 to 1:
/// - Dense vegetation: 0.6 to 0.9
/// - Sparse vegetation: 0.2 to 0.5
/// - Bare soil: 0.1 to 0.2
/// - Water/clouds: -1.0 to 0.0
///
/// Cells where `|NIR + Red| <= 1e-10` are 0.0.
///
/// # Arguments
/// * `nir` - Near-infrared band
/// * `red` - Red band
pub fn ndvi(nir: &Band, red: &Band) -> Result<ArrayD<f64>> {
    ndvi_with_params(nir, red, &NdviParams::default())
}

/// NDVI with an explicit near-zero threshold
pub fn ndvi_with_params(nir: &Band, red: &Band, params: &NdviParams) -> Result<ArrayD<f64>> {
    params.validate()?;

    let (nir_view, red_view) = co_broadcast(nir, red)?;
    debug!(
        nir = ?nir.shape(),
        red = ?red.shape(),
        output = ?nir_view.shape(),
        "computing NDVI"
    );

    let epsilon = params.epsilon;
    Ok(zip_map_collect(nir_view, red_view, move |n, r| {
        ndvi_pixel(n, r, epsilon)
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
