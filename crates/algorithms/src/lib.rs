//! # Verdex Algorithms
//!
//! Spectral index algorithms for Verdex.
//!
//! ## Available Algorithm Categories
//!
//! - **imagery**: NDVI with NumPy-style broadcasting of the input bands

pub mod imagery;
mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        broadcast_shape, calculate_ndvi, co_broadcast, ndvi, ndvi_pixel, ndvi_with_params,
        Ndvi, NdviParams, NDVI_EPSILON, NDVI_MAX, NDVI_MIN,
    };
    pub use verdex_core::prelude::*;
}
