//! Imagery analysis algorithms
//!
//! Algorithms for remote sensing and spectral analysis:
//! - NDVI: normalized difference of near-infrared and red reflectance
//! - Broadcasting: aligning two band shapes before a cellwise index

mod broadcast;
mod ndvi;

pub use broadcast::{broadcast_shape, co_broadcast};
pub use ndvi::{
    calculate_ndvi, ndvi, ndvi_pixel, ndvi_with_params, Ndvi, NdviParams, NDVI_EPSILON,
    NDVI_MAX, NDVI_MIN,
};
