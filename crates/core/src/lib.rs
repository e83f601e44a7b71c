//! # Verdex Core
//!
//! Core types and traits for the Verdex spectral index library.
//!
//! This crate provides:
//! - `Band`: an `f64` grid of any dimensionality holding one spectral channel
//! - `BandElement` / `IntoBand`: coercion of numbers, text and nested
//!   sequences into bands
//! - `Error` / `Result`: the error type shared by every Verdex crate
//! - `Algorithm`: the trait algorithms implement for a consistent API

pub mod band;
pub mod error;

pub use band::{Band, BandElement, IntoBand};
pub use error::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::band::{Band, BandElement, IntoBand};
    pub use crate::error::{Error, Result};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in Verdex.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
