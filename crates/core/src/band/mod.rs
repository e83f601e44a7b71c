//! Band data structures and input coercion

mod coerce;
mod element;
mod grid;

pub use coerce::IntoBand;
pub use element::BandElement;
pub use grid::Band;
