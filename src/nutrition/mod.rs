//! Nutrition value handling
//!
//! Normalizes raw composition-table cells.

pub mod normalizer;

pub use normalizer::{leading_number, normalize, NormalizedValue};
