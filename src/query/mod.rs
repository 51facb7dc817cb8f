//! Query pipeline
//!
//! Parse textual query parameters, filter, sort and paginate food items.

pub mod filter;
pub mod params;
pub mod parser;
pub mod pipeline;
pub mod sort;

use thiserror::Error;

pub use params::FoodsParams;
pub use parser::{parse_detail_query, parse_foods_query};
pub use pipeline::{lookup_food, run_foods_query};

/// Rejected query input. Always the client's fault, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid category '{0}': expected integers between 1 and 18")]
    InvalidCategory(String),

    #[error("Unknown nutrient tag '{0}'")]
    UnknownNutrient(String),

    #[error("Invalid where condition '{0}': expected TAG<number or TAG>number")]
    InvalidWhere(String),

    #[error("Unknown nutrient tag '{tag}' in where condition '{condition}'")]
    UnknownWhereTag { condition: String, tag: String },

    #[error("Invalid order '{0}': expected TAG or -TAG")]
    InvalidOrder(String),

    #[error("Invalid limit '{0}': expected an integer")]
    InvalidLimit(String),

    #[error("Invalid offset '{0}': expected a non-negative integer")]
    InvalidOffset(String),

    #[error("Invalid food id '{0}': expected 5 digits")]
    InvalidFoodId(String),
}

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;
