//! HTTP surface
//!
//! axum router and error mapping around the query pipeline.

pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{router, AppState, HealthResponse};
