//! Hyakumi Library
//!
//! Query pipeline and HTTP surface over the food composition table.

pub mod build_info;
pub mod config;
pub mod data;
pub mod http;
pub mod models;
pub mod nutrition;
pub mod query;

#[cfg(test)]
mod test_helpers;
