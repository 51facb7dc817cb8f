//! Raw dataset files
//!
//! `foods.json` is an array of `{ "data": [cell, ...] }` rows whose cells are
//! strings or null. `metadata.json` is an array of
//! `{ "name", "unit", "description" }`, one entry per nutrient column.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{DataError, DataResult};
use crate::models::TagMetadata;

/// One row of the food table, positional cells only
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFoodRow {
    pub data: Vec<Option<String>>,
}

impl RawFoodRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            data: cells.into_iter().map(|c| c.map(Into::into)).collect(),
        }
    }
}

/// Read the food rows file
pub fn load_rows(path: &Path) -> DataResult<Vec<RawFoodRow>> {
    read_json(path)
}

/// Read the nutrient metadata file
pub fn load_metadata(path: &Path) -> DataResult<Vec<TagMetadata>> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> DataResult<T> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}
