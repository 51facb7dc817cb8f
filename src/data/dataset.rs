//! In-memory food dataset
//!
//! Built once at startup from the raw row table and the metadata table, then
//! shared read-only by every request.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use super::loader::{load_metadata, load_rows, RawFoodRow};
use super::{DataError, DataResult};
use crate::models::{FoodItem, NutrientValue, TagMetadata, TagVocabulary, CATEGORY_RANGE};
use crate::nutrition::normalize;

/// Number of leading metadata columns in each raw row
const FIXED_COLUMNS: usize = 4;
const CATEGORY_COLUMN: usize = 0;
const FOOD_ID_COLUMN: usize = 1;
const INDEX_COLUMN: usize = 2;
const FOOD_NAME_COLUMN: usize = 3;

/// Food ids are five ASCII digits, e.g. "18039"
pub fn is_valid_food_id(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Immutable, ordered collection of food items
#[derive(Debug, Clone)]
pub struct Dataset {
    items: Vec<FoodItem>,
    vocabulary: TagVocabulary,
    by_id: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Load and project the dataset files
    pub fn load(foods_path: &Path, metadata_path: &Path) -> DataResult<Self> {
        let metadata = load_metadata(metadata_path)?;
        let rows = load_rows(foods_path)?;
        let dataset = Self::from_raw(rows, metadata)?;

        info!(
            foods = dataset.len(),
            tags = dataset.vocabulary.len(),
            foods_path = %foods_path.display(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Project raw rows onto the metadata table.
    ///
    /// Fails on the first malformed row; a partial dataset is never returned.
    pub fn from_raw(rows: Vec<RawFoodRow>, metadata: Vec<TagMetadata>) -> DataResult<Self> {
        let vocabulary = TagVocabulary::from_metadata(metadata).map_err(DataError::DuplicateTag)?;

        let mut items = Vec::with_capacity(rows.len());
        let mut by_id = HashMap::with_capacity(rows.len());

        for (row_number, row) in rows.into_iter().enumerate() {
            let item = project_row(row_number, row, &vocabulary)?;
            if by_id.insert(item.food_id.clone(), items.len()).is_some() {
                return Err(DataError::DuplicateFoodId(item.food_id));
            }
            items.push(item);
        }

        Ok(Self {
            items,
            vocabulary,
            by_id,
            loaded_at: Utc::now(),
        })
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Look up a food item by its five-digit id
    pub fn get(&self, food_id: &str) -> Option<&FoodItem> {
        self.by_id.get(food_id).map(|&i| &self.items[i])
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn project_row(row_number: usize, row: RawFoodRow, vocabulary: &TagVocabulary) -> DataResult<FoodItem> {
    let expected = FIXED_COLUMNS + vocabulary.len();
    if row.data.len() != expected {
        return Err(DataError::RowLength {
            row: row_number,
            expected,
            found: row.data.len(),
        });
    }

    let mut cells = row.data.into_iter();
    let mut fixed: [Option<String>; FIXED_COLUMNS] = Default::default();
    for slot in fixed.iter_mut() {
        *slot = cells.next().flatten();
    }
    let [category, food_id, index, food_name] = fixed;

    let require = |value: Option<String>, field: &'static str| {
        value.ok_or(DataError::MissingField {
            row: row_number,
            field,
        })
    };
    let category = require(category, column_name(CATEGORY_COLUMN))?;
    let food_id = require(food_id, column_name(FOOD_ID_COLUMN))?;
    let index = require(index, column_name(INDEX_COLUMN))?;
    let food_name = require(food_name, column_name(FOOD_NAME_COLUMN))?;

    let category_code = category
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|c| CATEGORY_RANGE.contains(c))
        .ok_or_else(|| DataError::InvalidCategory {
            row: row_number,
            value: category.clone(),
        })?;

    if !is_valid_food_id(&food_id) {
        return Err(DataError::InvalidFoodId {
            row: row_number,
            value: food_id,
        });
    }

    let nutrients = cells
        .zip(vocabulary.iter())
        .map(|(cell, (tag, meta))| {
            let normalized = normalize(cell.as_deref());
            NutrientValue {
                tag_name: tag.clone(),
                value: normalized.value,
                unit: meta.unit.clone(),
                is_trace_amount: normalized.is_trace_amount,
                estimated: normalized.estimated,
                description: meta.description.clone(),
            }
        })
        .collect();

    Ok(FoodItem {
        food_id,
        category,
        index,
        food_name,
        nutrients,
        category_code,
    })
}

fn column_name(column: usize) -> &'static str {
    match column {
        CATEGORY_COLUMN => "category",
        FOOD_ID_COLUMN => "foodId",
        INDEX_COLUMN => "index",
        _ => "foodName",
    }
}
