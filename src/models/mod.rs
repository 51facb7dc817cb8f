//! Data models
//!
//! Food records, nutrient tags and the typed query representation.

mod food_item;
mod nutrient_tag;
mod query;

pub use food_item::{FoodItem, NutrientValue};
pub use nutrient_tag::{NutrientTag, TagMetadata, TagVocabulary};
pub use query::{
    DetailQuery, FoodsResponse, Operator, OrderSpec, ParsedQuery, ThresholdCondition, CATEGORY_RANGE,
    DEFAULT_LIMIT, MAX_LIMIT,
};
