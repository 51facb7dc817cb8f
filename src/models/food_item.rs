//! Food Item model
//!
//! One row of the composition table with its per-100g nutrient values.

use serde::Serialize;

use super::NutrientTag;

/// A single nutrient measurement of a food item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientValue {
    pub tag_name: NutrientTag,
    /// None when the source table has no measurement
    pub value: Option<f64>,
    pub unit: String,
    pub is_trace_amount: bool,
    pub estimated: bool,
    pub description: String,
}

/// A food item from the composition table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub food_id: String,
    pub category: String,
    pub index: String,
    pub food_name: String,
    pub nutrients: Vec<NutrientValue>,
    /// Numeric form of `category`, validated at load time
    #[serde(skip)]
    pub category_code: u8,
}

impl FoodItem {
    /// Find the measurement for a tag
    pub fn nutrient(&self, tag: &NutrientTag) -> Option<&NutrientValue> {
        // Unprojected items are dense, so the column index is a direct hit
        match self.nutrients.get(tag.column()) {
            Some(n) if n.tag_name == *tag => Some(n),
            _ => self.nutrients.iter().find(|n| n.tag_name == *tag),
        }
    }

    /// Numeric value for a tag, None if the tag is missing or unmeasured
    pub fn value_of(&self, tag: &NutrientTag) -> Option<f64> {
        self.nutrient(tag).and_then(|n| n.value)
    }
}
