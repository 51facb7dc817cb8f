//! Filter engine
//!
//! Each filter narrows a list of borrowed food items in place and is a no-op
//! when its query parameter is absent.

use std::collections::HashSet;

use crate::models::{FoodItem, NutrientTag, ThresholdCondition};

/// Keep items whose category is one of `categories`
pub fn retain_categories(items: &mut Vec<&FoodItem>, categories: &HashSet<u8>) {
    items.retain(|item| categories.contains(&item.category_code));
}

/// Keep items whose name contains `name`
pub fn retain_food_name(items: &mut Vec<&FoodItem>, name: &str) {
    items.retain(|item| item.food_name.contains(name));
}

/// Keep items satisfying every condition
pub fn retain_conditions(items: &mut Vec<&FoodItem>, conditions: &[ThresholdCondition]) {
    items.retain(|item| conditions.iter().all(|c| satisfies(item, c)));
}

/// A missing tag, an unmeasured value or a zero value never satisfies a
/// condition, whichever the operator.
pub fn satisfies(item: &FoodItem, condition: &ThresholdCondition) -> bool {
    match item.value_of(&condition.tag) {
        Some(value) if value != 0.0 => condition.operator.holds(value, condition.threshold),
        _ => false,
    }
}

/// Copy of `item` carrying only the nutrients in `tags`, in dataset order
pub fn project_nutrients(item: &FoodItem, tags: &HashSet<NutrientTag>) -> FoodItem {
    FoodItem {
        nutrients: item
            .nutrients
            .iter()
            .filter(|n| tags.contains(&n.tag_name))
            .cloned()
            .collect(),
        food_id: item.food_id.clone(),
        category: item.category.clone(),
        index: item.index.clone(),
        food_name: item.food_name.clone(),
        category_code: item.category_code,
    }
}
