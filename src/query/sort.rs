//! Sort & paginate
//!
//! Ordering by nutrient values and offset/limit slicing.

use std::cmp::Ordering;

use crate::models::{FoodItem, OrderSpec};

/// Compare two items on one sort key.
///
/// Unmeasured values always sort after measured ones, in both directions.
pub fn compare_by(a: &FoodItem, b: &FoodItem, spec: &OrderSpec) -> Ordering {
    match (a.value_of(&spec.tag), b.value_of(&spec.tag)) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if spec.descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; `specs[0]` is the primary key, later keys break ties
pub fn sort_items(items: &mut [&FoodItem], specs: &[OrderSpec]) {
    if specs.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        specs
            .iter()
            .map(|spec| compare_by(a, b, spec))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// `items[offset..offset + limit]`, clipped to the list; empty past the end
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
