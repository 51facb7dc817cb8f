//! Query execution over the dataset
//!
//! category -> foodName -> where -> nutrient projection -> sort -> paginate.
//! Only the returned page is materialized; an order key outside the projection
//! is missing on every item and leaves the order unchanged.

use tracing::debug;

use super::filter::{project_nutrients, retain_categories, retain_conditions, retain_food_name};
use super::sort::{paginate, sort_items};
use crate::data::Dataset;
use crate::models::{DetailQuery, FoodItem, FoodsResponse, OrderSpec, ParsedQuery};

/// Run a `/foods` query
pub fn run_foods_query(dataset: &Dataset, query: &ParsedQuery) -> FoodsResponse {
    let mut matched: Vec<&FoodItem> = dataset.items().iter().collect();

    if let Some(categories) = &query.categories {
        retain_categories(&mut matched, categories);
    }

    if let Some(name) = &query.food_name {
        retain_food_name(&mut matched, name);
    }

    if let Some(conditions) = &query.where_conditions {
        retain_conditions(&mut matched, conditions);
    }

    if let Some(specs) = &query.order_specs {
        match &query.nutrient_tags {
            Some(tags) => {
                let visible: Vec<OrderSpec> =
                    specs.iter().filter(|spec| tags.contains(&spec.tag)).cloned().collect();
                sort_items(&mut matched, &visible);
            }
            None => sort_items(&mut matched, specs),
        }
    }

    let total_count = matched.len();
    let page = paginate(matched, query.offset, query.limit);

    let contents = page
        .into_iter()
        .map(|item| match &query.nutrient_tags {
            Some(tags) => project_nutrients(item, tags),
            None => item.clone(),
        })
        .collect();

    debug!(total_count, offset = query.offset, limit = query.limit, "Foods query executed");

    FoodsResponse {
        contents,
        total_count,
        offset: query.offset,
        limit: query.limit,
    }
}

/// Look up a single food, narrowed to the requested nutrients
pub fn lookup_food(dataset: &Dataset, query: &DetailQuery) -> Option<FoodItem> {
    let item = dataset.get(&query.food_id)?;
    Some(match &query.nutrient_tags {
        Some(tags) => project_nutrients(item, tags),
        None => item.clone(),
    })
}
