//! Query grammar parser
//!
//! Converts string-typed query parameters into a [`ParsedQuery`].
//!
//! Grammar:
//! - `category`: `1,3,18` (integers 1..=18)
//! - `nutrients`: `ENERC_KCAL,WATER` (known tags)
//! - `where`: `WATER>90,ENERC_KCAL<150` (AND-ed, integer thresholds)
//! - `order`: `-ENERC_KCAL` or `WATER,-NA` (first key has priority)
//! - `limit`: clamped to 1..=100, default 10
//! - `offset`: non-negative, default 0

use std::collections::HashSet;

use super::{FoodsParams, QueryError, QueryResult};
use crate::data::dataset::is_valid_food_id;
use crate::models::{
    DetailQuery, NutrientTag, Operator, OrderSpec, ParsedQuery, TagVocabulary, ThresholdCondition,
    CATEGORY_RANGE, DEFAULT_LIMIT, MAX_LIMIT,
};

const LIST_SEPARATOR: char = ',';
const DESCENDING_PREFIX: char = '-';

/// Parse the parameters of `GET /foods`
pub fn parse_foods_query(params: &FoodsParams, vocabulary: &TagVocabulary) -> QueryResult<ParsedQuery> {
    let categories = params.category.as_deref().map(parse_categories).transpose()?;

    let nutrient_tags = params
        .nutrients
        .as_deref()
        .map(|s| parse_nutrient_tags(s, vocabulary))
        .transpose()?;

    let where_conditions = params
        .where_conditions
        .as_deref()
        .map(|s| parse_where_conditions(s, vocabulary))
        .transpose()?;

    let order_tokens: Vec<&str> = params
        .order
        .iter()
        .chain(params.orders.iter())
        .flat_map(|s| s.split(LIST_SEPARATOR))
        .collect();
    let order_specs = if order_tokens.is_empty() {
        None
    } else {
        Some(
            order_tokens
                .into_iter()
                .map(|token| parse_order(token, vocabulary))
                .collect::<QueryResult<Vec<_>>>()?,
        )
    };

    let food_name = params
        .food_name
        .as_ref()
        .filter(|s| !s.is_empty())
        .cloned();

    Ok(ParsedQuery {
        categories,
        food_name,
        where_conditions,
        nutrient_tags,
        order_specs,
        offset: parse_offset(params.offset.as_deref())?,
        limit: parse_limit(params.limit.as_deref())?,
    })
}

/// Parse the path and parameters of `GET /foods/{foodId}`
pub fn parse_detail_query(
    food_id: &str,
    params: &FoodsParams,
    vocabulary: &TagVocabulary,
) -> QueryResult<DetailQuery> {
    if !is_valid_food_id(food_id) {
        return Err(QueryError::InvalidFoodId(food_id.to_string()));
    }

    let nutrient_tags = params
        .nutrients
        .as_deref()
        .map(|s| parse_nutrient_tags(s, vocabulary))
        .transpose()?;

    Ok(DetailQuery {
        food_id: food_id.to_string(),
        nutrient_tags,
    })
}

/// `1,3` -> {1, 3}
pub fn parse_categories(input: &str) -> QueryResult<HashSet<u8>> {
    input
        .split(LIST_SEPARATOR)
        .map(|token| {
            token
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|c| CATEGORY_RANGE.contains(c))
                .ok_or_else(|| QueryError::InvalidCategory(token.to_string()))
        })
        .collect()
}

/// `ENERC_KCAL,WATER` -> {ENERC_KCAL, WATER}
pub fn parse_nutrient_tags(input: &str, vocabulary: &TagVocabulary) -> QueryResult<HashSet<NutrientTag>> {
    input
        .split(LIST_SEPARATOR)
        .map(|token| {
            vocabulary
                .lookup(token)
                .ok_or_else(|| QueryError::UnknownNutrient(token.to_string()))
        })
        .collect()
}

/// `WATER>90,ENERC_KCAL<150` -> two conditions, in input order
pub fn parse_where_conditions(
    input: &str,
    vocabulary: &TagVocabulary,
) -> QueryResult<Vec<ThresholdCondition>> {
    input
        .split(LIST_SEPARATOR)
        .map(|token| parse_condition(token, vocabulary))
        .collect()
}

/// `<TAG><op><integer>`, the whole token must match
pub fn parse_condition(token: &str, vocabulary: &TagVocabulary) -> QueryResult<ThresholdCondition> {
    let invalid = || QueryError::InvalidWhere(token.to_string());
    let condition = token.trim();

    let op_pos = condition.find(|c: char| c == '<' || c == '>').ok_or_else(invalid)?;
    let (tag_name, rest) = condition.split_at(op_pos);
    let mut rest_chars = rest.chars();
    let operator = rest_chars.next().and_then(Operator::from_char).ok_or_else(invalid)?;
    let number = rest_chars.as_str();

    if !is_tag_token(tag_name) || number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let tag = vocabulary
        .lookup(tag_name)
        .ok_or_else(|| QueryError::UnknownWhereTag {
            condition: condition.to_string(),
            tag: tag_name.to_string(),
        })?;
    let threshold = number.parse::<f64>().map_err(|_| invalid())?;

    Ok(ThresholdCondition {
        tag,
        operator,
        threshold,
    })
}

/// `-ENERC_KCAL` -> ENERC_KCAL descending
pub fn parse_order(token: &str, vocabulary: &TagVocabulary) -> QueryResult<OrderSpec> {
    let token = token.trim();
    let (tag_name, descending) = match token.strip_prefix(DESCENDING_PREFIX) {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    if tag_name.is_empty() {
        return Err(QueryError::InvalidOrder(token.to_string()));
    }

    let tag = vocabulary
        .lookup(tag_name)
        .ok_or_else(|| QueryError::UnknownNutrient(tag_name.to_string()))?;

    Ok(OrderSpec { tag, descending })
}

/// Missing -> 10; otherwise clamped into 1..=100
pub fn parse_limit(input: Option<&str>) -> QueryResult<usize> {
    match input {
        None => Ok(DEFAULT_LIMIT),
        Some(s) => {
            let limit = s
                .trim()
                .parse::<i64>()
                .map_err(|_| QueryError::InvalidLimit(s.to_string()))?;
            Ok(limit.clamp(1, MAX_LIMIT as i64) as usize)
        }
    }
}

/// Missing -> 0; negative or non-integer is rejected
pub fn parse_offset(input: Option<&str>) -> QueryResult<usize> {
    match input {
        None => Ok(0),
        Some(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| QueryError::InvalidOffset(s.to_string())),
    }
}

/// Uppercase letters, digits, `_` and `-`, starting with a letter
fn is_tag_token(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_uppercase() => {
            bytes.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
        }
        _ => false,
    }
}
