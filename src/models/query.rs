//! Typed query representation
//!
//! Output of the query grammar parser, input of the filter and sort stages.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::{FoodItem, NutrientTag};

/// Items per page when `limit` is not given
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page a client may request
pub const MAX_LIMIT: usize = 100;
/// Category codes of the composition table
pub const CATEGORY_RANGE: std::ops::RangeInclusive<u8> = 1..=18;

/// Comparison used by a threshold condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Operator::Lt),
            '>' => Some(Operator::Gt),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Operator::Lt => '<',
            Operator::Gt => '>',
        }
    }

    /// Strict comparison of a measured value against a threshold
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Operator::Lt => value < threshold,
            Operator::Gt => value > threshold,
        }
    }
}

/// `<TAG><op><threshold>`, e.g. `WATER>90`
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdCondition {
    pub tag: NutrientTag,
    pub operator: Operator,
    pub threshold: f64,
}

impl fmt::Display for ThresholdCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.tag, self.operator.as_char(), self.threshold)
    }
}

/// Sort key: a tag, optionally descending (`-TAG`)
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSpec {
    pub tag: NutrientTag,
    pub descending: bool,
}

/// A fully validated `/foods` query
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub categories: Option<HashSet<u8>>,
    pub food_name: Option<String>,
    pub where_conditions: Option<Vec<ThresholdCondition>>,
    pub nutrient_tags: Option<HashSet<NutrientTag>>,
    pub order_specs: Option<Vec<OrderSpec>>,
    pub offset: usize,
    pub limit: usize,
}

impl Default for ParsedQuery {
    fn default() -> Self {
        Self {
            categories: None,
            food_name: None,
            where_conditions: None,
            nutrient_tags: None,
            order_specs: None,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A validated `/foods/{foodId}` request
#[derive(Debug, Clone, PartialEq)]
pub struct DetailQuery {
    pub food_id: String,
    pub nutrient_tags: Option<HashSet<NutrientTag>>,
}

/// Response envelope for `/foods`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodsResponse {
    pub contents: Vec<FoodItem>,
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_is_strict() {
        assert!(Operator::Gt.holds(92.0, 90.0));
        assert!(!Operator::Gt.holds(90.0, 90.0));
        assert!(Operator::Lt.holds(4.9, 5.0));
        assert!(!Operator::Lt.holds(5.0, 5.0));
    }

    #[test]
    fn test_operator_from_char() {
        assert_eq!(Operator::from_char('<'), Some(Operator::Lt));
        assert_eq!(Operator::from_char('>'), Some(Operator::Gt));
        assert_eq!(Operator::from_char('='), None);
    }

    #[test]
    fn test_default_query() {
        let q = ParsedQuery::default();
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert_eq!(q.offset, 0);
        assert!(q.categories.is_none());
    }
}
