//! Raw query-string parameters
//!
//! Collected from `key=value` pairs before any validation.

/// String-typed parameters of `GET /foods` and `GET /foods/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodsParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order: Option<String>,
    /// Deprecated repeated form of `order`
    pub orders: Vec<String>,
    pub nutrients: Option<String>,
    pub category: Option<String>,
    pub where_conditions: Option<String>,
    pub food_name: Option<String>,
}

impl FoodsParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// For single-valued keys the first occurrence wins; unknown keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                "order" => &mut params.order,
                "nutrients" => &mut params.nutrients,
                "category" => &mut params.category,
                "where" => &mut params.where_conditions,
                "foodName" => &mut params.food_name,
                "orders" | "orders[]" => {
                    params.orders.push(value.into());
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let params = FoodsParams::from_pairs(vec![
            ("category", "8"),
            ("where", "WATER>90"),
            ("order", "-ENERC_KCAL"),
            ("limit", "2"),
            ("foodName", "rice"),
            ("unknown", "x"),
        ]);
        assert_eq!(params.category.as_deref(), Some("8"));
        assert_eq!(params.where_conditions.as_deref(), Some("WATER>90"));
        assert_eq!(params.order.as_deref(), Some("-ENERC_KCAL"));
        assert_eq!(params.limit.as_deref(), Some("2"));
        assert_eq!(params.food_name.as_deref(), Some("rice"));
        assert_eq!(params.offset, None);
    }

    #[test]
    fn test_first_value_wins_and_orders_repeat() {
        let params = FoodsParams::from_pairs(vec![
            ("limit", "5"),
            ("limit", "50"),
            ("orders", "WATER"),
            ("orders", "-NA"),
        ]);
        assert_eq!(params.limit.as_deref(), Some("5"));
        assert_eq!(params.orders, vec!["WATER".to_string(), "-NA".to_string()]);
    }
}
