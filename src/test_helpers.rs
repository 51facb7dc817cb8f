//! Shared test fixtures
//!
//! A small composition table covering missing, trace and estimated values.

use crate::data::{Dataset, RawFoodRow};
use crate::models::{FoodItem, NutrientTag, TagMetadata};

/// Build a raw row from the four fixed columns plus nutrient cells
pub fn row(fixed: &[&str; 4], nutrients: &[Option<&str>]) -> RawFoodRow {
    RawFoodRow::new(fixed.iter().map(|s| Some(*s)).chain(nutrients.iter().copied()))
}

/// Build a metadata table from (tag, unit) pairs
pub fn metadata(tags: &[(&str, &str)]) -> Vec<TagMetadata> {
    tags.iter()
        .map(|(name, unit)| TagMetadata {
            tag_name: name.to_string(),
            unit: unit.to_string(),
            description: format!("{} per 100 g", name),
        })
        .collect()
}

/// Tags: ENERC_KCAL, WATER, PROT-, NA, VITC
///
/// | id    | cat | kcal | water | prot  | na | vitc |
/// |-------|-----|------|-------|-------|----|------|
/// | 08039 | 8   | 20   | 92    | (2.9) | 6  | Tr   |
/// | 08001 | 8   | 34   | 88    | 2.7   | 2  | 0    |
/// | 01088 | 1   | 156  | 60    | 2.5   | 1  | (0)  |
/// | 06153 | 6   | 33   | 90.1  | 1.0   | 2  | 7    |
/// | 18039 | 18  | 119  | 80    | (Tr)  | -  | -    |
/// | 11123 | 11  | -    | 68    | 20    | 50 | 1    |
pub fn sample_dataset() -> Dataset {
    Dataset::from_raw(
        vec![
            row(&["8", "08039", "1", "mushroom raw"], &[Some("20"), Some("92"), Some("(2.9)"), Some("6"), Some("Tr")]),
            row(&["8", "08001", "2", "enokitake raw"], &[Some("34"), Some("88"), Some("2.7"), Some("2"), Some("0")]),
            row(&["1", "01088", "3", "rice cooked"], &[Some("156"), Some("60"), Some("2.5"), Some("1"), Some("(0)")]),
            row(&["6", "06153", "4", "onion raw"], &[Some("33"), Some("90.1"), Some("1.0"), Some("2"), Some("7")]),
            row(&["18", "18039", "5", "curry retort"], &[Some("119"), Some("80"), Some("(Tr)"), Some("-"), None]),
            row(&["11", "11123", "6", "pork loin"], &[Some("-"), Some("68"), Some("20"), Some("50"), Some("1")]),
        ],
        metadata(&[
            ("ENERC_KCAL", "kcal"),
            ("WATER", "g"),
            ("PROT-", "g"),
            ("NA", "mg"),
            ("VITC", "mg"),
        ]),
    )
    .expect("sample dataset is well formed")
}

pub fn tag(dataset: &Dataset, name: &str) -> NutrientTag {
    dataset.vocabulary().lookup(name).expect("tag in sample vocabulary")
}

pub fn ids(items: &[&FoodItem]) -> Vec<String> {
    items.iter().map(|i| i.food_id.clone()).collect()
}
