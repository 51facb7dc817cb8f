//! Nutrient tags and the tag vocabulary
//!
//! The set of valid tags is whatever the metadata table names; nothing here
//! hard-codes tag names.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// Identifier of one nutrient column, e.g. `ENERC_KCAL` or `PROT-`
///
/// Only obtainable through [`TagVocabulary::lookup`], so a `NutrientTag` in
/// hand is always a tag the dataset knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NutrientTag {
    name: Arc<str>,
    column: usize,
}

impl NutrientTag {
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Position of this tag's value in every food item's nutrient list
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for NutrientTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for NutrientTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// One row of the metadata table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagMetadata {
    #[serde(alias = "name")]
    pub tag_name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

/// The closed set of nutrient tags, in dataset column order
#[derive(Debug, Clone, Default)]
pub struct TagVocabulary {
    tags: Vec<NutrientTag>,
    metadata: Vec<TagMetadata>,
    by_name: HashMap<String, usize>,
}

impl TagVocabulary {
    /// Build the vocabulary from the metadata table.
    ///
    /// Returns the offending name if a tag appears twice.
    pub fn from_metadata(metadata: Vec<TagMetadata>) -> Result<Self, String> {
        let mut tags = Vec::with_capacity(metadata.len());
        let mut by_name = HashMap::with_capacity(metadata.len());

        for (column, meta) in metadata.iter().enumerate() {
            if by_name.insert(meta.tag_name.clone(), column).is_some() {
                return Err(meta.tag_name.clone());
            }
            tags.push(NutrientTag {
                name: Arc::from(meta.tag_name.as_str()),
                column,
            });
        }

        Ok(Self {
            tags,
            metadata,
            by_name,
        })
    }

    /// Resolve a tag name
    pub fn lookup(&self, name: &str) -> Option<NutrientTag> {
        self.by_name.get(name).map(|&column| self.tags[column].clone())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags paired with their metadata, in column order
    pub fn iter(&self) -> impl Iterator<Item = (&NutrientTag, &TagMetadata)> {
        self.tags.iter().zip(self.metadata.iter())
    }

    pub fn metadata(&self) -> &[TagMetadata] {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> TagMetadata {
        TagMetadata {
            tag_name: name.to_string(),
            unit: "g".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let vocab = TagVocabulary::from_metadata(vec![meta("WATER"), meta("PROT-")]).unwrap();
        let prot = vocab.lookup("PROT-").unwrap();
        assert_eq!(prot.as_str(), "PROT-");
        assert_eq!(prot.column(), 1);
        assert!(vocab.lookup("prot-").is_none());
        assert!(vocab.lookup("FAT-").is_none());
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let err = TagVocabulary::from_metadata(vec![meta("WATER"), meta("WATER")]).unwrap_err();
        assert_eq!(err, "WATER");
    }

    #[test]
    fn test_metadata_accepts_original_field_name() {
        let parsed: TagMetadata =
            serde_json::from_str(r#"{"name":"NA","unit":"mg","description":"sodium"}"#).unwrap();
        assert_eq!(parsed.tag_name, "NA");
        assert_eq!(parsed.unit, "mg");
    }

    #[test]
    fn test_tag_serializes_as_plain_string() {
        let vocab = TagVocabulary::from_metadata(vec![meta("ENERC_KCAL")]).unwrap();
        let tag = vocab.lookup("ENERC_KCAL").unwrap();
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"ENERC_KCAL\"");
    }
}
