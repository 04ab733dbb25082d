use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::DatasetError;

/// One row of the skills grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Contents of `skills.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    pub fn from_json(payload: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(&value)
    }

    /// Lenient extraction: unnamed categories get an empty heading, non-string items are dropped
    pub fn from_value(value: &Value) -> Result<Self, DatasetError> {
        let object = value.as_object().ok_or(DatasetError::NotAnObject)?;

        let categories = match object.get("categories") {
            Some(Value::Array(raw)) => raw.iter().filter_map(category_from_value).collect(),
            Some(other) => {
                tracing::warn!(value = %other, "skills categories is not an array");
                Vec::new()
            }
            None => Vec::new(),
        };

        Ok(Self { categories })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn tag_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

fn category_from_value(value: &Value) -> Option<SkillCategory> {
    let Some(map) = value.as_object() else {
        tracing::debug!(value = %value, "skipping non-object skill category");
        return None;
    };

    let name = map
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let items = map
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(SkillCategory { name, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = SkillCatalog::from_json(
            r#"{"categories": [
                {"name": "Languages", "items": ["Rust", "Go", "TypeScript"]},
                {"name": "Tools", "items": ["Git"]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].name, "Languages");
        assert_eq!(catalog.categories[0].items, vec!["Rust", "Go", "TypeScript"]);
        assert_eq!(catalog.tag_count(), 4);
    }

    #[test]
    fn test_lenient_categories() {
        let catalog = SkillCatalog::from_json(
            r#"{"categories": [
                {"items": ["Rust", 3, "Go"]},
                "not a category",
                {"name": "Empty"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].name, "");
        assert_eq!(catalog.categories[0].items, vec!["Rust", "Go"]);
        assert!(catalog.categories[1].items.is_empty());
    }

    #[test]
    fn test_missing_categories() {
        assert!(SkillCatalog::from_json("{}").unwrap().is_empty());
        assert!(SkillCatalog::from_json(r#"{"categories": 1}"#).unwrap().is_empty());
        assert!(SkillCatalog::from_json("null").is_err());
    }
}
