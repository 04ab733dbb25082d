use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::entry::{Entry, SkippedItems};

/// Named list of entries in `experience.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    WorkExperience,
    ExtracurricularActivities,
    AchievementsAwards,
    Education,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::WorkExperience,
        Section::ExtracurricularActivities,
        Section::AchievementsAwards,
        Section::Education,
    ];

    /// Key of this section in the JSON payload
    pub fn key(self) -> &'static str {
        match self {
            Section::WorkExperience => "workExperience",
            Section::ExtracurricularActivities => "extracurricularActivities",
            Section::AchievementsAwards => "achievementsAwards",
            Section::Education => "education",
        }
    }

    /// Id of the page container this section renders into
    pub fn container_id(self) -> &'static str {
        match self {
            Section::WorkExperience => "experience-list",
            Section::ExtracurricularActivities => "extracurricular-list",
            Section::AchievementsAwards => "achievements-list",
            Section::Education => "education-list",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Entries per section, fetched once per page load and never written back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    sections: BTreeMap<Section, Vec<Entry>>,
    skipped: BTreeMap<Section, SkippedItems>,
}

impl Dataset {
    pub fn from_json(payload: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(&value)
    }

    /// Build a dataset from a parsed payload.
    ///
    /// Each section is checked on its own: a missing or non-array key means
    /// "no entries for this section" and never affects the other sections.
    pub fn from_value(value: &Value) -> Result<Self, DatasetError> {
        let object = value.as_object().ok_or(DatasetError::NotAnObject)?;
        let mut sections = BTreeMap::new();
        let mut skipped = BTreeMap::new();

        for section in Section::ALL {
            match object.get(section.key()) {
                Some(Value::Array(items)) => {
                    let mut dropped = SkippedItems::default();
                    let entries = items
                        .iter()
                        .enumerate()
                        .filter_map(|(index, item)| {
                            let entry = Entry::extract(item, &mut dropped);
                            if entry.is_none() {
                                dropped.entries += 1;
                                tracing::debug!(%section, index, "skipping non-object entry");
                            }
                            entry
                        })
                        .collect();
                    sections.insert(section, entries);
                    if !dropped.is_empty() {
                        skipped.insert(section, dropped);
                    }
                }
                Some(_) => {
                    tracing::warn!(%section, "section is not an array, not rendering it");
                }
                None => {}
            }
        }

        Ok(Self { sections, skipped })
    }

    /// Entries of a section, or `None` when the payload did not carry it as an array
    pub fn section(&self, section: Section) -> Option<&[Entry]> {
        self.sections.get(&section).map(Vec::as_slice)
    }

    /// Present sections in payload order of `Section::ALL`
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[Entry])> {
        self.sections.iter().map(|(s, e)| (*s, e.as_slice()))
    }

    /// What extraction dropped from a section's items
    pub fn skipped(&self, section: Section) -> SkippedItems {
        self.skipped.get(&section).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_and_containers() {
        let keys: Vec<String> = Section::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            keys,
            vec!["workExperience", "extracurricularActivities", "achievementsAwards", "education"]
        );
        assert_eq!(Section::Education.container_id(), "education-list");
    }

    #[test]
    fn test_parse_full_payload() {
        let payload = r#"{
            "workExperience": [
                {"title": "Engineer", "position": "SWE", "year": "2023", "description": "Built things"}
            ],
            "extracurricularActivities": [],
            "achievementsAwards": [{"title": "Award"}, {"title": "Other award"}],
            "education": [{"title": "University", "honors": "Dean's List"}]
        }"#;

        let dataset = Dataset::from_json(payload).unwrap();
        let work = dataset.section(Section::WorkExperience).unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "Engineer");
        assert_eq!(work[0].resolve_subtitle(), "SWE");

        assert_eq!(dataset.section(Section::ExtracurricularActivities).map(<[Entry]>::len), Some(0));
        assert_eq!(dataset.section(Section::AchievementsAwards).unwrap().len(), 2);
        assert_eq!(dataset.sections().count(), 4);
    }

    #[test]
    fn test_missing_or_non_array_sections_are_independent() {
        let payload = r#"{
            "workExperience": {"title": "not a list"},
            "education": [{"title": "School"}, 5, "x"]
        }"#;

        let dataset = Dataset::from_json(payload).unwrap();
        assert!(dataset.section(Section::WorkExperience).is_none());
        assert!(dataset.section(Section::AchievementsAwards).is_none());

        let education = dataset.section(Section::Education).unwrap();
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].title, "School");
        assert_eq!(dataset.skipped(Section::Education).entries, 2);
        assert!(dataset.skipped(Section::WorkExperience).is_empty());
    }

    #[test]
    fn test_skipped_items_are_tallied_per_section() {
        let payload = r#"{
            "workExperience": [{"title": "Engineer", "year": 2023, "skills": ["Go", 7]}],
            "education": [{"title": "School", "partners": ["x", {"title": "Lab"}]}]
        }"#;

        let dataset = Dataset::from_json(payload).unwrap();
        let work = dataset.skipped(Section::WorkExperience);
        assert_eq!((work.entries, work.fields, work.list_items), (0, 1, 1));

        let education = dataset.skipped(Section::Education);
        assert_eq!(education.partners, 1);
        assert_eq!(education.fields, 0);
        assert!(dataset.skipped(Section::AchievementsAwards).is_empty());
    }

    #[test]
    fn test_invalid_payloads() {
        assert!(matches!(
            Dataset::from_json("{ not json"),
            Err(DatasetError::InvalidJson(_))
        ));
        assert!(matches!(
            Dataset::from_json("[1, 2, 3]"),
            Err(DatasetError::NotAnObject)
        ));
        assert!(Dataset::from_json("{}").unwrap().is_empty());
    }
}
