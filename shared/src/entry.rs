use serde::Deserialize;
use serde_json::{Map, Value};

/// Prefix placed in front of the honors annotation rendered after a title
pub const HONORS_PREFIX: &str = "\u{a0}**";

/// Payload pieces dropped while extracting entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkippedItems {
    /// Section items that were not objects
    pub entries: usize,
    /// Partner items that were not objects
    pub partners: usize,
    /// Non-string items inside string lists such as `skills`
    pub list_items: usize,
    /// Fields holding a JSON type other than the expected one
    pub fields: usize,
}

impl SkippedItems {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One renderable item: a job, award, activity, degree or partner organization.
///
/// Entries are always extracted leniently. A field holding an unexpected JSON
/// type is treated as absent instead of rejecting the whole entry, so a single
/// malformed record never aborts rendering of its siblings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Entry {
    /// Title of the entry (empty when the payload has none)
    pub title: String,
    pub honors: Option<String>,
    /// Used by work items; wins over `subtitle` when both are set
    pub position: Option<String>,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub year: Option<String>,
    /// Presence (non-blank) makes the entry expandable
    pub description: Option<String>,
    pub skills: Vec<String>,
    /// Sub-entries rendered indented beneath this one
    pub partners: Vec<Entry>,
}

impl Entry {
    /// Entry with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Extract an entry from a JSON value. Returns `None` when the value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::extract(value, &mut SkippedItems::default())
    }

    /// Like [`Entry::from_value`], tallying everything dropped from inside the entry.
    /// A non-object `value` is left for the caller to count.
    pub fn extract(value: &Value, skipped: &mut SkippedItems) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self::from_map(map, skipped))
    }

    fn from_map(map: &Map<String, Value>, skipped: &mut SkippedItems) -> Self {
        Self {
            title: string_field(map, "title", skipped).unwrap_or_default(),
            honors: string_field(map, "honors", skipped),
            position: string_field(map, "position", skipped),
            subtitle: string_field(map, "subtitle", skipped),
            location: string_field(map, "location", skipped),
            year: string_field(map, "year", skipped),
            description: string_field(map, "description", skipped),
            skills: string_list(map, "skills", skipped),
            partners: partner_list(map, skipped),
        }
    }

    /// Subtitle shown under the title: `position`, else `subtitle`, else empty.
    pub fn resolve_subtitle(&self) -> &str {
        self.position
            .as_deref()
            .or(self.subtitle.as_deref())
            .unwrap_or("")
    }

    /// Inline annotation appended to the title, if the entry carries honors
    pub fn honors_suffix(&self) -> Option<String> {
        self.honors
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(|h| format!("{}{}", HONORS_PREFIX, h))
    }

    /// Location text, or `None` when the location region should be hidden
    pub fn visible_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    pub fn year_text(&self) -> &str {
        self.year.as_deref().unwrap_or("")
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// True when the description holds something other than whitespace
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::from_value(&value).unwrap_or_default()
    }
}

fn string_field(map: &Map<String, Value>, key: &str, skipped: &mut SkippedItems) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            skipped.fields += 1;
            tracing::debug!(field = key, value = %other, "ignoring non-string entry field");
            None
        }
    }
}

fn string_list(map: &Map<String, Value>, key: &str, skipped: &mut SkippedItems) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    skipped.list_items += 1;
                    tracing::debug!(field = key, value = %other, "skipping non-string list item");
                    None
                }
            })
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            skipped.fields += 1;
            tracing::debug!(field = key, value = %other, "ignoring non-array entry field");
            Vec::new()
        }
    }
}

// Partners are one level deep; their own `partners` are extracted but never rendered.
fn partner_list(map: &Map<String, Value>, skipped: &mut SkippedItems) -> Vec<Entry> {
    match map.get("partners") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let partner = Entry::extract(item, skipped);
                if partner.is_none() {
                    skipped.partners += 1;
                    tracing::debug!(value = %item, "skipping non-object partner");
                }
                partner
            })
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            skipped.fields += 1;
            tracing::debug!(value = %other, "ignoring non-array partners field");
            Vec::new()
        }
    }
}
