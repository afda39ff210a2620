//! Stored day content and the migration of older shapes into it.
//!
//! Every record is written as `{"version": 2, "entries": [...]}`. Older data
//! shows up as a JSON string holding an object, as `{"entries": "<json>"}`, as a
//! bare array, or as one entry object per record. All of these are normalised
//! once when the data file is loaded.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONTENT_VERSION: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayContent {
    pub version: u32,
    pub entries: Vec<Value>,
}

impl DayContent {
    pub fn new(entries: Vec<Value>) -> Self {
        Self {
            version: CONTENT_VERSION,
            entries,
        }
    }
}

impl Default for DayContent {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    Current,
    Legacy,
    Unreadable,
}

/// Normalises raw stored content. Unreadable content becomes an empty day.
pub fn migrate_content(raw: Value) -> (DayContent, ContentShape) {
    if let Some(content) = current_content(&raw) {
        return (content, ContentShape::Current);
    }

    match legacy_entries(raw, true) {
        Some(entries) => (DayContent::new(entries), ContentShape::Legacy),
        None => (DayContent::default(), ContentShape::Unreadable),
    }
}

fn current_content(raw: &Value) -> Option<DayContent> {
    let version = raw.get("version")?.as_u64()?;
    if version != u64::from(CONTENT_VERSION) {
        return None;
    }
    let entries = raw.get("entries")?.as_array()?.clone();
    Some(DayContent::new(entries))
}

fn legacy_entries(raw: Value, allow_text: bool) -> Option<Vec<Value>> {
    match raw {
        Value::Null => Some(Vec::new()),
        Value::String(text) if allow_text => {
            let parsed: Value = serde_json::from_str(&text).ok()?;
            legacy_entries(parsed, false)
        }
        Value::Array(items) => Some(items.into_iter().filter(Value::is_object).collect()),
        Value::Object(mut map) => match map.remove("entries") {
            Some(inner) => entries_field(inner),
            None if map.contains_key("id") => Some(vec![Value::Object(map)]),
            None => None,
        },
        _ => None,
    }
}

fn entries_field(inner: Value) -> Option<Vec<Value>> {
    match inner {
        Value::Null => Some(Vec::new()),
        Value::String(text) => match serde_json::from_str::<Value>(&text).ok()? {
            Value::Array(items) => Some(items.into_iter().filter(Value::is_object).collect()),
            Value::Object(map) => Some(vec![Value::Object(map)]),
            _ => None,
        },
        Value::Array(items) => Some(items.into_iter().filter(Value::is_object).collect()),
        Value::Object(map) => Some(vec![Value::Object(map)]),
        _ => None,
    }
}

/// For a per-entry record stored under `<partition>-<entry id>`, returns the
/// day partition the entry belongs to.
pub fn legacy_partition(subcategory: &str, entries: &[Value]) -> Option<String> {
    let [entry] = entries else {
        return None;
    };
    let id = entry.get("id")?.as_str()?;
    let partition = subcategory.strip_suffix(id)?.strip_suffix('-')?;
    if partition.is_empty() {
        return None;
    }
    let renamed = RENAMED_PARTITIONS
        .iter()
        .find(|(old, _)| *old == partition)
        .map_or(partition, |(_, new)| *new);
    Some(renamed.to_string())
}

/// Per-entry partitions whose day partition goes by a different name.
const RENAMED_PARTITIONS: &[(&str, &str)] = &[("selfcare", "self-care")];

/// Union of the `tags` arrays of a day's entries, in first-seen order.
pub fn collect_tags(entries: &[Value]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in entries
        .iter()
        .filter_map(|entry| entry.get("tags").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
    {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_content_is_kept_as_is() {
        let raw = json!({ "version": 2, "entries": [{ "id": "pain-1" }] });
        let (content, shape) = migrate_content(raw);
        assert_eq!(shape, ContentShape::Current);
        assert_eq!(content.entries.len(), 1);
    }

    #[test]
    fn stringified_entries_field_is_parsed() {
        let raw = json!({ "entries": "[{\"id\":\"pain-1\"},{\"id\":\"pain-2\"}]" });
        let (content, shape) = migrate_content(raw);
        assert_eq!(shape, ContentShape::Legacy);
        assert_eq!(content.version, CONTENT_VERSION);
        assert_eq!(content.entries.len(), 2);
    }

    #[test]
    fn whole_content_as_string_is_parsed_once() {
        let raw = Value::String("{\"entries\":[{\"id\":\"mh-1\"}]}".to_string());
        let (content, shape) = migrate_content(raw);
        assert_eq!(shape, ContentShape::Legacy);
        assert_eq!(entry_id(&content.entries[0]), Some("mh-1"));
    }

    #[test]
    fn single_entry_object_is_wrapped() {
        let raw = json!({ "entries": { "id": "dys-1", "severity": 4 } });
        let (content, _) = migrate_content(raw);
        assert_eq!(content.entries.len(), 1);

        let bare = json!({ "id": "anxiety-1", "anxietyLevel": 3 });
        let (content, shape) = migrate_content(bare);
        assert_eq!(shape, ContentShape::Legacy);
        assert_eq!(entry_id(&content.entries[0]), Some("anxiety-1"));
    }

    #[test]
    fn malformed_content_becomes_empty() {
        let (content, shape) = migrate_content(Value::String("{not json".to_string()));
        assert_eq!(shape, ContentShape::Unreadable);
        assert!(content.entries.is_empty());

        let (content, shape) = migrate_content(json!({ "entries": "42" }));
        assert_eq!(shape, ContentShape::Unreadable);
        assert!(content.entries.is_empty());

        let (_, shape) = migrate_content(json!(17));
        assert_eq!(shape, ContentShape::Unreadable);
    }

    #[test]
    fn legacy_partition_matches_entry_id_suffix() {
        let entries = vec![json!({ "id": "anxiety-1736600000000" })];
        assert_eq!(
            legacy_partition("anxiety-anxiety-1736600000000", &entries),
            Some("anxiety".to_string())
        );
        assert_eq!(legacy_partition("anxiety", &entries), None);
        assert_eq!(legacy_partition("anxiety-other-id", &entries), None);
        assert_eq!(legacy_partition("anxiety-anxiety-1736600000000", &[]), None);

        let entries = vec![json!({ "id": "selfcare-1736600000000" })];
        assert_eq!(
            legacy_partition("selfcare-selfcare-1736600000000", &entries),
            Some("self-care".to_string())
        );
    }

    #[test]
    fn tags_are_collected_without_duplicates() {
        let entries = vec![
            json!({ "tags": ["flare", "work"] }),
            json!({ "tags": ["work", "weather"] }),
            json!({ "notes": "no tags" }),
        ];
        assert_eq!(collect_tags(&entries), vec!["flare", "work", "weather"]);
    }
}
