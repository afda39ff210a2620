pub mod anxiety;
pub mod dysautonomia;
pub mod food_allergens;
pub mod mental_health;
pub mod pain;
pub mod self_care;

use crate::analytics::Count;
use crate::models::{Entry, TrackerDescriptor};
use rand::seq::SliceRandom;
use serde::{Serialize, de::DeserializeOwned};

pub use anxiety::Anxiety;
pub use dysautonomia::Dysautonomia;
pub use food_allergens::FoodAllergens;
pub use mental_health::MentalHealth;
pub use pain::Pain;
pub use self_care::SelfCare;

/// A self-contained journal for one health domain.
///
/// Implementors supply the entry shape, its form layout and picklists, the
/// presence checks run before saving, and the client-side summary.
pub trait Tracker: Send + Sync + 'static {
    /// Storage subcategory and URL segment.
    const SLUG: &'static str;
    /// Prefix of generated entry ids (`<prefix>-<epoch millis>`).
    const ID_PREFIX: &'static str;
    const LABEL: &'static str;
    const EMOJI: &'static str;
    const REMOTE_ANALYTICS: bool = false;

    type Fields: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static;
    type Summary: Serialize + Send + 'static;

    fn validate(fields: &Self::Fields) -> Result<(), String>;

    /// Trims text and drops duplicate multi-select items before saving.
    fn normalize(fields: &mut Self::Fields);

    /// `None` when there is nothing to summarise.
    fn summarize(entries: &[Entry<Self::Fields>]) -> Option<Self::Summary>;

    fn preview(fields: &Self::Fields) -> Preview;

    fn form() -> Vec<FormField>;

    fn saved_messages() -> &'static [&'static str];

    fn descriptor() -> TrackerDescriptor {
        TrackerDescriptor {
            slug: Self::SLUG,
            label: Self::LABEL,
            emoji: Self::EMOJI,
            remote_analytics: Self::REMOTE_ANALYTICS,
        }
    }
}

pub fn descriptors() -> Vec<TrackerDescriptor> {
    vec![
        Anxiety::descriptor(),
        MentalHealth::descriptor(),
        Pain::descriptor(),
        Dysautonomia::descriptor(),
        SelfCare::descriptor(),
        FoodAllergens::descriptor(),
    ]
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PicklistOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "is_blank")]
    pub emoji: &'static str,
    #[serde(skip_serializing_if = "is_blank")]
    pub category: &'static str,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: &'static str,
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

impl PicklistOption {
    /// An option whose stored value is its label.
    pub const fn plain(label: &'static str) -> Self {
        Self {
            value: label,
            label,
            emoji: "",
            category: "",
            description: "",
        }
    }

    pub const fn new(
        value: &'static str,
        label: &'static str,
        emoji: &'static str,
        category: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            value,
            label,
            emoji,
            category,
            description,
        }
    }
}

pub fn lookup(options: &'static [PicklistOption], value: &str) -> Option<&'static PicklistOption> {
    options.iter().find(|option| option.value == value)
}

pub fn label_for(options: &'static [PicklistOption], value: &str) -> String {
    lookup(options, value)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// A frequency count decorated with its catalog label and emoji.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledCount {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub emoji: String,
    pub count: u64,
}

impl LabeledCount {
    pub fn new(options: &'static [PicklistOption], count: Count) -> Self {
        let option = lookup(options, &count.value);
        Self {
            label: option.map_or_else(|| count.value.clone(), |o| o.label.to_string()),
            emoji: option.map(|o| o.emoji).unwrap_or_default().to_string(),
            value: count.value,
            count: count.count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Level { min: u8, max: u8 },
    Choice { options: &'static [PicklistOption] },
    MultiChoice { options: &'static [PicklistOption] },
    Text,
    LongText,
    Flag,
    Number,
}

/// One input of a tracker's form; `name` is the JSON key it fills.
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            required: false,
            kind,
        }
    }

    pub fn level(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Level { min: 0, max: 10 })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Card contents for the history list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Preview {
    pub headline: String,
    pub level: Option<(&'static str, u8)>,
    pub chips: Vec<(&'static str, Vec<String>)>,
    pub notes: String,
}

pub fn dedupe(items: &mut Vec<String>) {
    let mut kept: Vec<String> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        let item = item.trim().to_string();
        if !item.is_empty() && !kept.contains(&item) {
            kept.push(item);
        }
    }
    *items = kept;
}

pub fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

pub fn require(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

pub fn check_level(label: &str, value: u8, max: u8) -> Result<(), String> {
    if value > max {
        Err(format!("{label} must be between 0 and {max}"))
    } else {
        Ok(())
    }
}

pub fn pick_message(messages: &[&str]) -> String {
    messages
        .choose(&mut rand::thread_rng())
        .map(|message| message.to_string())
        .unwrap_or_else(|| "Entry saved.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let mut items = vec![
            "Work".to_string(),
            " Sleep ".to_string(),
            "Work".to_string(),
            "".to_string(),
            "Caffeine".to_string(),
            "Sleep".to_string(),
        ];
        dedupe(&mut items);
        assert_eq!(items, vec!["Work", "Sleep", "Caffeine"]);
    }

    #[test]
    fn level_and_presence_checks() {
        assert!(check_level("Pain level", 10, 10).is_ok());
        assert!(check_level("Pain level", 11, 10).is_err());
        assert!(require("Mood", "  ").is_err());
        assert!(require("Mood", "okay").is_ok());
    }

    #[test]
    fn every_tracker_is_listed_once() {
        let slugs: Vec<_> = descriptors().iter().map(|d| d.slug).collect();
        assert_eq!(
            slugs,
            vec![
                "anxiety",
                "mental-health",
                "pain",
                "dysautonomia",
                "self-care",
                "food-allergens"
            ]
        );
        let remote: Vec<_> = descriptors()
            .into_iter()
            .filter(|d| d.remote_analytics)
            .map(|d| d.slug)
            .collect();
        assert_eq!(remote, vec!["pain", "dysautonomia"]);
    }

    #[test]
    fn saved_message_comes_from_the_list() {
        let messages = ["one", "two"];
        let picked = pick_message(&messages);
        assert!(messages.contains(&picked.as_str()));
        assert_eq!(pick_message(&[]), "Entry saved.");
    }
}
