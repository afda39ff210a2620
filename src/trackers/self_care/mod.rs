pub mod constants;

use self::constants::*;
use crate::analytics::{mean, percentage, Count, FrequencyTable, TOP_N};
use crate::models::Entry;
use crate::trackers::{
    check_level, dedupe, label_for, lookup, trim, FieldKind, FormField, LabeledCount, Preview,
    Tracker,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub struct SelfCare;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfCareFields {
    pub category: String,
    pub activity: String,
    /// Free-text activity; takes precedence over `activity` when set.
    pub custom_activity: String,
    pub duration: String,

    pub motivation: Vec<String>,
    pub energy_before: u8,
    pub mood_before: Vec<String>,
    pub stress_level_before: u8,

    pub enjoyment: u8,
    pub difficulty: u8,
    pub interrupted: bool,
    pub felt_guilty: bool,

    pub energy_after: u8,
    pub mood_after: Vec<String>,
    pub stress_level_after: u8,
    pub physical_impact: Vec<String>,
    pub mental_impact: Vec<String>,
    pub emotional_impact: Vec<String>,

    pub effectiveness: u8,
    pub would_do_again: bool,
    pub what_worked: Vec<String>,
    pub what_didnt: Vec<String>,
    pub insights: String,

    pub location: String,
    pub alone: bool,
    pub support_received: Vec<String>,
    pub barriers: Vec<String>,

    pub planned_vs_spontaneous: String,
    pub time_of_day: String,
    pub seasonal_factors: Vec<String>,
    pub next_steps: Vec<String>,

    pub notes: String,
    pub tags: Vec<String>,
}

impl Default for SelfCareFields {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            activity: String::new(),
            custom_activity: String::new(),
            duration: String::new(),
            motivation: Vec::new(),
            energy_before: 5,
            mood_before: Vec::new(),
            stress_level_before: 5,
            enjoyment: 5,
            difficulty: 5,
            interrupted: false,
            felt_guilty: false,
            energy_after: 5,
            mood_after: Vec::new(),
            stress_level_after: 5,
            physical_impact: Vec::new(),
            mental_impact: Vec::new(),
            emotional_impact: Vec::new(),
            effectiveness: 5,
            would_do_again: true,
            what_worked: Vec::new(),
            what_didnt: Vec::new(),
            insights: String::new(),
            location: String::new(),
            alone: true,
            support_received: Vec::new(),
            barriers: Vec::new(),
            planned_vs_spontaneous: "spontaneous".to_string(),
            time_of_day: String::new(),
            seasonal_factors: Vec::new(),
            next_steps: Vec::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }
}

impl SelfCareFields {
    /// What was actually done: the custom activity if given, else the picked one.
    pub fn activity_key(&self) -> &str {
        if self.custom_activity.is_empty() {
            &self.activity
        } else {
            &self.custom_activity
        }
    }

    pub fn activity_label(&self) -> String {
        label_for(ACTIVITIES, self.activity_key())
    }

    pub fn energy_change(&self) -> i16 {
        i16::from(self.energy_after) - i16::from(self.energy_before)
    }

    /// Positive when stress went down.
    pub fn stress_change(&self) -> i16 {
        i16::from(self.stress_level_before) - i16::from(self.stress_level_after)
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityEffect {
    pub activity: String,
    pub category: String,
    pub count: usize,
    pub avg_effectiveness: f64,
}

#[derive(Debug, Serialize)]
pub struct SelfCareSummary {
    pub total_entries: usize,
    pub avg_effectiveness: f64,
    pub avg_enjoyment: f64,
    pub avg_energy_change: f64,
    pub avg_stress_change: f64,
    pub guilty_count: usize,
    pub interrupted_count: usize,
    pub would_do_again_count: usize,
    pub would_do_again_rate: Option<f64>,
    pub categories: Vec<LabeledCount>,
    pub effective_activities: Vec<ActivityEffect>,
    pub top_moods_after: Vec<Count>,
}

impl Tracker for SelfCare {
    const SLUG: &'static str = "self-care";
    const ID_PREFIX: &'static str = "selfcare";
    const LABEL: &'static str = "Self-Care";
    const EMOJI: &'static str = "🌸";

    type Fields = SelfCareFields;
    type Summary = SelfCareSummary;

    fn validate(fields: &SelfCareFields) -> Result<(), String> {
        if fields.activity_key().trim().is_empty() {
            return Err("Activity is required".to_string());
        }
        if lookup(CATEGORIES, &fields.category).is_none() {
            return Err(format!("Unknown self-care category '{}'", fields.category));
        }
        if lookup(PLANNING, &fields.planned_vs_spontaneous).is_none() {
            return Err("Planned or spontaneous must be 'planned' or 'spontaneous'".to_string());
        }
        for (label, value) in [
            ("Energy before", fields.energy_before),
            ("Stress before", fields.stress_level_before),
            ("Enjoyment", fields.enjoyment),
            ("Difficulty", fields.difficulty),
            ("Energy after", fields.energy_after),
            ("Stress after", fields.stress_level_after),
            ("Effectiveness", fields.effectiveness),
        ] {
            check_level(label, value, 10)?;
        }
        Ok(())
    }

    fn normalize(fields: &mut SelfCareFields) {
        for text in [
            &mut fields.category,
            &mut fields.activity,
            &mut fields.custom_activity,
            &mut fields.duration,
            &mut fields.location,
            &mut fields.planned_vs_spontaneous,
            &mut fields.time_of_day,
        ] {
            trim(text);
        }
        if fields.category.is_empty() {
            fields.category = DEFAULT_CATEGORY.to_string();
        }
        for list in [
            &mut fields.motivation,
            &mut fields.mood_before,
            &mut fields.mood_after,
            &mut fields.physical_impact,
            &mut fields.mental_impact,
            &mut fields.emotional_impact,
            &mut fields.what_worked,
            &mut fields.what_didnt,
            &mut fields.support_received,
            &mut fields.barriers,
            &mut fields.seasonal_factors,
            &mut fields.next_steps,
            &mut fields.tags,
        ] {
            dedupe(list);
        }
    }

    fn summarize(entries: &[Entry<SelfCareFields>]) -> Option<SelfCareSummary> {
        if entries.is_empty() {
            return None;
        }
        let fields: Vec<&SelfCareFields> = entries.iter().map(|entry| &entry.fields).collect();
        let rows = || fields.iter().copied();
        let would_do_again_count = rows().filter(|f| f.would_do_again).count();

        Some(SelfCareSummary {
            total_entries: entries.len(),
            avg_effectiveness: mean(rows().map(|f| f64::from(f.effectiveness))).unwrap_or(0.0),
            avg_enjoyment: mean(rows().map(|f| f64::from(f.enjoyment))).unwrap_or(0.0),
            avg_energy_change: mean(rows().map(|f| f64::from(f.energy_change()))).unwrap_or(0.0),
            avg_stress_change: mean(rows().map(|f| f64::from(f.stress_change()))).unwrap_or(0.0),
            guilty_count: rows().filter(|f| f.felt_guilty).count(),
            interrupted_count: rows().filter(|f| f.interrupted).count(),
            would_do_again_count,
            would_do_again_rate: percentage(would_do_again_count, entries.len()),
            categories: FrequencyTable::of_values(rows(), |f| f.category.as_str())
                .ranked()
                .into_iter()
                .map(|count| LabeledCount::new(CATEGORIES, count))
                .collect(),
            effective_activities: effective_activities(&fields),
            top_moods_after: FrequencyTable::over(rows(), |f| f.mood_after.as_slice())
                .top(TOP_N)
                .into_iter()
                .map(|count| Count {
                    value: label_for(MOODS, &count.value),
                    count: count.count,
                })
                .collect(),
        })
    }

    fn preview(fields: &SelfCareFields) -> Preview {
        let emoji = lookup(ACTIVITIES, fields.activity_key())
            .or_else(|| lookup(CATEGORIES, &fields.category))
            .map_or("🌸", |option| option.emoji);
        let mut changes = vec![format!("Energy {:+}", fields.energy_change())];
        changes.push(format!("Stress {:+}", -fields.stress_change()));
        if fields.felt_guilty {
            changes.push("Felt guilty".to_string());
        }
        if fields.interrupted {
            changes.push("Interrupted".to_string());
        }
        Preview {
            headline: format!("{emoji} {}", fields.activity_label()),
            level: Some(("Effectiveness", fields.effectiveness)),
            chips: vec![
                ("Changes", changes),
                (
                    "Mood after",
                    fields.mood_after.iter().map(|m| label_for(MOODS, m)).collect(),
                ),
                ("What worked", fields.what_worked.clone()),
            ],
            notes: fields.notes.clone(),
        }
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::new("category", "Kind of self-care", FieldKind::Choice { options: CATEGORIES }),
            FormField::new("activity", "Activity", FieldKind::Choice { options: ACTIVITIES }).required(),
            FormField::new("customActivity", "Or describe your own", FieldKind::Text),
            FormField::new("duration", "How long?", FieldKind::Choice { options: DURATIONS }),
            FormField::new("motivation", "Why now?", FieldKind::MultiChoice { options: MOTIVATIONS }),
            FormField::level("energyBefore", "Energy before"),
            FormField::level("stressLevelBefore", "Stress before"),
            FormField::new("moodBefore", "Mood before", FieldKind::MultiChoice { options: MOODS }),
            FormField::level("enjoyment", "Enjoyment"),
            FormField::level("difficulty", "Difficulty"),
            FormField::new("interrupted", "Interrupted", FieldKind::Flag),
            FormField::new("feltGuilty", "Felt guilty taking the time", FieldKind::Flag),
            FormField::level("energyAfter", "Energy after"),
            FormField::level("stressLevelAfter", "Stress after"),
            FormField::new("moodAfter", "Mood after", FieldKind::MultiChoice { options: MOODS }),
            FormField::new("physicalImpact", "Body", FieldKind::MultiChoice { options: PHYSICAL_IMPACTS }),
            FormField::new("mentalImpact", "Mind", FieldKind::MultiChoice { options: MENTAL_IMPACTS }),
            FormField::new("emotionalImpact", "Heart", FieldKind::MultiChoice { options: EMOTIONAL_IMPACTS }),
            FormField::level("effectiveness", "How effective was it?"),
            FormField::new("wouldDoAgain", "Would do it again", FieldKind::Flag),
            FormField::new("insights", "Insights", FieldKind::LongText),
            FormField::new("location", "Where?", FieldKind::Text),
            FormField::new("alone", "Alone", FieldKind::Flag),
            FormField::new("plannedVsSpontaneous", "Planned?", FieldKind::Choice { options: PLANNING }),
            FormField::new("timeOfDay", "Time of day", FieldKind::Choice { options: TIMES_OF_DAY }),
            FormField::new("notes", "Notes", FieldKind::LongText),
        ]
    }

    fn saved_messages() -> &'static [&'static str] {
        SAVED_MESSAGES
    }
}

/// Activities done at least `MIN_REPEATS` times, best average effectiveness first.
fn effective_activities(fields: &[&SelfCareFields]) -> Vec<ActivityEffect> {
    let mut by_activity: BTreeMap<&str, (String, Vec<f64>)> = BTreeMap::new();
    for f in fields {
        let slot = by_activity
            .entry(f.activity_key())
            .or_insert_with(|| (String::new(), Vec::new()));
        slot.0 = f.category.clone();
        slot.1.push(f64::from(f.effectiveness));
    }

    let mut effects: Vec<ActivityEffect> = by_activity
        .into_iter()
        .filter(|(key, (_, scores))| !key.is_empty() && scores.len() >= MIN_REPEATS)
        .filter_map(|(key, (category, scores))| {
            let count = scores.len();
            mean(scores).map(|avg_effectiveness| ActivityEffect {
                activity: label_for(ACTIVITIES, key),
                category,
                count,
                avg_effectiveness,
            })
        })
        .collect();
    effects.sort_by(|a, b| b.avg_effectiveness.total_cmp(&a.avg_effectiveness));
    effects.truncate(TOP_N);
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryMeta;
    use chrono::{NaiveDate, Utc};

    fn entry(activity: &str, effectiveness: u8) -> Entry<SelfCareFields> {
        Entry {
            meta: EntryMeta {
                id: format!("selfcare-{activity}-{effectiveness}"),
                date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                time: "18:00".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            fields: SelfCareFields {
                activity: activity.to_string(),
                effectiveness,
                ..SelfCareFields::default()
            },
        }
    }

    #[test]
    fn activity_is_required_unless_custom() {
        let mut fields = SelfCareFields::default();
        assert_eq!(
            SelfCare::validate(&fields),
            Err("Activity is required".to_string())
        );
        fields.custom_activity = "Sat in the sun".to_string();
        assert!(SelfCare::validate(&fields).is_ok());
        fields.category = "gardening".to_string();
        assert!(SelfCare::validate(&fields).is_err());
    }

    #[test]
    fn changes_and_counts() {
        let mut first = entry("reading", 8);
        first.fields.energy_before = 3;
        first.fields.energy_after = 6;
        first.fields.stress_level_before = 7;
        first.fields.stress_level_after = 4;
        first.fields.felt_guilty = true;
        let mut second = entry("reading", 6);
        second.fields.would_do_again = false;
        second.fields.interrupted = true;
        let third = entry("nap-rest", 9);

        let summary = SelfCare::summarize(&[first, second, third]).unwrap();
        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.avg_effectiveness, 7.7);
        assert_eq!(summary.avg_energy_change, 1.0);
        assert_eq!(summary.avg_stress_change, 1.0);
        assert_eq!(summary.guilty_count, 1);
        assert_eq!(summary.interrupted_count, 1);
        assert_eq!(summary.would_do_again_count, 2);
        assert_eq!(summary.would_do_again_rate, Some(67.0));
        assert_eq!(summary.categories[0].label, "Physical Self-Care");
    }

    #[test]
    fn only_repeated_activities_are_ranked() {
        let entries = vec![
            entry("reading", 6),
            entry("reading", 8),
            entry("nap-rest", 10),
            entry("journaling", 9),
            entry("journaling", 10),
        ];
        let summary = SelfCare::summarize(&entries).unwrap();
        let ranked: Vec<_> = summary
            .effective_activities
            .iter()
            .map(|effect| (effect.activity.as_str(), effect.avg_effectiveness))
            .collect();
        assert_eq!(
            ranked,
            vec![("Journaling", 9.5), ("Reading for pleasure", 7.0)]
        );
    }

    #[test]
    fn custom_activity_wins() {
        let mut fields = SelfCareFields {
            activity: "reading".to_string(),
            custom_activity: " Baking bread ".to_string(),
            ..SelfCareFields::default()
        };
        SelfCare::normalize(&mut fields);
        assert_eq!(fields.activity_key(), "Baking bread");
        assert_eq!(fields.activity_label(), "Baking bread");
    }
}
