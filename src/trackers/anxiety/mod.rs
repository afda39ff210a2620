pub mod constants;

use self::constants::*;
use crate::analytics::{mean, Count, FrequencyTable, TOP_N};
use crate::models::Entry;
use crate::trackers::{
    check_level, dedupe, label_for, lookup, require, trim, FieldKind, FormField, LabeledCount,
    Preview, Tracker,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub struct Anxiety;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnxietyFields {
    pub anxiety_level: u8,
    pub panic_level: u8,
    pub anxiety_type: String,
    pub physical_symptoms: Vec<String>,
    pub mental_symptoms: Vec<String>,
    pub triggers: Vec<String>,
    pub location: String,
    pub social_context: String,
    pub duration: String,
    pub peak_intensity: u8,
    pub onset_speed: String,
    pub coping_strategies: Vec<String>,
    /// Rating 0-10 of how well each tried strategy helped.
    pub coping_effectiveness: BTreeMap<String, u8>,
    pub recovery_time: String,
    pub panic_symptoms: Vec<String>,
    pub meltdown_triggers: Vec<String>,
    pub shutdown_after: bool,
    pub support_received: Vec<String>,
    pub after_effects: Vec<String>,
    pub warning_signs: Vec<String>,
    pub prevention_attempts: Vec<String>,
    pub lessons_learned: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl Default for AnxietyFields {
    fn default() -> Self {
        Self {
            anxiety_level: 5,
            panic_level: 0,
            anxiety_type: String::new(),
            physical_symptoms: Vec::new(),
            mental_symptoms: Vec::new(),
            triggers: Vec::new(),
            location: String::new(),
            social_context: String::new(),
            duration: String::new(),
            peak_intensity: 5,
            onset_speed: String::new(),
            coping_strategies: Vec::new(),
            coping_effectiveness: BTreeMap::new(),
            recovery_time: String::new(),
            panic_symptoms: Vec::new(),
            meltdown_triggers: Vec::new(),
            shutdown_after: false,
            support_received: Vec::new(),
            after_effects: Vec::new(),
            warning_signs: Vec::new(),
            prevention_attempts: Vec::new(),
            lessons_learned: String::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StrategyRating {
    pub strategy: String,
    pub avg_rating: f64,
    pub times_rated: usize,
}

#[derive(Debug, Serialize)]
pub struct AnxietySummary {
    pub total_entries: usize,
    pub avg_anxiety: f64,
    pub avg_panic: f64,
    pub avg_peak_intensity: f64,
    pub most_common_type: Option<LabeledCount>,
    pub trigger_frequency: FrequencyTable,
    pub top_triggers: Vec<Count>,
    pub top_coping: Vec<Count>,
    pub top_physical_symptoms: Vec<Count>,
    pub coping_ratings: Vec<StrategyRating>,
    pub shutdown_count: usize,
}

impl Tracker for Anxiety {
    const SLUG: &'static str = "anxiety";
    const ID_PREFIX: &'static str = "anxiety";
    const LABEL: &'static str = "Anxiety & Panic";
    const EMOJI: &'static str = "💜";

    type Fields = AnxietyFields;
    type Summary = AnxietySummary;

    fn validate(fields: &AnxietyFields) -> Result<(), String> {
        require("Anxiety type", &fields.anxiety_type)?;
        check_level("Anxiety level", fields.anxiety_level, 10)?;
        check_level("Panic level", fields.panic_level, 10)?;
        check_level("Peak intensity", fields.peak_intensity, 10)?;
        for (strategy, rating) in &fields.coping_effectiveness {
            check_level(strategy, *rating, 10)?;
        }
        Ok(())
    }

    fn normalize(fields: &mut AnxietyFields) {
        for text in [
            &mut fields.anxiety_type,
            &mut fields.location,
            &mut fields.social_context,
            &mut fields.duration,
            &mut fields.onset_speed,
            &mut fields.recovery_time,
        ] {
            trim(text);
        }
        for list in [
            &mut fields.physical_symptoms,
            &mut fields.mental_symptoms,
            &mut fields.triggers,
            &mut fields.coping_strategies,
            &mut fields.panic_symptoms,
            &mut fields.meltdown_triggers,
            &mut fields.support_received,
            &mut fields.after_effects,
            &mut fields.warning_signs,
            &mut fields.prevention_attempts,
            &mut fields.tags,
        ] {
            dedupe(list);
        }
    }

    fn summarize(entries: &[Entry<AnxietyFields>]) -> Option<AnxietySummary> {
        if entries.is_empty() {
            return None;
        }
        let fields: Vec<&AnxietyFields> = entries.iter().map(|entry| &entry.fields).collect();

        let types = FrequencyTable::of_values(fields.iter().copied(), |f| f.anxiety_type.as_str());
        let most_common_type = types
            .most_common()
            .map(|top| LabeledCount::new(ANXIETY_TYPES, top));

        let triggers = FrequencyTable::over(fields.iter().copied(), |f| f.triggers.as_slice());
        let coping = FrequencyTable::over(fields.iter().copied(), |f| f.coping_strategies.as_slice());
        let physical =
            FrequencyTable::over(fields.iter().copied(), |f| f.physical_symptoms.as_slice());

        Some(AnxietySummary {
            total_entries: entries.len(),
            avg_anxiety: mean(fields.iter().map(|f| f64::from(f.anxiety_level))).unwrap_or(0.0),
            avg_panic: mean(fields.iter().map(|f| f64::from(f.panic_level))).unwrap_or(0.0),
            avg_peak_intensity: mean(fields.iter().map(|f| f64::from(f.peak_intensity)))
                .unwrap_or(0.0),
            most_common_type,
            top_triggers: triggers.top(TOP_N),
            trigger_frequency: triggers,
            top_coping: coping
                .top(TOP_N)
                .into_iter()
                .map(|count| Count {
                    value: label_for(COPING_STRATEGIES, &count.value),
                    count: count.count,
                })
                .collect(),
            top_physical_symptoms: physical.top(TOP_N),
            coping_ratings: coping_ratings(&fields),
            shutdown_count: fields.iter().filter(|f| f.shutdown_after).count(),
        })
    }

    fn preview(fields: &AnxietyFields) -> Preview {
        let headline = lookup(ANXIETY_TYPES, &fields.anxiety_type)
            .map(|option| format!("{} {}", option.emoji, option.label))
            .unwrap_or_else(|| fields.anxiety_type.clone());
        Preview {
            headline,
            level: Some(("Anxiety", fields.anxiety_level)),
            chips: vec![
                ("Triggers", fields.triggers.clone()),
                ("Physical", fields.physical_symptoms.clone()),
                (
                    "Coping",
                    fields
                        .coping_strategies
                        .iter()
                        .map(|value| label_for(COPING_STRATEGIES, value))
                        .collect(),
                ),
            ],
            notes: fields.notes.clone(),
        }
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::new("anxietyType", "What kind of experience?", FieldKind::Choice { options: ANXIETY_TYPES })
                .required(),
            FormField::level("anxietyLevel", "Anxiety level"),
            FormField::level("panicLevel", "Panic level"),
            FormField::level("peakIntensity", "Peak intensity"),
            FormField::new("physicalSymptoms", "Physical symptoms", FieldKind::MultiChoice { options: PHYSICAL_SYMPTOMS }),
            FormField::new("mentalSymptoms", "Mental symptoms", FieldKind::MultiChoice { options: MENTAL_SYMPTOMS }),
            FormField::new("triggers", "Triggers", FieldKind::MultiChoice { options: COMMON_TRIGGERS }),
            FormField::new("socialContext", "Social context", FieldKind::Choice { options: SOCIAL_CONTEXT }),
            FormField::new("location", "Where were you?", FieldKind::Text),
            FormField::new("duration", "Duration", FieldKind::Choice { options: DURATION_OPTIONS }),
            FormField::new("onsetSpeed", "Onset", FieldKind::Choice { options: ONSET_SPEED }),
            FormField::new("copingStrategies", "Coping strategies", FieldKind::MultiChoice { options: COPING_STRATEGIES }),
            FormField::new("shutdownAfter", "Shut down afterwards", FieldKind::Flag),
            FormField::new("afterEffects", "After effects", FieldKind::MultiChoice { options: AFTER_EFFECTS }),
            FormField::new("recoveryTime", "Recovery time", FieldKind::Text),
            FormField::new("lessonsLearned", "Lessons learned", FieldKind::LongText),
            FormField::new("notes", "Notes", FieldKind::LongText),
        ]
    }

    fn saved_messages() -> &'static [&'static str] {
        SAVED_MESSAGES
    }
}

fn coping_ratings(fields: &[&AnxietyFields]) -> Vec<StrategyRating> {
    let mut ratings: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (strategy, rating) in fields.iter().flat_map(|f| f.coping_effectiveness.iter()) {
        ratings
            .entry(strategy.as_str())
            .or_default()
            .push(f64::from(*rating));
    }

    let mut rated: Vec<StrategyRating> = ratings
        .into_iter()
        .filter_map(|(strategy, values)| {
            let times_rated = values.len();
            mean(values).map(|avg_rating| StrategyRating {
                strategy: label_for(COPING_STRATEGIES, strategy),
                avg_rating,
                times_rated,
            })
        })
        .collect();
    rated.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    rated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryMeta;
    use chrono::{NaiveDate, Utc};

    fn entry(level: u8, triggers: &[&str]) -> Entry<AnxietyFields> {
        Entry {
            meta: EntryMeta {
                id: format!("anxiety-{level}"),
                date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                time: "10:00".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            fields: AnxietyFields {
                anxiety_level: level,
                anxiety_type: "social".to_string(),
                triggers: triggers.iter().map(|t| t.to_string()).collect(),
                ..AnxietyFields::default()
            },
        }
    }

    #[test]
    fn average_and_trigger_frequency() {
        let entries = vec![
            entry(4, &["Work"]),
            entry(6, &["Work", "Sleep"]),
            entry(8, &["Sleep"]),
        ];
        let summary = Anxiety::summarize(&entries).expect("summary");

        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.avg_anxiety, 6.0);
        assert_eq!(summary.trigger_frequency.get("Work"), 2);
        assert_eq!(summary.trigger_frequency.get("Sleep"), 2);
        assert_eq!(summary.trigger_frequency.len(), 2);

        let most_common = summary.most_common_type.expect("type");
        assert_eq!(most_common.label, "Social Anxiety");
        assert_eq!(most_common.count, 3);
    }

    #[test]
    fn no_entries_means_no_summary() {
        assert!(Anxiety::summarize(&[]).is_none());
    }

    #[test]
    fn coping_ratings_are_averaged_per_strategy() {
        let mut first = entry(5, &[]);
        first.fields.coping_effectiveness.insert("deep-breathing".into(), 8);
        first.fields.coping_effectiveness.insert("walking".into(), 3);
        let mut second = entry(5, &[]);
        second.fields.coping_effectiveness.insert("deep-breathing".into(), 5);

        let summary = Anxiety::summarize(&[first, second]).unwrap();
        assert_eq!(summary.coping_ratings[0].strategy, "Deep breathing");
        assert_eq!(summary.coping_ratings[0].avg_rating, 6.5);
        assert_eq!(summary.coping_ratings[0].times_rated, 2);
        assert_eq!(summary.coping_ratings[1].strategy, "Walking/pacing");
    }

    #[test]
    fn type_is_required_and_levels_bounded() {
        let mut fields = AnxietyFields::default();
        assert!(Anxiety::validate(&fields).is_err());
        fields.anxiety_type = "panic-attack".to_string();
        assert!(Anxiety::validate(&fields).is_ok());
        fields.panic_level = 12;
        assert!(Anxiety::validate(&fields).is_err());
    }

    #[test]
    fn legacy_partial_entry_decodes_with_defaults() {
        let entry: Entry<AnxietyFields> = serde_json::from_value(serde_json::json!({
            "id": "anxiety-1",
            "date": "2026-04-01",
            "time": "09:30",
            "anxietyLevel": 7,
            "anxietyType": "meltdown",
            "createdAt": "2026-04-01T09:30:00Z",
            "updatedAt": "2026-04-01T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(entry.fields.anxiety_level, 7);
        assert_eq!(entry.fields.peak_intensity, 5);
        assert!(entry.fields.coping_strategies.is_empty());
    }
}
