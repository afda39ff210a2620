pub mod constants;

use self::constants::*;
use crate::analytics::{mean, percentage, Count, FrequencyTable, TOP_N};
use crate::models::Entry;
use crate::trackers::{
    check_level, dedupe, label_for, lookup, require, trim, FieldKind, FormField, LabeledCount,
    PicklistOption, Preview, Tracker,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub struct MentalHealth;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MentalHealthFields {
    pub mood: String,
    pub mood_intensity: u8,
    pub emotional_state: Vec<String>,
    pub anxiety_level: u8,
    pub depression_level: u8,
    pub mania_level: u8,
    pub energy_level: u8,
    pub stress_level: u8,
    pub triggers: Vec<String>,
    pub coping_strategies: Vec<String>,
    pub therapy_notes: String,
    pub medication_taken: bool,
    pub medication_notes: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl Default for MentalHealthFields {
    fn default() -> Self {
        Self {
            mood: String::new(),
            mood_intensity: 5,
            emotional_state: Vec::new(),
            anxiety_level: 0,
            depression_level: 0,
            mania_level: 0,
            energy_level: 5,
            stress_level: 0,
            triggers: Vec::new(),
            coping_strategies: Vec::new(),
            therapy_notes: String::new(),
            medication_taken: false,
            medication_notes: String::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MentalHealthSummary {
    pub total_entries: usize,
    pub avg_mood_intensity: f64,
    pub avg_anxiety: f64,
    pub avg_depression: f64,
    pub avg_mania: f64,
    pub avg_energy: f64,
    pub avg_stress: f64,
    pub moods: Vec<LabeledCount>,
    pub top_emotions: Vec<Count>,
    pub top_triggers: Vec<Count>,
    pub top_coping: Vec<Count>,
    pub therapy_sessions: usize,
    pub medication_days: usize,
    pub medication_adherence: Option<f64>,
}

impl Tracker for MentalHealth {
    const SLUG: &'static str = "mental-health";
    const ID_PREFIX: &'static str = "mental-health";
    const LABEL: &'static str = "Mental Health";
    const EMOJI: &'static str = "🧠";

    type Fields = MentalHealthFields;
    type Summary = MentalHealthSummary;

    fn validate(fields: &MentalHealthFields) -> Result<(), String> {
        require("Mood", &fields.mood)?;
        for (label, value) in [
            ("Mood intensity", fields.mood_intensity),
            ("Anxiety level", fields.anxiety_level),
            ("Depression level", fields.depression_level),
            ("Mania level", fields.mania_level),
            ("Energy level", fields.energy_level),
            ("Stress level", fields.stress_level),
        ] {
            check_level(label, value, 10)?;
        }
        Ok(())
    }

    fn normalize(fields: &mut MentalHealthFields) {
        trim(&mut fields.mood);
        trim(&mut fields.therapy_notes);
        trim(&mut fields.medication_notes);
        for list in [
            &mut fields.emotional_state,
            &mut fields.triggers,
            &mut fields.coping_strategies,
            &mut fields.tags,
        ] {
            dedupe(list);
        }
    }

    fn summarize(entries: &[Entry<MentalHealthFields>]) -> Option<MentalHealthSummary> {
        if entries.is_empty() {
            return None;
        }
        let fields: Vec<&MentalHealthFields> = entries.iter().map(|entry| &entry.fields).collect();
        let rows = || fields.iter().copied();
        let average = |level: fn(&MentalHealthFields) -> u8| {
            mean(rows().map(|f| f64::from(level(f)))).unwrap_or(0.0)
        };

        // A day counts once however many check-ins mention medication.
        let medication_dates: BTreeSet<NaiveDate> = entries
            .iter()
            .filter(|entry| entry.fields.medication_taken)
            .map(|entry| entry.meta.date)
            .collect();
        let logged_dates: BTreeSet<NaiveDate> = entries.iter().map(|entry| entry.meta.date).collect();

        Some(MentalHealthSummary {
            total_entries: entries.len(),
            avg_mood_intensity: average(|f| f.mood_intensity),
            avg_anxiety: average(|f| f.anxiety_level),
            avg_depression: average(|f| f.depression_level),
            avg_mania: average(|f| f.mania_level),
            avg_energy: average(|f| f.energy_level),
            avg_stress: average(|f| f.stress_level),
            moods: FrequencyTable::of_values(rows(), |f| f.mood.as_str())
                .ranked()
                .into_iter()
                .map(|count| LabeledCount::new(MOODS, count))
                .collect(),
            top_emotions: labeled_top(
                EMOTIONAL_STATES,
                FrequencyTable::over(rows(), |f| f.emotional_state.as_slice()),
            ),
            top_triggers: labeled_top(
                TRIGGERS,
                FrequencyTable::over(rows(), |f| f.triggers.as_slice()),
            ),
            top_coping: labeled_top(
                COPING_STRATEGIES,
                FrequencyTable::over(rows(), |f| f.coping_strategies.as_slice()),
            ),
            therapy_sessions: rows().filter(|f| !f.therapy_notes.is_empty()).count(),
            medication_days: medication_dates.len(),
            medication_adherence: percentage(medication_dates.len(), logged_dates.len()),
        })
    }

    fn preview(fields: &MentalHealthFields) -> Preview {
        let headline = lookup(MOODS, &fields.mood)
            .map(|option| format!("{} {}", option.emoji, option.label))
            .unwrap_or_else(|| fields.mood.clone());
        let mut levels = Vec::new();
        for (label, value) in [
            ("Anxiety", fields.anxiety_level),
            ("Depression", fields.depression_level),
            ("Mania", fields.mania_level),
            ("Stress", fields.stress_level),
        ] {
            if value > 0 {
                levels.push(format!("{label} {value}/10"));
            }
        }
        levels.push(format!("Energy {}/10", fields.energy_level));
        if fields.medication_taken {
            levels.push("💊 Medication taken".to_string());
        }
        Preview {
            headline,
            level: Some(("Intensity", fields.mood_intensity)),
            chips: vec![
                ("Levels", levels),
                ("Feeling", labels(EMOTIONAL_STATES, &fields.emotional_state)),
                ("Coping", labels(COPING_STRATEGIES, &fields.coping_strategies)),
            ],
            notes: fields.notes.clone(),
        }
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::new("mood", "Overall mood", FieldKind::Choice { options: MOODS }).required(),
            FormField::level("moodIntensity", "Mood intensity"),
            FormField::new("emotionalState", "What else are you feeling?", FieldKind::MultiChoice { options: EMOTIONAL_STATES }),
            FormField::level("anxietyLevel", "Anxiety"),
            FormField::level("depressionLevel", "Depression"),
            FormField::level("maniaLevel", "Mania"),
            FormField::level("energyLevel", "Energy"),
            FormField::level("stressLevel", "Stress"),
            FormField::new("triggers", "Triggers", FieldKind::MultiChoice { options: TRIGGERS }),
            FormField::new("copingStrategies", "Coping strategies", FieldKind::MultiChoice { options: COPING_STRATEGIES }),
            FormField::new("therapyNotes", "Therapy notes", FieldKind::LongText),
            FormField::new("medicationTaken", "Took medication", FieldKind::Flag),
            FormField::new("medicationNotes", "Medication notes", FieldKind::Text),
            FormField::new("notes", "Notes", FieldKind::LongText),
        ]
    }

    fn saved_messages() -> &'static [&'static str] {
        SAVED_MESSAGES
    }
}

fn labels(options: &'static [PicklistOption], values: &[String]) -> Vec<String> {
    values.iter().map(|value| label_for(options, value)).collect()
}

fn labeled_top(options: &'static [PicklistOption], table: FrequencyTable) -> Vec<Count> {
    table
        .top(TOP_N)
        .into_iter()
        .map(|count| Count {
            value: label_for(options, &count.value),
            count: count.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryMeta;
    use chrono::{NaiveDate, Utc};

    fn entry(day: u32, mood: &str, medication: bool) -> Entry<MentalHealthFields> {
        Entry {
            meta: EntryMeta {
                id: format!("mental-health-{day}-{mood}"),
                date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
                time: "21:00".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            fields: MentalHealthFields {
                mood: mood.to_string(),
                medication_taken: medication,
                ..MentalHealthFields::default()
            },
        }
    }

    #[test]
    fn mood_is_required() {
        assert_eq!(
            MentalHealth::validate(&MentalHealthFields::default()),
            Err("Mood is required".to_string())
        );
        let fields = MentalHealthFields {
            mood: "okay".to_string(),
            ..MentalHealthFields::default()
        };
        assert!(MentalHealth::validate(&fields).is_ok());
    }

    #[test]
    fn medication_adherence_counts_days() {
        let mut with_therapy = entry(1, "good", true);
        with_therapy.fields.therapy_notes = "Talked about sleep".to_string();
        with_therapy.fields.anxiety_level = 4;
        let entries = vec![
            with_therapy,
            entry(1, "okay", true),
            entry(2, "down", false),
            entry(3, "good", true),
        ];
        let summary = MentalHealth::summarize(&entries).unwrap();

        assert_eq!(summary.total_entries, 4);
        assert_eq!(summary.medication_days, 2);
        assert_eq!(summary.medication_adherence, Some(67.0));
        assert_eq!(summary.therapy_sessions, 1);
        assert_eq!(summary.avg_anxiety, 1.0);
        assert_eq!(summary.avg_energy, 5.0);
        assert_eq!(summary.moods[0].label, "Good");
        assert_eq!(summary.moods[0].emoji, "🙂");
        assert_eq!(summary.moods[0].count, 2);
    }

    #[test]
    fn top_lists_use_labels() {
        let mut first = entry(4, "meh", false);
        first.fields.triggers = vec!["lack-sleep".to_string(), "stress".to_string()];
        let mut second = entry(5, "bad", false);
        second.fields.triggers = vec!["lack-sleep".to_string()];

        let summary = MentalHealth::summarize(&[first, second]).unwrap();
        assert_eq!(summary.top_triggers[0].value, "Lack of sleep");
        assert_eq!(summary.top_triggers[0].count, 2);
        assert_eq!(summary.top_triggers[1].value, "High stress");
    }
}
