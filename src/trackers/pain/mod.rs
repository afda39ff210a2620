pub mod constants;

use self::constants::*;
use crate::analytics::{mean, Count, FrequencyTable, TOP_N};
use crate::models::Entry;
use crate::remote::RemoteAnalytics;
use crate::trackers::{check_level, dedupe, trim, FieldKind, FormField, Preview, Tracker};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub struct Pain;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PainFields {
    pub pain_level: u8,
    pub pain_locations: Vec<String>,
    pub pain_triggers: Vec<String>,
    /// Free text such as "2 hours" or "all day".
    pub pain_duration: String,
    pub pain_type: Vec<String>,
    pub pain_quality: Vec<String>,
    pub treatments: Vec<String>,
    pub medications: Vec<String>,
    pub effectiveness: u8,
    pub activity: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl Default for PainFields {
    fn default() -> Self {
        Self {
            pain_level: 5,
            pain_locations: Vec::new(),
            pain_triggers: Vec::new(),
            pain_duration: String::new(),
            pain_type: Vec::new(),
            pain_quality: Vec::new(),
            treatments: Vec::new(),
            medications: Vec::new(),
            effectiveness: 5,
            activity: String::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PainSummary {
    pub total_entries: usize,
    pub avg_pain_level: f64,
    pub max_pain_level: u8,
    pub high_pain_entries: usize,
    pub avg_effectiveness: Option<f64>,
    pub location_frequency: FrequencyTable,
    pub top_locations: Vec<Count>,
    pub top_triggers: Vec<Count>,
    pub top_pain_types: Vec<Count>,
    pub top_treatments: Vec<Count>,
    pub top_medications: Vec<Count>,
}

impl Tracker for Pain {
    const SLUG: &'static str = "pain";
    const ID_PREFIX: &'static str = "pain";
    const LABEL: &'static str = "Pain";
    const EMOJI: &'static str = "⚡";
    const REMOTE_ANALYTICS: bool = true;

    type Fields = PainFields;
    type Summary = PainSummary;

    fn validate(fields: &PainFields) -> Result<(), String> {
        check_level("Pain level", fields.pain_level, 10)?;
        check_level("Treatment effectiveness", fields.effectiveness, 10)
    }

    fn normalize(fields: &mut PainFields) {
        trim(&mut fields.pain_duration);
        trim(&mut fields.activity);
        for list in [
            &mut fields.pain_locations,
            &mut fields.pain_triggers,
            &mut fields.pain_type,
            &mut fields.pain_quality,
            &mut fields.treatments,
            &mut fields.medications,
            &mut fields.tags,
        ] {
            dedupe(list);
        }
    }

    fn summarize(entries: &[Entry<PainFields>]) -> Option<PainSummary> {
        if entries.is_empty() {
            return None;
        }
        let fields: Vec<&PainFields> = entries.iter().map(|entry| &entry.fields).collect();
        let rows = || fields.iter().copied();

        // Effectiveness only means something when a treatment or medication was used.
        let treated: Vec<f64> = rows()
            .filter(|f| !f.treatments.is_empty() || !f.medications.is_empty())
            .map(|f| f64::from(f.effectiveness))
            .collect();

        let locations = FrequencyTable::over(rows(), |f| f.pain_locations.as_slice());

        Some(PainSummary {
            total_entries: entries.len(),
            avg_pain_level: mean(rows().map(|f| f64::from(f.pain_level))).unwrap_or(0.0),
            max_pain_level: rows().map(|f| f.pain_level).max().unwrap_or(0),
            high_pain_entries: rows().filter(|f| f.pain_level >= HIGH_PAIN_THRESHOLD).count(),
            avg_effectiveness: mean(treated),
            top_locations: locations.top(TOP_N),
            location_frequency: locations,
            top_triggers: FrequencyTable::over(rows(), |f| f.pain_triggers.as_slice()).top(TOP_N),
            top_pain_types: FrequencyTable::over(rows(), |f| f.pain_type.as_slice()).top(TOP_N),
            top_treatments: FrequencyTable::over(rows(), |f| f.treatments.as_slice()).top(TOP_N),
            top_medications: FrequencyTable::over(rows(), |f| f.medications.as_slice()).top(TOP_N),
        })
    }

    fn preview(fields: &PainFields) -> Preview {
        let headline = if fields.pain_locations.is_empty() {
            "Pain".to_string()
        } else {
            format!("Pain: {}", fields.pain_locations.join(", "))
        };
        Preview {
            headline,
            level: Some(("Pain", fields.pain_level)),
            chips: vec![
                ("Type", fields.pain_type.clone()),
                ("Triggers", fields.pain_triggers.clone()),
                ("Treatments", fields.treatments.clone()),
            ],
            notes: fields.notes.clone(),
        }
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::level("painLevel", "Pain level"),
            FormField::new("painLocations", "Where does it hurt?", FieldKind::MultiChoice { options: PAIN_LOCATIONS }),
            FormField::new("painType", "Pain type", FieldKind::MultiChoice { options: PAIN_TYPES }),
            FormField::new("painQuality", "Pattern", FieldKind::MultiChoice { options: PAIN_QUALITIES }),
            FormField::new("painTriggers", "Triggers", FieldKind::MultiChoice { options: PAIN_TRIGGERS }),
            FormField::new("painDuration", "Duration", FieldKind::Text),
            FormField::new("treatments", "Treatments", FieldKind::MultiChoice { options: TREATMENTS }),
            FormField::new("medications", "Medications", FieldKind::MultiChoice { options: MEDICATIONS }),
            FormField::level("effectiveness", "How much did it help?"),
            FormField::new("activity", "What were you doing?", FieldKind::Text),
            FormField::new("notes", "Notes", FieldKind::LongText),
        ]
    }

    fn saved_messages() -> &'static [&'static str] {
        SAVED_MESSAGES
    }
}

/// Entry shape accepted by the pain analytics service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PainPayload {
    pub date: NaiveDate,
    pub pain_level: u8,
    pub pain_locations: Vec<String>,
    pub pain_triggers: Vec<String>,
    pub pain_duration: String,
    pub pain_type: Vec<String>,
    pub pain_quality: Vec<String>,
    pub treatments: Vec<String>,
    pub medications: Vec<String>,
    pub effectiveness: u8,
    pub activity: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl RemoteAnalytics for Pain {
    const ENDPOINT: &'static str = "pain";
    type Payload = PainPayload;

    fn payload(entry: &Entry<PainFields>) -> PainPayload {
        let fields = entry.fields.clone();
        PainPayload {
            date: entry.meta.date,
            pain_level: fields.pain_level,
            pain_locations: fields.pain_locations,
            pain_triggers: fields.pain_triggers,
            pain_duration: fields.pain_duration,
            pain_type: fields.pain_type,
            pain_quality: fields.pain_quality,
            treatments: fields.treatments,
            medications: fields.medications,
            effectiveness: fields.effectiveness,
            activity: fields.activity,
            notes: fields.notes,
            tags: fields.tags,
        }
    }
}
