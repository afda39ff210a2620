pub mod constants;

use self::constants::*;
use crate::analytics::{mean, Count, FrequencyTable, TOP_N};
use crate::models::Entry;
use crate::remote::RemoteAnalytics;
use crate::trackers::{
    check_level, dedupe, lookup, trim, FieldKind, FormField, LabeledCount, PicklistOption, Preview,
    Tracker,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub struct Dysautonomia;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DysautonomiaFields {
    /// One of the `EPISODE_TYPES` values; unknown values read as a general episode.
    pub episode_type: String,
    pub resting_heart_rate: Option<u16>,
    pub standing_heart_rate: Option<u16>,
    pub heart_rate_increase: Option<u16>,
    /// Systolic/diastolic, e.g. "120/80".
    pub blood_pressure_sitting: String,
    pub blood_pressure_standing: String,
    #[serde(rename = "restingSpO2")]
    pub resting_spo2: Option<u8>,
    #[serde(rename = "standingSpO2")]
    pub standing_spo2: Option<u8>,
    #[serde(rename = "lowestSpO2")]
    pub lowest_spo2: Option<u8>,
    #[serde(rename = "spO2Duration")]
    pub spo2_duration: String,
    pub symptoms: Vec<String>,
    pub severity: u8,
    pub position_change: String,
    pub duration: String,
    pub triggers: Vec<String>,
    pub temperature: String,
    pub hydration_level: String,
    pub interventions: Vec<String>,
    /// 1-5.
    pub intervention_effectiveness: Option<u8>,
    pub notes: String,
    pub tags: Vec<String>,
}

impl Default for DysautonomiaFields {
    fn default() -> Self {
        Self {
            episode_type: GENERAL_EPISODE.to_string(),
            resting_heart_rate: None,
            standing_heart_rate: None,
            heart_rate_increase: None,
            blood_pressure_sitting: String::new(),
            blood_pressure_standing: String::new(),
            resting_spo2: None,
            standing_spo2: None,
            lowest_spo2: None,
            spo2_duration: String::new(),
            symptoms: Vec::new(),
            severity: 5,
            position_change: String::new(),
            duration: String::new(),
            triggers: Vec::new(),
            temperature: String::new(),
            hydration_level: String::new(),
            interventions: Vec::new(),
            intervention_effectiveness: None,
            notes: String::new(),
            tags: Vec::new(),
        }
    }
}

impl DysautonomiaFields {
    pub fn episode(&self) -> &'static PicklistOption {
        lookup(EPISODE_TYPES, &self.episode_type).unwrap_or(&GENERAL)
    }

    /// Systolic drop from sitting to standing, when both readings parse.
    pub fn systolic_drop(&self) -> Option<i32> {
        let (sitting, _) = parse_blood_pressure(&self.blood_pressure_sitting)?;
        let (standing, _) = parse_blood_pressure(&self.blood_pressure_standing)?;
        Some(i32::from(sitting) - i32::from(standing))
    }
}

/// Parses "systolic/diastolic".
pub fn parse_blood_pressure(reading: &str) -> Option<(u16, u16)> {
    let (systolic, diastolic) = reading.split_once('/')?;
    Some((systolic.trim().parse().ok()?, diastolic.trim().parse().ok()?))
}

#[derive(Debug, Serialize)]
pub struct DysautonomiaSummary {
    pub total_episodes: usize,
    pub episode_types: Vec<LabeledCount>,
    pub avg_severity: f64,
    pub max_severity: u8,
    pub top_symptoms: Vec<Count>,
    pub top_triggers: Vec<Count>,
    pub top_interventions: Vec<Count>,
    pub avg_intervention_effectiveness: Option<f64>,
    pub avg_heart_rate_increase: Option<f64>,
    pub max_heart_rate_increase: Option<u16>,
    pub pots_qualifying_episodes: usize,
    pub orthostatic_drops: usize,
    pub lowest_spo2: Option<u8>,
    pub low_spo2_episodes: usize,
}

impl Tracker for Dysautonomia {
    const SLUG: &'static str = "dysautonomia";
    const ID_PREFIX: &'static str = "dysautonomia";
    const LABEL: &'static str = "Dysautonomia";
    const EMOJI: &'static str = "💓";
    const REMOTE_ANALYTICS: bool = true;

    type Fields = DysautonomiaFields;
    type Summary = DysautonomiaSummary;

    fn validate(fields: &DysautonomiaFields) -> Result<(), String> {
        if fields.symptoms.is_empty() {
            return Err("Select at least one symptom".to_string());
        }
        check_level("Severity", fields.severity, 10)?;
        if let Some(rating) = fields.intervention_effectiveness {
            check_level("Intervention effectiveness", rating, MAX_INTERVENTION_EFFECTIVENESS)?;
        }
        for (label, reading) in [
            ("Resting SpO2", fields.resting_spo2),
            ("Standing SpO2", fields.standing_spo2),
            ("Lowest SpO2", fields.lowest_spo2),
        ] {
            if let Some(value) = reading {
                check_level(label, value, 100)?;
            }
        }
        Ok(())
    }

    fn normalize(fields: &mut DysautonomiaFields) {
        for text in [
            &mut fields.episode_type,
            &mut fields.blood_pressure_sitting,
            &mut fields.blood_pressure_standing,
            &mut fields.spo2_duration,
            &mut fields.position_change,
            &mut fields.duration,
            &mut fields.temperature,
            &mut fields.hydration_level,
        ] {
            trim(text);
        }
        if fields.episode_type.is_empty() {
            fields.episode_type = GENERAL_EPISODE.to_string();
        }
        for list in [
            &mut fields.symptoms,
            &mut fields.triggers,
            &mut fields.interventions,
            &mut fields.tags,
        ] {
            dedupe(list);
        }
        if let (Some(resting), Some(standing)) =
            (fields.resting_heart_rate, fields.standing_heart_rate)
        {
            fields.heart_rate_increase = Some(standing.saturating_sub(resting));
        }
    }

    fn summarize(entries: &[Entry<DysautonomiaFields>]) -> Option<DysautonomiaSummary> {
        if entries.is_empty() {
            return None;
        }
        let fields: Vec<&DysautonomiaFields> = entries.iter().map(|entry| &entry.fields).collect();
        let rows = || fields.iter().copied();

        let increases: Vec<u16> = rows().filter_map(|f| f.heart_rate_increase).collect();
        let lowest_readings: Vec<u8> = rows()
            .filter_map(|f| {
                [f.lowest_spo2, f.standing_spo2, f.resting_spo2]
                    .into_iter()
                    .flatten()
                    .min()
            })
            .collect();

        Some(DysautonomiaSummary {
            total_episodes: entries.len(),
            episode_types: FrequencyTable::of_values(rows(), |f| f.episode().value)
                .ranked()
                .into_iter()
                .map(|count| LabeledCount::new(EPISODE_TYPES, count))
                .collect(),
            avg_severity: mean(rows().map(|f| f64::from(f.severity))).unwrap_or(0.0),
            max_severity: rows().map(|f| f.severity).max().unwrap_or(0),
            top_symptoms: FrequencyTable::over(rows(), |f| f.symptoms.as_slice()).top(TOP_N),
            top_triggers: FrequencyTable::over(rows(), |f| f.triggers.as_slice()).top(TOP_N),
            top_interventions: FrequencyTable::over(rows(), |f| f.interventions.as_slice())
                .top(TOP_N),
            avg_intervention_effectiveness: mean(
                rows().filter_map(|f| f.intervention_effectiveness.map(f64::from)),
            ),
            avg_heart_rate_increase: mean(increases.iter().map(|value| f64::from(*value))),
            max_heart_rate_increase: increases.iter().copied().max(),
            pots_qualifying_episodes: increases
                .iter()
                .filter(|increase| **increase >= POTS_HEART_RATE_INCREASE)
                .count(),
            orthostatic_drops: rows()
                .filter_map(DysautonomiaFields::systolic_drop)
                .filter(|drop| *drop >= i32::from(ORTHOSTATIC_SYSTOLIC_DROP))
                .count(),
            lowest_spo2: lowest_readings.iter().copied().min(),
            low_spo2_episodes: lowest_readings.iter().filter(|value| **value < LOW_SPO2).count(),
        })
    }

    fn preview(fields: &DysautonomiaFields) -> Preview {
        let episode = fields.episode();
        let mut vitals = Vec::new();
        if let Some(increase) = fields.heart_rate_increase {
            vitals.push(format!("HR +{increase} bpm"));
        }
        if !fields.blood_pressure_sitting.is_empty() || !fields.blood_pressure_standing.is_empty() {
            vitals.push(format!(
                "BP {} → {}",
                or_dash(&fields.blood_pressure_sitting),
                or_dash(&fields.blood_pressure_standing)
            ));
        }
        if let Some(lowest) = fields.lowest_spo2 {
            vitals.push(format!("SpO2 low {lowest}%"));
        }
        Preview {
            headline: format!("{} {}", episode.emoji, episode.label),
            level: Some(("Severity", fields.severity)),
            chips: vec![
                ("Symptoms", fields.symptoms.clone()),
                ("Vitals", vitals),
                ("Interventions", fields.interventions.clone()),
            ],
            notes: fields.notes.clone(),
        }
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::new("episodeType", "Episode type", FieldKind::Choice { options: EPISODE_TYPES }),
            FormField::new("symptoms", "Symptoms", FieldKind::MultiChoice { options: SYMPTOMS }).required(),
            FormField::level("severity", "Severity"),
            FormField::new("restingHeartRate", "Resting heart rate (bpm)", FieldKind::Number),
            FormField::new("standingHeartRate", "Standing heart rate (bpm)", FieldKind::Number),
            FormField::new("bloodPressureSitting", "Blood pressure sitting", FieldKind::Text),
            FormField::new("bloodPressureStanding", "Blood pressure standing", FieldKind::Text),
            FormField::new("restingSpO2", "Resting SpO2 (%)", FieldKind::Number),
            FormField::new("standingSpO2", "Standing SpO2 (%)", FieldKind::Number),
            FormField::new("lowestSpO2", "Lowest SpO2 (%)", FieldKind::Number),
            FormField::new("spO2Duration", "Desaturation lasted", FieldKind::Text),
            FormField::new("positionChange", "Position change", FieldKind::Choice { options: POSITION_CHANGES }),
            FormField::new("duration", "Duration", FieldKind::Text),
            FormField::new("triggers", "Triggers", FieldKind::MultiChoice { options: TRIGGERS }),
            FormField::new("temperature", "Temperature", FieldKind::Text),
            FormField::new("hydrationLevel", "Hydration", FieldKind::Text),
            FormField::new("interventions", "Interventions", FieldKind::MultiChoice { options: INTERVENTIONS }),
            FormField::new(
                "interventionEffectiveness",
                "How well did it help? (1-5)",
                FieldKind::Level { min: 1, max: MAX_INTERVENTION_EFFECTIVENESS },
            ),
            FormField::new("notes", "Notes", FieldKind::LongText),
        ]
    }

    fn saved_messages() -> &'static [&'static str] {
        SAVED_MESSAGES
    }
}

fn or_dash(reading: &str) -> &str {
    if reading.is_empty() { "?" } else { reading }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DysautonomiaPayload {
    pub date: NaiveDate,
    pub time: String,
    pub episode_type: String,
    pub severity: u8,
    pub symptoms: Vec<String>,
    pub triggers: Vec<String>,
    pub interventions: Vec<String>,
    pub intervention_effectiveness: Option<u8>,
    pub position_change: String,
    pub duration: String,
    pub resting_heart_rate: Option<u16>,
    pub standing_heart_rate: Option<u16>,
    pub heart_rate_increase: Option<u16>,
    pub blood_pressure_sitting: String,
    pub blood_pressure_standing: String,
    #[serde(rename = "restingSpO2")]
    pub resting_spo2: Option<u8>,
    #[serde(rename = "standingSpO2")]
    pub standing_spo2: Option<u8>,
    #[serde(rename = "lowestSpO2")]
    pub lowest_spo2: Option<u8>,
    #[serde(rename = "spO2Duration")]
    pub spo2_duration: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl RemoteAnalytics for Dysautonomia {
    const ENDPOINT: &'static str = "dysautonomia";
    type Payload = DysautonomiaPayload;

    fn payload(entry: &Entry<DysautonomiaFields>) -> DysautonomiaPayload {
        let fields = entry.fields.clone();
        DysautonomiaPayload {
            date: entry.meta.date,
            time: entry.meta.time.clone(),
            episode_type: fields.episode().value.to_string(),
            severity: fields.severity,
            symptoms: fields.symptoms,
            triggers: fields.triggers,
            interventions: fields.interventions,
            intervention_effectiveness: fields.intervention_effectiveness,
            position_change: fields.position_change,
            duration: fields.duration,
            resting_heart_rate: fields.resting_heart_rate,
            standing_heart_rate: fields.standing_heart_rate,
            heart_rate_increase: fields.heart_rate_increase,
            blood_pressure_sitting: fields.blood_pressure_sitting,
            blood_pressure_standing: fields.blood_pressure_standing,
            resting_spo2: fields.resting_spo2,
            standing_spo2: fields.standing_spo2,
            lowest_spo2: fields.lowest_spo2,
            spo2_duration: fields.spo2_duration,
            notes: fields.notes,
            tags: fields.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryMeta;
    use chrono::Utc;

    fn entry(fields: DysautonomiaFields) -> Entry<DysautonomiaFields> {
        Entry {
            meta: EntryMeta {
                id: "dysautonomia-1".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
                time: "07:45".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            fields,
        }
    }

    fn pots(resting: u16, standing: u16) -> DysautonomiaFields {
        let mut fields = DysautonomiaFields {
            episode_type: "pots".to_string(),
            resting_heart_rate: Some(resting),
            standing_heart_rate: Some(standing),
            symptoms: vec!["Dizziness".to_string()],
            ..DysautonomiaFields::default()
        };
        Dysautonomia::normalize(&mut fields);
        fields
    }

    #[test]
    fn heart_rate_increase_is_derived() {
        assert_eq!(pots(70, 112).heart_rate_increase, Some(42));
        assert_eq!(pots(90, 80).heart_rate_increase, Some(0));
    }

    #[test]
    fn symptoms_are_required() {
        let fields = DysautonomiaFields::default();
        assert!(Dysautonomia::validate(&fields).is_err());
        assert!(Dysautonomia::validate(&pots(60, 80)).is_ok());

        let mut fields = pots(60, 80);
        fields.intervention_effectiveness = Some(6);
        assert!(Dysautonomia::validate(&fields).is_err());
    }

    #[test]
    fn blood_pressure_readings() {
        assert_eq!(parse_blood_pressure("120/80"), Some((120, 80)));
        assert_eq!(parse_blood_pressure(" 95 / 60 "), Some((95, 60)));
        assert_eq!(parse_blood_pressure("high"), None);
    }

    #[test]
    fn summary_counts_vitals() {
        let mut bp = DysautonomiaFields {
            episode_type: "blood-pressure".to_string(),
            blood_pressure_sitting: "120/80".to_string(),
            blood_pressure_standing: "95/60".to_string(),
            lowest_spo2: Some(88),
            severity: 7,
            symptoms: vec!["Lightheadedness".to_string()],
            ..DysautonomiaFields::default()
        };
        Dysautonomia::normalize(&mut bp);

        let entries = vec![entry(pots(70, 112)), entry(pots(70, 85)), entry(bp)];
        let summary = Dysautonomia::summarize(&entries).unwrap();

        assert_eq!(summary.total_episodes, 3);
        assert_eq!(summary.episode_types[0].value, "pots");
        assert_eq!(summary.episode_types[0].label, "POTS Episode");
        assert_eq!(summary.episode_types[0].count, 2);
        assert_eq!(summary.avg_heart_rate_increase, Some(28.5));
        assert_eq!(summary.max_heart_rate_increase, Some(42));
        assert_eq!(summary.pots_qualifying_episodes, 1);
        assert_eq!(summary.orthostatic_drops, 1);
        assert_eq!(summary.lowest_spo2, Some(88));
        assert_eq!(summary.low_spo2_episodes, 1);
        assert_eq!(summary.max_severity, 7);
    }

    #[test]
    fn unknown_episode_type_reads_as_general() {
        let fields = DysautonomiaFields {
            episode_type: "mystery".to_string(),
            ..DysautonomiaFields::default()
        };
        assert_eq!(fields.episode().value, GENERAL_EPISODE);
    }

    #[test]
    fn payload_uses_spo2_keys_and_time() {
        let mut fields = pots(60, 95);
        fields.resting_spo2 = Some(97);
        let value = serde_json::to_value(Dysautonomia::payload(&entry(fields))).unwrap();
        assert_eq!(value["restingSpO2"], 97);
        assert_eq!(value["episodeType"], "pots");
        assert_eq!(value["time"], "07:45");
        assert_eq!(value["heartRateIncrease"], 35);
        assert_eq!(value["lowestSpO2"], serde_json::Value::Null);
    }
}
