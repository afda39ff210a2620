pub mod constants;

use self::constants::*;
use crate::analytics::{Count, FrequencyTable, TOP_N};
use crate::models::Entry;
use crate::trackers::{
    dedupe, lookup, require, trim, FieldKind, FormField, LabeledCount, Preview, Tracker,
};
use serde::{Deserialize, Serialize};

pub struct FoodAllergens;

/// One allergic reaction to a food.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodAllergensFields {
    pub allergen_name: String,
    pub reaction_severity: String,
    pub symptoms: Vec<String>,
    pub exposure_source: String,
    /// Time from exposure to reaction, free text.
    pub reaction_time: String,
    pub recovery_time: String,
    pub treatment_given: Vec<String>,
    pub epipen_used: bool,
    pub other_meds_used: String,
    pub emergency_contacted: bool,
    pub emergency_notes: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl Default for FoodAllergensFields {
    fn default() -> Self {
        Self {
            allergen_name: String::new(),
            reaction_severity: "Mild".to_string(),
            symptoms: Vec::new(),
            exposure_source: String::new(),
            reaction_time: String::new(),
            recovery_time: String::new(),
            treatment_given: Vec::new(),
            epipen_used: false,
            other_meds_used: String::new(),
            emergency_contacted: false,
            emergency_notes: String::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FoodAllergensSummary {
    pub total_reactions: usize,
    /// Every severity level in order, including those with no reactions.
    pub severity_distribution: Vec<LabeledCount>,
    pub serious_reactions: usize,
    pub top_allergens: Vec<Count>,
    pub top_symptoms: Vec<Count>,
    pub top_treatments: Vec<Count>,
    pub epipen_uses: usize,
    pub emergency_contacts: usize,
}

impl Tracker for FoodAllergens {
    const SLUG: &'static str = "food-allergens";
    const ID_PREFIX: &'static str = "allergen";
    const LABEL: &'static str = "Food Allergens";
    const EMOJI: &'static str = "🥜";

    type Fields = FoodAllergensFields;
    type Summary = FoodAllergensSummary;

    fn validate(fields: &FoodAllergensFields) -> Result<(), String> {
        require("Allergen name", &fields.allergen_name)?;
        if lookup(SEVERITY_LEVELS, &fields.reaction_severity).is_none() {
            return Err(format!(
                "Reaction severity must be one of {}",
                SEVERITY_LEVELS
                    .iter()
                    .map(|level| level.value)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Ok(())
    }

    fn normalize(fields: &mut FoodAllergensFields) {
        for text in [
            &mut fields.allergen_name,
            &mut fields.exposure_source,
            &mut fields.reaction_time,
            &mut fields.recovery_time,
            &mut fields.other_meds_used,
            &mut fields.emergency_notes,
        ] {
            trim(text);
        }
        for list in [
            &mut fields.symptoms,
            &mut fields.treatment_given,
            &mut fields.tags,
        ] {
            dedupe(list);
        }
    }

    fn summarize(entries: &[Entry<FoodAllergensFields>]) -> Option<FoodAllergensSummary> {
        if entries.is_empty() {
            return None;
        }
        let fields: Vec<&FoodAllergensFields> = entries.iter().map(|entry| &entry.fields).collect();
        let rows = || fields.iter().copied();

        let severities = FrequencyTable::of_values(rows(), |f| f.reaction_severity.as_str());
        // "Peanuts" and "peanuts" are the same allergen.
        let mut allergens = FrequencyTable::new();
        for f in rows() {
            allergens.add(&f.allergen_name.to_lowercase());
        }

        Some(FoodAllergensSummary {
            total_reactions: entries.len(),
            severity_distribution: SEVERITY_LEVELS
                .iter()
                .map(|level| {
                    LabeledCount::new(
                        SEVERITY_LEVELS,
                        Count {
                            value: level.value.to_string(),
                            count: severities.get(level.value),
                        },
                    )
                })
                .collect(),
            serious_reactions: rows()
                .filter(|f| SERIOUS_SEVERITIES.contains(&f.reaction_severity.as_str()))
                .count(),
            top_allergens: allergens.top(TOP_N),
            top_symptoms: FrequencyTable::over(rows(), |f| f.symptoms.as_slice()).top(TOP_N),
            top_treatments: FrequencyTable::over(rows(), |f| f.treatment_given.as_slice())
                .top(TOP_N),
            epipen_uses: rows().filter(|f| f.epipen_used).count(),
            emergency_contacts: rows().filter(|f| f.emergency_contacted).count(),
        })
    }

    fn preview(fields: &FoodAllergensFields) -> Preview {
        let severity = lookup(SEVERITY_LEVELS, &fields.reaction_severity)
            .map(|level| format!("{} {}", level.emoji, level.label))
            .unwrap_or_else(|| fields.reaction_severity.clone());

        let mut response = vec![severity];
        if fields.epipen_used {
            response.push("💉 EpiPen used".to_string());
        }
        if fields.emergency_contacted {
            response.push("🚑 Emergency contacted".to_string());
        }
        if !fields.exposure_source.is_empty() {
            response.push(format!("Source: {}", fields.exposure_source));
        }

        Preview {
            headline: format!("{} {}", Self::EMOJI, fields.allergen_name),
            level: None,
            chips: vec![
                ("Reaction", response),
                ("Symptoms", fields.symptoms.clone()),
                ("Treatment", fields.treatment_given.clone()),
            ],
            notes: fields.notes.clone(),
        }
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::new("allergenName", "Allergen", FieldKind::Text).required(),
            FormField::new("reactionSeverity", "Reaction severity", FieldKind::Choice { options: SEVERITY_LEVELS }).required(),
            FormField::new("symptoms", "Symptoms", FieldKind::MultiChoice { options: COMMON_SYMPTOMS }),
            FormField::new("exposureSource", "Exposure source", FieldKind::Choice { options: EXPOSURE_SOURCES }),
            FormField::new("reactionTime", "Time until reaction", FieldKind::Text),
            FormField::new("recoveryTime", "Time until recovered", FieldKind::Text),
            FormField::new("treatmentGiven", "Treatment given", FieldKind::MultiChoice { options: COMMON_TREATMENTS }),
            FormField::new("epipenUsed", "EpiPen used", FieldKind::Flag),
            FormField::new("otherMedsUsed", "Other medication", FieldKind::Text),
            FormField::new("emergencyContacted", "Emergency services contacted", FieldKind::Flag),
            FormField::new("emergencyNotes", "Emergency notes", FieldKind::LongText),
            FormField::new("notes", "Notes", FieldKind::LongText),
        ]
    }

    fn saved_messages() -> &'static [&'static str] {
        SAVED_MESSAGES
    }
}
