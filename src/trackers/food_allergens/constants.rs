use crate::trackers::PicklistOption;

pub const SEVERITY_LEVELS: &[PicklistOption] = &[
    PicklistOption::new("Mild", "Mild", "😌", "", "Uncomfortable but manageable"),
    PicklistOption::new("Moderate", "Moderate", "😬", "", "Needed treatment or rest"),
    PicklistOption::new("Severe", "Severe", "🚨", "", "Urgent care or strong medication"),
    PicklistOption::new("Life-threatening", "Life-threatening", "💀", "", "Anaphylaxis or emergency response"),
];

/// Severities counted as serious reactions in the summary.
pub const SERIOUS_SEVERITIES: &[&str] = &["Severe", "Life-threatening"];

pub const COMMON_SYMPTOMS: &[PicklistOption] = &[
    PicklistOption::plain("Hives/Rash"),
    PicklistOption::plain("Itching"),
    PicklistOption::plain("Swelling (face/lips/tongue)"),
    PicklistOption::plain("Difficulty breathing"),
    PicklistOption::plain("Wheezing"),
    PicklistOption::plain("Nausea/Vomiting"),
    PicklistOption::plain("Diarrhea"),
    PicklistOption::plain("Stomach cramps"),
    PicklistOption::plain("Dizziness"),
    PicklistOption::plain("Rapid heartbeat"),
    PicklistOption::plain("Loss of consciousness"),
    PicklistOption::plain("Throat tightness"),
    PicklistOption::plain("Runny/stuffy nose"),
    PicklistOption::plain("Watery eyes"),
];

pub const COMMON_TREATMENTS: &[PicklistOption] = &[
    PicklistOption::plain("Antihistamine (Benadryl)"),
    PicklistOption::plain("EpiPen/Epinephrine"),
    PicklistOption::plain("Inhaler/Bronchodilator"),
    PicklistOption::plain("Steroid medication"),
    PicklistOption::plain("IV fluids"),
    PicklistOption::plain("Oxygen therapy"),
    PicklistOption::plain("Emergency room visit"),
    PicklistOption::plain("Called 911"),
    PicklistOption::plain("Rest and monitoring"),
];

pub const EXPOSURE_SOURCES: &[PicklistOption] = &[
    PicklistOption::plain("Restaurant meal"),
    PicklistOption::plain("Home cooking"),
    PicklistOption::plain("Packaged food"),
    PicklistOption::plain("Cross-contamination"),
    PicklistOption::plain("Unknown source"),
    PicklistOption::plain("New food tried"),
    PicklistOption::plain("Medication"),
    PicklistOption::plain("Supplement"),
];

pub const SAVED_MESSAGES: &[&str] = &[
    "Food allergen reaction saved. Your allergy log is up to date! 🛡️",
    "Reaction recorded. The immune goblins have been noted! 🥜",
    "Allergen entry logged. Knowing your triggers keeps you safer. 💪",
];
