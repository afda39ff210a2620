use crate::trackers::PicklistOption;

const fn episode(
    value: &'static str,
    label: &'static str,
    emoji: &'static str,
    description: &'static str,
) -> PicklistOption {
    PicklistOption::new(value, label, emoji, "", description)
}

const fn position(value: &'static str, label: &'static str) -> PicklistOption {
    PicklistOption::new(value, label, "", "", "")
}

pub const GENERAL_EPISODE: &str = "general";

pub const GENERAL: PicklistOption =
    episode(GENERAL_EPISODE, "General Episode", "🔄", "Mixed symptoms, complex episodes");

pub const EPISODE_TYPES: &[PicklistOption] = &[
    episode("pots", "POTS Episode", "💓", "Heart rate changes, orthostatic symptoms"),
    episode("blood-pressure", "Blood Pressure", "🩸", "BP changes, circulation symptoms"),
    episode("gi-symptoms", "GI Symptoms", "🤢", "Gastroparesis, nausea, digestive issues"),
    episode("temperature", "Temp Regulation", "🌡️", "Sweating, temperature control issues"),
    episode("spo2", "SpO2 Episode", "💨", "Oxygen desaturation, breathing issues"),
    GENERAL,
];

pub const SYMPTOMS: &[PicklistOption] = &[
    PicklistOption::plain("Dizziness"),
    PicklistOption::plain("Lightheadedness"),
    PicklistOption::plain("Fainting/Near Fainting"),
    PicklistOption::plain("Heart Palpitations"),
    PicklistOption::plain("Chest Pain"),
    PicklistOption::plain("Shortness of Breath"),
    PicklistOption::plain("Blood Pressure Drop"),
    PicklistOption::plain("Rapid Heart Rate"),
    PicklistOption::plain("Low SpO2/Desaturation"),
    PicklistOption::plain("Breathing Difficulties"),
    PicklistOption::plain("Air Hunger"),
    PicklistOption::plain("Temperature Dysregulation"),
    PicklistOption::plain("Excessive Sweating"),
    PicklistOption::plain("Inability to Sweat"),
    PicklistOption::plain("Cold Hands/Feet"),
    PicklistOption::plain("Flushing/Hot Flashes"),
    PicklistOption::plain("Blurred Vision"),
    PicklistOption::plain("Exercise Intolerance"),
    PicklistOption::plain("Nausea"),
    PicklistOption::plain("Vomiting"),
    PicklistOption::plain("Early Satiety"),
    PicklistOption::plain("Bloating"),
    PicklistOption::plain("Brain Fog"),
    PicklistOption::plain("Headache"),
    PicklistOption::plain("Fatigue"),
    PicklistOption::plain("Trembling/Shaking"),
];

pub const TRIGGERS: &[PicklistOption] = &[
    PicklistOption::plain("Standing Up Quickly"),
    PicklistOption::plain("Prolonged Standing"),
    PicklistOption::plain("Lying Down Too Long"),
    PicklistOption::plain("Hot Weather"),
    PicklistOption::plain("Hot Shower/Bath"),
    PicklistOption::plain("Cold Exposure"),
    PicklistOption::plain("Dehydration"),
    PicklistOption::plain("Low Blood Sugar"),
    PicklistOption::plain("Skipping Meals"),
    PicklistOption::plain("Large Meals"),
    PicklistOption::plain("Alcohol"),
    PicklistOption::plain("Caffeine"),
    PicklistOption::plain("Physical Exertion"),
    PicklistOption::plain("Lack of Sleep"),
    PicklistOption::plain("Stress/Anxiety"),
    PicklistOption::plain("Illness/Infection"),
    PicklistOption::plain("Medication Changes"),
    PicklistOption::plain("Menstruation"),
];

pub const INTERVENTIONS: &[PicklistOption] = &[
    PicklistOption::plain("Sitting Down"),
    PicklistOption::plain("Lying Down with Legs Elevated"),
    PicklistOption::plain("Gradual Position Changes"),
    PicklistOption::plain("Counter-pressure Maneuvers"),
    PicklistOption::plain("Compression Stockings"),
    PicklistOption::plain("Abdominal Binder"),
    PicklistOption::plain("Increased Salt Intake"),
    PicklistOption::plain("Drinking Fluids"),
    PicklistOption::plain("Electrolyte Drinks"),
    PicklistOption::plain("Small Frequent Meals"),
    PicklistOption::plain("Cool Environment/Fan"),
    PicklistOption::plain("Warm Environment/Heating Pad"),
    PicklistOption::plain("Medication"),
    PicklistOption::plain("Rest/Pacing"),
    PicklistOption::plain("Deep Breathing"),
    PicklistOption::plain("Pursed Lip Breathing"),
    PicklistOption::plain("Supplemental Oxygen"),
    PicklistOption::plain("Box Breathing (4-4-4-4)"),
];

pub const POSITION_CHANGES: &[PicklistOption] = &[
    position("lying-to-sitting", "Lying to Sitting"),
    position("sitting-to-standing", "Sitting to Standing"),
    position("prolonged-standing", "Prolonged Standing"),
    position("prolonged-sitting", "Prolonged Sitting"),
    position("other", "Other Position Change"),
];

/// Sustained rise on standing that meets the POTS criterion, in bpm.
pub const POTS_HEART_RATE_INCREASE: u16 = 30;
/// Systolic drop on standing that counts as orthostatic hypotension, in mmHg.
pub const ORTHOSTATIC_SYSTOLIC_DROP: u16 = 20;
pub const LOW_SPO2: u8 = 90;
pub const MAX_INTERVENTION_EFFECTIVENESS: u8 = 5;

pub const SAVED_MESSAGES: &[&str] = &[
    "Episode logged. Your autonomic nervous system has been formally reported. 💓",
    "Saved. Sit down, hydrate, and be proud of the data. 💧",
    "Episode recorded. Patterns are how we outsmart it. 🧠",
];
