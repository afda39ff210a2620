use crate::trackers::PicklistOption;

const fn kind(
    value: &'static str,
    label: &'static str,
    emoji: &'static str,
    description: &'static str,
) -> PicklistOption {
    PicklistOption::new(value, label, emoji, "", description)
}

const fn coping(
    value: &'static str,
    label: &'static str,
    category: &'static str,
    emoji: &'static str,
    description: &'static str,
) -> PicklistOption {
    PicklistOption::new(value, label, emoji, category, description)
}

pub const ANXIETY_TYPES: &[PicklistOption] = &[
    kind("generalized", "Generalized Anxiety", "😰", "General worry and unease"),
    kind("social", "Social Anxiety", "😳", "Anxiety around people or social situations"),
    kind("panic-attack", "Panic Attack", "😱", "Intense fear with physical symptoms"),
    kind("meltdown", "Meltdown", "🌪️", "Overwhelming sensory or emotional overload"),
    kind("shutdown", "Shutdown", "🔇", "Withdrawal and inability to function"),
    kind("anticipatory", "Anticipatory Anxiety", "⏰", "Worry about future events"),
    kind("performance", "Performance Anxiety", "🎭", "Fear of being judged or failing"),
    kind("health", "Health Anxiety", "🏥", "Worry about illness or medical issues"),
];

pub const PHYSICAL_SYMPTOMS: &[PicklistOption] = &[
    PicklistOption::plain("Racing heart/palpitations"),
    PicklistOption::plain("Sweating"),
    PicklistOption::plain("Shaking/trembling"),
    PicklistOption::plain("Shortness of breath"),
    PicklistOption::plain("Chest tightness"),
    PicklistOption::plain("Nausea"),
    PicklistOption::plain("Dizziness"),
    PicklistOption::plain("Hot/cold flashes"),
    PicklistOption::plain("Muscle tension"),
    PicklistOption::plain("Headache"),
    PicklistOption::plain("Stomach upset"),
    PicklistOption::plain("Fatigue"),
    PicklistOption::plain("Restlessness"),
    PicklistOption::plain("Tingling/numbness"),
];

pub const MENTAL_SYMPTOMS: &[PicklistOption] = &[
    PicklistOption::plain("Racing thoughts"),
    PicklistOption::plain("Catastrophic thinking"),
    PicklistOption::plain("Mind going blank"),
    PicklistOption::plain("Difficulty concentrating"),
    PicklistOption::plain("Feeling detached"),
    PicklistOption::plain("Fear of losing control"),
    PicklistOption::plain("Feeling overwhelmed"),
    PicklistOption::plain("Irritability"),
    PicklistOption::plain("Sense of doom"),
    PicklistOption::plain("Indecisiveness"),
    PicklistOption::plain("Hypervigilance"),
    PicklistOption::plain("Emotional numbness"),
];

pub const COMMON_TRIGGERS: &[PicklistOption] = &[
    PicklistOption::plain("Work stress"),
    PicklistOption::plain("Social situations"),
    PicklistOption::plain("Health concerns"),
    PicklistOption::plain("Financial worries"),
    PicklistOption::plain("Relationship issues"),
    PicklistOption::plain("Loud noises"),
    PicklistOption::plain("Crowds"),
    PicklistOption::plain("Being late"),
    PicklistOption::plain("Uncertainty"),
    PicklistOption::plain("Conflict"),
    PicklistOption::plain("Sensory overload"),
    PicklistOption::plain("Lack of sleep"),
    PicklistOption::plain("Caffeine"),
    PicklistOption::plain("Hormonal changes"),
    PicklistOption::plain("Weather changes"),
    PicklistOption::plain("Unexpected changes"),
    PicklistOption::plain("Being judged"),
    PicklistOption::plain("Past trauma reminders"),
];

pub const COPING_STRATEGIES: &[PicklistOption] = &[
    coping("deep-breathing", "Deep breathing", "breathing", "🫁", "4-7-8 or box breathing"),
    coping("breath-counting", "Counting breaths", "breathing", "🔢", "Focus on counting each breath"),
    coping("5-4-3-2-1", "5-4-3-2-1 technique", "grounding", "👀", "Name what you see, hear, feel, smell, taste"),
    coping("cold-water", "Cold water on face/hands", "grounding", "❄️", "Activates the dive response"),
    coping("grounding-objects", "Grounding objects", "grounding", "🪨", "Fidget toys, stress balls, textures"),
    coping("walking", "Walking/pacing", "movement", "🚶", "Gentle movement to release energy"),
    coping("stretching", "Stretching", "movement", "🤸", "Release muscle tension"),
    coping("positive-self-talk", "Positive self-talk", "cognitive", "💭", "Reassuring yourself"),
    coping("reality-check", "Reality checking", "cognitive", "🔍", "Is this thought realistic?"),
    coping("mindfulness", "Mindfulness", "cognitive", "🧘", "Present moment awareness"),
    coping("call-someone", "Call someone", "social", "📞", "Reach out for support"),
    coping("remove-from-situation", "Leave the situation", "social", "🚪", "Take a break from triggers"),
    coping("music", "Calming music", "sensory", "🎵", "Soothing sounds"),
    coping("weighted-blanket", "Weighted blanket", "sensory", "🛏️", "Deep pressure comfort"),
    coping("medication", "PRN medication", "emergency", "💊", "As-needed anxiety medication"),
    coping("crisis-hotline", "Crisis hotline", "emergency", "🆘", "Professional support"),
    coping("safe-space", "Go to safe space", "emergency", "🏠", "Your comfort zone"),
];

pub const DURATION_OPTIONS: &[PicklistOption] = &[
    PicklistOption::plain("Less than 5 minutes"),
    PicklistOption::plain("5-15 minutes"),
    PicklistOption::plain("15-30 minutes"),
    PicklistOption::plain("30 minutes - 1 hour"),
    PicklistOption::plain("1-2 hours"),
    PicklistOption::plain("2-4 hours"),
    PicklistOption::plain("Most of the day"),
    PicklistOption::plain("All day"),
    PicklistOption::plain("Multiple days"),
];

pub const ONSET_SPEED: &[PicklistOption] = &[
    PicklistOption::plain("Gradual"),
    PicklistOption::plain("Moderate"),
    PicklistOption::plain("Sudden"),
    PicklistOption::plain("Instant"),
];

pub const SOCIAL_CONTEXT: &[PicklistOption] = &[
    PicklistOption::plain("Alone"),
    PicklistOption::plain("With family"),
    PicklistOption::plain("With friends"),
    PicklistOption::plain("With strangers"),
    PicklistOption::plain("In a crowd"),
    PicklistOption::plain("At work/school"),
    PicklistOption::plain("Online/social media"),
    PicklistOption::plain("On the phone"),
    PicklistOption::plain("Public speaking"),
];

pub const AFTER_EFFECTS: &[PicklistOption] = &[
    PicklistOption::plain("Exhausted"),
    PicklistOption::plain("Relieved"),
    PicklistOption::plain("Embarrassed"),
    PicklistOption::plain("Proud (handled it well)"),
    PicklistOption::plain("Confused"),
    PicklistOption::plain("Sad"),
    PicklistOption::plain("Numb"),
    PicklistOption::plain("Grateful for support"),
    PicklistOption::plain("More anxious"),
    PicklistOption::plain("Physically drained"),
    PicklistOption::plain("Hopeful"),
];

pub const SAVED_MESSAGES: &[&str] = &[
    "Anxiety entry saved. Noticing the pattern is already a brave step. 💜",
    "Logged with care. Your coping toolkit just got a little more data. ✨",
    "Entry saved. However it went, you got through it. 🌟",
    "Saved. The worry sprites have filed this one gently. 🧚",
];
