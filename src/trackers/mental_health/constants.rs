use crate::trackers::PicklistOption;

const fn tagged(
    value: &'static str,
    label: &'static str,
    emoji: &'static str,
    category: &'static str,
) -> PicklistOption {
    PicklistOption::new(value, label, emoji, category, "")
}

pub const MOODS: &[PicklistOption] = &[
    tagged("amazing", "Amazing", "🤩", ""),
    tagged("great", "Great", "😊", ""),
    tagged("good", "Good", "🙂", ""),
    tagged("okay", "Okay", "😐", ""),
    tagged("meh", "Meh", "😑", ""),
    tagged("down", "Down", "😔", ""),
    tagged("bad", "Bad", "😞", ""),
    tagged("awful", "Awful", "😭", ""),
];

pub const EMOTIONAL_STATES: &[PicklistOption] = &[
    tagged("happy", "Happy", "😄", "positive"),
    tagged("excited", "Excited", "🤗", "positive"),
    tagged("calm", "Calm", "😌", "positive"),
    tagged("confident", "Confident", "😎", "positive"),
    tagged("grateful", "Grateful", "🥰", "positive"),
    tagged("hopeful", "Hopeful", "🌟", "positive"),
    tagged("anxious", "Anxious", "😰", "negative"),
    tagged("sad", "Sad", "😢", "negative"),
    tagged("angry", "Angry", "😠", "negative"),
    tagged("frustrated", "Frustrated", "😤", "negative"),
    tagged("overwhelmed", "Overwhelmed", "🤯", "negative"),
    tagged("lonely", "Lonely", "😞", "negative"),
    tagged("irritable", "Irritable", "😒", "negative"),
    tagged("hopeless", "Hopeless", "😔", "negative"),
    tagged("tired", "Tired", "😴", "neutral"),
    tagged("numb", "Numb", "😶", "neutral"),
    tagged("confused", "Confused", "😕", "neutral"),
    tagged("restless", "Restless", "😬", "neutral"),
];

pub const TRIGGERS: &[PicklistOption] = &[
    tagged("weather", "Weather changes", "", "environmental"),
    tagged("noise", "Loud noises", "", "environmental"),
    tagged("crowds", "Crowded spaces", "", "environmental"),
    tagged("conflict", "Conflict/arguments", "", "social"),
    tagged("social-pressure", "Social pressure", "", "social"),
    tagged("isolation", "Social isolation", "", "social"),
    tagged("lack-sleep", "Lack of sleep", "", "physical"),
    tagged("poor-nutrition", "Poor nutrition", "", "physical"),
    tagged("hormones", "Hormonal changes", "", "physical"),
    tagged("stress", "High stress", "", "emotional"),
    tagged("grief", "Grief/loss", "", "emotional"),
    tagged("change", "Major life changes", "", "emotional"),
];

pub const COPING_STRATEGIES: &[PicklistOption] = &[
    tagged("deep-breathing", "Deep breathing", "", "immediate"),
    tagged("grounding", "Grounding techniques", "", "immediate"),
    tagged("music", "Listening to music", "", "immediate"),
    tagged("walk", "Going for a walk", "", "immediate"),
    tagged("exercise", "Regular exercise", "", "long-term"),
    tagged("meditation", "Meditation/mindfulness", "", "long-term"),
    tagged("journaling", "Journaling", "", "long-term"),
    tagged("social-support", "Social support", "", "long-term"),
    tagged("therapy", "Therapy session", "", "professional"),
    tagged("medication", "Medication", "", "professional"),
    tagged("crisis-line", "Crisis hotline", "", "professional"),
];

pub const SAVED_MESSAGES: &[&str] = &[
    "Mental health entry saved! Your brain goblins are taking notes! 🧠",
    "Mood tracked. The emotion sprites are organizing your feelings! 💜",
    "Entry logged. Your mental health journey is being documented with care! 🌟",
    "Check-in saved. Paying attention to yourself matters. 💖",
];
