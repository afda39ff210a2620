use crate::trackers::PicklistOption;

const fn category(
    value: &'static str,
    label: &'static str,
    emoji: &'static str,
    description: &'static str,
) -> PicklistOption {
    PicklistOption::new(value, label, emoji, "", description)
}

const fn activity(
    value: &'static str,
    label: &'static str,
    category: &'static str,
    emoji: &'static str,
) -> PicklistOption {
    PicklistOption::new(value, label, emoji, category, "")
}

const fn mood(value: &'static str, label: &'static str, emoji: &'static str, tone: &'static str) -> PicklistOption {
    PicklistOption::new(value, label, emoji, tone, "")
}

pub const DEFAULT_CATEGORY: &str = "physical";

pub const CATEGORIES: &[PicklistOption] = &[
    category("physical", "Physical Self-Care", "💪", "Caring for your body and physical health"),
    category("emotional", "Emotional Self-Care", "💜", "Processing feelings and emotional wellbeing"),
    category("mental", "Mental Self-Care", "🧠", "Caring for your mind and cognitive health"),
    category("spiritual", "Spiritual Self-Care", "🌟", "Connecting with meaning and purpose"),
    category("social", "Social Self-Care", "👥", "Nurturing relationships and social needs"),
    category("environmental", "Environmental Self-Care", "🏠", "Creating nurturing spaces around you"),
    category("creative", "Creative Self-Care", "🎨", "Expressing yourself and creating beauty"),
    category("professional", "Professional Self-Care", "💼", "Caring for your work and career wellbeing"),
];

pub const ACTIVITIES: &[PicklistOption] = &[
    activity("gentle-exercise", "Gentle exercise/movement", "physical", "🚶"),
    activity("bath-shower", "Relaxing bath or shower", "physical", "🛁"),
    activity("nap-rest", "Nap or rest", "physical", "😴"),
    activity("skincare", "Skincare routine", "physical", "🧴"),
    activity("nutrition", "Nourishing meal/snack", "physical", "🥗"),
    activity("journaling", "Journaling", "emotional", "📝"),
    activity("crying", "Having a good cry", "emotional", "😭"),
    activity("boundaries", "Setting boundaries", "emotional", "🛡️"),
    activity("affirmations", "Positive affirmations", "emotional", "💖"),
    activity("therapy-support", "Therapy or support call", "emotional", "🤝"),
    activity("reading", "Reading for pleasure", "mental", "📚"),
    activity("puzzles-games", "Puzzles or brain games", "mental", "🧩"),
    activity("learning", "Learning something new", "mental", "🎓"),
    activity("mental-break", "Mental break/rest", "mental", "🧘"),
    activity("meditation", "Meditation or mindfulness", "spiritual", "🧘‍♀️"),
    activity("nature-time", "Time in nature", "spiritual", "🌳"),
    activity("gratitude", "Gratitude practice", "spiritual", "🙏"),
    activity("prayer-ritual", "Prayer or spiritual ritual", "spiritual", "✨"),
    activity("friend-time", "Quality time with friends", "social", "👯"),
    activity("alone-time", "Intentional alone time", "social", "🏠"),
    activity("family-connection", "Family connection", "social", "👨‍👩‍👧‍👦"),
    activity("community", "Community involvement", "social", "🤝"),
    activity("organizing", "Organizing/decluttering", "environmental", "📦"),
    activity("decorating", "Decorating/beautifying space", "environmental", "🏡"),
    activity("comfort-items", "Using comfort items", "environmental", "🧸"),
    activity("art-drawing", "Art or drawing", "creative", "🎨"),
    activity("music", "Playing or listening to music", "creative", "🎵"),
    activity("writing", "Creative writing", "creative", "✍️"),
    activity("crafts", "Crafts or DIY projects", "creative", "🧶"),
    activity("work-boundaries", "Setting work boundaries", "professional", "⏰"),
    activity("skill-building", "Professional skill building", "professional", "📈"),
    activity("work-break", "Taking proper work breaks", "professional", "☕"),
];

pub const MOODS: &[PicklistOption] = &[
    mood("happy", "Happy", "😊", "positive"),
    mood("peaceful", "Peaceful", "😌", "positive"),
    mood("energetic", "Energetic", "⚡", "positive"),
    mood("grateful", "Grateful", "🙏", "positive"),
    mood("confident", "Confident", "💪", "positive"),
    mood("loved", "Loved", "💖", "positive"),
    mood("accomplished", "Accomplished", "🏆", "positive"),
    mood("calm", "Calm", "😐", "neutral"),
    mood("focused", "Focused", "🎯", "neutral"),
    mood("curious", "Curious", "🤔", "neutral"),
    mood("neutral", "Neutral", "😶", "neutral"),
    mood("stressed", "Stressed", "😰", "challenging"),
    mood("anxious", "Anxious", "😟", "challenging"),
    mood("sad", "Sad", "😢", "challenging"),
    mood("angry", "Angry", "😠", "challenging"),
    mood("overwhelmed", "Overwhelmed", "🤯", "challenging"),
    mood("tired", "Tired", "😴", "challenging"),
    mood("lonely", "Lonely", "😔", "challenging"),
    mood("frustrated", "Frustrated", "😤", "challenging"),
    mood("guilty", "Guilty", "😳", "challenging"),
];

pub const MOTIVATIONS: &[PicklistOption] = &[
    PicklistOption::new("feeling-bad", "Feeling bad/struggling", "💔", "", "Need comfort and care"),
    PicklistOption::new("stressed", "Feeling stressed", "😰", "", "Need stress relief"),
    PicklistOption::new("tired", "Feeling tired/drained", "😴", "", "Need energy restoration"),
    PicklistOption::new("routine", "Part of routine", "🔄", "", "Regular self-care practice"),
    PicklistOption::new("prevention", "Preventing burnout", "🛡️", "", "Proactive self-care"),
    PicklistOption::new("celebration", "Celebrating something", "🎉", "", "Rewarding yourself"),
    PicklistOption::new("boredom", "Feeling bored", "😑", "", "Need stimulation or engagement"),
    PicklistOption::new("social-need", "Need connection", "🤗", "", "Craving social interaction"),
    PicklistOption::new("alone-need", "Need alone time", "🏠", "", "Need solitude to recharge"),
    PicklistOption::new("creative-urge", "Creative urge", "🎨", "", "Need to create or express"),
    PicklistOption::new("growth", "Personal growth", "🌱", "", "Want to learn or improve"),
    PicklistOption::new("joy", "Just for joy", "✨", "", "Because it brings happiness"),
];

pub const DURATIONS: &[PicklistOption] = &[
    PicklistOption::plain("5 minutes"),
    PicklistOption::plain("10-15 minutes"),
    PicklistOption::plain("20-30 minutes"),
    PicklistOption::plain("30-45 minutes"),
    PicklistOption::plain("1 hour"),
    PicklistOption::plain("1-2 hours"),
    PicklistOption::plain("2-3 hours"),
    PicklistOption::plain("Half day"),
    PicklistOption::plain("Full day"),
    PicklistOption::plain("Multiple days"),
];

pub const TIMES_OF_DAY: &[PicklistOption] = &[
    PicklistOption::plain("Early morning"),
    PicklistOption::plain("Morning"),
    PicklistOption::plain("Late morning"),
    PicklistOption::plain("Midday"),
    PicklistOption::plain("Afternoon"),
    PicklistOption::plain("Late afternoon"),
    PicklistOption::plain("Evening"),
    PicklistOption::plain("Night"),
    PicklistOption::plain("Late night"),
];

pub const PHYSICAL_IMPACTS: &[PicklistOption] = &[
    PicklistOption::plain("More energized"),
    PicklistOption::plain("More relaxed"),
    PicklistOption::plain("Less tense"),
    PicklistOption::plain("Less pain"),
    PicklistOption::plain("More comfortable"),
    PicklistOption::plain("Refreshed"),
    PicklistOption::plain("Sleepy"),
    PicklistOption::plain("Grounded"),
];

pub const MENTAL_IMPACTS: &[PicklistOption] = &[
    PicklistOption::plain("Clearer thinking"),
    PicklistOption::plain("More focused"),
    PicklistOption::plain("Less scattered"),
    PicklistOption::plain("More creative"),
    PicklistOption::plain("More motivated"),
    PicklistOption::plain("Less worried"),
    PicklistOption::plain("Less overwhelmed"),
    PicklistOption::plain("More present"),
    PicklistOption::plain("Better perspective"),
];

pub const EMOTIONAL_IMPACTS: &[PicklistOption] = &[
    PicklistOption::plain("Happier"),
    PicklistOption::plain("More peaceful"),
    PicklistOption::plain("Less anxious"),
    PicklistOption::plain("More grateful"),
    PicklistOption::plain("Less guilty"),
    PicklistOption::plain("More hopeful"),
    PicklistOption::plain("More content"),
    PicklistOption::plain("More connected"),
    PicklistOption::plain("More self-compassionate"),
];

pub const PLANNING: &[PicklistOption] = &[
    PicklistOption::new("planned", "Planned", "📅", "", ""),
    PicklistOption::new("spontaneous", "Spontaneous", "✨", "", ""),
];

/// Activities need this many entries before their effectiveness is ranked.
pub const MIN_REPEATS: usize = 2;

pub const SAVED_MESSAGES: &[&str] = &[
    "Self-care logged with love! The nurturing sprites are cheering for you! 💖",
    "Care documented. Your future self is sending gratitude back through time! 💕",
    "Self-care saved. The boundary guardians applaud your self-respect! 🛡️",
    "Wellness noted. Taking time for yourself counts. 🌈",
];
