use crate::trackers::PicklistOption;

pub const PAIN_LOCATIONS: &[PicklistOption] = &[
    PicklistOption::plain("head"),
    PicklistOption::plain("neck"),
    PicklistOption::plain("shoulders"),
    PicklistOption::plain("upper back"),
    PicklistOption::plain("lower back"),
    PicklistOption::plain("chest"),
    PicklistOption::plain("abdomen"),
    PicklistOption::plain("left arm"),
    PicklistOption::plain("right arm"),
    PicklistOption::plain("left leg"),
    PicklistOption::plain("right leg"),
    PicklistOption::plain("hips"),
    PicklistOption::plain("knees"),
    PicklistOption::plain("ankles"),
    PicklistOption::plain("hands"),
    PicklistOption::plain("feet"),
    PicklistOption::plain("jaw"),
    PicklistOption::plain("face"),
    PicklistOption::plain("full body"),
];

pub const PAIN_TRIGGERS: &[PicklistOption] = &[
    PicklistOption::plain("stress"),
    PicklistOption::plain("weather change"),
    PicklistOption::plain("lack of sleep"),
    PicklistOption::plain("physical activity"),
    PicklistOption::plain("sitting too long"),
    PicklistOption::plain("poor posture"),
    PicklistOption::plain("certain foods"),
    PicklistOption::plain("hormonal changes"),
    PicklistOption::plain("bright lights"),
    PicklistOption::plain("loud noises"),
    PicklistOption::plain("dehydration"),
    PicklistOption::plain("skipped meals"),
    PicklistOption::plain("overexertion"),
    PicklistOption::plain("cold"),
    PicklistOption::plain("heat"),
    PicklistOption::plain("unknown"),
];

pub const PAIN_TYPES: &[PicklistOption] = &[
    PicklistOption::plain("sharp"),
    PicklistOption::plain("dull"),
    PicklistOption::plain("throbbing"),
    PicklistOption::plain("burning"),
    PicklistOption::plain("stabbing"),
    PicklistOption::plain("aching"),
    PicklistOption::plain("cramping"),
    PicklistOption::plain("shooting"),
    PicklistOption::plain("tingling"),
    PicklistOption::plain("numbness"),
    PicklistOption::plain("pressure"),
    PicklistOption::plain("tight"),
    PicklistOption::plain("electric"),
];

pub const PAIN_QUALITIES: &[PicklistOption] = &[
    PicklistOption::plain("constant"),
    PicklistOption::plain("intermittent"),
    PicklistOption::plain("worsening"),
    PicklistOption::plain("improving"),
    PicklistOption::plain("comes and goes"),
    PicklistOption::plain("morning stiffness"),
    PicklistOption::plain("worse with movement"),
    PicklistOption::plain("better with rest"),
    PicklistOption::plain("radiating"),
];

pub const TREATMENTS: &[PicklistOption] = &[
    PicklistOption::plain("rest"),
    PicklistOption::plain("ice"),
    PicklistOption::plain("heat"),
    PicklistOption::plain("massage"),
    PicklistOption::plain("stretching"),
    PicklistOption::plain("meditation"),
    PicklistOption::plain("deep breathing"),
    PicklistOption::plain("hot bath"),
    PicklistOption::plain("gentle exercise"),
    PicklistOption::plain("physical therapy"),
    PicklistOption::plain("acupuncture"),
    PicklistOption::plain("TENS unit"),
    PicklistOption::plain("topical cream"),
    PicklistOption::plain("distraction"),
    PicklistOption::plain("music therapy"),
];

pub const MEDICATIONS: &[PicklistOption] = &[
    PicklistOption::plain("ibuprofen"),
    PicklistOption::plain("acetaminophen"),
    PicklistOption::plain("aspirin"),
    PicklistOption::plain("naproxen"),
    PicklistOption::plain("prescription pain med"),
    PicklistOption::plain("muscle relaxer"),
    PicklistOption::plain("topical analgesic"),
    PicklistOption::plain("CBD"),
    PicklistOption::plain("other"),
];

/// Pain at or above this level counts as a high-pain entry.
pub const HIGH_PAIN_THRESHOLD: u8 = 7;

pub const SAVED_MESSAGES: &[&str] = &[
    "Pain entry saved. Tracking it is how patterns show up. ⚡",
    "Logged. Your body's data is safe with us. 💜",
    "Saved. Be gentle with yourself today. 🌿",
];
