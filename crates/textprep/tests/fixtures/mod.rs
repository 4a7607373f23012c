/// Ten short sentences about AI, used across the pipeline tests.
#[allow(dead_code)]
pub const AI_CORPUS: &[&str] = &[
    "Artificial Intelligence is the future.",
    "AI is changing the world.",
    "AI is a branch of computer science.",
    "Machine learning is a subset of AI.",
    "Deep learning enables powerful AI applications.",
    "Natural language processing is a field of AI.",
    "AI impacts many industries.",
    "Ethics in AI is important.",
    "AI can automate tasks.",
    "AI systems learn from data.",
];

/// Three longer sentences with mixed punctuation.
#[allow(dead_code)]
pub const MIXED_CORPUS: &[&str] = &[
    "Natural Language Processing is amazing!",
    "AI and machine learning are transforming the world.",
    "Deep learning models can understand text very well.",
];
