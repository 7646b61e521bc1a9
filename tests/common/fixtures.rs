//! Static inputs used across harnesses.
//!
//! Expected ids refer to the built-in knowledge base
//! (`crates/faqbot-core/data/knowledge_base.toml`).

/// Inputs that must classify as greetings, covering both detector branches.
pub const GREETINGS: &[&str] = &[
    // Whole-string elongation pattern.
    "hi",
    "hii",
    "hiii",
    "hey",
    "heyy",
    "hello",
    "hellooo",
    "yo",
    "yooo",
    "sup",
    // First-token rule.
    "Hi!",
    "hello there",
    "helloo there",
    "heyy corqon",
    "high five",
];

/// Inputs that must not classify as greetings.
pub const NON_GREETINGS: &[&str] = &[
    "",
    "   ",
    "?!",
    "What does Corqon do?",
    "pricing",
    "well hello",
    "thanks",
    "GDPR",
];

/// Free-text phrasings and the built-in entry each must be answered with.
pub const PARAPHRASES: &[(&str, &str)] = &[
    ("How do you handle privacy?", "privacy"),
    ("privacy", "privacy"),
    ("how long is onboarding", "onboarding"),
    ("artificial intelligence", "ai"),
    ("weekly briefing", "weekly-briefing"),
    ("what data do you use", "data-sources"),
    ("does corqon score individuals", "individual-scoring"),
    ("how are signals measured", "signals"),
    ("who are you", "who-are-you"),
    ("hey", "greeting"),
    ("hellooo", "greeting"),
];

/// Inputs that score below the confidence threshold on every built-in entry.
pub const UNANSWERABLE: &[&str] = &[
    "pricing",
    "asdf qwerty",
    "GDPR",
    "¿Cómo manejan la privacidad?",
    "is it expensive",
    "security documentation",
];

/// Awkward raw text for the normalizer.
pub const NOISY_INPUTS: &[&str] = &[
    "",
    "   ",
    "?!?",
    "Café—crème brûlée",
    "privacy-safe",
    "Ünïcödé",
    "\t tabs\nand\r\nnewlines ",
    "数据 隐私",
    "emoji 🎉 party",
    "snake_case_words",
    "MiXeD CaSe 2024",
    "a.b,c;d:e!f?g",
];
