#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Elementary,
    Intermediate,
    UpperIntermediate,
    Advanced,
}

impl Difficulty {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=2 => Self::Beginner,
            3..=5 => Self::Elementary,
            6..=10 => Self::Intermediate,
            11..=20 => Self::UpperIntermediate,
            _ => Self::Advanced,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Beginner => "beginner (basic vocabulary and greetings)",
            Self::Elementary => "elementary (common expressions and basic grammar)",
            Self::Intermediate => "intermediate (everyday conversations and grammar)",
            Self::UpperIntermediate => "upper-intermediate (complex topics and structures)",
            Self::Advanced => "advanced (nuanced language and sophisticated expressions)",
        }
    }
}
