use std::fmt;

/// Fixed section markers the research prompt asks the model to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    Summary,
    KeyPoints,
    Context,
    Syllabus,
    ShortQuestions,
    LongQuestions,
    Score,
    Oracle,
}

impl SectionTag {
    pub const COUNT: usize = 8;

    pub const ALL: [SectionTag; Self::COUNT] = [
        SectionTag::Summary,
        SectionTag::KeyPoints,
        SectionTag::Context,
        SectionTag::Syllabus,
        SectionTag::ShortQuestions,
        SectionTag::LongQuestions,
        SectionTag::Score,
        SectionTag::Oracle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "SUMMARY",
            Self::KeyPoints => "KEY_POINTS",
            Self::Context => "CONTEXT",
            Self::Syllabus => "SYLLABUS",
            Self::ShortQuestions => "SHORT_QUESTIONS",
            Self::LongQuestions => "LONG_QUESTIONS",
            Self::Score => "SCORE",
            Self::Oracle => "ORACLE",
        }
    }

    /// Case-insensitive lookup of a bare tag name (no brackets).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_str())
    }
}
