//! Natural-language prompts sent to the generative collaborator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::research::SectionTag;

/// Characters of source text kept for a speech request.
pub const SPEECH_MAX_CHARS: usize = 600;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewsPeriod {
    #[default]
    Weekly,
    Monthly,
}

impl NewsPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for NewsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(format!("unknown news period: {other}")),
        }
    }
}

pub fn current_affairs(period: NewsPeriod, today: NaiveDate) -> String {
    format!(
        "Provide a detailed summary of Rajasthan current affairs for the {period} period starting from the current date ({today}).\n\
         Focus on Rajasthan Government (GoR) schemes, state budget implementations, economic review points, and major state events.\n\
         Format the output in professional Hinglish suitable for an RAS aspirant. Use structured bullet points.",
        today = today.format("%Y-%m-%d"),
    )
}

pub fn trending_topics() -> String {
    "List 5 high-priority trending topics for Rajasthan RAS Mains (like schemes, infrastructure, or social issues). \
     Provide only topic names separated by commas."
        .to_string()
}

pub fn deep_research(topic: &str) -> String {
    let layout = [
        (SectionTag::Summary, "Extensive summary."),
        (SectionTag::KeyPoints, "• Point 1\n• Point 2"),
        (SectionTag::Context, "Rajasthan specific background."),
        (SectionTag::Syllabus, "GS Paper relevance."),
        (
            SectionTag::ShortQuestions,
            "3 short 2-mark interview questions.",
        ),
        (
            SectionTag::LongQuestions,
            "2 analytical 10-mark writing questions.",
        ),
        (
            SectionTag::Score,
            "A significance tier score between 1 and 100 (1 is elite/highest priority, 100 is low priority).",
        ),
        (
            SectionTag::Oracle,
            "(ONLY IF SCORE < 10) A \"Magic Oracle\" insight: a prophetic connection about how this topic will transform Rajasthan's future landscape or its hidden critical importance in the upcoming exam.",
        ),
    ];

    let mut out = format!(
        "Act as an RAS Exam Panelist and a Visionary Oracle. Research: \"{}\".\n\
         Format your response exactly with these sections:\n",
        topic.trim()
    );
    for (tag, hint) in layout {
        out.push_str(&format!("{tag}\n{hint}\n"));
    }
    out
}

pub fn quiz(topic: &str) -> String {
    format!(
        "Generate 5 RAS-standard MCQs on: {}. Include 4 options and detailed Hindi explanations.",
        topic.trim()
    )
}

/// Speech prompt over at most `max_chars` characters of `text`.
pub fn speech(text: &str, max_chars: usize) -> String {
    let excerpt: String = text.chars().take(max_chars).collect();
    format!(
        "Say this clearly in a professional tone for a Rajasthan Civil Services aspirant: {excerpt}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_prompt_lists_every_tag_in_order() {
        let p = deep_research("  ERCP Project  ");
        assert!(p.contains("Research: \"ERCP Project\""));
        let mut last = 0;
        for tag in SectionTag::ALL {
            let pos = p.find(&tag.to_string()).expect("tag missing from prompt");
            assert!(pos >= last, "{tag} out of order");
            last = pos;
        }
    }

    #[test]
    fn research_prompt_round_trips_through_parser() {
        // the layout hints themselves must not confuse the extractor
        let sections = crate::research::Sections::parse(&deep_research("x"));
        assert_eq!(sections.get(SectionTag::Syllabus), "GS Paper relevance.");
    }

    #[test]
    fn speech_prompt_truncates_by_characters() {
        let text = "अ".repeat(700);
        let p = speech(&text, SPEECH_MAX_CHARS);
        assert_eq!(p.matches('अ').count(), 600);

        let p = speech("short", SPEECH_MAX_CHARS);
        assert!(p.ends_with(": short"));
    }

    #[test]
    fn news_prompt_mentions_period_and_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let p = current_affairs(NewsPeriod::Monthly, today);
        assert!(p.contains("monthly period"));
        assert!(p.contains("2026-10-16"));
    }

    #[test]
    fn news_period_parses() {
        assert_eq!("Weekly".parse::<NewsPeriod>(), Ok(NewsPeriod::Weekly));
        assert_eq!("month".parse::<NewsPeriod>(), Ok(NewsPeriod::Monthly));
        assert!("daily".parse::<NewsPeriod>().is_err());
    }

    #[test]
    fn quiz_prompt_names_topic() {
        assert!(quiz("Annapurna Rasoi").contains("MCQs on: Annapurna Rasoi."));
    }
}
