use super::extract::{to_list, Sections};
use super::tags::SectionTag;
use super::types::{GroundingSource, ResearchAnalysis};
use crate::service::Citation;

pub const MAX_KEY_POINTS: usize = 6;
pub const MAX_SHORT_QUESTIONS: usize = 3;
pub const MAX_LONG_QUESTIONS: usize = 2;

/// Scores strictly below this unlock the oracle insight.
pub const ORACLE_THRESHOLD: i64 = 10;
pub const DEFAULT_SCORE: i64 = 50;

/// Build a [`ResearchAnalysis`] from raw model text. Never fails.
pub fn assemble(text: &str) -> ResearchAnalysis {
    assemble_with_sources(text, &[])
}

pub fn assemble_with_sources(text: &str, citations: &[Citation]) -> ResearchAnalysis {
    let sections = Sections::parse(text);
    let list = |tag: SectionTag, max: usize| -> Vec<String> {
        let mut items = to_list(sections.get(tag));
        items.truncate(max);
        items
    };

    let significance_score = parse_score(sections.get(SectionTag::Score));
    let oracle_insight = (significance_score < ORACLE_THRESHOLD)
        .then(|| sections.get(SectionTag::Oracle).to_string());

    tracing::debug!(
        target: "rasdesk.research",
        text_len = text.len(),
        significance_score,
        has_oracle = oracle_insight.is_some(),
        missing = ?SectionTag::ALL
            .iter()
            .filter(|t| !sections.contains(**t))
            .map(|t| t.as_str())
            .collect::<Vec<_>>(),
        "research text assembled"
    );

    ResearchAnalysis {
        summary: sections.get(SectionTag::Summary).to_string(),
        key_points: list(SectionTag::KeyPoints, MAX_KEY_POINTS),
        historical_context: sections.get(SectionTag::Context).to_string(),
        relevance_to_ras: sections.get(SectionTag::Syllabus).to_string(),
        sources: GroundingSource::from_citations(citations),
        short_questions: list(SectionTag::ShortQuestions, MAX_SHORT_QUESTIONS),
        long_questions: list(SectionTag::LongQuestions, MAX_LONG_QUESTIONS),
        significance_score,
        oracle_insight,
    }
}

/// Leading-integer parse of the SCORE section.
///
/// Accepts an optional sign followed by ASCII digits and ignores whatever
/// follows (`"85/100"` is 85). Empty, non-numeric, overflowing and zero
/// values fall back to [`DEFAULT_SCORE`]. No clamping.
pub fn parse_score(raw: &str) -> i64 {
    leading_integer(raw.trim())
        .filter(|v| *v != 0)
        .unwrap_or(DEFAULT_SCORE)
}

fn leading_integer(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn low_score_unlocks_oracle() {
        let a = assemble("[SUMMARY]\nHello world\n[SCORE]\n5\n[ORACLE]\nDestiny awaits");
        assert_eq!(a.summary, "Hello world");
        assert_eq!(a.significance_score, 5);
        assert_eq!(a.oracle_insight.as_deref(), Some("Destiny awaits"));
    }

    #[test]
    fn non_numeric_score_defaults_and_hides_oracle() {
        let a = assemble("[SUMMARY]\nHello\n[SCORE]\nabc");
        assert_eq!(a.summary, "Hello");
        assert_eq!(a.significance_score, 50);
        assert_eq!(a.oracle_insight, None);
    }

    #[test]
    fn oracle_suppressed_at_and_above_threshold() {
        for score in ["10", "11", "99"] {
            let a = assemble(&format!("[SCORE] {score} [ORACLE] should not leak"));
            assert_eq!(a.oracle_insight, None, "score {score}");
        }
        let a = assemble("[SCORE] 9 [ORACLE] leaks only here");
        assert_eq!(a.oracle_insight.as_deref(), Some("leaks only here"));
    }

    #[test]
    fn low_score_without_oracle_section_is_empty_oracle() {
        let a = assemble("[SCORE] 3");
        assert_eq!(a.oracle_insight.as_deref(), Some(""));
        assert_eq!(a.visible_oracle(), None);
    }

    #[test]
    fn lists_are_truncated_in_order() {
        let points: String = (1..=9).map(|i| format!("• key point {i}\n")).collect();
        let shorts: String = (1..=5).map(|i| format!("{i}. short question {i}\n")).collect();
        let longs: String = (1..=4).map(|i| format!("- long question {i}\n")).collect();
        let text = format!(
            "[KEY_POINTS]\n{points}[SHORT_QUESTIONS]\n{shorts}[LONG_QUESTIONS]\n{longs}"
        );
        let a = assemble(&text);
        assert_eq!(a.key_points.len(), 6);
        assert_eq!(a.key_points[0], "key point 1");
        assert_eq!(a.key_points[5], "key point 6");
        assert_eq!(
            a.short_questions,
            vec!["short question 1", "short question 2", "short question 3"]
        );
        assert_eq!(a.long_questions, vec!["long question 1", "long question 2"]);
    }

    #[test]
    fn empty_text_degrades_to_defaults() {
        let a = assemble("");
        assert_eq!(a.summary, "");
        assert!(a.key_points.is_empty());
        assert!(a.short_questions.is_empty());
        assert!(a.long_questions.is_empty());
        assert!(a.sources.is_empty());
        assert_eq!(a.significance_score, DEFAULT_SCORE);
        assert_eq!(a.oracle_insight, None);
    }

    #[test]
    fn context_and_syllabus_map_to_named_fields() {
        let a = assemble("[CONTEXT] Princely states merged in 1949. [SYLLABUS] GS Paper II");
        assert_eq!(a.historical_context, "Princely states merged in 1949.");
        assert_eq!(a.relevance_to_ras, "GS Paper II");
    }

    #[test]
    fn sources_are_reshaped_with_defaults() {
        let citations = vec![
            Citation {
                title: Some("PIB".to_string()),
                uri: Some("https://pib.gov.in".to_string()),
            },
            Citation::default(),
        ];
        let a = assemble_with_sources("[SUMMARY] s", &citations);
        assert_eq!(a.sources.len(), 2);
        assert_eq!(a.sources[0].title, "PIB");
        assert_eq!(a.sources[1].title, "Reference");
        assert_eq!(a.sources[1].uri, "#");
    }

    #[test]
    fn parse_score_follows_leading_integer_rules() {
        assert_eq!(parse_score("42"), 42);
        assert_eq!(parse_score("  7 (elite)"), 7);
        assert_eq!(parse_score("85/100"), 85);
        assert_eq!(parse_score("+12"), 12);
        assert_eq!(parse_score("-4"), -4);
        assert_eq!(parse_score("250"), 250);
        assert_eq!(parse_score(""), DEFAULT_SCORE);
        assert_eq!(parse_score("Score: 5"), DEFAULT_SCORE);
        assert_eq!(parse_score("-"), DEFAULT_SCORE);
        assert_eq!(parse_score("0"), DEFAULT_SCORE);
        assert_eq!(parse_score("99999999999999999999999"), DEFAULT_SCORE);
    }

    #[test]
    fn serialized_shape_omits_absent_oracle() {
        let a = assemble("[SCORE] 60 [ORACLE] hidden");
        let v = serde_json::to_value(&a).unwrap();
        assert!(v.get("oracleInsight").is_none());
        assert_eq!(v["significanceScore"], 60);
        assert!(v.get("relevanceToRAS").is_some());
        assert!(v.get("keyPoints").is_some());

        let a = assemble("[SCORE] 2 [ORACLE] shown");
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["oracleInsight"], "shown");
    }
}
