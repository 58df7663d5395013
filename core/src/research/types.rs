use serde::{Deserialize, Serialize};

use crate::service::Citation;

pub const DEFAULT_SOURCE_TITLE: &str = "Reference";
pub const DEFAULT_SOURCE_URI: &str = "#";

/// A web reference backing the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

impl GroundingSource {
    pub fn from_citation(citation: &Citation) -> Self {
        Self {
            title: citation
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_TITLE.to_string()),
            uri: citation
                .uri
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_URI.to_string()),
        }
    }

    pub fn from_citations(citations: &[Citation]) -> Vec<Self> {
        citations.iter().map(Self::from_citation).collect()
    }
}

/// Structured result of one deep-research request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchAnalysis {
    pub summary: String,
    pub key_points: Vec<String>,
    pub historical_context: String,
    #[serde(rename = "relevanceToRAS")]
    pub relevance_to_ras: String,
    pub sources: Vec<GroundingSource>,
    pub short_questions: Vec<String>,
    pub long_questions: Vec<String>,
    /// 1-100 tier, lower is more important. Not clamped.
    pub significance_score: i64,
    /// Only ever set when `significance_score` is below the oracle threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_insight: Option<String>,
}

impl ResearchAnalysis {
    /// Oracle text worth showing; absent and empty are treated the same.
    pub fn visible_oracle(&self) -> Option<&str> {
        self.oracle_insight.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_defaults_fill_missing_fields() {
        let src = GroundingSource::from_citation(&Citation {
            title: None,
            uri: Some(String::new()),
        });
        assert_eq!(src.title, "Reference");
        assert_eq!(src.uri, "#");

        let src = GroundingSource::from_citation(&Citation {
            title: Some("rajasthan.gov.in".to_string()),
            uri: Some("https://rajasthan.gov.in".to_string()),
        });
        assert_eq!(src.title, "rajasthan.gov.in");
        assert_eq!(src.uri, "https://rajasthan.gov.in");
    }
}
