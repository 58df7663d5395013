//! Plain-text rendering of study results for the terminal.

use std::io::{self, Write};

use rasdesk_core::api::{GroundingSource, NewsDigest, ResearchAnalysis};

fn sources(out: &mut impl Write, sources: &[GroundingSource]) -> io::Result<()> {
    if sources.is_empty() {
        return Ok(());
    }
    writeln!(out, "\nSources:")?;
    for (i, s) in sources.iter().enumerate() {
        writeln!(out, "  [{}] {} <{}>", i + 1, s.title, s.uri)?;
    }
    Ok(())
}

fn block(out: &mut impl Write, heading: &str, body: &str) -> io::Result<()> {
    if body.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n== {heading} ==\n{body}")
}

fn list(out: &mut impl Write, heading: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n== {heading} ==")?;
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, item)?;
    }
    Ok(())
}

pub fn news(out: &mut impl Write, digest: &NewsDigest) -> io::Result<()> {
    writeln!(out, "Rajasthan current affairs ({})\n", digest.period)?;
    writeln!(out, "{}", digest.text.trim_end())?;
    sources(out, &digest.sources)
}

pub fn topics(out: &mut impl Write, topics: &[String]) -> io::Result<()> {
    for (i, t) in topics.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, t)?;
    }
    Ok(())
}

pub fn research(out: &mut impl Write, topic: &str, a: &ResearchAnalysis) -> io::Result<()> {
    writeln!(
        out,
        "Research: {topic}  (significance tier {})",
        a.significance_score
    )?;
    block(out, "Summary", &a.summary)?;
    list(out, "Key points", &a.key_points)?;
    block(out, "Rajasthan context", &a.historical_context)?;
    block(out, "Syllabus relevance", &a.relevance_to_ras)?;
    list(out, "Interview questions (2 marks)", &a.short_questions)?;
    list(out, "Mains questions (10 marks)", &a.long_questions)?;
    if let Some(oracle) = a.visible_oracle() {
        block(out, "Oracle", oracle)?;
    }
    sources(out, &a.sources)
}
