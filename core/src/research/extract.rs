use std::sync::OnceLock;

use regex::Regex;

use super::tags::SectionTag;

// Cached regexes (compiled once, reused forever)
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        let names: Vec<&str> = SectionTag::ALL.iter().map(|t| t.as_str()).collect();
        let pattern = format!(r"(?i)\[({})\]", names.join("|"));
        Regex::new(&pattern).expect("TAG_REGEX is valid")
    })
}

fn marker_regex() -> &'static Regex {
    MARKER_REGEX.get_or_init(|| Regex::new(r"^[•\-*0-9.]+\s*").expect("MARKER_REGEX is valid"))
}

/// Content of every known section in one model response.
///
/// A section runs from just after its `[TAG]` up to the next `[` (any
/// bracket, not only a known tag) or the end of the text. Only the first
/// occurrence of a tag counts. Brackets inside the content, such as `[1]`
/// citation markers, cut the section short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    slots: [Option<String>; SectionTag::COUNT],
}

impl Sections {
    pub fn parse(text: &str) -> Self {
        let mut sections = Sections::default();

        for caps in tag_regex().captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(tag) = SectionTag::from_name(name.as_str()) else {
                continue;
            };
            let slot = &mut sections.slots[tag.index()];
            if slot.is_some() {
                continue;
            }

            let rest = &text[whole.end()..];
            let end = rest.find('[').unwrap_or(rest.len());
            *slot = Some(rest[..end].trim().to_string());
        }

        sections
    }

    /// Section content, or `""` when the model omitted the tag.
    pub fn get(&self, tag: SectionTag) -> &str {
        self.slots[tag.index()].as_deref().unwrap_or("")
    }

    pub fn contains(&self, tag: SectionTag) -> bool {
        self.slots[tag.index()].is_some()
    }
}

/// Content following the first `[TAG]` in `text`; empty when absent.
pub fn extract(text: &str, tag: SectionTag) -> String {
    Sections::parse(text).get(tag).to_string()
}

/// Split a section into clean list entries.
///
/// Bullets (`•`, `-`, `*`) and `N.` numbering are stripped only at the very
/// start of a line, so an indented bullet keeps its marker. Entries of five
/// characters or fewer are dropped. Order is kept and nothing is capped here.
pub fn to_list(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| strip_marker(line).trim())
        .filter(|line| line.chars().count() > 5)
        .map(str::to_string)
        .collect()
}

fn strip_marker(line: &str) -> &str {
    match marker_regex().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}
