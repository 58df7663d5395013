//! Turning the model's tagged free text into a [`ResearchAnalysis`].
//!
//! The model is asked to answer with `[SUMMARY]`, `[KEY_POINTS]`, ... blocks.
//! Nothing about that format is guaranteed, so every step here degrades to
//! empty values instead of failing.

pub mod assemble;
pub mod extract;
pub mod tags;
pub mod types;

pub use assemble::{
    assemble, assemble_with_sources, parse_score, DEFAULT_SCORE, MAX_KEY_POINTS,
    MAX_LONG_QUESTIONS, MAX_SHORT_QUESTIONS, ORACLE_THRESHOLD,
};
pub use extract::{extract, to_list, Sections};
pub use tags::SectionTag;
pub use types::{GroundingSource, ResearchAnalysis};
