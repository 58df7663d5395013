//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `rasdesk_core::api` instead of reaching into internal modules.

pub use crate::audio::{
    decode, decode_pcm16, DecodedAudioBuffer, PlaybackSink, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE,
};
pub use crate::config::{load_default, AppConfig, GeminiConfig, LoggingConfig, SpeechConfig};
pub use crate::error::{AudioDecodeError, CliError, ServiceError};
pub use crate::prompt::NewsPeriod;
pub use crate::research::{
    assemble, assemble_with_sources, extract, to_list, GroundingSource, ResearchAnalysis,
    SectionTag, Sections,
};
pub use crate::service::{Citation, GeneratedText, GenerativeService, SpeechRequest, TextRequest};
pub use crate::session::{SessionEffect, StudySession, Tab};
pub use crate::study::{NewsDigest, StudyConfig, StudyDesk, FALLBACK_TOPICS};
