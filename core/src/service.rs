//! Seam to the hosted generative collaborators.
//!
//! The core never performs I/O itself; implementations live in
//! `rasdesk-plugins`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    pub prompt: String,
    /// Ask the service to ground its answer in web search.
    pub grounding: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedText {
    /// `None` when the response carried no text part at all.
    pub text: Option<String>,
    pub citations: Vec<Citation>,
}

impl GeneratedText {
    /// Text content, with empty and missing text replaced by `fallback`.
    pub fn text_or(&self, fallback: &str) -> String {
        match self.text.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub prompt: String,
    pub voice: String,
}

#[async_trait]
pub trait GenerativeService: Send + Sync {
    fn name(&self) -> &str;

    async fn generate_text(&self, request: TextRequest) -> anyhow::Result<GeneratedText>;

    /// Base64 of raw 16-bit PCM, or `None` when no audio part came back.
    async fn generate_speech(&self, request: SpeechRequest) -> anyhow::Result<Option<String>>;
}
