//! Scripted generative service for command-level tests.
use std::sync::Arc;

use async_trait::async_trait;
use rasdesk_core::api::{
    GeneratedText, GenerativeService, SpeechRequest, StudyConfig, StudyDesk, TextRequest,
};

pub(crate) const RESEARCH_TEXT: &str = "[SUMMARY] Eastern Rajasthan Canal Project links Parbati, Kalisindh and Chambal.
[KEY_POINTS]
• Covers thirteen districts of eastern Rajasthan
• Merged with the Parbati-Kalisindh-Chambal link in 2024
[SCORE] 40";

/// Fixed text for every text call; `speech` decides what TTS returns.
pub(crate) struct ScriptedService {
    pub speech: Result<Option<String>, String>,
}

#[async_trait]
impl GenerativeService for ScriptedService {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate_text(&self, _request: TextRequest) -> anyhow::Result<GeneratedText> {
        Ok(GeneratedText {
            text: Some(RESEARCH_TEXT.to_string()),
            citations: Vec::new(),
        })
    }

    async fn generate_speech(&self, _request: SpeechRequest) -> anyhow::Result<Option<String>> {
        match &self.speech {
            Ok(audio) => Ok(audio.clone()),
            Err(msg) => anyhow::bail!("{msg}"),
        }
    }
}

pub(crate) fn desk(speech: Result<Option<String>, String>) -> StudyDesk {
    StudyDesk::new(Arc::new(ScriptedService { speech }), StudyConfig::default())
}
