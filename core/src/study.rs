//! Request orchestration: prompt in, parsed result out.

use std::sync::Arc;

use chrono::Local;
use serde::Serialize;

use crate::audio::{self, DecodedAudioBuffer};
use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::prompt::{self, NewsPeriod};
use crate::research::{assemble_with_sources, GroundingSource, ResearchAnalysis};
use crate::service::{GenerativeService, SpeechRequest, TextRequest};

pub const NO_NEWS_TEXT: &str = "No data found.";
pub const NO_QUIZ_TEXT: &str = "Failed to generate quiz.";

/// Served when the trending-topics call fails.
pub const FALLBACK_TOPICS: [&str; 5] = [
    "Lado Protsahan Yojana",
    "Rajasthan Solar Policy 2024",
    "ERCP Project Progress",
    "Annapurna Rasoi Scheme",
    "Rajasthan Investment Promotion Scheme (RIPS)",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewsDigest {
    pub period: String,
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

#[derive(Debug, Clone)]
pub struct StudyConfig {
    pub search_grounding: bool,
    pub voice: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub speech_max_chars: usize,
}

impl StudyConfig {
    pub fn from_app(cfg: &AppConfig) -> Self {
        Self {
            search_grounding: cfg.gemini.search_grounding,
            voice: cfg.speech.voice.clone(),
            sample_rate: cfg.speech.sample_rate,
            channels: cfg.speech.channels,
            speech_max_chars: cfg.speech.max_chars,
        }
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self::from_app(&AppConfig::default())
    }
}

#[derive(Clone)]
pub struct StudyDesk {
    service: Arc<dyn GenerativeService>,
    cfg: StudyConfig,
}

impl StudyDesk {
    pub fn new(service: Arc<dyn GenerativeService>, cfg: StudyConfig) -> Self {
        Self { service, cfg }
    }

    pub fn config(&self) -> &StudyConfig {
        &self.cfg
    }

    fn text_request(&self, prompt: String, grounded: bool) -> TextRequest {
        TextRequest {
            prompt,
            grounding: grounded && self.cfg.search_grounding,
        }
    }

    #[tracing::instrument(
        name = "study.current_affairs",
        skip(self),
        fields(request_id = %uuid::Uuid::new_v4(), service = self.service.name())
    )]
    pub async fn current_affairs(&self, period: NewsPeriod) -> Result<NewsDigest, ServiceError> {
        let today = Local::now().date_naive();
        let req = self.text_request(prompt::current_affairs(period, today), true);
        let out = self.service.generate_text(req).await?;
        tracing::info!(citations = out.citations.len(), "news digest received");
        Ok(NewsDigest {
            period: period.to_string(),
            text: out.text_or(NO_NEWS_TEXT),
            sources: GroundingSource::from_citations(&out.citations),
        })
    }

    /// Never fails: upstream errors yield [`FALLBACK_TOPICS`].
    #[tracing::instrument(
        name = "study.trending_topics",
        skip(self),
        fields(request_id = %uuid::Uuid::new_v4())
    )]
    pub async fn trending_topics(&self) -> Vec<String> {
        let req = self.text_request(prompt::trending_topics(), true);
        match self.service.generate_text(req).await {
            Ok(out) => out
                .text
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "trending topics unavailable, serving fallback list");
                FALLBACK_TOPICS.iter().map(|t| t.to_string()).collect()
            }
        }
    }

    #[tracing::instrument(
        name = "study.deep_research",
        skip(self),
        fields(request_id = %uuid::Uuid::new_v4())
    )]
    pub async fn deep_research(&self, topic: &str) -> Result<ResearchAnalysis, ServiceError> {
        let req = self.text_request(prompt::deep_research(topic), true);
        let out = self.service.generate_text(req).await?;
        let text = out.text.unwrap_or_default();
        let analysis = assemble_with_sources(&text, &out.citations);
        tracing::info!(
            score = analysis.significance_score,
            key_points = analysis.key_points.len(),
            sources = analysis.sources.len(),
            "research assembled"
        );
        Ok(analysis)
    }

    #[tracing::instrument(
        name = "study.quiz",
        skip(self),
        fields(request_id = %uuid::Uuid::new_v4())
    )]
    pub async fn quiz(&self, topic: &str) -> Result<String, ServiceError> {
        let req = self.text_request(prompt::quiz(topic), false);
        let out = self.service.generate_text(req).await?;
        Ok(out.text_or(NO_QUIZ_TEXT))
    }

    /// Synthesize speech for `text`. `Ok(None)` means the service returned
    /// no audio; a payload that does not decode is an error.
    #[tracing::instrument(
        name = "study.speak",
        skip(self, text),
        fields(request_id = %uuid::Uuid::new_v4(), text_len = text.len())
    )]
    pub async fn speak(&self, text: &str) -> Result<Option<DecodedAudioBuffer>, ServiceError> {
        let req = SpeechRequest {
            prompt: prompt::speech(text, self.cfg.speech_max_chars),
            voice: self.cfg.voice.clone(),
        };
        let Some(payload) = self.service.generate_speech(req).await? else {
            tracing::warn!("speech response carried no audio");
            return Ok(None);
        };
        let buffer = audio::decode(&payload, self.cfg.sample_rate, self.cfg.channels)?;
        tracing::info!(
            frames = buffer.frame_count(),
            seconds = buffer.duration().as_secs_f32(),
            "speech decoded"
        );
        Ok(Some(buffer))
    }
}
