use async_trait::async_trait;
use serde::de::DeserializeOwned;

use rasdesk_core::api::{
    GeminiConfig, GeneratedText, GenerativeService, SpeechRequest, TextRequest,
};

use super::error::GeminiError;
use super::wire::{GenerateContentRequest, GenerateContentResponse};

/// Read a reply body and decode it; an empty 2xx body is an empty response.
async fn read_reply<T: DeserializeOwned + Default>(
    resp: reqwest::Response,
    url: &str,
) -> Result<T, GeminiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|err| GeminiError::transport(url, err))?;

    if !status.is_success() {
        return Err(GeminiError::from_reply(status.as_u16(), &body));
    }
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str::<T>(&body).map_err(|err| GeminiError::decode(&body, err))
}

/// Client for the Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    http: reqwest::Client,
    // Pre-built URL endpoints (avoid repeated format! and trim)
    url_text: String,
    url_speech: String,
}

impl GeminiClient {
    pub fn new(cfg: &GeminiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(cfg.timeout_ms))
            .build()?;
        let normalized = cfg.base_url.trim_end_matches('/');
        Ok(Self {
            api_key: cfg.api_key.clone(),
            http,
            url_text: endpoint(normalized, &cfg.text_model),
            url_speech: endpoint(normalized, &cfg.tts_model),
        })
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.trim().is_empty() {
            req
        } else {
            req.header("x-goog-api-key", &self.api_key)
        }
    }

    async fn exchange(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> Result<(reqwest::StatusCode, GenerateContentResponse), GeminiError> {
        let req = self.http.post(url).json(body);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GeminiError::transport(url, err))?;
        let status = resp.status();
        let parsed = read_reply::<GenerateContentResponse>(resp, url).await?;
        Ok((status, parsed))
    }

    async fn generate(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> anyhow::Result<GenerateContentResponse> {
        let (status, parsed) = self.exchange(url, body).await.map_err(|err| {
            tracing::warn!(
                target: "rasdesk.gemini",
                stage = "gemini.generate.err",
                status = ?err.status(),
                timeout = err.is_timeout(),
                error = %err
            );
            err
        })?;
        tracing::debug!(
            target: "rasdesk.gemini",
            stage = "gemini.generate.out",
            status = %status,
            candidates = parsed.candidates.len()
        );
        Ok(parsed)
    }
}

fn endpoint(base: &str, model: &str) -> String {
    format!("{}/v1beta/models/{}:generateContent", base, model.trim())
}

#[async_trait]
impl GenerativeService for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_text(&self, request: TextRequest) -> anyhow::Result<GeneratedText> {
        tracing::debug!(
            target: "rasdesk.gemini",
            stage = "gemini.text.in",
            url = %self.url_text,
            prompt_len = request.prompt.len(),
            grounding = request.grounding
        );
        let body = GenerateContentRequest::text(request.prompt, request.grounding);
        let resp = self.generate(&self.url_text, &body).await?;
        Ok(GeneratedText {
            text: resp.text(),
            citations: resp.citations(),
        })
    }

    async fn generate_speech(&self, request: SpeechRequest) -> anyhow::Result<Option<String>> {
        tracing::debug!(
            target: "rasdesk.gemini",
            stage = "gemini.speech.in",
            url = %self.url_speech,
            voice = %request.voice,
            prompt_len = request.prompt.len()
        );
        let body = GenerateContentRequest::speech(request.prompt, request.voice);
        let resp = self.generate(&self.url_speech, &body).await?;
        Ok(resp.audio_base64())
    }
}
