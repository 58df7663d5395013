use std::sync::Arc;

use anyhow::Result;

use rasdesk_core::api::{AppConfig, GenerativeService, StudyConfig, StudyDesk};

use crate::gemini::GeminiClient;

pub fn build_service(cfg: &AppConfig) -> Result<Arc<dyn GenerativeService>> {
    if cfg.gemini.api_key.trim().is_empty() {
        tracing::warn!(
            target: "rasdesk.factory",
            "no API key configured; requests will likely be rejected"
        );
    }
    Ok(Arc::new(GeminiClient::new(&cfg.gemini)?))
}

pub fn build_desk(cfg: &AppConfig) -> Result<StudyDesk> {
    Ok(StudyDesk::new(build_service(cfg)?, StudyConfig::from_app(cfg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desk_takes_speech_settings_from_config() {
        let mut cfg = AppConfig::default();
        cfg.speech.voice = "Puck".to_string();
        cfg.gemini.search_grounding = false;
        let desk = build_desk(&cfg).unwrap();
        assert_eq!(desk.config().voice, "Puck");
        assert!(!desk.config().search_grounding);
    }

    #[test]
    fn service_is_gemini() {
        let service = build_service(&AppConfig::default()).unwrap();
        assert_eq!(service.name(), "gemini");
    }
}
