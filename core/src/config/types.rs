use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "rasdesk_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Connection settings for the Generative Language API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Injected into the client only; never read by the parsing core.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Attach the search tool to news, trending and research calls.
    #[serde(default = "default_search_grounding")]
    pub search_grounding: bool,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_tts_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_timeout_ms() -> u64 {
    120_000
}

fn default_search_grounding() -> bool {
    true
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            text_model: default_text_model(),
            tts_model: default_tts_model(),
            timeout_ms: default_timeout_ms(),
            search_grounding: default_search_grounding(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_voice")]
    pub voice: String,

    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Characters of the source text kept before building the speech prompt.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_voice() -> String {
    "Kore".to_string()
}

fn default_sample_rate() -> u32 {
    crate::audio::SPEECH_SAMPLE_RATE
}

fn default_channels() -> u16 {
    crate::audio::SPEECH_CHANNELS
}

fn default_max_chars() -> usize {
    crate::prompt::SPEECH_MAX_CHARS
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            max_chars: default_max_chars(),
        }
    }
}
