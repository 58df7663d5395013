//! Failures talking to the Generative Language API.
use serde::Deserialize;
use thiserror::Error;

const PREVIEW_CHARS: usize = 512;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// No usable reply: connect, TLS, timeout or a body cut short.
    #[error("gemini unreachable at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx reply. `api_status` is the symbolic code from the error
    /// envelope (`RESOURCE_EXHAUSTED`, `INVALID_ARGUMENT`, ...) when present.
    #[error("gemini returned HTTP {code} {}: {message}", .api_status.as_deref().unwrap_or("-"))]
    Api {
        code: u16,
        api_status: Option<String>,
        message: String,
    },

    #[error("gemini reply is not a generateContent response: {source} | body={preview}")]
    Decode {
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

/// `{"error": {"code": 429, "message": "...", "status": "RESOURCE_EXHAUSTED"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// Build from a failed reply, preferring the API's own message.
    pub(crate) fn from_reply(code: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(env) if !env.error.message.trim().is_empty() => Self::Api {
                code,
                api_status: env.error.status,
                message: env.error.message,
            },
            Ok(env) => Self::Api {
                code,
                api_status: env.error.status,
                message: preview(body),
            },
            Err(_) => Self::Api {
                code,
                api_status: None,
                message: preview(body),
            },
        }
    }

    pub(crate) fn decode(body: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            preview: preview(body),
            source,
        }
    }

    /// HTTP status of the reply, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

fn preview(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    match body.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
