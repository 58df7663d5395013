use thiserror::Error;

use super::audio::AudioDecodeError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("service failed: {0}")]
    Service(#[from] ServiceError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Failures raised while talking to the generative collaborators.
///
/// Malformed model text is never an error; only transport failures and
/// undecodable audio reach the caller.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("config error: {0}")]
    Config(String),
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] anyhow::Error),
    #[error("audio payload rejected: {0}")]
    Audio(#[from] AudioDecodeError),
}
