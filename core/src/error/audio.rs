use thiserror::Error;

/// Hard failures of the PCM decoder. There is no partial output.
#[derive(Error, Debug)]
pub enum AudioDecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload of {0} bytes is not a whole number of 16-bit samples")]
    OddByteLength(usize),

    #[error("channel count must be at least 1")]
    NoChannels,

    #[error("sample rate must be non-zero")]
    ZeroSampleRate,
}
