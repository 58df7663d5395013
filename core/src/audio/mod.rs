pub mod pcm;

pub use pcm::{decode, decode_pcm16, DecodedAudioBuffer};

/// Fixed output format of the speech collaborator.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;
pub const SPEECH_CHANNELS: u16 = 1;

/// Consumer of a decoded buffer (speaker, file, ...).
pub trait PlaybackSink {
    fn play(&mut self, buffer: &DecodedAudioBuffer) -> anyhow::Result<()>;
}
