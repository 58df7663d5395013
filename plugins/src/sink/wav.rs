use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

use rasdesk_core::api::{DecodedAudioBuffer, PlaybackSink};

/// Writes each decoded buffer to a 32-bit float WAV file.
///
/// Samples are written as decoded, so the file reproduces the normalized
/// buffer exactly.
#[derive(Debug, Clone)]
pub struct WavFileSink {
    path: PathBuf,
}

impl WavFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlaybackSink for WavFileSink {
    fn play(&mut self, buffer: &DecodedAudioBuffer) -> anyhow::Result<()> {
        let spec = WavSpec {
            channels: buffer.channel_count,
            sample_rate: buffer.sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = WavWriter::create(&self.path, spec)?;
        for sample in buffer.interleaved() {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;

        tracing::info!(
            target: "rasdesk.sink",
            path = %self.path.display(),
            frames = buffer.frame_count(),
            "wav written"
        );
        Ok(())
    }
}
