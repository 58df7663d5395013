use std::time::Duration;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::AudioDecodeError;

const I16_SCALE: f32 = 32768.0;

/// Standard alphabet; `=` padding optional on decode, emitted on encode.
const B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Normalized per-channel samples ready for a playback sink.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudioBuffer {
    pub sample_rate: u32,
    pub channel_count: u16,
    /// One vector per channel, all of length `frame_count()`.
    pub channels: Vec<Vec<f32>>,
}

impl DecodedAudioBuffer {
    pub fn frame_count(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    /// Zero for a hand-built buffer with no sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count() as f64 / f64::from(self.sample_rate))
    }

    /// Frames re-interleaved as `[f0c0, f0c1, f1c0, ...]`.
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frame_count();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for i in 0..frames {
            for ch in &self.channels {
                out.push(ch[i]);
            }
        }
        out
    }
}

/// Decode a base64 payload of signed 16-bit little-endian interleaved PCM.
///
/// ASCII whitespace inside the payload is ignored and trailing `=` padding
/// may be omitted. Samples are divided by
/// 32768, so +32767 lands just under 1.0. A trailing partial frame is
/// dropped.
pub fn decode(
    payload: &str,
    sample_rate: u32,
    channel_count: u16,
) -> Result<DecodedAudioBuffer, AudioDecodeError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = B64.decode(compact.as_bytes())?;
    decode_pcm16(&bytes, sample_rate, channel_count)
}

pub fn decode_pcm16(
    bytes: &[u8],
    sample_rate: u32,
    channel_count: u16,
) -> Result<DecodedAudioBuffer, AudioDecodeError> {
    if channel_count == 0 {
        return Err(AudioDecodeError::NoChannels);
    }
    if sample_rate == 0 {
        return Err(AudioDecodeError::ZeroSampleRate);
    }
    if bytes.len() % 2 != 0 {
        return Err(AudioDecodeError::OddByteLength(bytes.len()));
    }

    let samples: Vec<i16> = bytes
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();

    let stride = usize::from(channel_count);
    let frame_count = samples.len() / stride;
    let channels: Vec<Vec<f32>> = (0..stride)
        .map(|c| {
            (0..frame_count)
                .map(|i| f32::from(samples[i * stride + c]) / I16_SCALE)
                .collect::<Vec<f32>>()
        })
        .collect();

    tracing::debug!(
        target: "rasdesk.audio",
        bytes = bytes.len(),
        sample_rate,
        channel_count,
        frame_count,
        "pcm payload decoded"
    );

    Ok(DecodedAudioBuffer {
        sample_rate,
        channel_count,
        channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(samples: &[i16]) -> String {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        B64.encode(bytes)
    }

    #[test]
    fn mono_samples_normalize() {
        let buf = decode(&encode(&[0, 16384, -16384, 32767]), 24_000, 1).unwrap();
        assert_eq!(buf.channel_count, 1);
        assert_eq!(buf.frame_count(), 4);
        let ch = &buf.channels[0];
        assert_eq!(ch[0], 0.0);
        assert_eq!(ch[1], 0.5);
        assert_eq!(ch[2], -0.5);
        assert_eq!(ch[3], 32767.0 / 32768.0);
        assert!(ch[3] < 1.0);
    }

    #[test]
    fn extremes_stay_in_range() {
        let buf = decode(&encode(&[i16::MIN, i16::MAX]), 24_000, 1).unwrap();
        assert_eq!(buf.channels[0][0], -1.0);
        assert!(buf.channels[0][1] < 1.0);
    }

    #[test]
    fn stereo_is_deinterleaved() {
        let buf = decode(&encode(&[100, -100, 200, -200, 300, -300]), 48_000, 2).unwrap();
        assert_eq!(buf.frame_count(), 3);
        assert_eq!(buf.channels[0], vec![100.0 / 32768.0, 200.0 / 32768.0, 300.0 / 32768.0]);
        assert_eq!(
            buf.channels[1],
            vec![-100.0 / 32768.0, -200.0 / 32768.0, -300.0 / 32768.0]
        );
        assert_eq!(buf.interleaved().len(), 6);
        assert_eq!(buf.interleaved()[1], -100.0 / 32768.0);
    }

    #[test]
    fn partial_trailing_frame_is_dropped() {
        let buf = decode(&encode(&[1, 2, 3, 4, 5, 6, 7]), 24_000, 3).unwrap();
        assert_eq!(buf.frame_count(), 2);
        assert!(buf.channels.iter().all(|c| c.len() == 2));
        assert_eq!(buf.channels[2][1], 6.0 / 32768.0);
    }

    #[test]
    fn whitespace_in_payload_is_ignored() {
        let encoded = encode(&[16384, 16384]);
        let (a, b) = encoded.split_at(4);
        let buf = decode(&format!(" {a}\n{b}\r\n"), 24_000, 1).unwrap();
        assert_eq!(buf.channels[0], vec![0.5, 0.5]);
    }

    #[test]
    fn unpadded_payload_is_accepted() {
        let padded = decode("AAAAQA==", 24_000, 1).unwrap();
        let bare = decode("AAAAQA", 24_000, 1).unwrap();
        assert_eq!(bare, padded);
        assert_eq!(bare.channels[0], vec![0.0, 0.5]);
    }

    #[test]
    fn empty_payload_gives_empty_buffer() {
        let buf = decode("", 24_000, 1).unwrap();
        assert_eq!(buf.frame_count(), 0);
        assert_eq!(buf.duration(), Duration::ZERO);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let err = decode("@@not base64@@", 24_000, 1).unwrap_err();
        assert!(matches!(err, AudioDecodeError::Base64(_)));
    }

    #[test]
    fn odd_byte_length_is_rejected() {
        let err = decode(&B64.encode([1u8, 2, 3]), 24_000, 1).unwrap_err();
        assert!(matches!(err, AudioDecodeError::OddByteLength(3)));
    }

    #[test]
    fn zero_channels_and_rate_are_rejected() {
        assert!(matches!(
            decode_pcm16(&[0, 0], 24_000, 0),
            Err(AudioDecodeError::NoChannels)
        ));
        assert!(matches!(
            decode_pcm16(&[0, 0], 0, 1),
            Err(AudioDecodeError::ZeroSampleRate)
        ));
    }

    #[test]
    fn duration_uses_sample_rate() {
        let buf = decode_pcm16(&[0u8; 48_000], 24_000, 1).unwrap();
        assert_eq!(buf.frame_count(), 24_000);
        assert_eq!(buf.duration(), Duration::from_secs(1));
    }

    #[test]
    fn hand_built_buffer_without_rate_has_zero_duration() {
        let buf = DecodedAudioBuffer {
            sample_rate: 0,
            channel_count: 1,
            channels: vec![vec![0.0; 10]],
        };
        assert_eq!(buf.duration(), Duration::ZERO);
        let empty = DecodedAudioBuffer {
            sample_rate: 0,
            channel_count: 0,
            channels: Vec::new(),
        };
        assert_eq!(empty.duration(), Duration::ZERO);
    }
}
