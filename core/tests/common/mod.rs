use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub fn research_fixture() -> &'static str {
    include_str!("../fixtures/research_response.txt")
}

/// Base64 of `samples` laid out as 16-bit little-endian PCM.
pub fn pcm16_base64(samples: &[i16]) -> String {
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    STANDARD.encode(bytes)
}
