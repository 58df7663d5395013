pub mod client;
pub mod error;
pub mod wire;

pub use client::GeminiClient;
pub use error::GeminiError;
