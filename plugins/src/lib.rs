pub mod factory;
pub mod gemini;
pub mod sink;
