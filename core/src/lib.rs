//! Core of the RAS study desk: tagged-response parsing, PCM decoding and
//! the request flow around the generative collaborator.

pub mod api;
pub mod audio;
pub mod config;
pub mod error;
pub mod prompt;
pub mod research;
pub mod service;
pub mod session;
pub mod study;
