#[allow(clippy::module_inception)]
pub mod error;
pub mod audio;

pub use audio::AudioDecodeError;
pub use error::{CliError, ServiceError};
