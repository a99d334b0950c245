//! Error types for synthesis and playback.

use thiserror::Error;

/// Result type for chipfx operations.
pub type Result<T> = std::result::Result<T, SfxError>;

/// Errors that can occur while building or playing sounds.
#[derive(Debug, Error)]
pub enum SfxError {
    /// Malformed numeric input to a generator or the envelope shaper.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// The audio output subsystem failed to initialize or is unavailable.
    ///
    /// Callers are expected to degrade gracefully: sound is an enhancement,
    /// never a hard dependency of the host application.
    #[error("playback unavailable: {0}")]
    PlaybackUnavailable(String),
}

impl SfxError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_param_mentions_name_and_message() {
        let err = SfxError::invalid_param("frequency", "must be positive");
        assert!(err.to_string().contains("frequency"));
        assert!(err.to_string().contains("must be positive"));
    }
}
