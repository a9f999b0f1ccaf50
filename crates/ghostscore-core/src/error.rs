//! Error types for ghostscore-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Input-policy violations, enforced by callers before analysis.
///
/// The detection engine itself is total and degrades gracefully on short
/// input; these gates belong to the surrounding service layer.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input is shorter than the configured minimum.
    #[error("input too short: {chars} characters (minimum {min})")]
    TooShort {
        /// Characters supplied.
        chars: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The input exceeds the configured size limit.
    #[error("input too large: {bytes} bytes (limit {max})")]
    TooLarge {
        /// Bytes supplied.
        bytes: usize,
        /// Configured limit.
        max: usize,
    },
}

/// Validate raw input against caller-side policy limits.
pub fn check_input(text: &str, min_chars: usize, max_bytes: Option<usize>) -> Result<(), InputError> {
    if let Some(max) = max_bytes
        && text.len() > max
    {
        return Err(InputError::TooLarge {
            bytes: text.len(),
            max,
        });
    }
    let chars = text.trim().chars().count();
    if chars < min_chars {
        return Err(InputError::TooShort {
            chars,
            min: min_chars,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_rejected() {
        let err = check_input("tiny", 50, None).unwrap_err();
        assert!(matches!(err, InputError::TooShort { chars: 4, min: 50 }));
    }

    #[test]
    fn oversized_input_rejected() {
        let text = "a".repeat(100);
        let err = check_input(&text, 10, Some(64)).unwrap_err();
        assert!(matches!(err, InputError::TooLarge { bytes: 100, max: 64 }));
    }

    #[test]
    fn acceptable_input_passes() {
        let text = "a".repeat(80);
        assert!(check_input(&text, 50, Some(1024)).is_ok());
    }
}
