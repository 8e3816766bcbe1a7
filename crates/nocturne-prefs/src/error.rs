//! Error types for preference parsing.

use thiserror::Error;

/// Errors raised when outside input cannot be mapped onto preference values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// Theme value did not match any known selection.
    #[error("unknown theme '{value}'")]
    UnknownTheme {
        /// Raw value supplied by the caller.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::PrefsError;

    #[test]
    fn unknown_theme_message_includes_value() {
        let err = PrefsError::UnknownTheme {
            value: "sepia".to_string(),
        };
        assert_eq!(err.to_string(), "unknown theme 'sepia'");
    }
}
