//! Error types for the tasklist runtime

use thiserror::Error;

/// Errors raised while building a [`ControllerConfig`](crate::ControllerConfig)
///
/// Container mutations never fail; rejected or unmatched operations are
/// silent. Only configuration can be invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but is not valid unicode
    #[error("Environment variable {var} is not valid unicode")]
    NotUnicode {
        /// The offending variable
        var: &'static str,
    },

    /// The count label is empty or whitespace
    #[error("Count label cannot be empty")]
    EmptyCountLabel,
}
