//! Configuration loading and validation errors.

/// Ways a configuration can fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to read {}: {}", source_name, message)]
    Load {
        /// File path or layer name
        source_name: String,
        /// Underlying loader message
        message: String,
    },
    /// Merged layers did not match the expected schema
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// The environment override could not be applied
    #[display("Failed to apply {} override: {}", variable, message)]
    EnvOverride {
        /// Environment variable name
        variable: &'static str,
        /// Underlying loader message
        message: String,
    },
    /// Values parsed but cannot drive a request
    #[display("Invalid configuration: {}", _0)]
    Invalid(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use cosmic_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Invalid("endpoint list is empty".into()));
/// assert!(err.to_string().contains("endpoint list is empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::Invalid`].
    #[track_caller]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid(message.into()))
    }
}
