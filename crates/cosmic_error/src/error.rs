//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, OutputError, StoryError};

/// Every error condition a Cosmic Tales operation can report.
///
/// # Examples
///
/// ```
/// use cosmic_error::{CosmicError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::Transport("connection refused".into()));
/// let err: CosmicError = gemini_err.into();
/// assert!(format!("{}", err).contains("Request failed: connection refused"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CosmicErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Story parsing or session error
    #[from(StoryError)]
    Story(StoryError),
    /// Command-line rendering error
    #[from(OutputError)]
    Output(OutputError),
}

/// Cosmic Tales error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cosmic_error::{ConfigError, CosmicResult};
///
/// fn might_fail() -> CosmicResult<()> {
///     Err(ConfigError::invalid("no endpoints"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cosmic Error: {}", _0)]
pub struct CosmicError(Box<CosmicErrorKind>);

impl CosmicError {
    /// Create a new error from a kind.
    pub fn new(kind: CosmicErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CosmicErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CosmicErrorKind
impl<T> From<T> for CosmicError
where
    T: Into<CosmicErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cosmic Tales operations.
pub type CosmicResult<T> = std::result::Result<T, CosmicError>;
