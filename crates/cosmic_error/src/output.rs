//! Errors rendering results for the command line.

/// A story or roster could not be rendered in the requested format.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Failed to render {} output: {} at line {} in {}", format, message, line, file)]
pub struct OutputError {
    /// Output format name, e.g. "json"
    pub format: &'static str,
    /// Serializer message
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl OutputError {
    /// Create an OutputError at the caller's location.
    ///
    /// ```
    /// use cosmic_error::OutputError;
    ///
    /// let err = OutputError::new("json", "key must be a string");
    /// assert!(err.to_string().starts_with("Failed to render json output"));
    /// ```
    #[track_caller]
    pub fn new(format: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            format,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
