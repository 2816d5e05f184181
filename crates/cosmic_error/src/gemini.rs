//! Gemini API error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment or configuration
    #[display("GEMINI_API_KEY is not set and no api_key is configured")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response (connection, TLS, timeout).
    /// The message never contains the request URL, which carries the key.
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Endpoint answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body, if any
        message: String,
    },
    /// Success response whose body is not a `generateContent` JSON document
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
    /// Response decoded but matched none of the known shapes
    #[display("Unrecognized response format: {}", _0)]
    UnrecognizedResponse(String),
    /// No endpoints configured
    #[display("No Gemini endpoints configured")]
    NoEndpoints,
    /// Every (prompt variant, endpoint) pair failed
    #[display("All endpoints failed after {} attempts. Last error: {}", attempts, last_error)]
    AllEndpointsFailed {
        /// Number of requests issued
        attempts: usize,
        /// Description of the final failure
        last_error: String,
    },
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use cosmic_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
