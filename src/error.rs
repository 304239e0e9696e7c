use serde::{Deserialize, Serialize};

/// Unified error type for all DNS-01 solver operations.
///
/// Each variant includes a `provider` field identifying which solver produced
/// the error, plus variant-specific context. All variants are serializable
/// for structured error reporting.
///
/// # Error classes
///
/// Variants fall into two classes, which callers may log differently:
///
/// - **Transport errors** — the request never produced a well-formed API
///   response: [`NetworkError`](Self::NetworkError),
///   [`Timeout`](Self::Timeout), [`HttpError`](Self::HttpError),
///   [`ParseError`](Self::ParseError).
/// - **API failures** — HTTP succeeded but the registrar's result envelope
///   did not report success: [`ApiFailure`](Self::ApiFailure).
///
/// Use [`is_transport`](Self::is_transport) to distinguish them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum SolverError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    NetworkError {
        /// Solver that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Solver that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx HTTP status.
    HttpError {
        /// Solver that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if one could be read.
        body: String,
    },

    /// Failed to parse the API's response body as JSON.
    ParseError {
        /// Solver that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Solver that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// A well-formed HTTP response whose result envelope indicates failure,
    /// i.e. a missing or non-`"success"` `result` field.
    ApiFailure {
        /// Solver that produced the error.
        provider: String,
        /// Value of the `result` field, or `None` when it was absent.
        result: Option<String>,
        /// Machine-readable error code from the API, if any.
        error_code: Option<String>,
        /// Human-readable error text from the API, if any.
        error_text: Option<String>,
        /// Raw response body, kept for diagnostics.
        raw_response: String,
    },
}

impl SolverError {
    /// Whether the error occurred at the transport layer, as opposed to a
    /// well-formed API response reporting failure.
    ///
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(
            self,
            Self::ApiFailure { .. } | Self::SerializationError { .. }
        )
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpError {
                provider, status, ..
            } => {
                write!(f, "[{provider}] HTTP error: status {status}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::ApiFailure {
                provider,
                result,
                error_text,
                ..
            } => match (result, error_text) {
                (Some(result), Some(text)) => {
                    write!(f, "[{provider}] API returned '{result}': {text}")
                }
                (Some(result), None) => {
                    write!(f, "[{provider}] API returned '{result}'")
                }
                (None, _) => {
                    write!(f, "[{provider}] API response has no 'result' field")
                }
            },
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenience type alias for `Result<T, SolverError>`.
pub type Result<T> = std::result::Result<T, SolverError>;
