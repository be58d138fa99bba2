use thiserror::Error;

/// Top-level error type for the `stackkit-api` crate.
///
/// Splits into three families: caller mistakes caught before a request is
/// issued (`InvalidArgument`), transport-level failures, and payload-level
/// failures (`Api`, `Decode`). Exactly one of these is ever produced per
/// issued request.
#[derive(Debug, Error)]
pub enum Error {
    // ── Preconditions ───────────────────────────────────────────────
    /// Malformed caller input, detected before any network work begins.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Structured error envelope from the API (`error_id` / `error_name` /
    /// `error_message`), or a bare non-success HTTP status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        error_id: Option<u32>,
        error_name: Option<String>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Payload received but does not match the expected schema (missing
    /// field, out-of-range rank or site state). Never silently defaulted.
    /// Carries the raw body for debugging.
    #[error("Decode error: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// Build an `InvalidArgument` error from anything displayable.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns `true` if this error was raised before any request was issued.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a transient error worth re-issuing.
    ///
    /// The client never retries on its own; callers decide.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 503,
            _ => false,
        }
    }

    /// Extract the API error id, if the server sent one.
    pub fn api_error_id(&self) -> Option<u32> {
        match self {
            Self::Api { error_id, .. } => *error_id,
            _ => None,
        }
    }
}
