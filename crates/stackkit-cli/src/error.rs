//! CLI error types with miette diagnostics.
//!
//! Maps `stackkit_api::Error` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;
use url::Url;

/// Exit codes for the `stack` binary.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API at {url}")]
    #[diagnostic(
        code(stack::connection_failed),
        help("Check your network connection and the --api-url value.")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: stackkit_api::Error,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(stack::not_found), help("Run: stack {list_command}"))]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(stack::validation))]
    Validation { field: String, reason: String },

    // ── Passthrough ──────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(stack::api))]
    Api(stackkit_api::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map an API error, attaching the base URL to connection failures.
    pub fn api(err: stackkit_api::Error, base_url: &Url) -> Self {
        match err {
            stackkit_api::Error::InvalidArgument { message } => Self::Validation {
                field: "argument".into(),
                reason: message,
            },
            stackkit_api::Error::Transport(e) if e.is_connect() || e.is_timeout() => {
                Self::ConnectionFailed {
                    url: base_url.to_string(),
                    source: stackkit_api::Error::Transport(e),
                }
            }
            other => Self::Api(other),
        }
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Api(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }
}
