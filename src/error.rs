//! Error types for the activity client
//!
//! Every failure surfaces as a single discriminated [`ServiceError`] with a
//! four-token taxonomy:
//! - `transport`: the call never produced a response (connect, DNS, timeout)
//! - `http`: a response arrived with a failure status
//! - `decode`: a success response carried a malformed body
//! - `cancelled`: the caller withdrew the request mid-flight

use serde::Deserialize;

/// Error raised by any client operation
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Network failure before any response was received
    #[error("transport failure: {source}")]
    Transport {
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Backend responded with a failure status
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Backend-supplied `detail` when present, otherwise a generic message
        message: String,
    },

    /// Success status but the body was not the expected JSON shape
    #[error("malformed response body: {source}")]
    Decode {
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The caller's cancellation token fired before the response arrived
    #[error("request cancelled")]
    Cancelled,
}

/// Classification token for a [`ServiceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network failure
    Transport,
    /// Failure status from the backend
    Http,
    /// Malformed response body
    Decode,
    /// Caller-initiated cancellation
    Cancelled,
}

/// Failure-status error body; the backend reports problems as `{"detail": ...}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl ServiceError {
    /// Taxonomy token for this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Http { .. } => ErrorKind::Http,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// HTTP status code, for `http` errors only
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether re-invoking the same operation could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Decode { .. } | Self::Cancelled => false,
        }
    }

    pub(crate) fn transport(source: reqwest::Error) -> Self {
        Self::Transport { source }
    }

    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    /// Build an `http` error from a failure status and raw response body.
    ///
    /// Prefers the backend's `detail` field; any unreadable or detail-less
    /// body falls back to the generic `HTTP error! status: <code>` message.
    pub(crate) fn from_failure_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        Self::Http { status, message }
    }
}
