// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Servicedeck.

use thiserror::Error;

/// Top-level error type for all Servicedeck operations.
#[derive(Debug, Error)]
pub enum ServiceDeckError {
    // -- Fetch failures --
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not a service category list: {reason}")]
    Decode { url: String, reason: String },

    // -- Configuration --
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceDeckError {
    /// Whether this error belongs to the fetch-failure family.
    ///
    /// Transport faults, non-2xx statuses and undecodable bodies are all
    /// handled the same way by the UI: logged, then ignored.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ServiceDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_are_grouped() {
        let status = ServiceDeckError::Status {
            url: "http://localhost/api/services".into(),
            status: 503,
        };
        let decode = ServiceDeckError::Decode {
            url: "http://localhost/api/services".into(),
            reason: "expected value".into(),
        };
        assert!(status.is_fetch_failure());
        assert!(decode.is_fetch_failure());
        assert!(!ServiceDeckError::InvalidBaseUrl("nope".into()).is_fetch_failure());
    }

    #[test]
    fn status_message_names_code() {
        let err = ServiceDeckError::Status {
            url: "http://localhost/api/services".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost/api/services responded with HTTP 404"
        );
    }
}
