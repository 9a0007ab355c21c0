//! Application-layer errors.

use std::fmt;

/// Backend endpoints polled by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Status,
    Logs,
}

impl Endpoint {
    /// Short name used in log records and user-facing messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Logs => "logs",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A poll of the backend API failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("failed to fetch {endpoint}: HTTP {code}")]
    Status { endpoint: Endpoint, code: u16 },

    /// The request never produced a response.
    #[error("failed to fetch {endpoint}: {message}")]
    Network { endpoint: Endpoint, message: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode {endpoint} response: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

impl FetchError {
    /// Which endpoint failed.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Status { endpoint, .. }
            | Self::Network { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}

/// Applying a patch to the page failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The selector was rejected by the document.
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    /// Any other DOM operation failure.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Failure of one dashboard refresh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    View(#[from] ViewError),
}
