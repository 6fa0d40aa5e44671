//! Error type shared by every backend call.

/// Why a backend call failed.
///
/// The variants hold strings rather than `reqwest::Error` so the type stays
/// `Clone + PartialEq` and test doubles can produce it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with HTTP {0}")]
    Status(u16),
    /// The body was not the JSON shape we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The backend answered with `status != "ok"`.
    #[error("{}", .0.as_deref().unwrap_or("request rejected"))]
    Rejected(Option<String>),
}

impl ApiError {
    /// Text for the user: the backend's own message when it sent one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
