use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure of the single startup read.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("response body is not a film list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of a best-effort write. Only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("remote answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("cannot build a write URL from {0}")]
    Base(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    Port(String),
    #[error("invalid endpoint URL {value:?}: {reason}")]
    Url { value: String, reason: String },
    #[error("write endpoint must be an http(s) URL, got {0:?}")]
    WriteEndpoint(String),
}
