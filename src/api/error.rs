use thiserror::Error;

use crate::models::{CalcFailure, FailureKind};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::NetworkError(error)
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::NetworkError(_) => FailureKind::Transport,
            ApiError::ServerError { .. } => FailureKind::Status,
            ApiError::InvalidResponse(_) => FailureKind::InvalidResponse,
            ApiError::Timeout => FailureKind::Timeout,
        }
    }
}

impl From<ApiError> for CalcFailure {
    fn from(error: ApiError) -> Self {
        CalcFailure {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_projection() {
        let failure = CalcFailure::from(ApiError::ServerError {
            status: 503,
            message: "down for maintenance".to_string(),
        });

        assert_eq!(failure.kind, FailureKind::Status);
        assert_eq!(failure.message, "Server error: 503 - down for maintenance");
    }

    #[test]
    fn test_invalid_response_projection() {
        let failure = CalcFailure::from(ApiError::InvalidResponse("expected value".to_string()));
        assert_eq!(failure.kind, FailureKind::InvalidResponse);
        assert!(failure.message.starts_with("Invalid response"));
    }
}
