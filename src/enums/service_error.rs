use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Rate Limit Error: {0}")]
    RateLimitError(String),
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    /// Maps a non-success HTTP status and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationError(body),
            429 => Self::RateLimitError(body),
            400 | 422 => Self::InvalidRequest(body),
            _ => Self::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::SerializationError(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(matches!(ServiceError::from_status(401, "no".into()), ServiceError::AuthenticationError(_)));
        assert!(matches!(ServiceError::from_status(429, "slow".into()), ServiceError::RateLimitError(_)));
        assert!(matches!(ServiceError::from_status(422, "bad".into()), ServiceError::InvalidRequest(_)));
        assert_eq!(
            ServiceError::from_status(500, "boom".into()).to_string(),
            "API Error: HTTP 500: boom"
        );
    }
}
