use contracts::system::auth::LogoutResponse;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("failed to send request: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("invalid request payload: {0}")]
    Payload(String),

    #[error("logout failed: {}", .0.message.as_deref().unwrap_or("unknown reason"))]
    LogoutRejected(LogoutResponse),

    #[error("login failed: {0}")]
    LoginRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_rejected_message() {
        let err = AppError::LogoutRejected(LogoutResponse {
            success: false,
            message: Some("session expired".to_string()),
            ..Default::default()
        });
        assert_eq!(err.to_string(), "logout failed: session expired");

        let err = AppError::LogoutRejected(LogoutResponse::default());
        assert_eq!(err.to_string(), "logout failed: unknown reason");
    }
}
