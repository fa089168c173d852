use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown wallet referenced
    #[error("Account not found: {0}")]
    NotFound(String),

    /// Reward-bearing action attempted on an unverified account
    #[error("Account not verified: {0}")]
    NotVerified(String),

    /// Non-positive purchase amount
    #[error("Invalid purchase amount: {0}")]
    InvalidAmount(i64),

    /// Wallet re-verification under a different chat handle, or an
    /// attempt to rebind an already-set referrer
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Wallet uniqueness violated at creation
    #[error("Wallet already registered: {0}")]
    DuplicateWallet(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if error is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Get HTTP status code for the error (used by the transport layer)
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::NotVerified(_) => 403,
            AppError::InvalidAmount(_) => 400,
            AppError::Conflict(_) | AppError::DuplicateWallet(_) => 409,
            AppError::Config(_) | AppError::Serialization(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound("w".into()).status_code(), 404);
        assert_eq!(AppError::NotVerified("w".into()).status_code(), 403);
        assert_eq!(AppError::InvalidAmount(-5).status_code(), 400);
        assert_eq!(AppError::Conflict("handle".into()).status_code(), 409);
        assert_eq!(AppError::DuplicateWallet("w".into()).status_code(), 409);
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::NotFound("w".into()).is_not_found());
        assert!(!AppError::InvalidAmount(0).is_not_found());
    }
}
