use brevity_core::AppError;
use thiserror::Error;

/// Failure modes of token issuance and verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed or tampered token, or one signed with another key or algorithm.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Signature checks out but `exp` has elapsed.
    #[error("token has expired")]
    Expired,

    #[error("failed to encode claims: {0}")]
    Encoding(String),

    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configured default lifetime is not a positive number of minutes that fits in a `Duration`.
    #[error("token lifetime must be a positive number of minutes, got {0}")]
    InvalidLifetime(i64),
}

impl TokenError {
    /// Whether the error stems from the presented credential rather than from server state.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, TokenError::InvalidSignature | TokenError::Expired)
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        if err.is_credential_error() {
            tracing::debug!(reason = %err, "Rejected bearer token");
            AppError::invalid_credentials()
        } else {
            AppError::internal(err)
        }
    }
}
