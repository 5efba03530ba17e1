use std::env;

use chrono::Duration;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Signing algorithm name, e.g. `HS256`.
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
}

impl JwtConfig {
    pub fn new(
        secret: impl Into<String>,
        algorithm: impl Into<String>,
        access_token_expire_minutes: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            algorithm: algorithm.into(),
            access_token_expire_minutes,
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-for-development".to_string()),
            algorithm: env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
            access_token_expire_minutes: env::var("JWT_ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30), // 30 minutes
        }
    }

    /// Lifetime applied to tokens issued without an explicit TTL.
    ///
    /// `None` when the configured minutes do not fit in a [`Duration`].
    pub fn default_ttl(&self) -> Option<Duration> {
        Duration::try_minutes(self.access_token_expire_minutes)
    }
}
