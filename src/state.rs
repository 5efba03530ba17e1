use std::sync::Arc;

use brevity_auth::{TokenAuthenticator, TokenError};
use brevity_config::{CorsConfig, JwtConfig, PasswordConfig};

use crate::store::{InMemoryUserStore, UserStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<TokenAuthenticator>,
    pub users: Arc<dyn UserStore>,
    pub password_config: PasswordConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        authenticator: TokenAuthenticator,
        users: Arc<dyn UserStore>,
        password_config: PasswordConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
            users,
            password_config,
            cors_config,
        }
    }
}

/// Builds the process-wide state from environment configuration.
///
/// Fails when `JWT_ALGORITHM` names an algorithm the authenticator cannot use,
/// or `JWT_ACCESS_TOKEN_EXPIRE_MINUTES` is not a usable positive lifetime.
pub fn init_app_state() -> Result<AppState, TokenError> {
    let jwt_config = JwtConfig::from_env();

    Ok(AppState::new(
        TokenAuthenticator::new(&jwt_config)?,
        Arc::new(InMemoryUserStore::new()),
        PasswordConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
