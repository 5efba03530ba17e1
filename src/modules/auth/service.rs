use anyhow::anyhow;
use brevity_auth::TokenAuthenticator;
use brevity_config::PasswordConfig;
use brevity_core::{AppError, hash_password_async, verify_password_async};
use tracing::{info, instrument, warn};

use crate::modules::users::model::{NewUser, User};
use crate::store::UserStore;

use super::model::{LoginRequest, RegisterRequest, TokenResponse};

const INCORRECT_LOGIN: &str = "Incorrect username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store, authenticator, password_config))]
    pub async fn register_user(
        store: &dyn UserStore,
        authenticator: &TokenAuthenticator,
        password_config: &PasswordConfig,
        dto: RegisterRequest,
    ) -> Result<TokenResponse, AppError> {
        if store.find_by_username(&dto.username).await?.is_some() {
            return Err(AppError::bad_request(anyhow!("Username already registered")));
        }
        if store.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::bad_request(anyhow!("Email already registered")));
        }

        let password_hash = hash_password_async(dto.password, password_config.bcrypt_cost).await?;

        // The store re-checks uniqueness under its write lock.
        let user = store
            .create(NewUser {
                username: dto.username,
                email: dto.email,
                password_hash,
                full_name: dto.full_name,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Self::issue_for(authenticator, user)
    }

    #[instrument(skip(store, authenticator))]
    pub async fn login_user(
        store: &dyn UserStore,
        authenticator: &TokenAuthenticator,
        dto: LoginRequest,
    ) -> Result<TokenResponse, AppError> {
        let user = match store.find_by_username(&dto.username).await? {
            Some(user) => Some(user),
            None => store.find_by_email(&dto.username).await?,
        };

        let Some(user) = user else {
            warn!(username = %dto.username, "Login failed: unknown user");
            return Err(AppError::unauthorized(INCORRECT_LOGIN));
        };

        if !verify_password_async(dto.password, user.password_hash.clone()).await? {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INCORRECT_LOGIN));
        }

        info!(user_id = user.id, "User logged in");
        Self::issue_for(authenticator, user)
    }

    #[instrument(skip_all)]
    pub fn refresh_token(
        authenticator: &TokenAuthenticator,
        token: &str,
    ) -> Result<TokenResponse, AppError> {
        let access_token = authenticator.refresh(token)?;
        Ok(TokenResponse::bearer(access_token))
    }

    fn issue_for(authenticator: &TokenAuthenticator, user: User) -> Result<TokenResponse, AppError> {
        let access_token = authenticator.issue(user.claims(), None)?;
        Ok(TokenResponse::bearer(access_token).with_user(user.into()))
    }
}
