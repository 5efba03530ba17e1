use anyhow::anyhow;
use brevity_config::PasswordConfig;
use brevity_core::{AppError, hash_password_async, verify_password_async};
use tracing::{info, instrument};

use crate::modules::users::model::{ChangePasswordRequest, ProfileChanges, UpdateProfileRequest, User};
use crate::store::UserStore;

pub struct UserService;

impl UserService {
    /// Loads the user a verified token refers to.
    ///
    /// A token whose subject no longer exists is treated like any other bad credential.
    #[instrument(skip(store))]
    pub async fn current_user(store: &dyn UserStore, user_id: i64) -> Result<User, AppError> {
        store
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::invalid_credentials)
    }

    #[instrument(skip(store))]
    pub async fn update_profile(
        store: &dyn UserStore,
        user_id: i64,
        dto: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        Self::current_user(store, user_id).await?;

        let user = store
            .update_profile(
                user_id,
                ProfileChanges {
                    full_name: dto.full_name,
                    email: dto.email,
                },
            )
            .await?;

        info!(user_id, "Profile updated");
        Ok(user)
    }

    #[instrument(skip(store, password_config))]
    pub async fn change_password(
        store: &dyn UserStore,
        password_config: &PasswordConfig,
        user_id: i64,
        dto: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let user = Self::current_user(store, user_id).await?;

        if !verify_password_async(dto.current_password, user.password_hash).await? {
            return Err(AppError::bad_request(anyhow!("Incorrect current password")));
        }

        let password_hash = hash_password_async(dto.new_password, password_config.bcrypt_cost).await?;
        store.update_password(user_id, password_hash).await?;

        info!(user_id, "Password changed");
        Ok(())
    }
}
