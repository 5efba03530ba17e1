//! User persistence.
//!
//! Handlers talk to users through the [`UserStore`] trait; the server wires in
//! [`InMemoryUserStore`]. Token code never touches the store: credentials are
//! checked here first, and only then is a token issued.

pub mod memory;

use std::fmt::Debug;

use anyhow::anyhow;
use async_trait::async_trait;
use brevity_core::AppError;
use thiserror::Error;

use crate::modules::users::model::{NewUser, ProfileChanges, User};

pub use memory::InMemoryUserStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} already registered")]
    Conflict(&'static str),

    #[error("user {0} not found")]
    NotFound(i64),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => AppError::bad_request(anyhow!(err.to_string())),
            StoreError::NotFound(_) => AppError::not_found(err),
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync + Debug {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Emails compare case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::Conflict`] when the username or email is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn update_profile(&self, id: i64, changes: ProfileChanges) -> Result<User, StoreError>;

    async fn update_password(&self, id: i64, password_hash: String) -> Result<User, StoreError>;
}
