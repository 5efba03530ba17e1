//! Request extractors for bearer authentication.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::BearerToken`] pulls the raw token out of the header
//! 3. [`auth::AuthUser`] verifies it and exposes the claims
//! 4. Handler executes if verification succeeded
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_profile(auth_user: AuthUser) -> Result<impl IntoResponse, AppError> {
//!     let user_id = auth_user.user_id()?;
//!     // ...
//! }
//! ```

pub mod auth;
