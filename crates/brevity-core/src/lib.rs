//! # Brevity Core
//!
//! Core types shared by every Brevity crate:
//!
//! - [`errors`]: [`AppError`], the HTTP-facing error type
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use brevity_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secure_password", 12)?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! let error = AppError::invalid_credentials();
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, INVALID_CREDENTIALS};
pub use password::{hash_password, hash_password_async, verify_password, verify_password_async};
