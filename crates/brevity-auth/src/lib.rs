//! # Brevity Auth
//!
//! Bearer token authentication for the Brevity API.
//!
//! This crate provides:
//!
//! - [`claims`]: the [`Claims`] set embedded in tokens
//! - [`clock`]: time sources used for expiry ([`SystemClock`], [`ManualClock`])
//! - [`error`]: [`TokenError`] and its mapping onto HTTP errors
//! - [`jwt`]: [`TokenAuthenticator`] with `issue`, `verify`, `refresh` and `inspect`
//!
//! Tokens are stateless. Nothing is recorded when a token is issued, so a
//! token stays valid until its `exp` passes, and refreshing produces a new
//! token rather than extending the old one.
//!
//! # Example
//!
//! ```ignore
//! use brevity_auth::{Claims, TokenAuthenticator, TokenError};
//! use brevity_config::JwtConfig;
//!
//! let authenticator = TokenAuthenticator::new(&JwtConfig::from_env())?;
//! let token = authenticator.issue(Claims::new().with_subject("42"), None)?;
//!
//! match authenticator.verify(&token) {
//!     Ok(claims) => println!("User ID: {:?}", claims.sub),
//!     Err(TokenError::Expired) => println!("log in again"),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```

pub mod claims;
pub mod clock;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TokenError;
pub use jwt::{TokenAuthenticator, inspect};
