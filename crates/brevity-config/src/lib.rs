//! # Brevity Config
//!
//! Configuration types for the Brevity API, loaded once at startup from
//! environment variables (optionally seeded from a `.env` file):
//!
//! - [`jwt`]: bearer token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//! - [`password`]: password hashing cost
//!
//! # Example
//!
//! ```ignore
//! use brevity_config::{CorsConfig, JwtConfig, PasswordConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let password_config = PasswordConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
pub use server::ServerConfig;
