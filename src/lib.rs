//! # Brevity AI API
//!
//! Backend for turning YouTube videos into concise written and spoken content.
//! The service authenticates users with signed, time-limited bearer tokens
//! and exposes the transcript, audio and download endpoints behind them.
//!
//! ## Layout
//!
//! ```text
//! crates/
//! ├── brevity-core/     # AppError and password hashing
//! ├── brevity-config/   # Environment-driven configuration
//! └── brevity-auth/     # Claims, clocks and the TokenAuthenticator
//! src/
//! ├── cli/              # `serve` and `token` subcommands
//! ├── middleware/       # Bearer-token extractors
//! ├── modules/          # Feature modules (auth, users, transcript, audio, download)
//! └── store/            # User persistence
//! ```
//!
//! Each feature module follows the same shape: `controller.rs` for handlers,
//! `model.rs` for DTOs, `router.rs` for the axum router and, where there is
//! real logic, `service.rs`.
//!
//! ## Authentication
//!
//! `POST /api/auth/register` and `POST /api/auth/login` return an access token
//! signed with `JWT_SECRET`. Clients send it as `Authorization: Bearer <token>`
//! and may exchange a still-valid token for a fresh one at
//! `POST /api/auth/refresh`. Every credential failure answers 401 with the
//! same body and a `WWW-Authenticate: Bearer` challenge.
//!
//! ## API Documentation
//!
//! - Scalar: `http://localhost:8000/scalar`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

pub mod cli;
pub mod docs;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;

pub use brevity_auth;
pub use brevity_config;
pub use brevity_core;
