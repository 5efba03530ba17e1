pub mod audio;
pub mod auth;
pub mod download;
pub mod transcript;
pub mod users;
