//! Command-line interface for the `brevity` binary.
//!
//! With no subcommand the API server starts. The `token` commands work with
//! access tokens offline, using the same `JWT_*` settings as the server.

use anyhow::Context;
use brevity_auth::{Claims, TokenAuthenticator, inspect};
use brevity_config::JwtConfig;
use chrono::Duration;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brevity")]
#[command(about = "Brevity AI API server and token tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Interface to bind; overrides HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to bind; overrides PORT
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Issue, verify or decode access tokens
    #[command(subcommand)]
    Token(TokenCommand),
}

#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Sign a new access token
    Issue {
        /// Subject claim (user id)
        #[arg(long)]
        sub: String,

        #[arg(short = 'u', long)]
        username: String,

        #[arg(short = 'e', long)]
        email: String,

        #[arg(long)]
        full_name: Option<String>,

        /// Lifetime in minutes; defaults to JWT_ACCESS_TOKEN_EXPIRE_MINUTES
        #[arg(long)]
        ttl_minutes: Option<i64>,
    },
    /// Check signature and expiry, then print the claims
    Verify { token: String },
    /// Print the claims without checking signature or expiry
    Inspect { token: String },
}

/// Runs a token subcommand and returns what should be printed.
pub fn run_token_command(command: TokenCommand, config: &JwtConfig) -> anyhow::Result<String> {
    match command {
        TokenCommand::Issue {
            sub,
            username,
            email,
            full_name,
            ttl_minutes,
        } => {
            let authenticator = TokenAuthenticator::new(config)?;
            let claims = Claims::new()
                .with_subject(sub)
                .with_username(username)
                .with_email(email)
                .with_full_name(full_name);

            let ttl = ttl_minutes
                .map(|minutes| {
                    Duration::try_minutes(minutes)
                        .with_context(|| format!("--ttl-minutes {minutes} is out of range"))
                })
                .transpose()?;

            let token = authenticator.issue(claims, ttl)?;
            Ok(token)
        }
        TokenCommand::Verify { token } => {
            let authenticator = TokenAuthenticator::new(config)?;
            let claims = authenticator
                .verify(&token)
                .context("token rejected")?;
            render_claims(&claims)
        }
        TokenCommand::Inspect { token } => {
            let claims = inspect(&token).context("token could not be decoded")?;
            render_claims(&claims)
        }
    }
}

fn render_claims(claims: &Claims) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(claims)?)
}
