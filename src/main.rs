use anyhow::Context;
use brevity::cli::{Cli, Commands, run_token_command};
use brevity::logging::init_tracing;
use brevity::router::init_router;
use brevity::state::init_app_state;
use brevity_config::{JwtConfig, ServerConfig};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Token(command)) => {
            let output = run_token_command(command, &JwtConfig::from_env())?;
            println!("{}", output);
            Ok(())
        }
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    init_tracing();

    let mut server_config = ServerConfig::from_env();
    if let Some(host) = host {
        server_config.host = host;
    }
    if let Some(port) = port {
        server_config.port = port;
    }

    let state = init_app_state().context("invalid JWT configuration")?;
    info!(
        algorithm = ?state.authenticator.algorithm(),
        ttl_minutes = state.authenticator.default_ttl().num_minutes(),
        "Token authenticator ready"
    );

    let app = init_router(state);

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!("Server running on http://{}", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}
