use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use parley_server::{AppState, Relay, SignalingService, router};

#[derive(Parser)]
#[command(name = "parley", about = "Room-based chat and call-signaling relay")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 4001)]
    port: u16,

    /// Log filter directive; RUST_LOG takes precedence when set.
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .init();

    let signaling = SignalingService::new();
    let relay = Arc::new(Relay::new(Arc::new(signaling.clone())));
    let state = Arc::new(AppState { signaling, relay });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Relay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
