//! GSI Relay - game-state push relay.

use gsi_relay::{server, RelayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("gsi_relay=info,tower_http=info")
            }),
        )
        .init();

    let config = RelayConfig::from_env()?;

    println!("🌐 GSI relay on http://{}", config.addr());
    println!("   • GET  /     - Viewer page");
    println!("   • POST /gsi  - Game-state ingest");
    println!("   • WS   /ws   - Live updates");

    server::run(config).await?;
    Ok(())
}
