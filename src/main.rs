use std::error::Error;
use std::sync::Arc;

use thematic_proxy::config::Config;
use thematic_proxy::scryfall::ScryfallClient;
use thematic_proxy::server::{self, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thematic_proxy=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let lookup = ScryfallClient::new(config.scryfall_url.clone())?;
    tracing::info!("Resolving cards via {}", lookup.url());

    let app = server::router(Arc::new(AppState::new(lookup)));

    let bind_addr = config.bind_addr();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
