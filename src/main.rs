use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use club_portal::config::AppConfig;
use club_portal::database::InMemoryActivityRepository;
use club_portal::web::{build_router, AppState};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("club_portal=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    // 1. Logging
    init_logging();
    info!(build_id = env!("CLUB_PORTAL_BUILD_ID"), "starting club portal");

    // 2. Config + seeded directory
    let config = AppConfig::from_env()?;
    let repo = Arc::new(InMemoryActivityRepository::seeded());
    let app = build_router(AppState::new(repo), &config.static_dir);

    // 3. Bind, falling back to the next port once
    let addr = config.listen_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}; trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("front-end at http://{}/static/index.html", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
