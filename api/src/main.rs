mod config;
mod constants;
mod domain;
mod models;
mod routes;
mod services;

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use services::feed::FeedService;
use services::providers::{self, PexelsProvider, PixabayProvider, VideoProvider};
use services::store::{PgVideoStore, VideoStore};

pub struct AppState {
    pub store: Arc<dyn VideoStore>,
    pub feed: FeedService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // Lazy so the feed still serves provider videos while the database is down
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_lazy(&config.database_url)?;

    if config.run_migrations {
        if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
            tracing::warn!(error = %e, "migrations not applied");
        }
    }

    let http = providers::http_client(config.provider_timeout)?;
    let provider_chain: Vec<Arc<dyn VideoProvider>> = vec![
        Arc::new(PexelsProvider::new(http.clone(), config.pexels.clone())),
        Arc::new(PixabayProvider::new(http, config.pixabay.clone())),
    ];
    for provider in &provider_chain {
        if !provider.enabled() {
            tracing::info!(provider = provider.name(), "no API key, provider disabled");
        }
    }

    let store: Arc<dyn VideoStore> = Arc::new(PgVideoStore::new(pool));
    let state = Arc::new(AppState {
        feed: FeedService::new(store.clone(), provider_chain, config.page_size),
        store,
    });

    let app = routes::build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
