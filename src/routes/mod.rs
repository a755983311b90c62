pub mod news;
use axum::{routing::get, Router};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::{error::Error, path::PathBuf, str::FromStr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub use news::news_routes;

use crate::{
    handlers::health::health_check,
    utils::{
        config::Config, news_client::NewsApiClient, search_store::PgSearchHistoryStore,
        state::AppState,
    },
};

pub fn init_tracing(log_level: &str) {
    let level = match log_level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    info!("Initializing application...");

    let connect_options = PgConnectOptions::from_str(&config.db_url)?;
    let db_pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .idle_timeout(Some(std::time::Duration::from_secs(60)))
        .connect_with(connect_options)
        .await?;
    info!("Database connection pool created successfully");

    sqlx::migrate!("./migrations").run(&db_pool).await?;
    info!("Database migrations applied");

    if config.news_api_key.is_none() {
        warn!("NEWS_API_KEY not set; news provider requests will be rejected upstream");
    }
    let news = NewsApiClient::new(
        reqwest::Client::new(),
        config.news_api_url.clone(),
        config.news_api_key.clone(),
    );
    info!("External clients initialized successfully");

    let state = Arc::new(AppState::new(
        config,
        Arc::new(news),
        Arc::new(PgSearchHistoryStore::new(db_pool)),
    ));
    let app = build_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

/// Assembles every route on top of an already built state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .route("/health", get(health_check))
        .nest("/api/v1", news_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
