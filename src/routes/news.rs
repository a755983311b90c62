use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{
    handlers::news::{clear_cache, search_history, search_news, trending},
    utils::state::AppState,
};

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", get(search_news))
        .route("/history", get(search_history))
        .route("/trending", get(trending))
        .route("/cache", delete(clear_cache))
}
