use std::sync::Arc;

use crate::{
    models::{
        error::Error,
        history::SearchHistory,
        news::{NewsResponse, SearchQuery},
    },
    utils::{cache::TRENDING_KEY, search_store::HISTORY_LIMIT, state::AppState},
};
use axum::{
    extract::{Query, State},
    Json,
};
use http::StatusCode;
use tracing::info;

/// Records the search before asking the provider, so a search that fails
/// upstream still shows up in history.
pub async fn search_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<NewsResponse>, Error> {
    state.history.save_search(&params.topic).await?;
    let news = state.news.fetch_news(&params.topic).await?;

    info!(topic = %params.topic, articles = news.articles.len(), "Search served");
    Ok(Json(news))
}

pub async fn search_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchHistory>>, Error> {
    let history = state.history.get_last_searches(HISTORY_LIMIT).await?;
    Ok(Json(history))
}

pub async fn trending(State(state): State<Arc<AppState>>) -> Result<Json<NewsResponse>, Error> {
    let news = state
        .trending_cache
        .get_or_try_insert_with(TRENDING_KEY, || state.news.fetch_news(TRENDING_KEY))
        .await?;
    Ok(Json(news))
}

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> StatusCode {
    state.trending_cache.clear_cache();
    info!("Trending cache cleared");
    StatusCode::NO_CONTENT
}
