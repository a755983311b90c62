use std::sync::Arc;

use crate::{
    models::news::NewsResponse,
    utils::{cache::Cache, config::Config, news_client::NewsProvider, search_store::SearchHistoryStore},
};

pub struct AppState {
    pub config: Config,
    pub news: Arc<dyn NewsProvider>,
    pub history: Arc<dyn SearchHistoryStore>,
    pub trending_cache: Cache<NewsResponse>,
}

impl AppState {
    pub fn new(
        config: Config,
        news: Arc<dyn NewsProvider>,
        history: Arc<dyn SearchHistoryStore>,
    ) -> Self {
        let trending_cache = Cache::new(config.trending_ttl_secs);
        AppState {
            config,
            news,
            history,
            trending_cache,
        }
    }
}
