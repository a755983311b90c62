#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use news_aggregator::{
    models::{
        error::Error,
        history::SearchHistory,
        news::{NewsArticle, NewsResponse},
    },
    routes::build_router,
    utils::{
        config::Config, news_client::NewsProvider, search_store::SearchHistoryStore,
        state::AppState,
    },
};

pub fn test_config() -> Config {
    Config {
        db_url: "postgres://unused".to_string(),
        news_api_key: None,
        news_api_url: "http://127.0.0.1:9/unused".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        trending_ttl_secs: 300,
        db_max_connections: 1,
        log_level: "info".to_string(),
    }
}

pub fn sample_news() -> NewsResponse {
    NewsResponse {
        articles: vec![
            NewsArticle {
                title: "A".to_string(),
                description: None,
                url: "u1".to_string(),
                published_at: None,
                source: Some("S".to_string()),
            },
            NewsArticle {
                title: "B".to_string(),
                description: None,
                url: "u2".to_string(),
                published_at: None,
                source: None,
            },
        ],
        total_results: 2,
        status: "ok".to_string(),
    }
}

/// Provider double that records every topic it is asked for.
pub struct MockNewsProvider {
    pub topics: Mutex<Vec<String>>,
    pub failure: Mutex<Option<String>>,
    pub delay: Duration,
    responses: AtomicUsize,
}

impl MockNewsProvider {
    pub fn new() -> Self {
        MockNewsProvider {
            topics: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            delay: Duration::ZERO,
            responses: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        MockNewsProvider {
            delay,
            ..Self::new()
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn fetches(&self) -> usize {
        self.topics.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsProvider for MockNewsProvider {
    async fn fetch_news(&self, topic: &str) -> Result<NewsResponse, Error> {
        self.topics.lock().unwrap().push(topic.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let failure = self.failure.lock().unwrap().clone();
        if let Some(message) = failure {
            return Err(Error::Upstream(message));
        }

        // Each response carries a distinct total so tests can tell fetches apart.
        let mut news = sample_news();
        news.total_results += self.responses.fetch_add(1, Ordering::SeqCst) as u64 * 100;
        Ok(news)
    }
}

/// History double ordering records the same way the SQL query does.
pub struct MockHistoryStore {
    pub records: Mutex<Vec<SearchHistory>>,
    pub unavailable: AtomicBool,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        MockHistoryStore {
            records: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn topics(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.topic.clone())
            .collect()
    }
}

#[async_trait]
impl SearchHistoryStore for MockHistoryStore {
    async fn save_search(&self, topic: &str) -> Result<SearchHistory, Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Persistence(sqlx::Error::PoolTimedOut));
        }
        let mut records = self.records.lock().unwrap();
        let record = SearchHistory {
            id: records.len() as i32 + 1,
            topic: topic.to_string(),
            searched_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn get_last_searches(&self, limit: i64) -> Result<Vec<SearchHistory>, Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Persistence(sqlx::Error::PoolTimedOut));
        }
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.searched_at.cmp(&a.searched_at).then(b.id.cmp(&a.id)));
        records.truncate(limit as usize);
        Ok(records)
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub news: Arc<MockNewsProvider>,
    pub history: Arc<MockHistoryStore>,
    pub state: Arc<AppState>,
}

pub fn build_test_app(news: MockNewsProvider) -> TestApp {
    build_test_app_with_config(test_config(), news)
}

pub fn build_test_app_with_config(config: Config, news: MockNewsProvider) -> TestApp {
    let news = Arc::new(news);
    let history = Arc::new(MockHistoryStore::new());
    let state = Arc::new(AppState::new(config, news.clone(), history.clone()));
    let server = TestServer::new(build_router(state.clone())).unwrap();

    TestApp {
        server,
        news,
        history,
        state,
    }
}
