use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::models::{
    error::Error,
    news::{NewsArticle, NewsResponse, ProviderResponse},
};

pub const PAGE_SIZE: u32 = 20;
const SORT_BY: &str = "publishedAt";

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_news(&self, topic: &str) -> Result<NewsResponse, Error>;
}

/// Client for the newsapi.org `everything` endpoint.
#[derive(Clone)]
pub struct NewsApiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(http_client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        NewsApiClient {
            http_client,
            base_url: base_url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch_news(&self, topic: &str) -> Result<NewsResponse, Error> {
        let page_size = PAGE_SIZE.to_string();
        let mut params = vec![("q", topic), ("pageSize", page_size.as_str()), ("sortBy", SORT_BY)];
        if let Some(key) = &self.api_key {
            params.push(("apiKey", key.as_str()));
        }

        let res = self
            .http_client
            .get(&self.base_url)
            .header("User-Agent", "NewsAggregator/1.0")
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("news provider unreachable: {e}")))?;

        // Error payloads arrive with 4xx/5xx statuses, so the body is read either way.
        let http_status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| Error::Upstream(format!("failed to read news provider response: {e}")))?;
        debug!(%http_status, topic, "News provider responded");

        parse_response(&body)
    }
}

pub fn parse_response(body: &str) -> Result<NewsResponse, Error> {
    let payload: ProviderResponse = serde_json::from_str(body)
        .map_err(|e| Error::Upstream(format!("invalid response from news provider: {e}")))?;

    match payload.status.as_deref() {
        Some("ok") => {}
        _ => {
            return Err(Error::Upstream(
                payload.message.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }

    Ok(NewsResponse {
        articles: payload
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(NewsArticle::from)
            .collect(),
        total_results: payload.total_results.unwrap_or(0),
        status: "ok".to_string(),
    })
}
