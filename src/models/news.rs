use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub published_at: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub articles: Vec<NewsArticle>,
    pub total_results: u64,
    pub status: String,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub topic: String,
}

/// Payload returned by the news provider's `everything` endpoint.
///
/// Every field is optional: error payloads only carry `status`, `code` and
/// `message`, and articles routinely come back with nulls.
#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
    pub articles: Option<Vec<ProviderArticle>>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub source: Option<ProviderSource>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderSource {
    pub name: Option<String>,
}

impl From<ProviderArticle> for NewsArticle {
    fn from(article: ProviderArticle) -> Self {
        NewsArticle {
            title: article.title.unwrap_or_default(),
            description: article.description,
            url: article.url.unwrap_or_default(),
            published_at: article.published_at,
            source: article.source.and_then(|s| s.name),
        }
    }
}
