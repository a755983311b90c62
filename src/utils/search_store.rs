use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;

use crate::models::{error::Error, history::SearchHistory};

pub const HISTORY_LIMIT: i64 = 10;

#[async_trait]
pub trait SearchHistoryStore: Send + Sync {
    /// Records that `topic` was searched just now and returns the stored row.
    async fn save_search(&self, topic: &str) -> Result<SearchHistory, Error>;

    /// Most recent searches first, at most `limit` of them.
    async fn get_last_searches(&self, limit: i64) -> Result<Vec<SearchHistory>, Error>;
}

#[derive(Clone)]
pub struct PgSearchHistoryStore {
    pool: PgPool,
}

impl PgSearchHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        PgSearchHistoryStore { pool }
    }
}

#[async_trait]
impl SearchHistoryStore for PgSearchHistoryStore {
    async fn save_search(&self, topic: &str) -> Result<SearchHistory, Error> {
        // Dropping an uncommitted transaction rolls it back and hands the
        // connection back to the pool.
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, SearchHistory>(
            "INSERT INTO search_history (topic, searched_at) VALUES ($1, $2) \
             RETURNING id, topic, searched_at",
        )
        .bind(topic)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(id = record.id, topic, "Saved search");
        Ok(record)
    }

    async fn get_last_searches(&self, limit: i64) -> Result<Vec<SearchHistory>, Error> {
        let mut conn = self.pool.acquire().await?;

        let records = sqlx::query_as::<_, SearchHistory>(
            "SELECT id, topic, searched_at FROM search_history \
             ORDER BY searched_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

        Ok(records)
    }
}
