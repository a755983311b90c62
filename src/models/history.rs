use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// One row of `search_history`. Topics are stored exactly as the client sent
/// them, so "Rust" and "rust" are separate entries.
#[derive(FromRow, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistory {
    pub id: i32,
    pub topic: String,
    pub searched_at: DateTime<Utc>,
}
