use chrono::{DateTime, Duration, Utc};

#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub inserted_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl<T> CacheEntry<T> {
    /// A `ttl_seconds` of zero or less keeps the entry until it is removed, as
    /// does a lifetime reaching past the representable date range.
    pub fn new(value: T, ttl_seconds: i64) -> Self {
        let inserted_at = Utc::now();
        let expires_at = (ttl_seconds > 0)
            .then(|| Duration::try_seconds(ttl_seconds))
            .flatten()
            .and_then(|ttl| inserted_at.checked_add_signed(ttl));
        Self {
            value,
            inserted_at,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|expires_at| Utc::now() > expires_at)
            .unwrap_or(false)
    }
}
