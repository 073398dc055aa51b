use std::collections::HashMap;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;

use crate::ForecastDocument;

pub const CACHE_TTL: Duration = Duration::minutes(10);

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub expires_at: OffsetDateTime,
    pub document: ForecastDocument,
}

impl CacheEntry {
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at > now
    }
}

/// Parsed forecasts keyed by the exact request url.
///
/// Expired entries stay in the map until the next successful fetch for the
/// same url overwrites them or the whole cache is invalidated.
#[derive(Debug, Default)]
pub struct ForecastCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ForecastCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, url: &str) -> Option<ForecastDocument> {
        self.get_at(url, OffsetDateTime::now_utc()).await
    }

    pub async fn get_at(&self, url: &str, now: OffsetDateTime) -> Option<ForecastDocument> {
        let entries = self.entries.lock().await;
        entries
            .get(url)
            .filter(|entry| entry.is_valid_at(now))
            .map(|entry| entry.document.clone())
    }

    pub async fn insert(&self, url: &str, document: ForecastDocument) {
        self.insert_at(url, document, OffsetDateTime::now_utc()).await
    }

    pub async fn insert_at(&self, url: &str, document: ForecastDocument, now: OffsetDateTime) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            url.to_owned(),
            CacheEntry {
                expires_at: now + CACHE_TTL,
                document,
            },
        );
    }

    pub async fn invalidate(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
