//! In-memory feed source.
//!
//! Holds quotes in a mutex-guarded table. Embedders that push their own
//! quotes (and the test suite) use this as the deterministic raw source.

use std::collections::HashMap;

use alloy_primitives::U256;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::feed::{FeedQuote, FeedSource};

#[derive(Default)]
pub struct MemoryFeedSource {
    quotes: Mutex<HashMap<String, FeedQuote>>,
}

impl MemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the quote for `identifier`, stamped with the
    /// current time.
    pub async fn set(&self, identifier: &str, value: U256, decimals: u8) {
        let quote = FeedQuote {
            value,
            decimals,
            updated_at: Utc::now(),
        };
        let mut quotes = self.quotes.lock().await;
        debug!(identifier, value = %quote.value, decimals = quote.decimals, "feed updated");
        quotes.insert(identifier.to_string(), quote);
    }

    /// Stores a fully specified quote, timestamp included.
    pub async fn set_quote(&self, identifier: &str, quote: FeedQuote) {
        let mut quotes = self.quotes.lock().await;
        quotes.insert(identifier.to_string(), quote);
    }

    pub async fn remove(&self, identifier: &str) {
        let mut quotes = self.quotes.lock().await;
        quotes.remove(identifier);
    }
}

#[async_trait]
impl FeedSource for MemoryFeedSource {
    async fn fetch(&self, identifier: &str) -> PricingResult<FeedQuote> {
        let quotes = self.quotes.lock().await;
        quotes
            .get(identifier)
            .cloned()
            .ok_or_else(|| PricingError::FeedUnavailable(identifier.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_fetch() {
        let source = MemoryFeedSource::new();
        source.set("ETH/USD", U256::from(180_322_583u64), 5).await;

        let quote = source.fetch("ETH/USD").await.unwrap();
        assert_eq!(quote.value, U256::from(180_322_583u64));
        assert_eq!(quote.decimals, 5);
    }

    #[tokio::test]
    async fn test_missing_identifier() {
        let source = MemoryFeedSource::new();
        let err = source.fetch("BTC/USD").await.unwrap_err();
        assert_eq!(err, PricingError::FeedUnavailable("BTC/USD".to_string()));
    }

    #[tokio::test]
    async fn test_overwrite_and_remove() {
        let source = MemoryFeedSource::new();
        source.set("ETH/USD", U256::from(1u64), 0).await;
        source.set("ETH/USD", U256::from(2u64), 0).await;
        assert_eq!(
            source.fetch("ETH/USD").await.unwrap().value,
            U256::from(2u64)
        );

        source.remove("ETH/USD").await;
        assert!(source.fetch("ETH/USD").await.is_err());
    }
}
