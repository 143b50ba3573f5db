//! Price feed registry.
//!
//! Maps asset pairs to named feeds on a raw source and serves prices
//! normalized to the WAD scale. One canonical entry exists per unordered
//! pair; querying the reverse direction derives the exact multiplicative
//! inverse, so `A/B` and `B/A` can never drift apart.

use std::collections::HashMap;
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use tokio::sync::Mutex;
use tracing::debug;

use crate::auth::AdminPolicy;
use crate::config::RegistryConfig;
use crate::error::{PricingError, PricingResult};
use crate::events::{EventSink, RegistryEvent};
use crate::feed::FeedSource;
use crate::fixed;

pub struct PriceFeedRegistry {
    master_quote_asset: Address,
    source: Arc<dyn FeedSource>,
    admin: Arc<dyn AdminPolicy>,
    events: Arc<dyn EventSink>,
    /// Canonical entries, keyed by the orientation a pair was first
    /// registered under.
    pairs: Mutex<HashMap<(Address, Address), String>>,
}

impl PriceFeedRegistry {
    /// Creates an empty registry. All raw feeds on `source` are assumed
    /// denominated relative to `master_quote_asset`.
    pub fn new(
        master_quote_asset: Address,
        source: Arc<dyn FeedSource>,
        admin: Arc<dyn AdminPolicy>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            master_quote_asset,
            source,
            admin,
            events,
            pairs: Mutex::new(HashMap::new()),
        }
    }

    pub fn master_quote_asset(&self) -> Address {
        self.master_quote_asset
    }

    /// Registers every configured feed as `caller`.
    pub async fn apply_config(&self, caller: Address, config: &RegistryConfig) -> PricingResult<()> {
        for feed in &config.feeds {
            self.add_pair(caller, feed.asset_a, feed.asset_b, &feed.identifier)
                .await?;
        }
        Ok(())
    }

    /// Stores or overwrites the canonical entry for the unordered pair
    /// `{asset_a, asset_b}` and returns the identifier it replaced, empty
    /// for a new pair.
    ///
    /// When the pair already exists under the reverse orientation, the
    /// existing orientation is kept and only the identifier changes.
    pub async fn add_pair(
        &self,
        caller: Address,
        asset_a: Address,
        asset_b: Address,
        identifier: &str,
    ) -> PricingResult<String> {
        self.ensure_admin(caller)?;

        let mut pairs = self.pairs.lock().await;
        let key = if pairs.contains_key(&(asset_b, asset_a)) {
            (asset_b, asset_a)
        } else {
            (asset_a, asset_b)
        };
        let previous = pairs.insert(key, identifier.to_string()).unwrap_or_default();
        drop(pairs);

        debug!(%asset_a, %asset_b, identifier, previous, "registered pair");
        self.events.publish(RegistryEvent::PairAdded {
            asset_a,
            asset_b,
            identifier: identifier.to_string(),
            previous_identifier: previous.clone(),
        });
        Ok(previous)
    }

    /// Deletes the entry for the unordered pair `{asset_a, asset_b}`.
    pub async fn remove_pair(
        &self,
        caller: Address,
        asset_a: Address,
        asset_b: Address,
    ) -> PricingResult<()> {
        self.ensure_admin(caller)?;

        let mut pairs = self.pairs.lock().await;
        let identifier = pairs
            .remove(&(asset_a, asset_b))
            .or_else(|| pairs.remove(&(asset_b, asset_a)))
            .ok_or(PricingError::PairNotFound(asset_a, asset_b))?;
        drop(pairs);

        debug!(%asset_a, %asset_b, identifier, "removed pair");
        self.events.publish(RegistryEvent::PairRemoved {
            asset_a,
            asset_b,
            identifier,
        });
        Ok(())
    }

    /// Returns the stored identifier for `{asset_a, asset_b}` and whether
    /// the query direction is the reverse of the canonical orientation.
    pub async fn price_identifier(
        &self,
        asset_a: Address,
        asset_b: Address,
    ) -> PricingResult<(String, bool)> {
        let pairs = self.pairs.lock().await;
        if let Some(identifier) = pairs.get(&(asset_a, asset_b)) {
            return Ok((identifier.clone(), false));
        }
        if let Some(identifier) = pairs.get(&(asset_b, asset_a)) {
            return Ok((identifier.clone(), true));
        }
        Err(PricingError::PairNotFound(asset_a, asset_b))
    }

    /// Price of one `asset_a` expressed in `asset_b`, WAD scaled.
    ///
    /// The raw quote is re-read from the source on every call; nothing is
    /// cached across calls.
    pub async fn price(&self, asset_a: Address, asset_b: Address) -> PricingResult<U256> {
        let (identifier, inverse) = self.price_identifier(asset_a, asset_b).await?;
        let quote = self.source.fetch(&identifier).await?;

        let normalized = fixed::scale_to_wad(quote.value, quote.decimals)
            .ok_or(PricingError::Overflow("scaling raw feed value"))?;
        // A feed reporting zero would make the reciprocal divide by zero.
        if normalized.is_zero() {
            return Err(PricingError::FeedUnavailable(identifier));
        }

        let price = if asset_a == asset_b {
            // Registered self-pair, identity by construction.
            normalized
        } else if inverse {
            fixed::reciprocal(normalized)
                .ok_or_else(|| PricingError::FeedUnavailable(identifier.clone()))?
        } else {
            normalized
        };

        debug!(%asset_a, %asset_b, identifier, inverse, %price, "resolved price");
        Ok(price)
    }

    fn ensure_admin(&self, caller: Address) -> PricingResult<()> {
        if !self.admin.is_admin(&caller) {
            return Err(PricingError::Unauthorized(caller));
        }
        Ok(())
    }
}
