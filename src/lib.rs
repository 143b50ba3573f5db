//! Prices a basket of assets in terms of any quote asset.
//!
//! Two collaborating pieces: [`PriceFeedRegistry`] maps asset pairs to
//! named feeds on a raw [`FeedSource`] and serves WAD-normalized prices,
//! deriving inverse quotes automatically; [`BasketValuer`] folds a
//! basket's holdings (signed external positions included) into one
//! valuation figure, converting through the registry's master quote asset
//! when needed.

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod fixed;
pub mod log;
pub mod providers;
pub mod registry;
pub mod valuer;

pub use auth::{AdminPolicy, SingleAdmin};
pub use config::RegistryConfig;
pub use error::{PricingError, PricingResult};
pub use events::{EventSink, LogSink, RegistryEvent};
pub use feed::{FeedQuote, FeedSource};
pub use registry::PriceFeedRegistry;
pub use valuer::{Basket, BasketComponent, BasketValuer, ExternalPosition};
