use alloy_primitives::Address;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// One pair-to-identifier binding seeded at startup.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedConfig {
    pub asset_a: Address,
    pub asset_b: Address,
    pub identifier: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
}

/// Registry bootstrap configuration.
///
/// `gateway` is optional: embedders that push quotes through an in-memory
/// source leave it out.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegistryConfig {
    pub master_quote_asset: Address,
    #[serde(default)]
    pub gateway: Option<GatewayConfig>,
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
}

impl RegistryConfig {
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded registry config");
        Ok(config)
    }
}
