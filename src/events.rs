//! Registry change notifications.
//!
//! The registry publishes one event per successful mutation. Events are
//! fire-and-forget: the core neither persists nor replays them.

use alloy_primitives::Address;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    PairAdded {
        asset_a: Address,
        asset_b: Address,
        identifier: String,
        /// Identifier replaced by this registration, empty for a new pair.
        previous_identifier: String,
    },
    PairRemoved {
        asset_a: Address,
        asset_b: Address,
        identifier: String,
    },
}

/// Receives registry events.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: RegistryEvent);
}

/// Sink that forwards events to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn publish(&self, event: RegistryEvent) {
        match event {
            RegistryEvent::PairAdded {
                asset_a,
                asset_b,
                identifier,
                previous_identifier,
            } => {
                info!(
                    %asset_a,
                    %asset_b,
                    identifier,
                    previous_identifier,
                    "pair added"
                );
            }
            RegistryEvent::PairRemoved {
                asset_a,
                asset_b,
                identifier,
            } => {
                info!(%asset_a, %asset_b, identifier, "pair removed");
            }
        }
    }
}
