//! Basket valuation.
//!
//! Folds per-component holdings into a single WAD-scaled figure in a
//! caller-chosen quote asset, pricing every component against the
//! registry's master quote asset and converting at the end.

use std::sync::Arc;

use alloy_primitives::{Address, I256, U256};
use futures::future::join_all;
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::fixed;
use crate::registry::PriceFeedRegistry;

/// Holdings adjustment attributed to an external module. May be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPosition {
    pub module: Address,
    pub unit: I256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketComponent {
    pub component: Address,
    /// Holdings in the component's native scale.
    pub nominal_unit: I256,
    /// The component's native decimal scale, e.g. `10^6` for a six-decimal
    /// token.
    pub base_unit: U256,
    pub external_positions: Vec<ExternalPosition>,
}

impl BasketComponent {
    pub fn new(component: Address, nominal_unit: I256, base_unit: U256) -> Self {
        Self {
            component,
            nominal_unit,
            base_unit,
            external_positions: Vec::new(),
        }
    }

    pub fn with_external_position(mut self, module: Address, unit: I256) -> Self {
        self.external_positions.push(ExternalPosition { module, unit });
        self
    }

    /// Nominal holdings plus all external adjustments. May be negative.
    pub fn effective_unit(&self) -> Option<I256> {
        self.external_positions
            .iter()
            .try_fold(self.nominal_unit, |acc, position| {
                acc.checked_add(position.unit)
            })
    }
}

/// Caller-supplied basket contents. The valuer holds no basket state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    pub components: Vec<BasketComponent>,
}

impl Basket {
    pub fn new(components: Vec<BasketComponent>) -> Self {
        Self { components }
    }
}

pub struct BasketValuer {
    registry: Arc<PriceFeedRegistry>,
}

impl BasketValuer {
    pub fn new(registry: Arc<PriceFeedRegistry>) -> Self {
        Self { registry }
    }

    /// Values `basket` in terms of `quote_asset`.
    ///
    /// Either returns one complete figure or one error; there is no
    /// partial-success mode. Fails with
    /// [`PricingError::NegativeValuation`] when the signed total in the
    /// master quote asset is below zero.
    pub async fn valuate(&self, basket: &Basket, quote_asset: Address) -> PricingResult<U256> {
        let master = self.registry.master_quote_asset();

        // Every component is priced, zero holdings included; results are
        // inspected in component order so the first failure surfaces
        // deterministically.
        let prices = join_all(
            basket
                .components
                .iter()
                .map(|c| self.registry.price(c.component, master)),
        )
        .await;

        let mut total = I256::ZERO;
        for (component, price) in basket.components.iter().zip(prices) {
            let price = price?;
            let contribution = Self::contribution(component, price)?;
            total = total
                .checked_add(contribution)
                .ok_or(PricingError::Overflow("accumulating basket value"))?;
            debug!(
                component = %component.component,
                %price,
                %contribution,
                "component valued"
            );
        }

        let total = fixed::to_unsigned(total).ok_or(PricingError::NegativeValuation)?;
        if quote_asset == master {
            return Ok(total);
        }

        let rate = self.registry.price(quote_asset, master).await?;
        fixed::precise_div(total, rate).ok_or(PricingError::Overflow("converting to quote asset"))
    }

    /// Signed WAD-scaled value of one component in the master quote asset.
    fn contribution(component: &BasketComponent, price: U256) -> PricingResult<I256> {
        let effective = component
            .effective_unit()
            .ok_or(PricingError::Overflow("summing external positions"))?;
        let base_unit = fixed::to_signed(component.base_unit)
            .filter(|unit| !unit.is_zero())
            .ok_or(PricingError::Overflow("widening component base unit"))?;
        let normalized_unit = fixed::precise_div_signed(effective, base_unit)
            .ok_or(PricingError::Overflow("normalizing component units"))?;
        let price = fixed::to_signed(price).ok_or(PricingError::Overflow("widening price"))?;
        fixed::precise_mul_signed(normalized_unit, price)
            .ok_or(PricingError::Overflow("valuing component"))
    }
}
