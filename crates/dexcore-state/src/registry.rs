//! Token decimal cache and the registry view handed to the fee resolver.

use std::collections::HashMap;

use alloy_primitives::{B256, U256};
use dexcore_types::{AssetId, PriceRegistry};

use crate::ExchangeStateDb;

/// Smallest-unit scale per token, filled in as tokens are registered.
#[derive(Debug, Clone, Default)]
pub struct TokenDecimalCache {
    decimals: HashMap<AssetId, U256>,
}

impl TokenDecimalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `decimal` (e.g. `10^8`) as the scale of `token`.
    pub fn set_token_decimal(&mut self, token: AssetId, decimal: U256) {
        self.decimals.insert(token, decimal);
    }

    #[must_use]
    pub fn token_decimal(&self, token: &AssetId) -> Option<U256> {
        self.decimals.get(token).copied()
    }
}

/// Epoch-bound read view over token decimals and recorded median prices.
#[derive(Debug, Clone, Copy)]
pub struct RegistryView<'a> {
    decimals: &'a TokenDecimalCache,
    state: &'a ExchangeStateDb,
}

impl<'a> RegistryView<'a> {
    #[must_use]
    pub fn new(decimals: &'a TokenDecimalCache, state: &'a ExchangeStateDb) -> Self {
        Self { decimals, state }
    }
}

impl PriceRegistry for RegistryView<'_> {
    fn decimals_of(&self, asset: &AssetId) -> Option<U256> {
        self.decimals.token_decimal(asset)
    }

    fn median_price_before(&self, pair: &B256) -> Option<U256> {
        self.state.median_price_before_epoch(pair)
    }
}

#[cfg(test)]
mod tests {
    use dexcore_types::constants::BASE_PRICE;
    use dexcore_types::fixtures::{TOKEN_A, TOKEN_B};
    use dexcore_types::pair_hash;

    use super::*;

    #[test]
    fn unregistered_token_has_no_decimals() {
        let cache = TokenDecimalCache::new();
        assert_eq!(cache.token_decimal(&TOKEN_A), None);
    }

    #[test]
    fn view_reads_both_sources() {
        let mut cache = TokenDecimalCache::new();
        cache.set_token_decimal(TOKEN_B, U256::from(100_000_000u64));
        let mut db = ExchangeStateDb::new();
        db.set_median_price_before_epoch(pair_hash(TOKEN_B, TOKEN_A), BASE_PRICE);

        let view = RegistryView::new(&cache, &db);
        assert_eq!(view.decimals_of(&TOKEN_B), Some(U256::from(100_000_000u64)));
        assert_eq!(view.median_price_before(&pair_hash(TOKEN_B, TOKEN_A)), Some(BASE_PRICE));
        assert_eq!(view.median_price_before(&pair_hash(TOKEN_A, TOKEN_B)), None);
    }

    #[test]
    fn re_registering_overwrites() {
        let mut cache = TokenDecimalCache::new();
        cache.set_token_decimal(TOKEN_A, U256::from(1u64));
        cache.set_token_decimal(TOKEN_A, BASE_PRICE);
        assert_eq!(cache.token_decimal(&TOKEN_A), Some(BASE_PRICE));
    }
}
