//! Read contract of the token-decimal and median-price registries.
//!
//! The core never writes to either registry. A registry value is an
//! epoch-bound view: `median_price_before` answers with the price
//! recorded at the last epoch boundary before the block being executed.

use alloy_primitives::{B256, U256};

use crate::AssetId;

/// Read-only access to per-asset decimals and recorded median prices.
pub trait PriceRegistry {
    /// Smallest-unit scale of `asset` (e.g. `10^18`), if registered.
    fn decimals_of(&self, asset: &AssetId) -> Option<U256>;

    /// Median price recorded for the pair key `pair`
    /// (see [`crate::pair_hash`]), in quote smallest units per whole base.
    fn median_price_before(&self, pair: &B256) -> Option<U256>;
}

impl<T: PriceRegistry + ?Sized> PriceRegistry for &T {
    fn decimals_of(&self, asset: &AssetId) -> Option<U256> {
        (**self).decimals_of(asset)
    }

    fn median_price_before(&self, pair: &B256) -> Option<U256> {
        (**self).median_price_before(pair)
    }
}
