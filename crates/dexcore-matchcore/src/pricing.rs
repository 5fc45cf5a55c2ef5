//! Token pricing against the native asset from recorded median prices.
//!
//! A median price for the ordered pair `(X, Y)` is expressed in `Y`
//! smallest units per one whole `X`. A token's price in native is
//! resolved from, in order:
//!
//! 1. the direct record `(token, native)`;
//! 2. the inverse record `(native, token)`, inverted through the token's
//!    decimals;
//! 3. a cross rate through a `via` asset that itself has a native price
//!    by rule 1 or 2.
//!
//! Zero records count as missing.

use alloy_primitives::U256;
use dexcore_types::{AssetId, ExchangeConfig, PriceRegistry, pair_hash};

use crate::math::mul_div;

fn positive(value: Option<U256>) -> Option<U256> {
    value.filter(|v| !v.is_zero())
}

/// Native smallest units per one whole `token`, using rules 1 and 2.
fn native_price_direct<R: PriceRegistry>(
    config: &ExchangeConfig,
    registry: &R,
    token: AssetId,
) -> Option<U256> {
    let native = config.native_asset;
    if token == native {
        return Some(config.base_price);
    }
    if let Some(price) = positive(registry.median_price_before(&pair_hash(token, native))) {
        return Some(price);
    }
    let inverse = positive(registry.median_price_before(&pair_hash(native, token)))?;
    let decimals = positive(registry.decimals_of(&token))?;
    positive(Some(mul_div(config.base_price, decimals, inverse)))
}

/// `via` smallest units per one whole `token`.
fn pair_price<R: PriceRegistry>(
    registry: &R,
    token: AssetId,
    via: AssetId,
    via_decimals: U256,
) -> Option<U256> {
    if let Some(price) = positive(registry.median_price_before(&pair_hash(token, via))) {
        return Some(price);
    }
    let inverse = positive(registry.median_price_before(&pair_hash(via, token)))?;
    let decimals = positive(registry.decimals_of(&token))?;
    positive(Some(mul_div(decimals, via_decimals, inverse)))
}

/// Price of one whole `token` in native smallest units.
///
/// `via` is the asset to cross through when the token has no native
/// record of its own, typically the other leg of the order's pair.
pub fn token_price_in_native<R: PriceRegistry>(
    config: &ExchangeConfig,
    registry: &R,
    token: AssetId,
    via: Option<AssetId>,
) -> Option<U256> {
    if let Some(price) = native_price_direct(config, registry, token) {
        return Some(price);
    }
    let via = via.filter(|v| *v != token)?;
    let via_decimals = positive(registry.decimals_of(&via))?;
    let token_in_via = pair_price(registry, token, via, via_decimals)?;
    let via_in_native = native_price_direct(config, registry, via)?;
    positive(Some(mul_div(token_in_via, via_in_native, via_decimals)))
}

/// Convert `amount` native smallest units into `token` smallest units.
///
/// Returns `None` when the token cannot be priced or has no registered
/// decimals.
pub fn convert_native_to_token<R: PriceRegistry>(
    config: &ExchangeConfig,
    registry: &R,
    token: AssetId,
    via: Option<AssetId>,
    amount: U256,
) -> Option<U256> {
    if config.is_native(&token) {
        return Some(amount);
    }
    let price = token_price_in_native(config, registry, token, via)?;
    let decimals = positive(registry.decimals_of(&token))?;
    Some(mul_div(amount, decimals, price))
}
