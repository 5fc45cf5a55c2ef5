//! Cancel-fee resolution.
//!
//! ```text
//! cancel_fee(config, registry, order, relayer_fee_rate) -> CancelFee
//! ```
//!
//! - A zero relayer fee rate costs nothing.
//! - A pair with the native asset on either leg pays the fixed
//!   `relayer_cancel_fee`, no price lookup.
//! - Any other pair pays `relayer_cancel_fee` converted into the asset the
//!   order pays with (base for an ask, quote for a bid) through the
//!   recorded median prices. An asset that cannot be priced pays nothing.
//!
//! The registry argument is the epoch-bound view of prices and decimals;
//! every node passes the same view for the same block.

use alloy_primitives::U256;
use dexcore_types::{AssetId, ExchangeConfig, OrderItem, PriceRegistry};

use crate::pricing::convert_native_to_token;

/// Fee owed to cancel an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelFee {
    /// Amount in `fee_asset` smallest units.
    pub amount: U256,
    /// Asset `amount` is denominated in: the native asset on native pairs,
    /// otherwise the asset the order pays with.
    pub fee_asset: AssetId,
}

/// Resolve the fee owed to cancel `order` at `relayer_fee_rate`.
pub fn cancel_fee<R: PriceRegistry>(
    config: &ExchangeConfig,
    registry: &R,
    order: &OrderItem,
    relayer_fee_rate: U256,
) -> CancelFee {
    let native_pair = order.involves(&config.native_asset);
    let fee_asset = if native_pair {
        config.native_asset
    } else {
        order.paying_asset()
    };

    if relayer_fee_rate.is_zero() {
        return CancelFee {
            amount: U256::ZERO,
            fee_asset,
        };
    }

    if native_pair {
        return CancelFee {
            amount: config.relayer_cancel_fee,
            fee_asset,
        };
    }

    let amount = convert_native_to_token(
        config,
        registry,
        fee_asset,
        Some(order.receiving_asset()),
        config.relayer_cancel_fee,
    )
    .unwrap_or_else(|| {
        tracing::warn!(
            base = %order.base_token,
            quote = %order.quote_token,
            side = %order.side,
            fee_asset = %fee_asset,
            "Cancel fee asset has no median price or decimals; charging zero"
        );
        U256::ZERO
    });

    CancelFee { amount, fee_asset }
}

#[cfg(test)]
mod tests {
    use dexcore_state::{ExchangeStateDb, RegistryView, TokenDecimalCache};
    use dexcore_types::constants::{BASE_PRICE, NATIVE_ASSET, RELAYER_CANCEL_FEE};
    use dexcore_types::fixtures::{TOKEN_A, TOKEN_B};
    use dexcore_types::{OrderSide, pair_hash};

    use super::*;

    fn order(side: OrderSide, base: AssetId, quote: AssetId) -> OrderItem {
        OrderItem::dummy(side, base, quote, U256::from(10_000u64))
    }

    #[test]
    fn zero_rate_is_free_even_when_unpriced() {
        let cfg = ExchangeConfig::default();
        let db = ExchangeStateDb::new();
        let decimals = TokenDecimalCache::new();
        let view = RegistryView::new(&decimals, &db);

        let fee = cancel_fee(&cfg, &view, &order(OrderSide::Ask, TOKEN_B, TOKEN_A), U256::ZERO);
        assert_eq!(fee.amount, U256::ZERO);
        assert_eq!(fee.fee_asset, TOKEN_B);
    }

    #[test]
    fn native_pair_ignores_rate_magnitude_and_quantity() {
        let cfg = ExchangeConfig::default();
        let db = ExchangeStateDb::new();
        let decimals = TokenDecimalCache::new();
        let view = RegistryView::new(&decimals, &db);

        for rate in [1u64, 10, 9_999] {
            let mut o = order(OrderSide::Bid, TOKEN_A, NATIVE_ASSET);
            o.quantity = U256::from(rate) * BASE_PRICE;
            let fee = cancel_fee(&cfg, &view, &o, U256::from(rate));
            assert_eq!(fee.amount, RELAYER_CANCEL_FEE);
            assert_eq!(fee.fee_asset, NATIVE_ASSET);
        }
    }

    #[test]
    fn configured_native_asset_and_fee_are_used() {
        let cfg = ExchangeConfig {
            native_asset: TOKEN_A,
            relayer_cancel_fee: U256::from(42u64),
            ..ExchangeConfig::default()
        };
        let db = ExchangeStateDb::new();
        let decimals = TokenDecimalCache::new();
        let view = RegistryView::new(&decimals, &db);

        let fee = cancel_fee(&cfg, &view, &order(OrderSide::Ask, TOKEN_B, TOKEN_A), U256::from(1u64));
        assert_eq!(fee.amount, U256::from(42u64));
        assert_eq!(fee.fee_asset, TOKEN_A);
    }

    #[test]
    fn non_native_pair_scales_with_token_price() {
        // TOKEN_A worth 2 native => the cancel fee in TOKEN_A is halved.
        let cfg = ExchangeConfig::default();
        let mut db = ExchangeStateDb::new();
        db.set_median_price_before_epoch(
            pair_hash(TOKEN_A, NATIVE_ASSET),
            U256::from(2u64) * BASE_PRICE,
        );
        let mut decimals = TokenDecimalCache::new();
        decimals.set_token_decimal(TOKEN_A, BASE_PRICE);
        decimals.set_token_decimal(TOKEN_B, U256::from(100_000_000u64));
        let view = RegistryView::new(&decimals, &db);

        let fee = cancel_fee(&cfg, &view, &order(OrderSide::Bid, TOKEN_B, TOKEN_A), U256::from(10u64));
        assert_eq!(fee.amount, RELAYER_CANCEL_FEE / U256::from(2u64));
        assert_eq!(fee.fee_asset, TOKEN_A);
    }

    #[test]
    fn unpriced_non_native_pair_charges_zero() {
        let cfg = ExchangeConfig::default();
        let db = ExchangeStateDb::new();
        let mut decimals = TokenDecimalCache::new();
        decimals.set_token_decimal(TOKEN_B, U256::from(100_000_000u64));
        let view = RegistryView::new(&decimals, &db);

        let fee = cancel_fee(&cfg, &view, &order(OrderSide::Ask, TOKEN_B, TOKEN_A), U256::from(10u64));
        assert_eq!(fee.amount, U256::ZERO);
        assert_eq!(fee.fee_asset, TOKEN_B);
    }
}
