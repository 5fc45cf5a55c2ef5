//! Order types for the dexcore exchange core.
//!
//! Quantities are base-asset smallest units; prices are quote smallest
//! units per one whole base unit at the canonical scale.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{AccountHash, AssetId};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy base, paying quote.
    Bid,
    /// Sell base for quote.
    Ask,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bid => write!(f, "BUY"),
            Self::Ask => write!(f, "SELL"),
        }
    }
}

/// An order as seen by the matching and cancellation paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub side: OrderSide,
    pub base_token: AssetId,
    pub quote_token: AssetId,
    /// Remaining quantity in base smallest units.
    pub quantity: U256,
    pub price: U256,
    /// Exchange account that placed the order.
    pub exchange_account: AccountHash,
    /// Order nonce issued by the exchange account's allocator.
    pub nonce: u64,
}

impl OrderItem {
    /// The asset this order pays with: quote for a bid, base for an ask.
    #[must_use]
    pub fn paying_asset(&self) -> AssetId {
        match self.side {
            OrderSide::Bid => self.quote_token,
            OrderSide::Ask => self.base_token,
        }
    }

    /// The other asset of the pair (the one this order receives).
    #[must_use]
    pub fn receiving_asset(&self) -> AssetId {
        match self.side {
            OrderSide::Bid => self.base_token,
            OrderSide::Ask => self.quote_token,
        }
    }

    /// Whether either leg of the pair is `asset`.
    #[must_use]
    pub fn involves(&self, asset: &AssetId) -> bool {
        self.base_token == *asset || self.quote_token == *asset
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl OrderItem {
    pub fn dummy(side: OrderSide, base: AssetId, quote: AssetId, quantity: U256) -> Self {
        Self {
            side,
            base_token: base,
            quote_token: quote,
            quantity,
            price: crate::constants::BASE_PRICE,
            exchange_account: AccountHash::ZERO,
            nonce: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATIVE_ASSET;
    use crate::fixtures::{TOKEN_A, TOKEN_B};

    #[test]
    fn order_side_display() {
        assert_eq!(format!("{}", OrderSide::Bid), "BUY");
        assert_eq!(format!("{}", OrderSide::Ask), "SELL");
    }

    #[test]
    fn paying_asset_follows_side() {
        let bid = OrderItem::dummy(OrderSide::Bid, TOKEN_B, TOKEN_A, U256::from(1u64));
        assert_eq!(bid.paying_asset(), TOKEN_A);
        assert_eq!(bid.receiving_asset(), TOKEN_B);

        let ask = OrderItem::dummy(OrderSide::Ask, TOKEN_B, TOKEN_A, U256::from(1u64));
        assert_eq!(ask.paying_asset(), TOKEN_B);
        assert_eq!(ask.receiving_asset(), TOKEN_A);
    }

    #[test]
    fn involves_either_leg() {
        let order = OrderItem::dummy(OrderSide::Bid, TOKEN_A, NATIVE_ASSET, U256::ZERO);
        assert!(order.involves(&TOKEN_A));
        assert!(order.involves(&NATIVE_ASSET));
        assert!(!order.involves(&TOKEN_B));
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = OrderItem::dummy(OrderSide::Ask, TOKEN_B, TOKEN_A, U256::from(10_000u64));
        let json = serde_json::to_string(&order).unwrap();
        let back: OrderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
