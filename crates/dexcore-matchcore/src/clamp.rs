//! Balance-constrained fill clamp.
//!
//! Given a proposed fill between a taker and one resting maker, decide
//! how much can actually settle with the balances both parties hold and
//! whether the maker must be evicted from the book.
//!
//! ## Capacities
//!
//! - The **seller** pays in base: its capacity is its base balance. Its
//!   trading fee is charged in quote out of the proceeds, so it does not
//!   shrink the base it can deliver.
//! - The **buyer** pays in quote plus its fee: its capacity is
//!   `balance * base_decimal * base_fee / (base_fee + fee_rate) / price`.
//!
//! A side only constrains the fill when it is *short*, i.e. its balance
//! is below what the full `quantity` would cost it. When both are short
//! the smaller capacity binds; exact ties go through [`TieBreak`].
//!
//! The function is total and pure: a zero result means "no trade this
//! call", `reject_maker` means "evict this resting order".

use std::cmp::Ordering;

use alloy_primitives::U256;
use dexcore_types::{ExchangeConfig, OrderSide, TieBreak};

use crate::math::{buyer_capacity, buyer_out_total};

/// Inputs for one taker/maker fill decision. All amounts are smallest units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampInput {
    pub taker_side: OrderSide,
    pub taker_fee_rate: U256,
    /// Taker's spendable balance of the asset it pays with.
    pub taker_balance: U256,
    pub maker_price: U256,
    pub maker_fee_rate: U256,
    /// Maker's spendable balance of the asset it pays with.
    pub maker_balance: U256,
    pub base_decimal: U256,
    /// Desired fill in base units.
    pub quantity: U256,
}

/// Result of [`BalanceClamp::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampOutcome {
    /// Base quantity that can settle, `<= ClampInput::quantity`.
    pub quantity: U256,
    /// The maker's balance was the binding constraint.
    pub reject_maker: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Party {
    Taker,
    Maker,
}

/// Fill clamp parameterised by the fee denominator and tie-break rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceClamp {
    base_fee: U256,
    tie_break: TieBreak,
}

impl Default for BalanceClamp {
    fn default() -> Self {
        Self::from_config(&ExchangeConfig::default())
    }
}

impl BalanceClamp {
    #[must_use]
    pub fn new(base_fee: U256, tie_break: TieBreak) -> Self {
        Self {
            base_fee,
            tie_break,
        }
    }

    #[must_use]
    pub fn from_config(config: &ExchangeConfig) -> Self {
        Self::new(config.base_fee, config.tie_break)
    }

    /// Compute the settleable quantity and whether to evict the maker.
    #[must_use]
    pub fn clamp(&self, input: &ClampInput) -> ClampOutcome {
        let quantity = input.quantity;
        let buyer = match input.taker_side {
            OrderSide::Bid => Party::Taker,
            OrderSide::Ask => Party::Maker,
        };
        let (buyer_balance, buyer_fee_rate, seller_balance) = match buyer {
            Party::Taker => (input.taker_balance, input.taker_fee_rate, input.maker_balance),
            Party::Maker => (input.maker_balance, input.maker_fee_rate, input.taker_balance),
        };
        let seller = match buyer {
            Party::Taker => Party::Maker,
            Party::Maker => Party::Taker,
        };

        let buyer_out = buyer_out_total(
            quantity,
            input.maker_price,
            input.base_decimal,
            buyer_fee_rate,
            self.base_fee,
        );
        let buyer_short = buyer_balance < buyer_out;
        let seller_short = seller_balance < quantity;

        let buyer_cap = || {
            buyer_capacity(
                buyer_balance,
                input.maker_price,
                input.base_decimal,
                buyer_fee_rate,
                self.base_fee,
            )
        };

        let (binding, capacity) = match (buyer_short, seller_short) {
            (false, false) => {
                return ClampOutcome {
                    quantity,
                    reject_maker: false,
                };
            }
            (true, false) => (buyer, buyer_cap()),
            (false, true) => (seller, seller_balance),
            (true, true) => {
                let buyer_capacity = buyer_cap();
                match buyer_capacity.cmp(&seller_balance) {
                    Ordering::Less => (buyer, buyer_capacity),
                    Ordering::Greater => (seller, seller_balance),
                    Ordering::Equal => (self.tie_winner(buyer), buyer_capacity),
                }
            }
        };

        let settle = capacity.min(quantity);
        let reject_maker = binding == Party::Maker;

        if reject_maker {
            tracing::debug!(
                taker_side = %input.taker_side,
                maker_balance = %input.maker_balance,
                settle = %settle,
                "Reject maker: not enough balance"
            );
        } else if settle.is_zero() {
            tracing::debug!(
                taker_side = %input.taker_side,
                taker_balance = %input.taker_balance,
                "Taker exhausted: nothing can settle"
            );
        }

        ClampOutcome {
            quantity: settle,
            reject_maker,
        }
    }

    /// Which party binds when both are short with equal capacity.
    fn tie_winner(&self, buyer: Party) -> Party {
        match self.tie_break {
            TieBreak::BuyerBinds => buyer,
            TieBreak::MakerBinds => Party::Maker,
            TieBreak::TakerBinds => Party::Taker,
        }
    }
}

/// Positional form of [`BalanceClamp::clamp`] with the default
/// configuration. Returns `(quantity, reject_maker)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn get_trade_quantity(
    taker_side: OrderSide,
    taker_fee_rate: U256,
    taker_balance: U256,
    maker_price: U256,
    maker_fee_rate: U256,
    maker_balance: U256,
    base_decimal: U256,
    quantity: U256,
) -> (U256, bool) {
    let outcome = BalanceClamp::default().clamp(&ClampInput {
        taker_side,
        taker_fee_rate,
        taker_balance,
        maker_price,
        maker_fee_rate,
        maker_balance,
        base_decimal,
        quantity,
    });
    (outcome.quantity, outcome.reject_maker)
}
