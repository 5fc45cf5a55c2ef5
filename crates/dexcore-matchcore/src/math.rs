//! Fixed-point helpers over `U256`.
//!
//! Products saturate instead of wrapping and a zero divisor yields zero,
//! so every helper is total over non-negative inputs. Division always
//! rounds down; callers that chain divisions do so in the same order on
//! every node.

use alloy_primitives::U256;

/// `a * b / c`, rounded down. Returns zero when `c` is zero.
#[must_use]
pub fn mul_div(a: U256, b: U256, c: U256) -> U256 {
    if c.is_zero() {
        return U256::ZERO;
    }
    a.saturating_mul(b) / c
}

/// Quote smallest units owed for `quantity` base units at `price`.
#[must_use]
pub fn quote_amount(quantity: U256, price: U256, base_decimal: U256) -> U256 {
    mul_div(quantity, price, base_decimal)
}

/// Fee owed on `amount` at `fee_rate / base_fee`.
#[must_use]
pub fn fee_amount(amount: U256, fee_rate: U256, base_fee: U256) -> U256 {
    mul_div(amount, fee_rate, base_fee)
}

/// Total quote a buyer spends for `quantity`: notional plus its fee.
#[must_use]
pub fn buyer_out_total(
    quantity: U256,
    price: U256,
    base_decimal: U256,
    fee_rate: U256,
    base_fee: U256,
) -> U256 {
    let notional = quote_amount(quantity, price, base_decimal);
    notional.saturating_add(fee_amount(notional, fee_rate, base_fee))
}

/// Largest base quantity a buyer holding `balance` quote can pay for,
/// fee included:
///
/// ```text
/// balance * base_decimal * base_fee / (base_fee + fee_rate) / price
/// ```
///
/// Each division rounds down in the order shown.
#[must_use]
pub fn buyer_capacity(
    balance: U256,
    price: U256,
    base_decimal: U256,
    fee_rate: U256,
    base_fee: U256,
) -> U256 {
    let net = mul_div(
        balance.saturating_mul(base_decimal),
        base_fee,
        base_fee.saturating_add(fee_rate),
    );
    net.checked_div(price).unwrap_or(U256::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(n: u64) -> U256 {
        U256::from(n)
    }

    #[test]
    fn mul_div_rounds_down() {
        assert_eq!(mul_div(u(10), u(3), u(4)), u(7));
    }

    #[test]
    fn mul_div_zero_divisor_is_zero() {
        assert_eq!(mul_div(u(10), u(3), U256::ZERO), U256::ZERO);
    }

    #[test]
    fn mul_div_saturates_instead_of_wrapping() {
        assert_eq!(mul_div(U256::MAX, u(2), u(1)), U256::MAX);
    }

    #[test]
    fn quote_amount_rescales_through_base_decimal() {
        // 5 whole units of an 8-decimal token at 2 quote each.
        let price = u(2) * U256::from(10u64).pow(u(18));
        assert_eq!(
            quote_amount(u(500_000_000), price, u(100_000_000)),
            u(10) * U256::from(10u64).pow(u(18))
        );
    }

    #[test]
    fn buyer_out_total_adds_fee() {
        // 1000 quote notional, 10 / 10000 fee.
        assert_eq!(buyer_out_total(u(1000), u(1), u(1), u(10), u(10_000)), u(1001));
    }

    #[test]
    fn buyer_capacity_without_fee_is_balance_over_price() {
        assert_eq!(buyer_capacity(u(900), u(3), u(1), U256::ZERO, u(10_000)), u(300));
    }

    #[test]
    fn buyer_capacity_zero_price_is_zero() {
        assert_eq!(buyer_capacity(u(900), U256::ZERO, u(1), U256::ZERO, u(10_000)), U256::ZERO);
    }
}
