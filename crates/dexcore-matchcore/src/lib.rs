//! # dexcore-matchcore
//!
//! **Pure deterministic compute plane for the exchange core.**
//!
//! Two computations every validating node runs during block execution:
//!
//! - **Fill clamp** ([`BalanceClamp`]): how much of a proposed taker/maker
//!   fill can settle with the balances both sides hold, and whether the
//!   maker must be evicted
//! - **Cancel fee** ([`cancel_fee`]): what a relayer charges to cancel an
//!   order, priced through recorded median prices
//!
//! Both are total functions over `U256` with no side effects beyond
//! `tracing` events: same input → same output on every node.

pub mod clamp;
pub mod fee;
pub mod math;
pub mod pricing;

pub use clamp::{BalanceClamp, ClampInput, ClampOutcome, get_trade_quantity};
pub use fee::{CancelFee, cancel_fee};
pub use pricing::{convert_native_to_token, token_price_in_native};
