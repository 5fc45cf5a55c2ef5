//! System-wide constants for the dexcore exchange core.

use alloy_primitives::{Address, U256, address};

/// Canonical fixed-point scale for prices and rates (10^18).
///
/// Also the smallest-unit scale of the native asset.
pub const BASE_PRICE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Denominator for trading and relayer fee rates (a rate of 10 is 0.1%).
pub const BASE_FEE: U256 = U256::from_limbs([10_000, 0, 0, 0]);

/// Fixed cancel fee charged by relayers, in native smallest units (0.0001 native).
pub const RELAYER_CANCEL_FEE: U256 = U256::from_limbs([100_000_000_000_000, 0, 0, 0]);

/// Sentinel identifier of the chain's native asset.
pub const NATIVE_ASSET: Address = address!("0x0000000000000000000000000000000000000001");

/// Maximum slots a single account's nonce window may track.
pub const MAX_NONCE_WINDOW: usize = 100_000;
