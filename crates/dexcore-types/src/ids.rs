//! Identifiers used throughout dexcore.
//!
//! Assets are 20-byte token addresses; exchange accounts are 32-byte
//! hashes. Pair keys are derived deterministically from an *ordered*
//! (base, quote) pair so `(A, B)` and `(B, A)` address different records.

use alloy_primitives::{Address, B256, keccak256};

/// Token identifier (contract address, or the native asset sentinel).
pub type AssetId = Address;

/// Exchange account identifier.
pub type AccountHash = B256;

/// Deterministic key for an ordered asset pair: `keccak256(base ‖ quote)`.
///
/// Median price records are stored under this key.
#[must_use]
pub fn pair_hash(base: AssetId, quote: AssetId) -> B256 {
    let mut buf = [0u8; 40];
    buf[..20].copy_from_slice(base.as_slice());
    buf[20..].copy_from_slice(quote.as_slice());
    keccak256(buf)
}

/// Test fixtures.
#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures {
    use super::{AccountHash, AssetId};

    /// Token with 18 decimals used across the golden vectors.
    pub const TOKEN_A: AssetId = AssetId::with_last_byte(2);

    /// Token with 8 decimals used across the golden vectors.
    pub const TOKEN_B: AssetId = AssetId::with_last_byte(3);

    /// A fresh random exchange account.
    #[must_use]
    pub fn random_account() -> AccountHash {
        AccountHash::from(rand::random::<[u8; 32]>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_hash_deterministic() {
        let a = Address::with_last_byte(2);
        let b = Address::with_last_byte(3);
        assert_eq!(pair_hash(a, b), pair_hash(a, b));
    }

    #[test]
    fn pair_hash_is_ordered() {
        let a = Address::with_last_byte(2);
        let b = Address::with_last_byte(3);
        assert_ne!(pair_hash(a, b), pair_hash(b, a));
    }

    #[test]
    fn fixture_tokens_are_not_native() {
        assert_ne!(fixtures::TOKEN_A, crate::constants::NATIVE_ASSET);
        assert_ne!(fixtures::TOKEN_B, crate::constants::NATIVE_ASSET);
    }

    #[test]
    fn random_accounts_differ() {
        assert_ne!(fixtures::random_account(), fixtures::random_account());
    }
}
