//! In-memory exchange state: per-account order nonces and median prices.
//!
//! This is the persisted store the nonce allocator reconciles against.
//! It has value semantics: [`ExchangeStateDb::copy`] yields an independent
//! view that never aliases the source, so a managed state can diverge
//! from the db it was built from.

use std::collections::BTreeMap;

use alloy_primitives::{B256, U256};
use dexcore_types::AccountHash;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Persisted state of one exchange account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeAccount {
    nonce: u64,
}

impl ExchangeAccount {
    /// Canonical next order nonce.
    #[must_use]
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn set_nonce(&mut self, nonce: u64) {
        self.nonce = nonce;
    }
}

/// Exchange accounts and median price records.
///
/// Maps are ordered so [`state_root`](Self::state_root) is identical on
/// every node holding the same contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeStateDb {
    exchanges: BTreeMap<AccountHash, ExchangeAccount>,
    median_prices: BTreeMap<B256, U256>,
}

impl ExchangeStateDb {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent copy of this state.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Account for `addr`, created with nonce zero if absent.
    pub fn get_or_create_account(&mut self, addr: AccountHash) -> &mut ExchangeAccount {
        self.exchanges.entry(addr).or_default()
    }

    /// Read-only account lookup; `None` if it was never created.
    #[must_use]
    pub fn account(&self, addr: &AccountHash) -> Option<&ExchangeAccount> {
        self.exchanges.get(addr)
    }

    /// Canonical nonce of `addr`, zero for unknown accounts.
    #[must_use]
    pub fn nonce_of(&self, addr: &AccountHash) -> u64 {
        self.account(addr).map_or(0, ExchangeAccount::nonce)
    }

    pub fn set_nonce(&mut self, addr: AccountHash, nonce: u64) {
        self.get_or_create_account(addr).set_nonce(nonce);
    }

    /// Record the median price of `pair` for the epoch just closed.
    pub fn set_median_price_before_epoch(&mut self, pair: B256, price: U256) {
        self.median_prices.insert(pair, price);
    }

    #[must_use]
    pub fn median_price_before_epoch(&self, pair: &B256) -> Option<U256> {
        self.median_prices.get(pair).copied()
    }

    /// Number of exchange accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// SHA-256 digest over every account and price record in key order.
    #[must_use]
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"dexcore:state_root:v1:");

        hasher.update((self.exchanges.len() as u64).to_le_bytes());
        for (addr, account) in &self.exchanges {
            hasher.update(addr.as_slice());
            hasher.update(account.nonce.to_le_bytes());
        }

        hasher.update((self.median_prices.len() as u64).to_le_bytes());
        for (pair, price) in &self.median_prices {
            hasher.update(pair.as_slice());
            hasher.update(price.to_be_bytes::<32>());
        }

        hasher.finalize().into()
    }

    /// Hex form of [`state_root`](Self::state_root), for logs.
    #[must_use]
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }
}
