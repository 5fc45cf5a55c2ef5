//! Managed order-nonce allocator for exchange accounts.
//!
//! A [`ManagedState`] owns a copy of an [`ExchangeStateDb`] and tracks, per
//! exchange account, a window of nonce slots starting at the account's
//! persisted nonce (`nstart`). Each slot is `true` once issued and `false`
//! while free.
//!
//! ## Window rules
//!
//! - Slots are only ever appended at the tail or truncated from some
//!   nonce onward; nothing below `nstart` is ever handed out.
//! - Every access reconciles against the backing store: if the persisted
//!   nonce has moved past the window's end, the window is rebuilt from it
//!   and in-memory reservations are dropped.
//!
//! ## Preview vs. commit
//!
//! [`ManagedState::new_nonce`] returns the first free slot *without*
//! marking it, and only marks a slot when it has to append one. Callers
//! that need an explicit two-phase flow use
//! [`preview_nonce`](ManagedState::preview_nonce), which never marks, then
//! [`commit_nonce`](ManagedState::commit_nonce).
//!
//! ## Limits
//!
//! A window never grows past `MAX_NONCE_WINDOW` slots, and `nstart + len`
//! always fits in a `u64`; the highest issuable nonce is `u64::MAX - 1`.
//! Growth beyond either bound is refused, never clamped, so a nonce is
//! issued at most once.
//!
//! One coarse `RwLock` guards the backing store and the whole account map.
//! Everything that may materialize an account takes the write lock.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use dexcore_types::{AccountHash, DexError, Result, constants::MAX_NONCE_WINDOW};
use parking_lot::RwLock;

use crate::ExchangeStateDb;

/// Tracked nonce slots of one exchange account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonceWindow {
    nstart: u64,
    nonces: Vec<bool>,
}

impl NonceWindow {
    fn new(nstart: u64) -> Self {
        Self {
            nstart,
            nonces: Vec::new(),
        }
    }

    /// Lowest nonce tracked.
    #[must_use]
    pub fn nstart(&self) -> u64 {
        self.nstart
    }

    /// Slot states from `nstart` upward; `true` = issued.
    #[must_use]
    pub fn slots(&self) -> &[bool] {
        &self.nonces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nonces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nonces.is_empty()
    }

    /// One past the highest tracked nonce.
    ///
    /// Exact: every growth path keeps `nstart + len` within `u64`.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.nstart.saturating_add(self.nonces.len() as u64)
    }

    /// Refuse to grow the window to `new_len` slots if that breaks either
    /// the slot limit or the `u64` nonce space.
    fn check_growth(&self, account: AccountHash, new_len: usize) -> Result<()> {
        if new_len > MAX_NONCE_WINDOW {
            return Err(DexError::NonceWindowOverflow {
                account,
                max: MAX_NONCE_WINDOW,
            });
        }
        u64::try_from(new_len)
            .ok()
            .and_then(|len| self.nstart.checked_add(len))
            .map(|_| ())
            .ok_or(DexError::NonceSpaceExhausted { account })
    }

    /// Nonce a tail append would create.
    fn next_append(&self, account: AccountHash) -> Result<u64> {
        self.check_growth(account, self.nonces.len() + 1)?;
        Ok(self.end())
    }

    fn first_free(&self) -> Option<u64> {
        self.nonces
            .iter()
            .position(|used| !used)
            .map(|i| self.nstart + i as u64)
    }
}

#[derive(Debug)]
struct Inner {
    db: ExchangeStateDb,
    exchanges: HashMap<AccountHash, NonceWindow>,
}

impl Inner {
    /// Tracked window for `addr`, materialized or reconciled against the db.
    fn account(&mut self, addr: AccountHash) -> &mut NonceWindow {
        let persisted = self.db.account(&addr).map(|a| a.nonce());
        match self.exchanges.entry(addr) {
            Entry::Vacant(slot) => {
                let nonce = self.db.get_or_create_account(addr).nonce();
                slot.insert(NonceWindow::new(nonce))
            }
            Entry::Occupied(slot) => {
                let window = slot.into_mut();
                if let Some(nonce) = persisted {
                    if window.end() < nonce {
                        tracing::debug!(
                            account = %addr,
                            tracked_end = window.end(),
                            persisted = nonce,
                            "Persisted nonce advanced; rebuilding window"
                        );
                        *window = NonceWindow::new(nonce);
                    }
                }
                window
            }
        }
    }
}

/// Per-account nonce allocator backed by a private copy of the exchange state.
#[derive(Debug)]
pub struct ManagedState {
    inner: RwLock<Inner>,
}

impl ManagedState {
    /// Build a managed state over a copy of `db`.
    #[must_use]
    pub fn new(db: &ExchangeStateDb) -> Self {
        Self {
            inner: RwLock::new(Inner {
                db: db.copy(),
                exchanges: HashMap::new(),
            }),
        }
    }

    /// Replace the backing store. Tracked windows are kept and reconciled
    /// against the new store on their next access.
    pub fn set_state(&self, db: ExchangeStateDb) {
        self.inner.write().db = db;
    }

    /// Copy of the current backing store.
    #[must_use]
    pub fn state(&self) -> ExchangeStateDb {
        self.inner.read().db.copy()
    }

    /// Drop the slot for nonce `n` and every slot after it.
    ///
    /// No-op for untracked accounts and for `n` outside
    /// `[nstart, nstart + len]`.
    pub fn remove_nonce(&self, addr: AccountHash, n: u64) {
        let mut inner = self.inner.write();
        if !inner.exchanges.contains_key(&addr) {
            return;
        }
        let window = inner.account(addr);
        let Some(keep) = n.checked_sub(window.nstart) else {
            return;
        };
        let Ok(keep) = usize::try_from(keep) else {
            return;
        };
        if keep <= window.nonces.len() {
            window.nonces.truncate(keep);
        }
    }

    /// Next nonce for `addr`.
    ///
    /// Returns the first free slot without marking it; if every slot is
    /// issued, appends a new issued slot and returns it. Fails when the
    /// append would exceed the window limits.
    pub fn new_nonce(&self, addr: AccountHash) -> Result<u64> {
        let mut inner = self.inner.write();
        let window = inner.account(addr);
        if let Some(free) = window.first_free() {
            return Ok(free);
        }
        let nonce = window.next_append(addr)?;
        window.nonces.push(true);
        Ok(nonce)
    }

    /// Nonce the next order would get: first free slot, or the window end.
    /// Never marks a slot. Fails when no further slot can be appended.
    pub fn preview_nonce(&self, addr: AccountHash) -> Result<u64> {
        let mut inner = self.inner.write();
        let window = inner.account(addr);
        window
            .first_free()
            .map_or_else(|| window.next_append(addr), Ok)
    }

    /// Mark nonce `n` as issued, growing the window at its tail with free
    /// slots if `n` lies past the end.
    pub fn commit_nonce(&self, addr: AccountHash, n: u64) -> Result<()> {
        let mut inner = self.inner.write();
        let window = inner.account(addr);
        let offset = n
            .checked_sub(window.nstart)
            .ok_or(DexError::NonceBelowWindow {
                account: addr,
                nonce: n,
                nstart: window.nstart,
            })?;
        let slot = match usize::try_from(offset) {
            Ok(slot) if slot < window.nonces.len() => slot,
            other => {
                let new_len = other.map_or(usize::MAX, |o| o.saturating_add(1));
                window.check_growth(addr, new_len)?;
                window.nonces.resize(new_len, false);
                new_len - 1
            }
        };
        window.nonces[slot] = true;
        Ok(())
    }

    /// Canonical nonce for `addr`: the window end if tracked, otherwise
    /// the backing store's nonce.
    ///
    /// Takes the write lock because reconciling a tracked account may
    /// rebuild its window.
    pub fn get_nonce(&self, addr: AccountHash) -> u64 {
        let mut inner = self.inner.write();
        if inner.exchanges.contains_key(&addr) {
            inner.account(addr).end()
        } else {
            inner.db.nonce_of(&addr)
        }
    }

    /// Persist `nonce` for `addr` and restart its window there.
    pub fn set_nonce(&self, addr: AccountHash, nonce: u64) {
        let mut inner = self.inner.write();
        let account = inner.db.get_or_create_account(addr);
        account.set_nonce(nonce);
        let nstart = account.nonce();
        tracing::debug!(account = %addr, nonce = nstart, "Nonce window reset");
        inner.exchanges.insert(addr, NonceWindow::new(nstart));
    }

    /// Whether `addr` has a tracked window.
    pub fn has_account(&self, addr: AccountHash) -> bool {
        self.inner.read().exchanges.contains_key(&addr)
    }

    /// Snapshot of the tracked window for `addr`, without reconciling.
    pub fn window(&self, addr: AccountHash) -> Option<NonceWindow> {
        self.inner.read().exchanges.get(&addr).cloned()
    }
}
