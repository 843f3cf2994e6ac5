//! In-memory account state.

use crate::ports::outbound::AccountStateStore;
use shared_crypto::Secp256k1PublicKey;
use shared_types::{AccountAddress, StoreError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Clone, Copy)]
struct AccountRecord {
    pub_key: Secp256k1PublicKey,
    sequence: u64,
}

/// In-memory implementation of [`AccountStateStore`].
///
/// A single write lock covers the read and the increment of a sequence, so
/// concurrent attempts always consume distinct values. Records exist only
/// for initialised accounts, so sequences are never consumed before `init`.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<AccountAddress, AccountRecord>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account with a key at an arbitrary sequence.
    pub fn seed(
        &self,
        account: AccountAddress,
        pub_key: Secp256k1PublicKey,
        sequence: u64,
    ) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        accounts.insert(
            account,
            AccountRecord { pub_key, sequence },
        );
        Ok(())
    }
}

impl AccountStateStore for InMemoryAccountStore {
    fn initialize(
        &self,
        account: &AccountAddress,
        pub_key: Secp256k1PublicKey,
    ) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        match accounts.entry(*account) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(account.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(AccountRecord {
                    pub_key,
                    sequence: 0,
                });
                Ok(())
            }
        }
    }

    fn fetch_and_increment_sequence(&self, account: &AccountAddress) -> Result<u64, StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let record = accounts
            .get_mut(account)
            .ok_or_else(|| StoreError::NotFound(account.to_string()))?;
        let current = record.sequence;
        record.sequence = current
            .checked_add(1)
            .ok_or_else(|| StoreError::SequenceOverflow(account.to_string()))?;
        Ok(current)
    }

    fn current_sequence(&self, account: &AccountAddress) -> Result<u64, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.get(account).map_or(0, |r| r.sequence))
    }

    fn public_key(
        &self,
        account: &AccountAddress,
    ) -> Result<Option<Secp256k1PublicKey>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.get(account).map(|r| r.pub_key))
    }

    fn set_public_key(
        &self,
        account: &AccountAddress,
        pub_key: Secp256k1PublicKey,
    ) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let record = accounts
            .get_mut(account)
            .ok_or_else(|| StoreError::NotFound(account.to_string()))?;
        record.pub_key = pub_key;
        Ok(())
    }
}
