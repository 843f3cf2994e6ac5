//! In-process collaborators: header source, account registry and the
//! privileged-caller gate.

use crate::config::AccountConfig;
use crate::ports::outbound::{AccountRegistry, CallerAuthority, HeaderService};
use shared_types::{AccountAddress, CallerId, CollaboratorError, ExecutionContext};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

fn poisoned(service: &'static str) -> CollaboratorError {
    CollaboratorError::Unavailable {
        service,
        reason: "lock poisoned".to_string(),
    }
}

/// Header source returning a fixed chain id; `None` means unreachable.
#[derive(Debug, Default)]
pub struct StaticHeaderService {
    chain_id: RwLock<Option<String>>,
}

impl StaticHeaderService {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: RwLock::new(Some(chain_id.into())),
        }
    }

    /// A header source that is never reachable.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set_chain_id(&self, chain_id: Option<String>) {
        if let Ok(mut guard) = self.chain_id.write() {
            *guard = chain_id;
        }
    }
}

impl HeaderService for StaticHeaderService {
    fn get_chain_id(&self) -> Result<String, CollaboratorError> {
        let guard = self.chain_id.read().map_err(|_| poisoned("header"))?;
        guard.clone().ok_or(CollaboratorError::Unavailable {
            service: "header",
            reason: "no header information".to_string(),
        })
    }
}

/// Account registry backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryAccountRegistry {
    numbers: RwLock<HashMap<AccountAddress, u64>>,
    offline: AtomicBool,
}

impl InMemoryAccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, address: AccountAddress, account_number: u64) {
        if let Ok(mut numbers) = self.numbers.write() {
            numbers.insert(address, account_number);
        }
    }

    /// Simulate the registry being unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

impl AccountRegistry for InMemoryAccountRegistry {
    fn get_account_number(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<u64>, CollaboratorError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CollaboratorError::Unavailable {
                service: "account registry",
                reason: "offline".to_string(),
            });
        }
        let numbers = self
            .numbers
            .read()
            .map_err(|_| poisoned("account registry"))?;
        Ok(numbers.get(address).copied())
    }
}

/// Allows exactly one module to drive privileged operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCallerAuthority {
    module: String,
}

impl ModuleCallerAuthority {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn from_config(config: &AccountConfig) -> Self {
        Self::new(config.privileged_module.clone())
    }
}

impl CallerAuthority for ModuleCallerAuthority {
    fn is_privileged_caller(&self, ctx: &ExecutionContext) -> bool {
        matches!(&ctx.sender, CallerId::Module(name) if *name == self.module)
    }
}
