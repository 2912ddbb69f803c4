//! In-memory ledger.
//!
//! Used when no database is configured and by the test suites. A unit of
//! work owns the ledger lock from `begin` until it is committed or dropped,
//! and stages its writes locally; only `commit` copies them into the shared
//! maps.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use super::{AccountStore, Ledger, PocketStore, UnitOfWork};
use crate::error::AppError;
use crate::models::{Account, Pocket};

#[derive(Debug, Default)]
struct LedgerState {
    accounts: HashMap<Uuid, Account>,
    pockets: HashMap<Uuid, Pocket>,
}

/// Ledger kept in process memory. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    type Work = MemoryUnitOfWork;

    async fn begin(&self) -> Result<MemoryUnitOfWork, AppError> {
        let state = Arc::clone(&self.state).lock_owned().await;
        Ok(MemoryUnitOfWork {
            state,
            accounts: HashMap::new(),
            pockets: HashMap::new(),
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Exclusive view of a [`MemoryLedger`] with staged writes.
pub struct MemoryUnitOfWork {
    state: OwnedMutexGuard<LedgerState>,
    accounts: HashMap<Uuid, Account>,
    pockets: HashMap<Uuid, Pocket>,
}

#[async_trait]
impl AccountStore for MemoryUnitOfWork {
    async fn find_account(&mut self, id: Uuid) -> Result<Option<Account>, AppError> {
        Ok(self
            .accounts
            .get(&id)
            .or_else(|| self.state.accounts.get(&id))
            .cloned())
    }

    async fn save_account(&mut self, mut account: Account) -> Result<Account, AppError> {
        account.updated_at = Utc::now();
        self.accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

#[async_trait]
impl PocketStore for MemoryUnitOfWork {
    async fn find_pocket(&mut self, id: Uuid) -> Result<Option<Pocket>, AppError> {
        Ok(self
            .pockets
            .get(&id)
            .or_else(|| self.state.pockets.get(&id))
            .cloned())
    }

    async fn save_pocket(&mut self, mut pocket: Pocket) -> Result<Pocket, AppError> {
        pocket.updated_at = Utc::now();
        self.pockets.insert(pocket.id, pocket.clone());
        Ok(pocket)
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self) -> Result<(), AppError> {
        let MemoryUnitOfWork {
            mut state,
            accounts,
            pockets,
        } = self;
        state.accounts.extend(accounts);
        state.pockets.extend(pockets);
        Ok(())
    }

    async fn rollback(self) -> Result<(), AppError> {
        Ok(())
    }
}
