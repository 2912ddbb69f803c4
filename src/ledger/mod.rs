//! Ledger storage abstraction.
//!
//! The services never touch a database directly. They open a unit of work
//! from a [`Ledger`], look entities up and save them through the store
//! traits, then commit. Dropping a unit of work without committing rolls
//! every write in it back.
//!
//! Two ledgers are provided:
//! - [`PgLedger`]: PostgreSQL through sqlx, one database transaction per unit of work
//! - [`MemoryLedger`]: in-process maps, units of work are serialized by a lock

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Account, Pocket};

pub mod memory;
pub mod postgres;

pub use memory::MemoryLedger;
pub use postgres::PgLedger;

/// Account lookups and writes inside a unit of work.
#[async_trait]
pub trait AccountStore: Send {
    /// Fetch an account by id.
    ///
    /// Inside a unit of work the returned row stays locked until commit or
    /// rollback, so the caller can read-modify-write it safely.
    async fn find_account(&mut self, id: Uuid) -> Result<Option<Account>, AppError>;

    /// Insert or update an account, returning the stored value.
    async fn save_account(&mut self, account: Account) -> Result<Account, AppError>;
}

/// Pocket lookups and writes inside a unit of work.
#[async_trait]
pub trait PocketStore: Send {
    async fn find_pocket(&mut self, id: Uuid) -> Result<Option<Pocket>, AppError>;

    async fn save_pocket(&mut self, pocket: Pocket) -> Result<Pocket, AppError>;
}

/// An open atomic unit of work over both stores.
#[async_trait]
pub trait UnitOfWork: AccountStore + PocketStore + Sized {
    /// Make every write of this unit of work visible at once.
    async fn commit(self) -> Result<(), AppError>;

    /// Discard every write of this unit of work.
    async fn rollback(self) -> Result<(), AppError>;
}

/// Source of units of work.
#[async_trait]
pub trait Ledger: Send + Sync + 'static {
    type Work: UnitOfWork + 'static;

    async fn begin(&self) -> Result<Self::Work, AppError>;

    /// Verify the backing storage is reachable.
    async fn health_check(&self) -> Result<(), AppError>;
}

/// Commit `work` when `result` is Ok, roll it back otherwise.
///
/// A failed rollback is logged and the original error is returned; the
/// backend discards the uncommitted writes anyway once `work` is gone.
pub async fn complete<W, T>(work: W, result: Result<T, AppError>) -> Result<T, AppError>
where
    W: UnitOfWork,
{
    match result {
        Ok(value) => {
            work.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = work.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
