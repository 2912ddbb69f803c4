//! PostgreSQL ledger.
//!
//! A unit of work is one database transaction. Lookups use `FOR UPDATE`, so
//! a concurrent transfer touching the same row waits until this one commits
//! or rolls back instead of overwriting its balance.

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use super::{AccountStore, Ledger, PocketStore, UnitOfWork};
use crate::db::DbPool;
use crate::error::AppError;
use crate::models::{Account, Pocket};

/// Ledger backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgLedger {
    pool: DbPool,
}

impl PgLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Ledger for PgLedger {
    type Work = PgUnitOfWork;

    async fn begin(&self) -> Result<PgUnitOfWork, AppError> {
        let tx = self.pool.begin().await?;
        Ok(PgUnitOfWork { tx })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// An open PostgreSQL transaction.
///
/// sqlx rolls the transaction back when it is dropped uncommitted.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl AccountStore for PgUnitOfWork {
    async fn find_account(&mut self, id: Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, account_name, balance, status, created_at, updated_at
            FROM accounts
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(account)
    }

    async fn save_account(&mut self, account: Account) -> Result<Account, AppError> {
        let saved = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, account_name, balance, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (id) DO UPDATE
            SET account_name = EXCLUDED.account_name,
                balance = EXCLUDED.balance,
                status = EXCLUDED.status,
                updated_at = NOW()
            RETURNING id, account_name, balance, status, created_at, updated_at
            "#,
        )
        .bind(account.id)
        .bind(&account.account_name)
        .bind(account.balance)
        .bind(&account.status)
        .bind(account.created_at)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(saved)
    }
}

#[async_trait]
impl PocketStore for PgUnitOfWork {
    async fn find_pocket(&mut self, id: Uuid) -> Result<Option<Pocket>, AppError> {
        let pocket = sqlx::query_as::<_, Pocket>(
            r#"
            SELECT id, account_id, pocket_name, balance, created_at, updated_at
            FROM pockets
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(pocket)
    }

    async fn save_pocket(&mut self, pocket: Pocket) -> Result<Pocket, AppError> {
        let saved = sqlx::query_as::<_, Pocket>(
            r#"
            INSERT INTO pockets (id, account_id, pocket_name, balance, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (id) DO UPDATE
            SET pocket_name = EXCLUDED.pocket_name,
                balance = EXCLUDED.balance,
                updated_at = NOW()
            RETURNING id, account_id, pocket_name, balance, created_at, updated_at
            "#,
        )
        .bind(pocket.id)
        .bind(pocket.account_id)
        .bind(&pocket.pocket_name)
        .bind(pocket.balance)
        .bind(pocket.created_at)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(saved)
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
