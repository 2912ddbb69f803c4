//! PostgreSQL ledger tests
//!
//! Need a reachable database: run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.
//! `#[sqlx::test]` creates a fresh database per test and applies `migrations/`.

use pocket_ledger::{
    AppError, Entity, PgLedger, transfer_between_accounts, transfer_to_pocket,
    ledger::{AccountStore, Ledger, PocketStore, UnitOfWork},
    models::{Account, Pocket},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use uuid::Uuid;

async fn seed(ledger: &PgLedger, account_balance: Decimal, pocket_balance: Decimal) -> (Account, Pocket) {
    let mut work = ledger.begin().await.unwrap();
    let account = work
        .save_account(Account::new("main", account_balance, "ACTIVE"))
        .await
        .unwrap();
    let pocket = work
        .save_pocket(Pocket::new(account.id, "savings", pocket_balance))
        .await
        .unwrap();
    work.commit().await.unwrap();
    (account, pocket)
}

async fn balances(pool: &PgPool, account_id: Uuid, pocket_id: Uuid) -> (Decimal, Decimal) {
    let account: Decimal = sqlx::query_scalar("SELECT balance FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_one(pool)
        .await
        .unwrap();
    let pocket: Decimal = sqlx::query_scalar("SELECT balance FROM pockets WHERE id = $1")
        .bind(pocket_id)
        .fetch_one(pool)
        .await
        .unwrap();
    (account, pocket)
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_transfer_to_pocket_persists_both_sides(pool: PgPool) {
    let ledger = PgLedger::new(pool.clone());
    let (account, pocket) = seed(&ledger, dec!(500), dec!(100)).await;

    let updated = transfer_to_pocket(&ledger, account.id, pocket.id, dec!(200))
        .await
        .unwrap();

    assert_eq!(updated.balance, dec!(300));
    assert_eq!(
        balances(&pool, account.id, pocket.id).await,
        (dec!(300), dec!(300))
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_failed_transfer_leaves_rows_untouched(pool: PgPool) {
    let ledger = PgLedger::new(pool.clone());
    let (account, pocket) = seed(&ledger, dec!(100), dec!(100)).await;

    let err = transfer_to_pocket(&ledger, account.id, pocket.id, dec!(200))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InsufficientFunds { .. }));
    assert_eq!(
        balances(&pool, account.id, pocket.id).await,
        (dec!(100), dec!(100))
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_account_transfers_do_not_lose_updates(pool: PgPool) {
    let ledger = PgLedger::new(pool.clone());
    let (a, _) = seed(&ledger, dec!(1000), dec!(0)).await;
    let (b, _) = seed(&ledger, dec!(1000), dec!(0)).await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let ledger = ledger.clone();
        let (from, to) = if i % 2 == 0 { (a.id, b.id) } else { (b.id, a.id) };
        handles.push(tokio::spawn(async move {
            transfer_between_accounts(&ledger, from, to, dec!(10)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let total: Decimal =
        sqlx::query_scalar("SELECT SUM(balance) FROM accounts WHERE id = ANY($1)")
            .bind(vec![a.id, b.id])
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(total, dec!(2000));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_destination(pool: PgPool) {
    let ledger = PgLedger::new(pool);
    let (account, _) = seed(&ledger, dec!(100), dec!(0)).await;

    let err = transfer_between_accounts(&ledger, account.id, Uuid::new_v4(), dec!(10))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(Entity::DestinationAccount)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_sub_cent_amount_is_rejected_before_rounding(pool: PgPool) {
    let ledger = PgLedger::new(pool.clone());
    let (account, pocket) = seed(&ledger, dec!(1), dec!(0)).await;

    for _ in 0..3 {
        let err = transfer_to_pocket(&ledger, account.id, pocket.id, dec!(0.00005))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
    }

    let (account_balance, pocket_balance) = balances(&pool, account.id, pocket.id).await;
    assert_eq!(account_balance + pocket_balance, dec!(1));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_credit_past_column_limit_overflows(pool: PgPool) {
    let ledger = PgLedger::new(pool.clone());
    let (a, _) = seed(&ledger, dec!(900000000000000), dec!(0)).await;
    let (b, _) = seed(&ledger, dec!(900000000000000), dec!(0)).await;

    let err = transfer_between_accounts(&ledger, a.id, b.id, dec!(200000000000000))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BalanceOverflow));
    let total: Decimal =
        sqlx::query_scalar("SELECT SUM(balance) FROM accounts WHERE id = ANY($1)")
            .bind(vec![a.id, b.id])
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(total, dec!(1800000000000000));
}
