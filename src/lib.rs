//! Pocket Ledger
//!
//! An account/pocket ledger with two money-movement rules:
//!
//! - **Rule 1**: move funds from an account into one of its pockets
//! - **Rule 2**: move funds directly between two accounts
//!
//! # Architecture
//!
//! - [`ledger`] - Store traits and the unit of work, with PostgreSQL and in-memory ledgers
//! - [`services`] - Transfer rules plus account/pocket management
//! - [`handlers`] / [`routes`] - Axum JSON API over the services
//! - [`error`] - `AppError` and its HTTP mapping
//! - [`config`] / [`db`] - Environment configuration and connection pool

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{AppError, Entity};
pub use ledger::{Ledger, MemoryLedger, PgLedger};
pub use models::{Account, Pocket};
pub use services::transfer_service::{transfer_between_accounts, transfer_to_pocket};
