//! Business logic services.
//!
//! Services contain the ledger rules, separated from HTTP handlers.
//! They open units of work, validate, and commit or roll back.

pub mod account_service;
pub mod transfer_service;
