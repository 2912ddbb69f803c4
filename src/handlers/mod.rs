//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function, generic over the ledger, that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls the matching service
//! 3. Returns HTTP response (JSON, status code)

/// Account and pocket endpoints
pub mod accounts;
pub mod health;
/// Transfer endpoints
pub mod transfers;
