//! HTTP router construction.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, ledger::Ledger};

/// Build the application router over `ledger`.
///
/// # Routes
///
/// - `GET /health`
/// - `POST /api/v1/accounts`, `GET /api/v1/accounts/{id}`
/// - `POST /api/v1/accounts/{id}/pockets`, `GET /api/v1/pockets/{id}`
/// - `POST /api/v1/transfers/pocket`, `POST /api/v1/transfers/account`
pub fn app<L: Ledger>(ledger: Arc<L>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check::<L>))
        // Entity routes
        .route(
            "/api/v1/accounts",
            post(handlers::accounts::create_account::<L>),
        )
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account::<L>),
        )
        .route(
            "/api/v1/accounts/{id}/pockets",
            post(handlers::accounts::create_pocket::<L>),
        )
        .route(
            "/api/v1/pockets/{id}",
            get(handlers::accounts::get_pocket::<L>),
        )
        // Transfer routes
        .route(
            "/api/v1/transfers/pocket",
            post(handlers::transfers::transfer_to_pocket::<L>),
        )
        .route(
            "/api/v1/transfers/account",
            post(handlers::transfers::transfer_between_accounts::<L>),
        )
        .layer(TraceLayer::new_for_http())
        // Share the ledger with all handlers via State extraction
        .with_state(ledger)
}
