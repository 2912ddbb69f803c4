//! Health check endpoint for service monitoring.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, ledger::Ledger};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Ledger storage status
    pub ledger: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "ledger": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// If the ledger storage is unreachable, returns the standard error response.
pub async fn health_check<L: Ledger>(
    State(ledger): State<Arc<L>>,
) -> Result<Json<HealthResponse>, AppError> {
    ledger.health_check().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        ledger: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
