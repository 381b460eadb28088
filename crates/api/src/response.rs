//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` body.
///
/// Used for every error response and for delete confirmations. Use this
/// instead of ad-hoc `serde_json::json!({ "message": ... })` to get
/// compile-time type safety and consistent serialization.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
