pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /movie          POST create, GET list
/// /movie/{id}     GET get_by_id, PATCH update, DELETE delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movie", movie::router())
}
