//! Handlers for the `/movie` resource.
//!
//! Identifiers arrive as raw path segments and are parsed here rather than
//! by the router: an identifier the store cannot interpret is an internal
//! fault (500), not a request-validation failure, and a well-formed id
//! with no matching row is a 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movie_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use movie_db::repositories::MovieRepo;
use movie_db::DbId;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /movie
///
/// Persists a new record from whatever subset of fields the payload
/// supplies; none are required.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = MovieRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movie
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list_all(&state.pool)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(movies))
}

/// GET /movie/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let id = parse_movie_id(&id)?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or(AppError::NotFound { entity: "movie" })?;
    Ok(Json(movie))
}

/// PATCH /movie/{id}
///
/// Looks up the record first, then applies the partial update. The two
/// steps fail differently: a lookup fault is internal (500), a save fault
/// is a bad request (400).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let id = parse_movie_id(&id)?;

    MovieRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or(AppError::NotFound { entity: "movie" })?;

    // The row can vanish between the lookup and the save (concurrent
    // delete); there is no transaction around the two steps.
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or(AppError::NotFound { entity: "movie" })?;
    Ok(Json(movie))
}

/// DELETE /movie/{id}
///
/// Returns a confirmation message rather than the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_movie_id(&id)?;
    let deleted = MovieRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if deleted {
        Ok(Json(MessageResponse {
            message: "Deleted Movie".to_string(),
        }))
    } else {
        Err(AppError::NotFound { entity: "movie" })
    }
}

/// Parse a raw path segment into a movie id.
///
/// Failures carry the parse error's message and surface as 500.
fn parse_movie_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|e| AppError::Internal(e.to_string()))
}
