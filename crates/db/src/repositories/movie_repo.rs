//! Repository for the `movies` table.

use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, img, summary";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (name, img, summary)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.name)
            .bind(&input.img)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of movies in a single statement.
    ///
    /// No-op for an empty slice.
    pub async fn insert_many(pool: &PgPool, inputs: &[CreateMovie]) -> Result<(), sqlx::Error> {
        if inputs.is_empty() {
            return Ok(());
        }

        let mut builder =
            sqlx::QueryBuilder::<sqlx::Postgres>::new("INSERT INTO movies (name, img, summary) ");
        builder.push_values(inputs, |mut row, movie| {
            row.push_bind(&movie.name)
                .push_bind(&movie.img)
                .push_bind(&movie.summary);
        });
        builder.build().execute(pool).await?;
        Ok(())
    }

    /// List all movies in the store's natural retrieval order.
    ///
    /// No filtering, sorting, or pagination; the order is not guaranteed
    /// stable across calls.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                 name = COALESCE($2, name),
                 img = COALESCE($3, img),
                 summary = COALESCE($4, summary)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.img)
            .bind(&input.summary)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }
}
