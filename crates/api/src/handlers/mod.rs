//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `movie_db` and map
//! store faults to [`crate::error::AppError`] at each call site.

pub mod movie;
