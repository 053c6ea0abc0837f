//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.
//! Handlers return plain JSON bodies; errors convert to `{ "error": ... }`
//! via `AppError`'s `IntoResponse`.

mod members;
mod scans;
mod stats;

pub use members::*;
pub use scans::*;
pub use stats::*;

use axum::Json;

use crate::errors::AppError;

/// Handler result: a JSON body or an error response.
pub type ApiResult<T> = Result<Json<T>, AppError>;
