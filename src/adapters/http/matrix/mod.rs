//! Matrix HTTP adapter module.
//!
//! Provides REST API endpoints for evaluating and editing decision matrices.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{MatrixApiError, MatrixAppState};
pub use routes::matrix_router;
