//! Route configuration for matrix endpoints.
//!
//! Configures Axum router with decision matrix routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    edit_matrix, evaluate_matrix, get_default_workspace, list_rules, MatrixAppState,
};

/// Creates the matrix router with all endpoints.
///
/// Routes:
/// - `GET /api/matrix/rules` - List available decision rules
/// - `GET /api/matrix/default` - Default workspace, evaluated
/// - `POST /api/matrix/evaluate` - Evaluate a payoff matrix
/// - `POST /api/matrix/edit` - Apply one workspace edit and re-evaluate
pub fn matrix_router() -> Router<MatrixAppState> {
    Router::new()
        .route("/api/matrix/rules", get(list_rules))
        .route("/api/matrix/default", get(get_default_workspace))
        .route("/api/matrix/evaluate", post(evaluate_matrix))
        .route("/api/matrix/edit", post(edit_matrix))
}
