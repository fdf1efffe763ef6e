//! HTTP handlers for matrix endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    DefaultWorkspaceHandler, EditMatrixHandler, EvaluateMatrixHandler, RuleDefaults,
};
use crate::domain::analysis::RuleKind;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{
    EditMatrixRequest, ErrorResponse, EvaluateMatrixRequest, MatrixEvaluation, RuleDescriptor,
    RulesResponse, WorkspaceSnapshot,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Matrix API error that implements IntoResponse.
#[derive(Debug)]
pub struct MatrixApiError(DomainError);

impl MatrixApiError {
    /// HTTP status for the wrapped domain error.
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::UnsupportedRule => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            code if code.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for MatrixApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for MatrixApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = if status.is_server_error() {
            tracing::error!(error = %self.0, "Matrix request failed");
            ErrorResponse::internal("Internal error")
        } else {
            tracing::debug!(error = %self.0, "Rejected matrix request");
            ErrorResponse::from(&self.0)
        };
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for matrix endpoints.
///
/// Holds only immutable rule defaults; every request is evaluated from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixAppState {
    pub defaults: RuleDefaults,
}

impl MatrixAppState {
    pub fn new(defaults: RuleDefaults) -> Self {
        Self { defaults }
    }

    pub fn evaluate_handler(&self) -> EvaluateMatrixHandler {
        EvaluateMatrixHandler::new(self.defaults)
    }

    pub fn edit_handler(&self) -> EditMatrixHandler {
        EditMatrixHandler::new(self.defaults)
    }

    pub fn default_workspace_handler(&self) -> DefaultWorkspaceHandler {
        DefaultWorkspaceHandler::new(self.defaults)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/matrix/rules
///
/// Lists the available decision rules.
pub async fn list_rules() -> Json<RulesResponse> {
    Json(RulesResponse {
        rules: RuleKind::ALL.into_iter().map(RuleDescriptor::from).collect(),
    })
}

/// GET /api/matrix/default
///
/// Returns the starting workspace evaluated with the default rule.
pub async fn get_default_workspace(
    State(state): State<MatrixAppState>,
) -> Result<Json<WorkspaceSnapshot>, MatrixApiError> {
    let snapshot = state.default_workspace_handler().handle()?;
    Ok(Json(snapshot))
}

/// POST /api/matrix/evaluate
///
/// Scores a payoff matrix under one rule.
pub async fn evaluate_matrix(
    State(state): State<MatrixAppState>,
    Json(request): Json<EvaluateMatrixRequest>,
) -> Result<Json<MatrixEvaluation>, MatrixApiError> {
    let evaluation = state.evaluate_handler().handle(request.into())?;
    Ok(Json(evaluation))
}

/// POST /api/matrix/edit
///
/// Applies one edit to a workspace and returns it re-evaluated.
pub async fn edit_matrix(
    State(state): State<MatrixAppState>,
    Json(request): Json<EditMatrixRequest>,
) -> Result<Json<WorkspaceSnapshot>, MatrixApiError> {
    let snapshot = state.edit_handler().handle(request.into())?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_rule_is_unprocessable() {
        let err = MatrixApiError::from(DomainError::new(ErrorCode::UnsupportedRule, "nope"));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn input_errors_are_bad_requests() {
        for code in [
            ErrorCode::InvalidMatrixShape,
            ErrorCode::InvalidParameter,
            ErrorCode::InvalidFormat,
            ErrorCode::IndexOutOfRange,
            ErrorCode::CannotRemoveLast,
            ErrorCode::NonFiniteScore,
        ] {
            let err = MatrixApiError::from(DomainError::new(code, "bad input"));
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn internal_errors_are_server_errors() {
        let err = MatrixApiError::from(DomainError::new(ErrorCode::InternalError, "boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn list_rules_returns_all_five_in_order() {
        let Json(response) = list_rules().await;
        let ids: Vec<&str> = response.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["maximin", "maximax", "laplace", "hurwicz", "savage"]);
    }
}
