//! HTTP DTOs for matrix endpoints.
//!
//! Evaluation reports and workspace snapshots are already designed for
//! serialization, so responses reuse them directly.

pub use crate::application::handlers::{AlternativeEvaluation, MatrixEvaluation, WorkspaceSnapshot};

use serde::{Deserialize, Serialize};

use crate::application::handlers::{EditMatrixCommand, EvaluateMatrixCommand};
use crate::domain::analysis::RuleKind;
use crate::domain::foundation::DomainError;
use crate::domain::matrix::{alternative_label, MatrixEdit};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to evaluate a payoff matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateMatrixRequest {
    /// Payoff rows, one per alternative
    pub payoffs: Vec<Vec<f64>>,
    /// Rule identifier: maximin, maximax, laplace, hurwicz or savage
    pub rule: String,
    /// Hurwicz coefficient
    #[serde(default)]
    pub lambda: Option<f64>,
    /// Alternative labels; generated when omitted
    #[serde(default)]
    pub alternatives: Option<Vec<String>>,
    /// State labels; generated when omitted
    #[serde(default)]
    pub states: Option<Vec<String>>,
}

impl From<EvaluateMatrixRequest> for EvaluateMatrixCommand {
    fn from(request: EvaluateMatrixRequest) -> Self {
        let rows = request.payoffs.len();
        let columns = request.payoffs.first().map(Vec::len).unwrap_or(0);

        Self {
            alternatives: request
                .alternatives
                .unwrap_or_else(|| (0..rows).map(alternative_label).collect()),
            states: request
                .states
                .unwrap_or_else(|| (1..=columns).map(|n| format!("State {}", n)).collect()),
            payoffs: request.payoffs,
            rule: request.rule,
            lambda: request.lambda,
        }
    }
}

/// Workspace as submitted by the client.
///
/// Not validated on deserialization; the handler checks shape and labels and
/// reports failures as an `ErrorResponse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspacePayload {
    pub alternatives: Vec<String>,
    pub states: Vec<String>,
    pub payoffs: Vec<Vec<f64>>,
}

/// Request to apply one edit to a workspace and re-evaluate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditMatrixRequest {
    pub workspace: WorkspacePayload,
    pub edit: MatrixEdit,
    pub rule: String,
    #[serde(default)]
    pub lambda: Option<f64>,
}

impl From<EditMatrixRequest> for EditMatrixCommand {
    fn from(request: EditMatrixRequest) -> Self {
        Self {
            alternatives: request.workspace.alternatives,
            states: request.workspace.states,
            payoffs: request.workspace.payoffs,
            edit: request.edit,
            rule: request.rule,
            lambda: request.lambda,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A selectable decision rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub id: String,
    pub label: String,
    pub requires_lambda: bool,
}

impl From<RuleKind> for RuleDescriptor {
    fn from(kind: RuleKind) -> Self {
        Self {
            id: kind.identifier().to_string(),
            label: kind.label().to_string(),
            requires_lambda: kind.requires_lambda(),
        }
    }
}

/// Every available rule, in menu order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    pub rules: Vec<RuleDescriptor>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };

        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
