//! Evaluation error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::matrix::ShapeError;

/// Reasons the rule engine refuses to evaluate.
///
/// Evaluation is all-or-nothing: no partial scores are ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Payoff at alternative {row}, state {column} is not finite")]
    NonFinitePayoff { row: usize, column: usize },

    #[error("Score of alternative {row} is not finite")]
    NonFiniteScore { row: usize },

    #[error("Unsupported decision rule '{0}'")]
    UnsupportedRule(String),

    #[error("Invalid rule parameter: {0}")]
    InvalidParameter(#[from] ValidationError),
}

impl EvaluationError {
    /// Returns the domain error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::Shape(_) => ErrorCode::InvalidMatrixShape,
            EvaluationError::NonFinitePayoff { .. } => ErrorCode::InvalidPayoff,
            EvaluationError::NonFiniteScore { .. } => ErrorCode::NonFiniteScore,
            EvaluationError::UnsupportedRule(_) => ErrorCode::UnsupportedRule,
            EvaluationError::InvalidParameter(_) => ErrorCode::InvalidParameter,
        }
    }
}

impl From<EvaluationError> for DomainError {
    fn from(err: EvaluationError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            EvaluationError::UnsupportedRule(rule) => domain.with_detail("rule", rule),
            EvaluationError::NonFinitePayoff { row, column } => domain
                .with_detail("row", row.to_string())
                .with_detail("column", column.to_string()),
            EvaluationError::NonFiniteScore { row } => domain.with_detail("row", row.to_string()),
            EvaluationError::InvalidParameter(ValidationError::NotFinite { field, .. })
            | EvaluationError::InvalidParameter(ValidationError::InvalidFormat { field, .. }) => {
                domain.with_detail("field", field)
            }
            EvaluationError::Shape(_) => domain,
        }
    }
}
