//! Matrix shape and edit errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// The two axes of a payoff matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Rows: candidate decisions.
    Alternative,
    /// Columns: states of nature.
    State,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Alternative => write!(f, "alternative"),
            Axis::State => write!(f, "state"),
        }
    }
}

/// The matrix is not a non-empty rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Payoff matrix has no alternatives")]
    NoAlternatives,

    #[error("Payoff matrix has no states of nature")]
    NoStates,

    #[error("Alternative {row} has {actual} payoffs, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Payoff buffer of length {len} does not divide into rows of {columns}")]
    BufferMismatch { len: usize, columns: usize },
}

/// Errors raised while building or editing a payoff matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Payoff at alternative {row}, state {column} is not finite")]
    NonFinitePayoff { row: usize, column: usize },

    #[error("{axis} index {index} is out of range (count {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    #[error("Cannot remove the last remaining {0}")]
    CannotRemoveLast(Axis),

    #[error("Expected {expected} {axis} labels, got {actual}")]
    LabelMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    InvalidPayoff(#[from] ValidationError),
}

impl From<ShapeError> for DomainError {
    fn from(err: ShapeError) -> Self {
        DomainError::new(ErrorCode::InvalidMatrixShape, err.to_string())
    }
}

impl From<MatrixError> for DomainError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::Shape(shape) => shape.into(),
            MatrixError::NonFinitePayoff { row, column } => {
                DomainError::new(ErrorCode::InvalidPayoff, err.to_string())
                    .with_detail("row", row.to_string())
                    .with_detail("column", column.to_string())
            }
            MatrixError::IndexOutOfRange { axis, index, .. } => {
                DomainError::new(ErrorCode::IndexOutOfRange, err.to_string())
                    .with_detail("axis", axis.to_string())
                    .with_detail("index", index.to_string())
            }
            MatrixError::CannotRemoveLast(axis) => {
                DomainError::new(ErrorCode::CannotRemoveLast, err.to_string())
                    .with_detail("axis", axis.to_string())
            }
            MatrixError::LabelMismatch { axis, .. } => {
                DomainError::new(ErrorCode::InvalidMatrixShape, err.to_string())
                    .with_detail("axis", axis.to_string())
            }
            MatrixError::InvalidPayoff(validation) => validation.into(),
        }
    }
}
