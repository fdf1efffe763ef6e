//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod matrix;

pub use matrix::{
    AlternativeEvaluation, DefaultWorkspaceHandler, EditMatrixCommand, EditMatrixHandler,
    EvaluateMatrixCommand, EvaluateMatrixHandler, MatrixEvaluation, RuleDefaults,
    WorkspaceSnapshot,
};
