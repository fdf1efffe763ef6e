//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Commands (evaluate, edit) and
//! queries (default workspace) each have their own handler.

pub mod handlers;

pub use handlers::{
    DefaultWorkspaceHandler, EditMatrixCommand, EditMatrixHandler, EvaluateMatrixCommand,
    EvaluateMatrixHandler, MatrixEvaluation, RuleDefaults, WorkspaceSnapshot,
};
