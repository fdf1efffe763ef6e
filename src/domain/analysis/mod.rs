//! Analysis Module - Pure domain services for decisions under uncertainty.
//!
//! # Components
//!
//! - `DecisionRule` - Closed set of rules, each carrying only its own parameters
//! - `RuleEngine` - Scores, derivations and the recommended alternative
//! - `EvaluationResult` - Output of one evaluation, with display formatting
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. The engine reads
//! the matrix through a borrowed view and returns freshly allocated results,
//! so it can be called concurrently on any number of matrices.

mod errors;
mod evaluation;
mod rule;
mod rule_engine;

// Re-export all public types
pub use errors::EvaluationError;
pub use evaluation::EvaluationResult;
pub use rule::{DecisionRule, RuleKind, ScoreFormat};
pub use rule_engine::RuleEngine;
