//! Evaluation Result - Scores, derivations and the recommended alternative.

use serde::{Deserialize, Serialize};

use super::RuleKind;

/// Output of one rule evaluation.
///
/// Scores keep full precision. Use [`EvaluationResult::display_scores`] for
/// the rounded, rule-specific rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub rule: RuleKind,
    /// One score per alternative, in row order.
    pub scores: Vec<f64>,
    /// One derivation per alternative, in row order.
    pub derivations: Vec<String>,
    /// Row index of the recommended alternative.
    pub best_index: usize,
}

impl EvaluationResult {
    /// Score of the recommended alternative, if `best_index` is in range.
    pub fn best_score(&self) -> Option<f64> {
        self.scores.get(self.best_index).copied()
    }

    /// Rendered scores of every alternative.
    pub fn display_scores(&self) -> Vec<String> {
        let format = self.rule.score_format();
        self.scores.iter().map(|score| format.format(*score)).collect()
    }
}
