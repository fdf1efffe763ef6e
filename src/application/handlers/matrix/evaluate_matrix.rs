//! EvaluateMatrixHandler - Command handler for scoring a labelled matrix.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::analysis::{DecisionRule, EvaluationResult, RuleEngine, RuleKind};
use crate::domain::foundation::DomainError;
use crate::domain::matrix::{MatrixWorkspace, PayoffMatrix};

use super::RuleDefaults;

/// Command to evaluate a labelled payoff matrix.
#[derive(Debug, Clone)]
pub struct EvaluateMatrixCommand {
    pub alternatives: Vec<String>,
    pub states: Vec<String>,
    pub payoffs: Vec<Vec<f64>>,
    /// Rule identifier, e.g. `"hurwicz"`.
    pub rule: String,
    /// Hurwicz coefficient; falls back to the configured default.
    pub lambda: Option<f64>,
}

/// One alternative's line in an evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeEvaluation {
    pub alternative: String,
    pub payoffs: Vec<f64>,
    pub derivation: String,
    pub score: f64,
    pub display_score: String,
    pub recommended: bool,
}

/// Evaluation result mapped back onto the workspace labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEvaluation {
    pub rule: RuleKind,
    pub rule_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda: Option<f64>,
    pub states: Vec<String>,
    pub alternatives: Vec<AlternativeEvaluation>,
    pub best_index: usize,
    pub best_alternative: String,
}

impl MatrixEvaluation {
    /// Joins an engine result with the labels it was computed for.
    ///
    /// The engine is positional only, so labels are matched by row index.
    pub fn from_result(workspace: &MatrixWorkspace, rule: &DecisionRule, result: EvaluationResult) -> Self {
        let display_scores = result.display_scores();
        let alternatives = workspace
            .alternatives()
            .iter()
            .zip(result.derivations)
            .zip(result.scores.iter().zip(display_scores))
            .enumerate()
            .map(|(index, ((label, derivation), (score, display_score)))| AlternativeEvaluation {
                alternative: label.clone(),
                payoffs: workspace.payoffs().row(index).map(<[f64]>::to_vec).unwrap_or_default(),
                derivation,
                score: *score,
                display_score,
                recommended: index == result.best_index,
            })
            .collect();

        Self {
            rule: result.rule,
            rule_label: result.rule.label().to_string(),
            lambda: rule.lambda().map(f64::from),
            states: workspace.states().to_vec(),
            alternatives,
            best_index: result.best_index,
            best_alternative: workspace
                .alternatives()
                .get(result.best_index)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

/// Resolves a rule identifier, using the configured Hurwicz default when the
/// caller gives no coefficient.
pub(crate) fn resolve_rule(
    identifier: &str,
    lambda: Option<f64>,
    defaults: &RuleDefaults,
) -> Result<DecisionRule, DomainError> {
    let lambda = lambda.unwrap_or_else(|| defaults.lambda.value());
    let rule = DecisionRule::from_identifier(identifier, Some(lambda))?;

    if let Some(lambda) = rule.lambda().filter(|lambda| !lambda.is_conventional()) {
        warn!(lambda = lambda.value(), "Hurwicz coefficient outside [0, 1]");
    }
    Ok(rule)
}

/// Assembles a workspace from raw parts, so shape and label problems surface
/// as domain errors.
pub(crate) fn build_workspace(
    alternatives: Vec<String>,
    states: Vec<String>,
    payoffs: &[Vec<f64>],
) -> Result<MatrixWorkspace, DomainError> {
    let payoffs = PayoffMatrix::from_rows(payoffs)?;
    Ok(MatrixWorkspace::new(alternatives, states, payoffs)?)
}

/// Runs the engine over a workspace and labels the outcome.
pub(crate) fn evaluate_workspace(
    workspace: &MatrixWorkspace,
    rule: &DecisionRule,
) -> Result<MatrixEvaluation, DomainError> {
    let result = RuleEngine::evaluate(workspace.payoffs().view(), rule)?;

    debug!(
        rule = %rule,
        alternatives = workspace.payoffs().rows(),
        states = workspace.payoffs().columns(),
        best_index = result.best_index,
        best_score = ?result.best_score(),
        "Evaluated payoff matrix"
    );

    Ok(MatrixEvaluation::from_result(workspace, rule, result))
}

/// Handler for evaluating matrices.
pub struct EvaluateMatrixHandler {
    defaults: RuleDefaults,
}

impl EvaluateMatrixHandler {
    pub fn new(defaults: RuleDefaults) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, cmd: EvaluateMatrixCommand) -> Result<MatrixEvaluation, DomainError> {
        // 1. Resolve the rule before touching the matrix
        let rule = resolve_rule(&cmd.rule, cmd.lambda, &self.defaults)?;

        // 2. Build a labelled, rectangular workspace
        let workspace = build_workspace(cmd.alternatives, cmd.states, &cmd.payoffs)?;

        // 3. Evaluate
        evaluate_workspace(&workspace, &rule)
    }
}
