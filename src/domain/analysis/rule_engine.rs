//! Rule Engine - Scores a payoff matrix under a decision rule.

use crate::domain::foundation::format_two_decimals;
use crate::domain::matrix::{flatten_rows, MatrixView};

use super::{DecisionRule, EvaluationError, EvaluationResult};

/// Decision-under-uncertainty evaluation functions.
pub struct RuleEngine;

impl RuleEngine {
    /// Evaluates every alternative under `rule` and picks the recommendation.
    ///
    /// # Algorithm
    /// - Maximin: row minimum
    /// - Maximax: row maximum
    /// - Laplace: row mean
    /// - Hurwicz: `λ·max + (1-λ)·min`
    /// - Savage: row maximum of `column max - payoff`
    ///
    /// The best alternative has the highest score, except under Savage where
    /// it has the lowest. Ties go to the lowest row index.
    ///
    /// # Edge Cases
    /// - Single state: every rule echoes that state's payoffs (regret 0)
    /// - Single alternative: always recommended
    /// - NaN or infinite payoff: `NonFinitePayoff`, nothing is scored
    /// - Score overflowing `f64` (Hurwicz with a large coefficient, Savage
    ///   regret across the whole `f64` range): `NonFiniteScore`
    pub fn evaluate(
        matrix: MatrixView<'_>,
        rule: &DecisionRule,
    ) -> Result<EvaluationResult, EvaluationError> {
        Self::ensure_finite(matrix)?;

        let (scores, derivations): (Vec<f64>, Vec<String>) = match rule {
            DecisionRule::Maximin => matrix
                .iter_rows()
                .map(|row| (row_min(row), format!("min({})", join_values(row, ", "))))
                .unzip(),
            DecisionRule::Maximax => matrix
                .iter_rows()
                .map(|row| (row_max(row), format!("max({})", join_values(row, ", "))))
                .unzip(),
            DecisionRule::Laplace => matrix
                .iter_rows()
                .map(|row| {
                    (row_mean(row), format!("({}) / {}", join_values(row, " + "), row.len()))
                })
                .unzip(),
            DecisionRule::Hurwicz { lambda } => matrix
                .iter_rows()
                .map(|row| {
                    let (min, max) = (row_min(row), row_max(row));
                    let score = lambda.value() * max + lambda.complement() * min;
                    let derivation = format!(
                        "λ·max + (1-λ)·min = {}·{} + {}·{}",
                        lambda,
                        max,
                        format_two_decimals(lambda.complement()),
                        min
                    );
                    (score, derivation)
                })
                .unzip(),
            DecisionRule::Savage => Self::savage(matrix),
        };

        if let Some(row) = scores.iter().position(|score| !score.is_finite()) {
            return Err(EvaluationError::NonFiniteScore { row });
        }

        let best_index = if rule.kind().minimizes() {
            first_extremum(&scores, |candidate, best| candidate < best)
        } else {
            first_extremum(&scores, |candidate, best| candidate > best)
        };

        Ok(EvaluationResult {
            rule: rule.kind(),
            scores,
            derivations,
            best_index,
        })
    }

    /// Evaluates nested rows, checking they form a non-empty rectangle first.
    pub fn evaluate_rows<R: AsRef<[f64]>>(
        rows: &[R],
        rule: &DecisionRule,
    ) -> Result<EvaluationResult, EvaluationError> {
        let (values, columns) = flatten_rows(rows)?;
        let view = MatrixView::new(&values, columns)?;
        Self::evaluate(view, rule)
    }

    /// Best payoff of each state across all alternatives.
    pub fn column_maxima(matrix: MatrixView<'_>) -> Vec<f64> {
        (0..matrix.columns())
            .map(|column| matrix.column(column).fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    /// Regret of every cell: its column's best payoff minus the cell's payoff.
    pub fn regret_table(matrix: MatrixView<'_>) -> Vec<Vec<f64>> {
        let maxima = Self::column_maxima(matrix);
        matrix
            .iter_rows()
            .map(|row| {
                row.iter()
                    .zip(&maxima)
                    .map(|(value, column_max)| column_max - value)
                    .collect()
            })
            .collect()
    }

    /// Maximum regret per alternative, with the per-cell breakdown.
    fn savage(matrix: MatrixView<'_>) -> (Vec<f64>, Vec<String>) {
        let maxima = Self::column_maxima(matrix);

        matrix
            .iter_rows()
            .map(|row| {
                let mut worst_regret = f64::NEG_INFINITY;
                let mut cells = Vec::with_capacity(row.len());

                for (column, (value, column_max)) in row.iter().zip(&maxima).enumerate() {
                    let regret = column_max - value;
                    worst_regret = worst_regret.max(regret);
                    cells.push(format!(
                        "(maxZ{}-{}={}-{}={})",
                        column + 1,
                        value,
                        column_max,
                        value,
                        regret
                    ));
                }

                (worst_regret, format!("max(Regret: {})", cells.join(", ")))
            })
            .unzip()
    }

    fn ensure_finite(matrix: MatrixView<'_>) -> Result<(), EvaluationError> {
        match matrix.values().iter().position(|v| !v.is_finite()) {
            Some(index) => Err(EvaluationError::NonFinitePayoff {
                row: index / matrix.columns(),
                column: index % matrix.columns(),
            }),
            None => Ok(()),
        }
    }
}

fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

fn row_max(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Row mean. Falls back to dividing before summing when the plain sum
/// overflows, so a finite mean is never reported as infinite.
fn row_mean(row: &[f64]) -> f64 {
    let count = row.len() as f64;
    let sum: f64 = row.iter().sum();
    if sum.is_finite() {
        sum / count
    } else {
        row.iter().map(|value| value / count).sum()
    }
}

fn join_values(row: &[f64], separator: &str) -> String {
    row.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Index of the first score that no later score beats.
fn first_extremum(scores: &[f64], beats: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        if beats(score, scores[best]) {
            best = index;
        }
    }
    best
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::domain::matrix::PayoffMatrix;
    use proptest::prelude::*;

    /// Integer-valued payoffs keep every sum and difference exact.
    fn arb_matrix() -> impl Strategy<Value = PayoffMatrix> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, columns)| {
            proptest::collection::vec(
                proptest::collection::vec((-1000i32..1000).prop_map(f64::from), columns),
                rows,
            )
            .prop_map(|rows| PayoffMatrix::from_rows(&rows).unwrap())
        })
    }

    fn arb_rule() -> impl Strategy<Value = DecisionRule> {
        prop_oneof![
            Just(DecisionRule::Maximin),
            Just(DecisionRule::Maximax),
            Just(DecisionRule::Laplace),
            (0.0f64..=1.0).prop_map(|lambda| DecisionRule::hurwicz(lambda).unwrap()),
            Just(DecisionRule::Savage),
        ]
    }

    proptest! {
        #[test]
        fn one_score_and_derivation_per_alternative(matrix in arb_matrix(), rule in arb_rule()) {
            let result = RuleEngine::evaluate(matrix.view(), &rule).unwrap();
            prop_assert_eq!(result.scores.len(), matrix.rows());
            prop_assert_eq!(result.derivations.len(), matrix.rows());
            prop_assert!(result.best_index < matrix.rows());
        }

        #[test]
        fn best_index_is_first_extremal_score(matrix in arb_matrix(), rule in arb_rule()) {
            let result = RuleEngine::evaluate(matrix.view(), &rule).unwrap();
            let target = if rule.kind().minimizes() {
                result.scores.iter().copied().fold(f64::INFINITY, f64::min)
            } else {
                result.scores.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            };
            let first = result.scores.iter().position(|s| *s == target).unwrap();
            prop_assert_eq!(result.best_index, first);
        }

        #[test]
        fn evaluation_is_deterministic(matrix in arb_matrix(), rule in arb_rule()) {
            let first = RuleEngine::evaluate(matrix.view(), &rule).unwrap();
            let second = RuleEngine::evaluate(matrix.view(), &rule).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn hurwicz_extremes_reduce_to_maximax_and_maximin(matrix in arb_matrix()) {
            let optimistic = RuleEngine::evaluate(matrix.view(), &DecisionRule::hurwicz(1.0).unwrap()).unwrap();
            let maximax = RuleEngine::evaluate(matrix.view(), &DecisionRule::Maximax).unwrap();
            prop_assert_eq!(optimistic.scores, maximax.scores);

            let pessimistic = RuleEngine::evaluate(matrix.view(), &DecisionRule::hurwicz(0.0).unwrap()).unwrap();
            let maximin = RuleEngine::evaluate(matrix.view(), &DecisionRule::Maximin).unwrap();
            prop_assert_eq!(pessimistic.scores, maximin.scores);
        }

        #[test]
        fn laplace_is_row_mean(matrix in arb_matrix()) {
            let result = RuleEngine::evaluate(matrix.view(), &DecisionRule::Laplace).unwrap();
            for (index, score) in result.scores.iter().enumerate() {
                let row = matrix.row(index).unwrap();
                let mean = row.iter().sum::<f64>() / row.len() as f64;
                prop_assert!((score - mean).abs() < 1e-9);
            }
        }

        #[test]
        fn savage_ignores_column_shifts(
            matrix in arb_matrix(),
            column_seed in any::<usize>(),
            shift in (-500i32..500).prop_map(f64::from),
        ) {
            let column = column_seed % matrix.columns();
            let mut shifted = matrix.clone();
            for row in 0..matrix.rows() {
                let value = matrix.get(row, column).unwrap();
                shifted.set(row, column, value + shift).unwrap();
            }

            let original = RuleEngine::evaluate(matrix.view(), &DecisionRule::Savage).unwrap();
            let moved = RuleEngine::evaluate(shifted.view(), &DecisionRule::Savage).unwrap();
            prop_assert_eq!(original.scores, moved.scores);
            prop_assert_eq!(original.best_index, moved.best_index);
        }

        #[test]
        fn single_row_always_recommended(
            row in proptest::collection::vec((-1000i32..1000).prop_map(f64::from), 1..6),
            rule in arb_rule(),
        ) {
            let matrix = PayoffMatrix::from_rows(&[row]).unwrap();
            let result = RuleEngine::evaluate(matrix.view(), &rule).unwrap();
            prop_assert_eq!(result.best_index, 0);
        }
    }
}
