//! Decision rules for choosing under uncertainty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{format_two_decimals, HurwiczLambda};

use super::EvaluationError;

/// How a rule's scores are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFormat {
    /// Plain number, no rounding.
    Raw,
    /// Exactly two decimal digits, halves rounded away from zero.
    TwoDecimals,
}

impl ScoreFormat {
    /// Renders a score. Rounding here never feeds back into comparisons.
    pub fn format(&self, score: f64) -> String {
        match self {
            ScoreFormat::Raw => score.to_string(),
            ScoreFormat::TwoDecimals => format_two_decimals(score),
        }
    }
}

/// The closed set of supported rules, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Maximin,
    Maximax,
    Laplace,
    Hurwicz,
    Savage,
}

impl RuleKind {
    /// Every rule, in menu order.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Maximin,
        RuleKind::Maximax,
        RuleKind::Laplace,
        RuleKind::Hurwicz,
        RuleKind::Savage,
    ];

    /// Stable lowercase identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            RuleKind::Maximin => "maximin",
            RuleKind::Maximax => "maximax",
            RuleKind::Laplace => "laplace",
            RuleKind::Hurwicz => "hurwicz",
            RuleKind::Savage => "savage",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Maximin => "Maximin",
            RuleKind::Maximax => "Maximax",
            RuleKind::Laplace => "Laplace",
            RuleKind::Hurwicz => "Hurwicz",
            RuleKind::Savage => "Savage (Minimax-Regret)",
        }
    }

    /// Returns true if the rule takes a Hurwicz coefficient.
    pub fn requires_lambda(&self) -> bool {
        matches!(self, RuleKind::Hurwicz)
    }

    /// Returns true if the best alternative has the lowest score.
    ///
    /// Only Savage minimizes (maximum regret); every other rule maximizes.
    pub fn minimizes(&self) -> bool {
        matches!(self, RuleKind::Savage)
    }

    /// Display format of this rule's scores.
    pub fn score_format(&self) -> ScoreFormat {
        match self {
            RuleKind::Laplace | RuleKind::Hurwicz => ScoreFormat::TwoDecimals,
            RuleKind::Maximin | RuleKind::Maximax | RuleKind::Savage => ScoreFormat::Raw,
        }
    }
}

impl FromStr for RuleKind {
    type Err = EvaluationError;

    /// Parses an identifier, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.identifier() == normalized)
            .ok_or_else(|| EvaluationError::UnsupportedRule(s.to_string()))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A rule together with the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum DecisionRule {
    /// Best worst case.
    Maximin,
    /// Best best case.
    Maximax,
    /// Best equally-weighted average.
    Laplace,
    /// Best blend of best and worst case.
    Hurwicz {
        #[serde(default)]
        lambda: HurwiczLambda,
    },
    /// Smallest maximum regret.
    Savage,
}

impl DecisionRule {
    /// Hurwicz rule with the given coefficient.
    ///
    /// # Errors
    /// `InvalidParameter` if `lambda` is NaN or infinite. Finite values
    /// outside `[0, 1]` are accepted.
    pub fn hurwicz(lambda: f64) -> Result<Self, EvaluationError> {
        Ok(DecisionRule::Hurwicz {
            lambda: HurwiczLambda::try_new(lambda)?,
        })
    }

    /// Builds a rule from its kind. `lambda` only matters for Hurwicz and
    /// defaults to 0.5 there.
    pub fn from_kind(kind: RuleKind, lambda: Option<f64>) -> Result<Self, EvaluationError> {
        let rule = match kind {
            RuleKind::Maximin => DecisionRule::Maximin,
            RuleKind::Maximax => DecisionRule::Maximax,
            RuleKind::Laplace => DecisionRule::Laplace,
            RuleKind::Hurwicz => match lambda {
                Some(value) => DecisionRule::hurwicz(value)?,
                None => DecisionRule::Hurwicz {
                    lambda: HurwiczLambda::default(),
                },
            },
            RuleKind::Savage => DecisionRule::Savage,
        };
        Ok(rule)
    }

    /// Builds a rule from an identifier such as `"savage"`.
    ///
    /// # Errors
    /// - `UnsupportedRule` for an unknown identifier
    /// - `InvalidParameter` for a non-finite Hurwicz coefficient
    pub fn from_identifier(identifier: &str, lambda: Option<f64>) -> Result<Self, EvaluationError> {
        Self::from_kind(identifier.parse()?, lambda)
    }

    /// The parameterless kind of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            DecisionRule::Maximin => RuleKind::Maximin,
            DecisionRule::Maximax => RuleKind::Maximax,
            DecisionRule::Laplace => RuleKind::Laplace,
            DecisionRule::Hurwicz { .. } => RuleKind::Hurwicz,
            DecisionRule::Savage => RuleKind::Savage,
        }
    }

    /// The Hurwicz coefficient, if this is the Hurwicz rule.
    pub fn lambda(&self) -> Option<HurwiczLambda> {
        match self {
            DecisionRule::Hurwicz { lambda } => Some(*lambda),
            _ => None,
        }
    }
}

impl fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionRule::Hurwicz { lambda } => write!(f, "hurwicz(λ={})", lambda),
            other => write!(f, "{}", other.kind()),
        }
    }
}
