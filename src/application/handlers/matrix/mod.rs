//! Matrix handlers.
//!
//! Command and query handlers that evaluate and edit decision matrices.

mod default_workspace;
mod edit_matrix;
mod evaluate_matrix;

pub use default_workspace::DefaultWorkspaceHandler;
pub use edit_matrix::{EditMatrixCommand, EditMatrixHandler, WorkspaceSnapshot};
pub use evaluate_matrix::{
    AlternativeEvaluation, EvaluateMatrixCommand, EvaluateMatrixHandler, MatrixEvaluation,
};

use crate::config::EngineConfig;
use crate::domain::analysis::RuleKind;
use crate::domain::foundation::{DomainError, HurwiczLambda};

/// Rule settings applied when a request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleDefaults {
    /// Rule used for the default workspace.
    pub rule: RuleKind,
    /// Hurwicz coefficient used when none is given.
    pub lambda: HurwiczLambda,
}

impl RuleDefaults {
    /// Reads the defaults from engine configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, DomainError> {
        Ok(Self {
            rule: config.default_rule.parse::<RuleKind>()?,
            lambda: HurwiczLambda::try_new(config.default_lambda)?,
        })
    }
}

impl Default for RuleDefaults {
    fn default() -> Self {
        Self {
            rule: RuleKind::Maximin,
            lambda: HurwiczLambda::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn defaults_read_from_engine_config() {
        let config = EngineConfig {
            default_rule: "Laplace".to_string(),
            default_lambda: 0.25,
        };
        let defaults = RuleDefaults::from_config(&config).unwrap();
        assert_eq!(defaults.rule, RuleKind::Laplace);
        assert_eq!(defaults.lambda.value(), 0.25);
    }

    #[test]
    fn unknown_default_rule_is_rejected() {
        let config = EngineConfig {
            default_rule: "minimax".to_string(),
            ..EngineConfig::default()
        };
        let err = RuleDefaults::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedRule);
    }
}
