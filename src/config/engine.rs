//! Rule engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::RuleKind;

/// Defaults applied when a request leaves the rule or coefficient out
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Rule used for the default workspace
    #[serde(default = "default_rule")]
    pub default_rule: String,

    /// Hurwicz coefficient used when a request gives none
    #[serde(default = "default_lambda")]
    pub default_lambda: f64,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_rule.parse::<RuleKind>().is_err() {
            return Err(ValidationError::UnknownDefaultRule(
                self.default_rule.clone(),
            ));
        }
        if !self.default_lambda.is_finite() {
            return Err(ValidationError::NonFiniteDefaultLambda);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_rule: default_rule(),
            default_lambda: default_lambda(),
        }
    }
}

fn default_rule() -> String {
    "maximin".to_string()
}

fn default_lambda() -> f64 {
    0.5
}
