//! Hurwicz coefficient value object (optimism weight).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{format_two_decimals, ValidationError};

/// Weight given to a row's best payoff under the Hurwicz rule.
///
/// `1 - lambda` weights the worst payoff. Values are expected in `[0, 1]` but
/// are not clamped: any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HurwiczLambda(f64);

impl HurwiczLambda {
    /// Balanced weighting between best and worst outcome.
    pub const BALANCED: Self = Self(0.5);

    /// Creates a coefficient, returning error if the value is NaN or infinite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("lambda", value));
        }
        Ok(Self(value))
    }

    /// Returns the weight of the best outcome.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the weight of the worst outcome.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Returns true if the coefficient lies in the conventional `[0, 1]` range.
    pub fn is_conventional(&self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

impl Default for HurwiczLambda {
    fn default() -> Self {
        Self::BALANCED
    }
}

impl TryFrom<f64> for HurwiczLambda {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<HurwiczLambda> for f64 {
    fn from(lambda: HurwiczLambda) -> Self {
        lambda.0
    }
}

impl fmt::Display for HurwiczLambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_two_decimals(self.0))
    }
}
