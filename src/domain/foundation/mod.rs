//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the decision matrix domain.

mod decimal;
mod errors;
mod hurwicz_lambda;

pub use decimal::format_two_decimals;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use hurwicz_lambda::HurwiczLambda;
