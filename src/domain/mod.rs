//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `matrix` - Payoff matrix storage and the editable workspace
//! - `analysis` - Pure decision rules (Maximin, Maximax, Laplace, Hurwicz, Savage)

pub mod analysis;
pub mod foundation;
pub mod matrix;
