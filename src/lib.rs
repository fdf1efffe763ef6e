//! Decision Matrix - Decisions under uncertainty
//!
//! This crate scores a payoff matrix (alternatives × states of nature) under
//! the classical Maximin, Maximax, Laplace, Hurwicz and Savage rules, and
//! serves the evaluation over a small JSON API.
//!
//! ```
//! use decision_matrix::domain::analysis::{DecisionRule, RuleEngine};
//! use decision_matrix::domain::matrix::PayoffMatrix;
//!
//! let matrix = PayoffMatrix::from_rows(&[
//!     vec![50.0, 10.0, 20.0],
//!     vec![30.0, 40.0, 10.0],
//!     vec![20.0, 60.0, 70.0],
//! ])
//! .unwrap();
//!
//! let result = RuleEngine::evaluate(matrix.view(), &DecisionRule::Savage).unwrap();
//! assert_eq!(result.scores, vec![50.0, 60.0, 30.0]);
//! assert_eq!(result.best_index, 2);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
