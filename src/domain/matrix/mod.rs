//! Matrix Module - Payoff storage and the editable workspace around it.
//!
//! # Components
//!
//! - `PayoffMatrix` - Row-major arena owned by whoever edits the matrix
//! - `MatrixView` - Borrowed, read-only view handed to the rule engine
//! - `MatrixWorkspace` - Labels plus matrix, with structural edits that keep
//!   everything rectangular

mod errors;
mod payoff_matrix;
mod workspace;

pub use errors::{Axis, MatrixError, ShapeError};
pub use payoff_matrix::{MatrixView, PayoffMatrix};
pub(crate) use payoff_matrix::flatten_rows;
pub use workspace::{alternative_label, coerce_payoff, MatrixEdit, MatrixWorkspace, DEFAULT_PAYOFF};
