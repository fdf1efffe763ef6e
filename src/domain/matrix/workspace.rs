//! Matrix Workspace - Labelled, editable payoff matrix.
//!
//! Holds the state a presentation layer edits between evaluations: the
//! alternative labels, the state labels and the payoff matrix. Every edit
//! keeps the three in step, so the matrix handed to the rule engine is
//! always rectangular and fully labelled.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{Axis, MatrixError, PayoffMatrix};

/// Payoff given to cells created by structural edits.
pub const DEFAULT_PAYOFF: f64 = 0.0;

/// A single edit to a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatrixEdit {
    SetPayoff {
        alternative: usize,
        state: usize,
        value: f64,
    },
    SetPayoffText {
        alternative: usize,
        state: usize,
        text: String,
    },
    AddAlternative,
    AddState,
    RemoveAlternative {
        index: usize,
    },
    RemoveState {
        index: usize,
    },
    RenameAlternative {
        index: usize,
        name: String,
    },
    RenameState {
        index: usize,
        name: String,
    },
}

/// Alternatives, states and payoffs kept in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkspaceParts", into = "WorkspaceParts")]
pub struct MatrixWorkspace {
    alternatives: Vec<String>,
    states: Vec<String>,
    payoffs: PayoffMatrix,
}

/// Serialized form of a workspace, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceParts {
    alternatives: Vec<String>,
    states: Vec<String>,
    payoffs: PayoffMatrix,
}

impl MatrixWorkspace {
    /// Creates a workspace, checking label counts against the matrix.
    pub fn new(
        alternatives: Vec<String>,
        states: Vec<String>,
        payoffs: PayoffMatrix,
    ) -> Result<Self, MatrixError> {
        if alternatives.len() != payoffs.rows() {
            return Err(MatrixError::LabelMismatch {
                axis: Axis::Alternative,
                expected: payoffs.rows(),
                actual: alternatives.len(),
            });
        }
        if states.len() != payoffs.columns() {
            return Err(MatrixError::LabelMismatch {
                axis: Axis::State,
                expected: payoffs.columns(),
                actual: states.len(),
            });
        }

        Ok(Self {
            alternatives,
            states,
            payoffs,
        })
    }

    /// Alternative labels, one per row.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// State labels, one per column.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The payoff matrix.
    pub fn payoffs(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    /// Applies one edit.
    pub fn apply(&mut self, edit: MatrixEdit) -> Result<(), MatrixError> {
        match edit {
            MatrixEdit::SetPayoff {
                alternative,
                state,
                value,
            } => self.set_payoff(alternative, state, value),
            MatrixEdit::SetPayoffText {
                alternative,
                state,
                text,
            } => self.set_payoff_text(alternative, state, &text),
            MatrixEdit::AddAlternative => self.add_alternative(),
            MatrixEdit::AddState => self.add_state(),
            MatrixEdit::RemoveAlternative { index } => self.remove_alternative(index),
            MatrixEdit::RemoveState { index } => self.remove_state(index),
            MatrixEdit::RenameAlternative { index, name } => self.rename_alternative(index, name),
            MatrixEdit::RenameState { index, name } => self.rename_state(index, name),
        }
    }

    /// Sets one payoff.
    pub fn set_payoff(&mut self, alternative: usize, state: usize, value: f64) -> Result<(), MatrixError> {
        self.payoffs.set(alternative, state, value)
    }

    /// Sets one payoff from user-entered text. See [`coerce_payoff`].
    pub fn set_payoff_text(&mut self, alternative: usize, state: usize, text: &str) -> Result<(), MatrixError> {
        let value = coerce_payoff(text)?;
        self.payoffs.set(alternative, state, value)
    }

    /// Appends an alternative with a generated label and a row of zeros.
    ///
    /// Labels are only touched once the matrix accepted the row.
    pub fn add_alternative(&mut self) -> Result<(), MatrixError> {
        let row = vec![DEFAULT_PAYOFF; self.payoffs.columns()];
        self.payoffs.push_row(&row)?;
        self.alternatives.push(alternative_label(self.alternatives.len()));
        Ok(())
    }

    /// Appends a state with a generated label and a zero for every alternative.
    pub fn add_state(&mut self) -> Result<(), MatrixError> {
        self.payoffs.push_column(DEFAULT_PAYOFF)?;
        self.states.push(format!("State {}", self.states.len() + 1));
        Ok(())
    }

    /// Removes an alternative and its row.
    pub fn remove_alternative(&mut self, index: usize) -> Result<(), MatrixError> {
        self.payoffs.remove_row(index)?;
        self.alternatives.remove(index);
        Ok(())
    }

    /// Removes a state and its column.
    pub fn remove_state(&mut self, index: usize) -> Result<(), MatrixError> {
        self.payoffs.remove_column(index)?;
        self.states.remove(index);
        Ok(())
    }

    /// Renames an alternative. Labels are free text.
    pub fn rename_alternative(&mut self, index: usize, name: impl Into<String>) -> Result<(), MatrixError> {
        let len = self.alternatives.len();
        let label = self
            .alternatives
            .get_mut(index)
            .ok_or(MatrixError::IndexOutOfRange {
                axis: Axis::Alternative,
                index,
                len,
            })?;
        *label = name.into();
        Ok(())
    }

    /// Renames a state. Labels are free text.
    pub fn rename_state(&mut self, index: usize, name: impl Into<String>) -> Result<(), MatrixError> {
        let len = self.states.len();
        let label = self.states.get_mut(index).ok_or(MatrixError::IndexOutOfRange {
            axis: Axis::State,
            index,
            len,
        })?;
        *label = name.into();
        Ok(())
    }
}

impl Default for MatrixWorkspace {
    /// The three-alternative, three-state exercise.
    fn default() -> Self {
        Self {
            alternatives: (0..3).map(alternative_label).collect(),
            states: (1..=3).map(|n| format!("State {}", n)).collect(),
            payoffs: PayoffMatrix::from_rows(&[
                [50.0, 10.0, 20.0],
                [30.0, 40.0, 10.0],
                [20.0, 60.0, 70.0],
            ])
            .unwrap_or_else(|_| unreachable!("default matrix is rectangular and finite")),
        }
    }
}

impl TryFrom<WorkspaceParts> for MatrixWorkspace {
    type Error = MatrixError;

    fn try_from(parts: WorkspaceParts) -> Result<Self, Self::Error> {
        Self::new(parts.alternatives, parts.states, parts.payoffs)
    }
}

impl From<MatrixWorkspace> for WorkspaceParts {
    fn from(workspace: MatrixWorkspace) -> Self {
        Self {
            alternatives: workspace.alternatives,
            states: workspace.states,
            payoffs: workspace.payoffs,
        }
    }
}

/// Label for the alternative at `index`: "Alternative A" through
/// "Alternative Z", then "Alternative 27" onwards.
pub fn alternative_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => format!("Alternative {}", char::from(b'A' + offset)),
        _ => format!("Alternative {}", index + 1),
    }
}

/// Coerces user-entered text into a payoff.
///
/// Surrounding whitespace is ignored and blank input reads as zero. Anything
/// else must parse as a finite number.
pub fn coerce_payoff(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PAYOFF);
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        ValidationError::invalid_format("payoff", format!("'{}' is not a number", trimmed))
    })?;
    if !value.is_finite() {
        return Err(ValidationError::not_finite("payoff", value));
    }
    Ok(value)
}
