//! Payoff Matrix - Row-major payoff storage and its borrowed view.

use serde::{Deserialize, Serialize};

use super::{Axis, MatrixError, ShapeError};

/// Alternatives × states payoff grid, stored row-major in one buffer.
///
/// Always holds at least one alternative and one state, and every payoff is
/// finite. Serializes as nested rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PayoffMatrix {
    values: Vec<f64>,
    rows: usize,
    columns: usize,
}

impl PayoffMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// - `Shape` if there are no rows, no columns, or rows differ in length
    /// - `NonFinitePayoff` if any payoff is NaN or infinite
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let (values, columns) = flatten_rows(rows)?;
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinitePayoff {
                row: index / columns,
                column: index % columns,
            });
        }

        Ok(Self {
            rows: values.len() / columns,
            values,
            columns,
        })
    }

    /// Builds a `rows` × `columns` matrix with every payoff set to `value`.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Result<Self, MatrixError> {
        if rows == 0 {
            return Err(ShapeError::NoAlternatives.into());
        }
        if columns == 0 {
            return Err(ShapeError::NoStates.into());
        }
        if !value.is_finite() {
            return Err(MatrixError::NonFinitePayoff { row: 0, column: 0 });
        }

        Ok(Self {
            values: vec![value; rows * columns],
            rows,
            columns,
        })
    }

    /// Number of alternatives.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of states of nature.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Gets the payoff for (alternative, state).
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.values[row * self.columns + column])
    }

    /// Gets all payoffs of one alternative.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.values[start..start + self.columns])
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Borrows the matrix for evaluation.
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView {
            values: &self.values,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Overwrites a single payoff in place.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(Axis::Alternative, row)?;
        self.check_index(Axis::State, column)?;
        if !value.is_finite() {
            return Err(MatrixError::NonFinitePayoff { row, column });
        }

        self.values[row * self.columns + column] = value;
        Ok(())
    }

    /// Appends an alternative. `payoffs` must cover every state.
    pub fn push_row(&mut self, payoffs: &[f64]) -> Result<(), MatrixError> {
        if payoffs.len() != self.columns {
            return Err(ShapeError::RaggedRow {
                row: self.rows,
                expected: self.columns,
                actual: payoffs.len(),
            }
            .into());
        }
        if let Some(column) = payoffs.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinitePayoff {
                row: self.rows,
                column,
            });
        }

        self.values.extend_from_slice(payoffs);
        self.rows += 1;
        Ok(())
    }

    /// Appends a state, giving every alternative the payoff `value`.
    pub fn push_column(&mut self, value: f64) -> Result<(), MatrixError> {
        if !value.is_finite() {
            return Err(MatrixError::NonFinitePayoff {
                row: 0,
                column: self.columns,
            });
        }

        let mut values = Vec::with_capacity(self.rows * (self.columns + 1));
        for row in self.values.chunks(self.columns) {
            values.extend_from_slice(row);
            values.push(value);
        }
        self.values = values;
        self.columns += 1;
        Ok(())
    }

    /// Removes an alternative. The last remaining one cannot be removed.
    pub fn remove_row(&mut self, row: usize) -> Result<(), MatrixError> {
        self.check_index(Axis::Alternative, row)?;
        if self.rows == 1 {
            return Err(MatrixError::CannotRemoveLast(Axis::Alternative));
        }

        let start = row * self.columns;
        self.values.drain(start..start + self.columns);
        self.rows -= 1;
        Ok(())
    }

    /// Removes a state. The last remaining one cannot be removed.
    pub fn remove_column(&mut self, column: usize) -> Result<(), MatrixError> {
        self.check_index(Axis::State, column)?;
        if self.columns == 1 {
            return Err(MatrixError::CannotRemoveLast(Axis::State));
        }

        let columns = self.columns;
        let mut index = 0;
        self.values.retain(|_| {
            let keep = index % columns != column;
            index += 1;
            keep
        });
        self.columns -= 1;
        Ok(())
    }

    fn check_index(&self, axis: Axis, index: usize) -> Result<(), MatrixError> {
        let len = match axis {
            Axis::Alternative => self.rows,
            Axis::State => self.columns,
        };
        if index >= len {
            return Err(MatrixError::IndexOutOfRange { axis, index, len });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for PayoffMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<PayoffMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Flattens nested rows into a row-major buffer, checking rectangularity.
///
/// Returns the buffer and the column count.
pub(crate) fn flatten_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<(Vec<f64>, usize), ShapeError> {
    let first = rows.first().ok_or(ShapeError::NoAlternatives)?;
    let columns = first.as_ref().len();
    if columns == 0 {
        return Err(ShapeError::NoStates);
    }

    let mut values = Vec::with_capacity(rows.len() * columns);
    for (row, payoffs) in rows.iter().enumerate() {
        let payoffs = payoffs.as_ref();
        if payoffs.len() != columns {
            return Err(ShapeError::RaggedRow {
                row,
                expected: columns,
                actual: payoffs.len(),
            });
        }
        values.extend_from_slice(payoffs);
    }

    Ok((values, columns))
}

/// Immutable, borrowed view over a row-major payoff buffer.
///
/// The rule engine only ever reads through this type.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    values: &'a [f64],
    rows: usize,
    columns: usize,
}

impl<'a> MatrixView<'a> {
    /// Wraps a row-major buffer with `columns` payoffs per alternative.
    pub fn new(values: &'a [f64], columns: usize) -> Result<Self, ShapeError> {
        if columns == 0 {
            return Err(ShapeError::NoStates);
        }
        if values.is_empty() {
            return Err(ShapeError::NoAlternatives);
        }
        if values.len() % columns != 0 {
            return Err(ShapeError::BufferMismatch {
                len: values.len(),
                columns,
            });
        }

        Ok(Self {
            values,
            rows: values.len() / columns,
            columns,
        })
    }

    /// Number of alternatives.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of states of nature.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Payoff for (alternative, state). Panics on out-of-range indices.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.columns + column]
    }

    /// Payoffs of one alternative. Panics on an out-of-range index.
    pub fn row(&self, row: usize) -> &'a [f64] {
        let start = row * self.columns;
        &self.values[start..start + self.columns]
    }

    /// Iterates alternatives in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [f64]> + 'a {
        self.values.chunks(self.columns)
    }

    /// Iterates one state's payoffs across all alternatives.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + 'a {
        self.values
            .iter()
            .skip(column)
            .step_by(self.columns)
            .copied()
    }

    /// The underlying row-major buffer.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }
}
