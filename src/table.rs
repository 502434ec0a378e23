//! Named numeric columns.
//!
//! [`Table`] is the in-memory shape every analysis in this crate consumes and
//! produces: one row per sample, one column per channel (for example the
//! x-velocity of a single marker). Columns are addressed with a
//! [`ColumnSelector`], either by position or by name.

use std::fmt;

use ndarray::{Array2, ArrayView1, Axis, Slice};

use crate::{Error, Result};

/// Selects one column of a [`Table`] by position or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSelector {
    /// Zero-based column position.
    Index(usize),
    /// Column name.
    Name(String),
}

impl From<usize> for ColumnSelector {
    fn from(index: usize) -> Self {
        ColumnSelector::Index(index)
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        ColumnSelector::Name(name.to_string())
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        ColumnSelector::Name(name)
    }
}

impl Default for ColumnSelector {
    fn default() -> Self {
        ColumnSelector::Index(0)
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Index(i) => write!(f, "#{i}"),
            ColumnSelector::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A rectangular table of `f64` samples with uniquely named columns.
///
/// # Example
/// ```
/// use mocap_rqa::table::{ColumnSelector, Table};
///
/// let table = Table::from_columns(vec![
///     ("hip_vx", vec![0.1, 0.2, 0.3]),
///     ("hip_vy", vec![0.0, -0.1, 0.1]),
/// ]).unwrap();
///
/// assert_eq!(table.n_rows(), 3);
/// let vy = table.column(&ColumnSelector::from("hip_vy")).unwrap();
/// assert_eq!(vy[1], -0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    data: Array2<f64>,
}

impl Table {
    /// Build a table from column names and a `(n_rows x n_cols)` data matrix.
    pub fn new(names: Vec<String>, data: Array2<f64>) -> Result<Self> {
        if names.len() != data.ncols() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} column names", data.ncols()),
                got: format!("{} names", names.len()),
            });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(Error::InvalidParameter {
                    name: "names",
                    value: name.clone(),
                    reason: "column names must be unique".to_string(),
                });
            }
        }
        Ok(Self { names, data })
    }

    /// Build a table from `(name, values)` pairs. All columns must have the
    /// same length.
    pub fn from_columns<N, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<f64>)>,
    {
        let (names, values): (Vec<String>, Vec<Vec<f64>>) = columns
            .into_iter()
            .map(|(name, v)| (name.into(), v))
            .unzip();

        let n_rows = values.first().map_or(0, Vec::len);
        if let Some(bad) = values.iter().position(|v| v.len() != n_rows) {
            return Err(Error::ShapeMismatch {
                expected: format!("columns of length {n_rows}"),
                got: format!("column `{}` of length {}", names[bad], values[bad].len()),
            });
        }

        let data = Array2::from_shape_fn((n_rows, values.len()), |(r, c)| values[c][r]);
        Self::new(names, data)
    }

    /// Names and data already known to agree (unique names, one per column).
    pub(crate) fn from_parts(names: Vec<String>, data: Array2<f64>) -> Self {
        debug_assert_eq!(names.len(), data.ncols());
        Self { names, data }
    }

    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            data: Array2::zeros((0, 0)),
        }
    }

    /// A zero-row table with the given column names.
    pub fn with_schema<N: Into<String>>(names: impl IntoIterator<Item = N>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let data = Array2::zeros((0, names.len()));
        Self { names, data }
    }

    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// True when the table holds no samples (no rows or no columns).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array2<f64> {
        &mut self.data
    }

    /// Resolve a selector to a column position, failing on unknown names or
    /// out-of-range positions.
    pub fn column_index(&self, selector: &ColumnSelector) -> Result<usize> {
        match selector {
            ColumnSelector::Index(i) if *i < self.n_cols() => Ok(*i),
            ColumnSelector::Index(i) => Err(Error::ColumnIndexOutOfRange {
                index: *i,
                n_cols: self.n_cols(),
            }),
            ColumnSelector::Name(name) => self
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::UnknownColumn(name.clone())),
        }
    }

    /// Borrow one column.
    pub fn column(&self, selector: &ColumnSelector) -> Result<ArrayView1<'_, f64>> {
        let idx = self.column_index(selector)?;
        Ok(self.data.column(idx))
    }

    /// Rows `start..end`, clamped to the table length.
    pub fn rows(&self, start: usize, end: usize) -> Table {
        let end = end.min(self.n_rows());
        let start = start.min(end);
        Table {
            names: self.names.clone(),
            data: self.data.slice_axis(Axis(0), Slice::from(start..end)).to_owned(),
        }
    }

    /// Append a column, or replace it when a column with that name exists.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if self.n_cols() > 0 && values.len() != self.n_rows() {
            return Err(Error::ShapeMismatch {
                expected: format!("column of length {}", self.n_rows()),
                got: format!("length {}", values.len()),
            });
        }

        if let Some(idx) = self.names.iter().position(|n| *n == name) {
            for (dst, v) in self.data.column_mut(idx).iter_mut().zip(values) {
                *dst = v;
            }
            return Ok(self);
        }

        if self.n_cols() == 0 {
            self.data = Array2::zeros((values.len(), 0));
        }
        let column = ArrayView1::from(&values);
        self.data
            .push_column(column)
            .map_err(|e| Error::ShapeMismatch {
                expected: format!("column of length {}", self.data.nrows()),
                got: e.to_string(),
            })?;
        self.names.push(name);
        Ok(self)
    }

    /// Append one row of values, one per column.
    pub fn push_row(&mut self, row: &[f64]) -> Result<()> {
        if row.len() != self.n_cols() {
            return Err(Error::ShapeMismatch {
                expected: format!("row of {} values", self.n_cols()),
                got: format!("{} values", row.len()),
            });
        }
        self.data
            .push(Axis(0), ArrayView1::from(row))
            .map_err(|e| Error::ShapeMismatch {
                expected: format!("row of {} values", self.n_cols()),
                got: e.to_string(),
            })
    }
}
