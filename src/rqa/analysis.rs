use ndarray::{Array2, ArrayView1, Axis, Slice};
use tracing::debug;

use super::{
    RqaConfig, RqaStats, WindowConfig, diagonal_line_distribution, embed, recurrence_matrix,
    vertical_line_distribution,
};
use crate::table::{ColumnSelector, Table};
use crate::{Error, Result};

/// Ordered rows of recurrence measures with the fixed seven-column schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RqaTable {
    rows: Vec<RqaStats>,
}

impl RqaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: RqaStats) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RqaStats] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RqaStats> {
        self.rows.iter()
    }

    pub fn columns(&self) -> [&'static str; 7] {
        RqaStats::COLUMNS
    }

    /// One measure across all rows, or `None` for an unknown column name.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = RqaStats::COLUMNS.iter().position(|c| *c == name)?;
        Some(self.rows.iter().map(|r| r.to_array()[idx]).collect())
    }

    /// Convert into a generic [`Table`]; zero rows still carry all seven
    /// columns.
    pub fn to_table(&self) -> Table {
        let data = Array2::from_shape_fn((self.rows.len(), RqaStats::COLUMNS.len()), |(r, c)| {
            self.rows[r].to_array()[c]
        });
        Table::from_parts(RqaStats::COLUMNS.iter().map(|c| c.to_string()).collect(), data)
    }
}

impl From<RqaTable> for Table {
    fn from(table: RqaTable) -> Self {
        table.to_table()
    }
}

impl FromIterator<RqaStats> for RqaTable {
    fn from_iter<I: IntoIterator<Item = RqaStats>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RqaTable {
    type Item = &'a RqaStats;
    type IntoIter = std::slice::Iter<'a, RqaStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Recurrence quantification of `x` against `y`.
///
/// Embeds both sequences, thresholds their pairwise distances into a
/// recurrence matrix, extracts the diagonal and vertical line distributions
/// and reduces them to [`RqaStats`]. Passing the same sequence twice is
/// auto-recurrence analysis.
///
/// # Errors
/// Configuration errors for invalid parameters, and a shape mismatch when a
/// sequence is too short to embed or the two embedded trajectories differ in
/// length.
///
/// # Example
/// ```
/// use mocap_rqa::rqa::{RqaConfig, compute_rqa};
/// use ndarray::array;
///
/// let x = array![1.0, 1.0, 2.0, 2.0];
/// let stats = compute_rqa(x.view(), x.view(), &RqaConfig::default()).unwrap();
/// assert_eq!(stats.recurrence_rate, 0.5);
/// assert_eq!(stats.determinism, 0.5);
/// ```
pub fn compute_rqa(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    config: &RqaConfig,
) -> Result<RqaStats> {
    config.validate()?;

    let ex = embed(x, config.dim, config.tau)?;
    let ey = embed(y, config.dim, config.tau)?;
    if ex.ncols() != ey.ncols() {
        return Err(Error::ShapeMismatch {
            expected: format!("{} embedded points", ex.ncols()),
            got: format!("{} embedded points", ey.ncols()),
        });
    }

    let recurrence = recurrence_matrix(ex.view(), ey.view(), config.threshold)?;
    let diag = diagonal_line_distribution(&recurrence);
    let vert = vertical_line_distribution(&recurrence);
    let stats = RqaStats::from_distributions(&recurrence, &diag, &vert, config.lmin);

    debug!(
        n_points = recurrence.nrows(),
        recurrence_rate = stats.recurrence_rate,
        determinism = stats.determinism,
        "computed rqa"
    );
    Ok(stats)
}

/// Auto-recurrence analysis of a single sequence.
///
/// An empty sequence yields an empty table; otherwise the table has one row.
pub fn auto_rqa(x: ArrayView1<'_, f64>, config: &RqaConfig) -> Result<RqaTable> {
    config.validate()?;
    let mut out = RqaTable::new();
    if x.is_empty() {
        debug!("auto rqa on empty sequence");
        return Ok(out);
    }
    out.push(compute_rqa(x, x, config)?);
    Ok(out)
}

/// Resolve both selectors before any computation so a bad selector fails
/// even when the table holds no rows.
fn select_pair<'t>(
    table: &'t Table,
    col_a: &ColumnSelector,
    col_b: &ColumnSelector,
) -> Result<(ArrayView1<'t, f64>, ArrayView1<'t, f64>)> {
    Ok((table.column(col_a)?, table.column(col_b)?))
}

/// Cross-recurrence analysis of two columns of `table`.
///
/// A table without rows or columns yields an empty result; otherwise the
/// result has one row. Selecting the same column twice reproduces
/// [`auto_rqa`] on that column.
///
/// # Example
/// ```
/// use mocap_rqa::rqa::{RqaConfig, cross_rqa};
/// use mocap_rqa::table::Table;
///
/// let table = Table::from_columns(vec![
///     ("a", vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 2.0, 2.0]),
///     ("b", vec![3.0, 3.0, 2.0, 2.0, 3.0, 3.0, 2.0, 2.0]),
/// ]).unwrap();
///
/// let out = cross_rqa(&table, &"a".into(), &"b".into(), &RqaConfig::default()).unwrap();
/// assert_eq!(out.rows()[0].recurrence_rate, 0.25);
/// ```
pub fn cross_rqa(
    table: &Table,
    col_a: &ColumnSelector,
    col_b: &ColumnSelector,
    config: &RqaConfig,
) -> Result<RqaTable> {
    config.validate()?;
    let mut out = RqaTable::new();
    if table.n_cols() == 0 {
        return Ok(out);
    }
    let (xa, xb) = select_pair(table, col_a, col_b)?;
    if table.n_rows() == 0 {
        debug!(%col_a, %col_b, "cross rqa on empty table");
        return Ok(out);
    }
    out.push(compute_rqa(xa, xb, config)?);
    Ok(out)
}

/// Cross-recurrence analysis over sliding windows of two columns.
///
/// Windows of `windows.window` samples start at 0 and advance by
/// `windows.step` while a full window fits. Each window is analysed on its
/// own and contributes one row, in increasing start order. A window longer
/// than the table produces no rows.
pub fn windowed_cross_rqa(
    table: &Table,
    col_a: &ColumnSelector,
    col_b: &ColumnSelector,
    config: &RqaConfig,
    windows: &WindowConfig,
) -> Result<RqaTable> {
    config.validate()?;
    windows.validate()?;
    if table.n_cols() == 0 {
        return Ok(RqaTable::new());
    }
    let (xa, xb) = select_pair(table, col_a, col_b)?;
    let starts = windows.window_starts(table.n_rows())?;
    debug!(
        n_rows = table.n_rows(),
        window = windows.window,
        step = windows.step,
        n_windows = starts.len(),
        "windowed cross rqa"
    );

    let window = windows.window;
    let analyse = |start: usize| {
        let range = Slice::from(start..start + window);
        compute_rqa(
            xa.slice_axis(Axis(0), range),
            xb.slice_axis(Axis(0), range),
            config,
        )
    };

    let rows: Vec<Result<RqaStats>> = {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            starts.par_iter().map(|&start| analyse(start)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            starts.iter().map(|&start| analyse(start)).collect()
        }
    };

    rows.into_iter().collect()
}
