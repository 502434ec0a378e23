//! Column transforms and summaries applied before or after recurrence
//! analysis: differencing, gap filling and NaN-aware means.

use ndarray::{Array1, ArrayView1, Axis, Slice};

use crate::table::{ColumnSelector, Table};
use crate::{Error, Result};

/// Difference of a sequence with a lagged copy of itself.
/// `out[i] = x[i] - x[i - shift]`, with the first `shift` entries set to 0.
///
/// # Arguments
/// * `x` - Input sequence
/// * `shift` - Lag in samples (>= 1)
pub fn shift_difference(x: ArrayView1<'_, f64>, shift: usize) -> Result<Vec<f64>> {
    if shift == 0 {
        return Err(Error::InvalidSize {
            name: "shift",
            value: 0,
            reason: "must be >= 1",
        });
    }
    Ok((0..x.len())
        .map(|i| if i < shift { 0.0 } else { x[i] - x[i - shift] })
        .collect())
}

/// Append a `<name>_shift` column holding [`shift_difference`] for each
/// selected column, or for every column when `columns` is `None`.
///
/// Turns positions into per-sample displacements (velocities up to the
/// sample rate), which is usually what recurrence analysis should see.
///
/// # Example
/// ```
/// use mocap_rqa::table::Table;
/// use mocap_rqa::transform::calc_shift;
///
/// let table = Table::from_columns(vec![("hip_z", vec![1.0, 1.5, 3.0])]).unwrap();
/// let out = calc_shift(table, None, 1).unwrap();
/// assert_eq!(out.names(), ["hip_z", "hip_z_shift"]);
/// assert_eq!(out.data().column(1).to_vec(), vec![0.0, 0.5, 1.5]);
/// ```
pub fn calc_shift(
    table: Table,
    columns: Option<&[ColumnSelector]>,
    shift: usize,
) -> Result<Table> {
    if shift == 0 {
        return Err(Error::InvalidSize {
            name: "shift",
            value: 0,
            reason: "must be >= 1",
        });
    }
    let indices = match columns {
        Some(selectors) => selectors
            .iter()
            .map(|sel| table.column_index(sel))
            .collect::<Result<Vec<_>>>()?,
        None => (0..table.n_cols()).collect(),
    };

    let mut out = table.clone();
    for idx in indices {
        let diff = shift_difference(table.data().column(idx), shift)?;
        out = out.with_column(format!("{}_shift", table.names()[idx]), diff)?;
    }
    Ok(out)
}

/// Linearly interpolate over NaN gaps of one sequence.
///
/// Interior gaps are bridged between their neighbouring samples, trailing
/// NaNs repeat the last valid sample and leading NaNs are left in place.
pub fn interpolate_gaps(x: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut out = x.to_owned();
    let mut last_valid: Option<usize> = None;

    for i in 0..out.len() {
        if out[i].is_nan() {
            continue;
        }
        if let Some(prev) = last_valid {
            if i > prev + 1 {
                let (a, b) = (out[prev], out[i]);
                let span = (i - prev) as f64;
                for k in prev + 1..i {
                    out[k] = a + (b - a) * (k - prev) as f64 / span;
                }
            }
        }
        last_valid = Some(i);
    }

    if let Some(last) = last_valid {
        let fill = out[last];
        out.slice_axis_mut(Axis(0), Slice::from(last + 1..)).fill(fill);
    }
    out
}

/// Fill NaN gaps in every column with [`interpolate_gaps`].
pub fn fill_gaps(table: Table) -> Table {
    let mut table = table;
    let filled: Vec<Array1<f64>> = table
        .data()
        .columns()
        .into_iter()
        .map(interpolate_gaps)
        .collect();
    for (idx, column) in filled.into_iter().enumerate() {
        table.data_mut().column_mut(idx).assign(&column);
    }
    table
}

fn nan_mean<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0f64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { f64::NAN } else { sum / count as f64 }
}

/// NaN-ignoring mean over every cell of the table. NaN when the table holds
/// no valid sample.
pub fn mean(table: &Table) -> f64 {
    nan_mean(table.data().iter())
}

/// One-row table of NaN-ignoring column means, for the selected columns in
/// selection order or for every column when `columns` is `None`. An empty
/// table yields an empty table.
pub fn col_means(table: &Table, columns: Option<&[ColumnSelector]>) -> Result<Table> {
    if table.is_empty() {
        return Ok(Table::empty());
    }
    let indices = match columns {
        Some(selectors) => selectors
            .iter()
            .map(|sel| table.column_index(sel))
            .collect::<Result<Vec<_>>>()?,
        None => (0..table.n_cols()).collect(),
    };

    let mut out = Table::with_schema(indices.iter().map(|&i| table.names()[i].clone()));
    let row: Vec<f64> = indices
        .iter()
        .map(|&i| nan_mean(table.data().column(i)))
        .collect();
    out.push_row(&row)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_shift_difference() {
        let x = array![1.0, 2.0, 4.0, 7.0];
        assert_eq!(shift_difference(x.view(), 1).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(shift_difference(x.view(), 2).unwrap(), vec![0.0, 0.0, 3.0, 5.0]);
        assert_eq!(shift_difference(x.view(), 9).unwrap(), vec![0.0; 4]);
        assert!(shift_difference(x.view(), 0).is_err());
    }

    #[test]
    fn test_calc_shift_selected_columns() {
        let table = Table::from_columns(vec![
            ("x", vec![0.0, 1.0, 3.0]),
            ("y", vec![5.0, 5.0, 4.0]),
        ])
        .unwrap();

        let out = calc_shift(table, Some(&[ColumnSelector::from("y")][..]), 1).unwrap();
        assert_eq!(out.names(), ["x", "y", "y_shift"]);
        assert_eq!(out.data().column(2).to_vec(), vec![0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_calc_shift_unknown_column() {
        let table = Table::from_columns(vec![("x", vec![0.0, 1.0])]).unwrap();
        assert!(calc_shift(table, Some(&[ColumnSelector::from("z")][..]), 1).is_err());
    }

    #[test]
    fn test_interpolate_gaps() {
        let x = array![f64::NAN, 1.0, f64::NAN, f64::NAN, 4.0, f64::NAN];
        let out = interpolate_gaps(x.view());

        assert!(out[0].is_nan());
        assert_relative_eq!(out[1], 1.0);
        assert_relative_eq!(out[2], 2.0);
        assert_relative_eq!(out[3], 3.0);
        assert_relative_eq!(out[4], 4.0);
        assert_relative_eq!(out[5], 4.0);
    }

    #[test]
    fn test_interpolate_all_nan() {
        let x = array![f64::NAN, f64::NAN];
        let out = interpolate_gaps(x.view());
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_fill_gaps_table() {
        let table = Table::from_columns(vec![
            ("a", vec![0.0, f64::NAN, 2.0]),
            ("b", vec![1.0, 1.0, f64::NAN]),
        ])
        .unwrap();
        let out = fill_gaps(table);
        assert_eq!(out.data().column(0).to_vec(), vec![0.0, 1.0, 2.0]);
        assert_eq!(out.data().column(1).to_vec(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_means() {
        let table = Table::from_columns(vec![
            ("a", vec![1.0, f64::NAN, 3.0]),
            ("b", vec![4.0, 6.0, 8.0]),
        ])
        .unwrap();

        assert_relative_eq!(mean(&table), 22.0 / 5.0);

        let all = col_means(&table, None).unwrap();
        assert_eq!(all.n_rows(), 1);
        assert_eq!(all.data().row(0).to_vec(), vec![2.0, 6.0]);

        let b = col_means(&table, Some(&[ColumnSelector::from("b")][..])).unwrap();
        assert_eq!(b.names(), ["b"]);
        assert_eq!(b.data()[(0, 0)], 6.0);
    }

    #[test]
    fn test_col_means_several_columns() {
        let table = Table::from_columns(vec![
            ("a", vec![1.0, f64::NAN, 3.0]),
            ("b", vec![4.0, 6.0, 8.0]),
            ("c", vec![0.0, 0.0, 3.0]),
        ])
        .unwrap();

        let selectors = [ColumnSelector::from("c"), ColumnSelector::Index(0)];
        let out = col_means(&table, Some(&selectors[..])).unwrap();
        assert_eq!(out.names(), ["c", "a"]);
        assert_eq!(out.data().row(0).to_vec(), vec![1.0, 2.0]);

        let bad = [ColumnSelector::from("a"), ColumnSelector::Index(7)];
        assert!(col_means(&table, Some(&bad[..])).is_err());
    }

    #[test]
    fn test_means_empty() {
        assert!(mean(&Table::empty()).is_nan());
        assert!(col_means(&Table::empty(), None).unwrap().is_empty());
    }
}
