use ndarray::Array2;

/// Record every run of `true` in `cells` into `dist`.
///
/// Each `false` closes the current run (possibly of length 0) and the end of
/// the sequence closes the last one, so a run touching the edge is counted
/// and every scan contributes at least one record.
fn accumulate_runs(cells: impl Iterator<Item = bool>, dist: &mut [usize]) {
    let mut run = 0;
    for cell in cells {
        if cell {
            run += 1;
        } else {
            dist[run] += 1;
            run = 0;
        }
    }
    dist[run] += 1;
}

/// Diagonal line-length distribution of a square recurrence matrix.
///
/// Scans every diagonal offset `k` in `-(n-1)..=(n-1)`, i.e. the cells
/// `R[(i, i + k)]`, and counts runs of recurrent cells. Entry `l` of the
/// result is the number of runs of length `l`; entry 0 collects the empty
/// runs between breaks and at diagonal ends.
///
/// # Returns
/// Counts indexed by line length, of length `n + 1`
///
/// # Example
/// ```
/// use mocap_rqa::rqa::diagonal_line_distribution;
/// use ndarray::Array2;
///
/// let r = Array2::from_elem((3, 3), true);
/// let dist = diagonal_line_distribution(&r);
/// assert_eq!(dist, vec![0, 2, 2, 1]);
/// ```
pub fn diagonal_line_distribution(recurrence: &Array2<bool>) -> Vec<usize> {
    let n = recurrence.nrows().min(recurrence.ncols());
    let mut dist = vec![0usize; n + 1];

    for offset in -(n as isize - 1)..=(n as isize - 1) {
        let (start_i, start_j) = if offset >= 0 {
            (0, offset as usize)
        } else {
            ((-offset) as usize, 0)
        };
        let len = n - start_i.max(start_j);
        accumulate_runs(
            (0..len).map(|d| recurrence[(start_i + d, start_j + d)]),
            &mut dist,
        );
    }
    dist
}

/// Vertical line-length distribution of a square recurrence matrix.
///
/// Same run counting as [`diagonal_line_distribution`], applied to each
/// column `R[(.., j)]` from top to bottom.
pub fn vertical_line_distribution(recurrence: &Array2<bool>) -> Vec<usize> {
    let n = recurrence.nrows().min(recurrence.ncols());
    let mut dist = vec![0usize; n + 1];

    for j in 0..n {
        accumulate_runs((0..n).map(|i| recurrence[(i, j)]), &mut dist);
    }
    dist
}
