use ndarray::{Array2, ArrayView2};

use crate::{Error, Result};

fn check_trajectories(ex: &ArrayView2<'_, f64>, ey: &ArrayView2<'_, f64>) -> Result<()> {
    if ex.shape() != ey.shape() {
        return Err(Error::ShapeMismatch {
            expected: format!("trajectory of shape {:?}", ex.shape()),
            got: format!("{:?}", ey.shape()),
        });
    }
    Ok(())
}

/// Euclidean distances between the points of two embedded trajectories.
///
/// Entry `(i, j)` is the distance between column `i` of `ex` and column `j`
/// of `ey`. Both trajectories must share the same shape (dim x n_points).
///
/// # Returns
/// Distance matrix (n_points x n_points)
pub fn distance_matrix(ex: ArrayView2<'_, f64>, ey: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    check_trajectories(&ex, &ey)?;

    let dim = ex.nrows();
    let n_points = ex.ncols();
    let mut distances = Array2::zeros((n_points, n_points));
    for i in 0..n_points {
        for j in 0..n_points {
            let mut dist_sq = 0.0f64;
            for k in 0..dim {
                let diff = ex[(k, i)] - ey[(k, j)];
                dist_sq += diff * diff;
            }
            distances[(i, j)] = dist_sq.sqrt();
        }
    }
    Ok(distances)
}

/// Thresholded recurrence matrix of two embedded trajectories.
///
/// `R[(i, j)]` is true when point `i` of `ex` lies strictly closer than
/// `threshold` to point `j` of `ey`. With `ex == ey` the matrix is symmetric
/// and its main diagonal is recurrent for any positive threshold.
///
/// # Example
/// ```
/// use mocap_rqa::rqa::recurrence_matrix;
/// use ndarray::array;
///
/// let e = array![[1.0, 1.0, 2.0, 2.0]];
/// let r = recurrence_matrix(e.view(), e.view(), 0.1).unwrap();
/// assert!(r[(0, 1)]);
/// assert!(!r[(1, 2)]);
/// ```
pub fn recurrence_matrix(
    ex: ArrayView2<'_, f64>,
    ey: ArrayView2<'_, f64>,
    threshold: f64,
) -> Result<Array2<bool>> {
    Ok(distance_matrix(ex, ey)?.mapv(|d| d < threshold))
}
