use ndarray::{Array2, ArrayView1, Axis, Slice};

use crate::{Error, Result};

/// Number of points left after a time-delay embedding, if any.
pub fn embedded_len(len: usize, dim: usize, tau: usize) -> Option<usize> {
    let span = dim.checked_sub(1)?.checked_mul(tau)?;
    if len <= span { None } else { Some(len - span) }
}

/// Build the time-delay embedding of a sequence.
///
/// Row `i` of the result is the sequence shifted by `i * tau`, truncated so
/// that every row has the same length. Each column is one point of the
/// reconstructed phase-space trajectory.
///
/// # Arguments
/// * `x` - Input sequence
/// * `dim` - Embedding dimension (>= 1)
/// * `tau` - Time delay in samples (>= 1)
///
/// # Returns
/// Trajectory matrix (dim x (len - (dim - 1) * tau))
///
/// # Example
/// ```
/// use mocap_rqa::rqa::embed;
/// use ndarray::array;
///
/// let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
/// let e = embed(x.view(), 2, 2).unwrap();
/// assert_eq!(e.shape(), &[2, 3]);
/// assert_eq!(e.row(1).to_vec(), vec![2.0, 3.0, 4.0]);
/// ```
pub fn embed(x: ArrayView1<'_, f64>, dim: usize, tau: usize) -> Result<Array2<f64>> {
    if dim == 0 {
        return Err(Error::InvalidSize {
            name: "dim",
            value: 0,
            reason: "must be >= 1",
        });
    }
    if tau == 0 {
        return Err(Error::InvalidSize {
            name: "tau",
            value: 0,
            reason: "must be >= 1",
        });
    }

    let n = x.len();
    let n_points = embedded_len(n, dim, tau).ok_or_else(|| Error::ShapeMismatch {
        expected: format!(
            "sequence longer than (dim - 1) * tau = {}",
            (dim - 1).saturating_mul(tau)
        ),
        got: format!("length {n}"),
    })?;

    let mut trajectory = Array2::zeros((dim, n_points));
    for i in 0..dim {
        let start = i * tau;
        trajectory
            .row_mut(i)
            .assign(&x.slice_axis(Axis(0), Slice::from(start..start + n_points)));
    }
    Ok(trajectory)
}
