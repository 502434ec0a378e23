use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// The seven recurrence quantification measures of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RqaStats {
    /// Fraction of recurrent cells, main diagonal included.
    pub recurrence_rate: f64,
    /// Fraction of recurrent cells on diagonal lines of length >= `lmin`.
    pub determinism: f64,
    /// Fraction of recurrent cells on vertical lines of length >= `lmin`.
    pub laminarity: f64,
    pub avg_diag_length: f64,
    /// Vertical line mass divided by the number of diagonal lines >= `lmin`.
    pub avg_vert_length: f64,
    /// Shannon entropy (nats) of the diagonal line lengths >= `lmin`.
    pub d_entropy: f64,
    /// Shannon entropy (nats) of the vertical line lengths >= `lmin`.
    pub v_entropy: f64,
}

impl RqaStats {
    /// Column names, in output order.
    pub const COLUMNS: [&'static str; 7] = [
        "recurrence_rate",
        "determinism",
        "laminarity",
        "avg_diag_length",
        "avg_vert_length",
        "d_entropy",
        "v_entropy",
    ];

    /// Values in [`RqaStats::COLUMNS`] order.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.recurrence_rate,
            self.determinism,
            self.laminarity,
            self.avg_diag_length,
            self.avg_vert_length,
            self.d_entropy,
            self.v_entropy,
        ]
    }

    /// Look up a measure by column name.
    pub fn get(&self, column: &str) -> Option<f64> {
        Self::COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| self.to_array()[i])
    }

    /// Reduce a recurrence matrix and its line distributions to the measures.
    ///
    /// `diag` and `vert` come from
    /// [`diagonal_line_distribution`](super::diagonal_line_distribution) and
    /// [`vertical_line_distribution`](super::vertical_line_distribution).
    /// Ratios whose denominator is zero are reported as 0.
    ///
    /// `avg_vert_length` divides by the number of diagonal lines of length at
    /// least `lmin`, not the number of vertical ones.
    pub fn from_distributions(
        recurrence: &Array2<bool>,
        diag: &[usize],
        vert: &[usize],
        lmin: usize,
    ) -> Self {
        let n = recurrence.nrows();
        let rr_sum = recurrence.iter().filter(|&&r| r).count();
        let recurrence_rate = if n == 0 {
            0.0
        } else {
            rr_sum as f64 / (n * n) as f64
        };

        let diag_mass = line_mass(diag, lmin);
        let vert_mass = line_mass(vert, lmin);

        let (determinism, laminarity) = if rr_sum > 0 {
            (diag_mass / rr_sum as f64, vert_mass / rr_sum as f64)
        } else {
            (0.0, 0.0)
        };

        let d_sum = line_count(diag, lmin);
        let avg_diag_length = if d_sum > 0.0 { diag_mass / d_sum } else { 0.0 };
        let avg_vert_length = if d_sum > 0.0 { vert_mass / d_sum } else { 0.0 };

        Self {
            recurrence_rate,
            determinism,
            laminarity,
            avg_diag_length,
            avg_vert_length,
            d_entropy: line_entropy(diag, lmin),
            v_entropy: line_entropy(vert, lmin),
        }
    }
}

fn tail(dist: &[usize], lmin: usize) -> &[usize] {
    dist.get(lmin..).unwrap_or(&[])
}

/// Number of recurrent cells on lines of length >= `lmin`.
fn line_mass(dist: &[usize], lmin: usize) -> f64 {
    tail(dist, lmin)
        .iter()
        .enumerate()
        .map(|(i, &count)| (count * (i + lmin)) as f64)
        .sum()
}

/// Number of lines of length >= `lmin`.
fn line_count(dist: &[usize], lmin: usize) -> f64 {
    tail(dist, lmin).iter().sum::<usize>() as f64
}

/// Shannon entropy (natural log) of the line lengths >= `lmin`. Zero when
/// no such line exists.
fn line_entropy(dist: &[usize], lmin: usize) -> f64 {
    let total = line_count(dist, lmin);
    if total == 0.0 {
        return 0.0;
    }
    let mut entropy = 0.0f64;
    for &count in tail(dist, lmin).iter().filter(|&&c| c > 0) {
        let p = count as f64 / total;
        entropy -= p * p.ln();
    }
    entropy
}
