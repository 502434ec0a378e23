use crate::{Error, Result};

/// Parameters shared by every recurrence analysis.
///
/// # Example
/// ```
/// use mocap_rqa::rqa::RqaConfig;
///
/// let cfg = RqaConfig::default().with_dim(3).with_tau(2).with_threshold(0.25);
/// assert_eq!(cfg.lmin, 2);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RqaConfig {
    /// Embedding dimension (number of delayed copies).
    pub dim: usize,
    /// Time delay between successive embedded copies, in samples.
    pub tau: usize,
    /// Points closer than this (strictly) are recurrent.
    pub threshold: f64,
    /// Minimum line length counted by the line-based measures.
    pub lmin: usize,
}

impl Default for RqaConfig {
    fn default() -> Self {
        Self {
            dim: 1,
            tau: 1,
            threshold: 0.1,
            lmin: 2,
        }
    }
}

impl RqaConfig {
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    pub fn with_tau(mut self, tau: usize) -> Self {
        self.tau = tau;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_lmin(mut self, lmin: usize) -> Self {
        self.lmin = lmin;
        self
    }

    /// Check the parameters without touching any data.
    ///
    /// Zero and negative thresholds are accepted; they produce a matrix
    /// without recurrences. A NaN threshold is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(Error::InvalidSize {
                name: "dim",
                value: 0,
                reason: "must be >= 1",
            });
        }
        if self.tau == 0 {
            return Err(Error::InvalidSize {
                name: "tau",
                value: 0,
                reason: "must be >= 1",
            });
        }
        if self.threshold.is_nan() {
            return Err(Error::InvalidParameter {
                name: "threshold",
                value: self.threshold.to_string(),
                reason: "must be a number".to_string(),
            });
        }
        Ok(())
    }
}

/// Sliding-window layout for windowed cross recurrence analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window length in samples.
    pub window: usize,
    /// Advance between consecutive window starts, in samples.
    pub step: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window: 100,
            step: 10,
        }
    }
}

impl WindowConfig {
    pub fn new(window: usize, step: usize) -> Self {
        Self { window, step }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::InvalidSize {
                name: "window",
                value: 0,
                reason: "must be >= 1",
            });
        }
        if self.step == 0 {
            return Err(Error::InvalidSize {
                name: "step",
                value: 0,
                reason: "must be >= 1",
            });
        }
        Ok(())
    }

    /// Start offsets of every full window over a sequence of length `len`.
    ///
    /// Empty when the window does not fit.
    ///
    /// # Example
    /// ```
    /// use mocap_rqa::rqa::WindowConfig;
    ///
    /// let starts = WindowConfig::new(4, 2).window_starts(8).unwrap();
    /// assert_eq!(starts, vec![0, 2, 4]);
    /// ```
    pub fn window_starts(&self, len: usize) -> Result<Vec<usize>> {
        self.validate()?;
        if self.window > len {
            return Ok(Vec::new());
        }
        Ok((0..=len - self.window).step_by(self.step).collect())
    }
}
