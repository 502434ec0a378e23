//! Chaining analysis steps.
//!
//! A [`Segment`] turns one [`Table`] into another. A [`Pipeline`] runs its
//! segments in order, feeding each output into the next segment, so a
//! recording can be gap-filled, differenced and analysed in one call:
//!
//! ```
//! use mocap_rqa::pipeline::{CrossRqaSegment, GapFillSegment, Pipeline};
//! use mocap_rqa::rqa::RqaConfig;
//! use mocap_rqa::table::Table;
//!
//! let table = Table::from_columns(vec![
//!     ("a", vec![1.0, f64::NAN, 2.0, 2.0]),
//!     ("b", vec![1.0, 1.0, 2.0, 2.0]),
//! ]).unwrap();
//!
//! let pipeline = Pipeline::new()
//!     .with(GapFillSegment::new("fill"))
//!     .with(CrossRqaSegment::new("crqa", "a", "b", RqaConfig::default()));
//!
//! let out = pipeline.run(table).unwrap();
//! assert_eq!(out.n_rows(), 1);
//! ```

use tracing::debug;

use crate::rqa::{RqaConfig, RqaTable, WindowConfig, auto_rqa, cross_rqa, windowed_cross_rqa};
use crate::table::{ColumnSelector, Table};
use crate::transform::{calc_shift, col_means, fill_gaps};
use crate::{Error, Result};

/// One named processing step.
pub trait Segment {
    fn name(&self) -> &str;

    fn process(&self, input: Table) -> Result<Table>;
}

/// Auto-recurrence analysis of one column.
#[derive(Debug, Clone)]
pub struct AutoRqaSegment {
    pub name: String,
    pub column: ColumnSelector,
    pub config: RqaConfig,
}

impl AutoRqaSegment {
    pub fn new(name: impl Into<String>, column: impl Into<ColumnSelector>, config: RqaConfig) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            config,
        }
    }
}

impl Segment for AutoRqaSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Table) -> Result<Table> {
        self.config.validate()?;
        if input.n_cols() == 0 {
            return Ok(RqaTable::new().into());
        }
        let x = input.column(&self.column)?;
        Ok(auto_rqa(x, &self.config)?.into())
    }
}

/// Cross-recurrence analysis of two columns.
#[derive(Debug, Clone)]
pub struct CrossRqaSegment {
    pub name: String,
    pub col_a: ColumnSelector,
    pub col_b: ColumnSelector,
    pub config: RqaConfig,
}

impl CrossRqaSegment {
    pub fn new(
        name: impl Into<String>,
        col_a: impl Into<ColumnSelector>,
        col_b: impl Into<ColumnSelector>,
        config: RqaConfig,
    ) -> Self {
        Self {
            name: name.into(),
            col_a: col_a.into(),
            col_b: col_b.into(),
            config,
        }
    }
}

impl Segment for CrossRqaSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Table) -> Result<Table> {
        Ok(cross_rqa(&input, &self.col_a, &self.col_b, &self.config)?.into())
    }
}

/// Cross-recurrence analysis over sliding windows; one output row per window.
#[derive(Debug, Clone)]
pub struct WindowedCrossRqaSegment {
    pub name: String,
    pub col_a: ColumnSelector,
    pub col_b: ColumnSelector,
    pub config: RqaConfig,
    pub windows: WindowConfig,
}

impl WindowedCrossRqaSegment {
    pub fn new(
        name: impl Into<String>,
        col_a: impl Into<ColumnSelector>,
        col_b: impl Into<ColumnSelector>,
        config: RqaConfig,
        windows: WindowConfig,
    ) -> Self {
        Self {
            name: name.into(),
            col_a: col_a.into(),
            col_b: col_b.into(),
            config,
            windows,
        }
    }
}

impl Segment for WindowedCrossRqaSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Table) -> Result<Table> {
        let out = windowed_cross_rqa(
            &input,
            &self.col_a,
            &self.col_b,
            &self.config,
            &self.windows,
        )?;
        Ok(out.into())
    }
}

/// Appends lagged differences of the selected columns (all when `None`).
#[derive(Debug, Clone)]
pub struct ShiftSegment {
    pub name: String,
    pub columns: Option<Vec<ColumnSelector>>,
    pub shift: usize,
}

impl ShiftSegment {
    pub fn new(name: impl Into<String>, columns: Option<Vec<ColumnSelector>>, shift: usize) -> Self {
        Self {
            name: name.into(),
            columns,
            shift,
        }
    }
}

impl Segment for ShiftSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Table) -> Result<Table> {
        calc_shift(input, self.columns.as_deref(), self.shift)
    }
}

/// Linear interpolation over NaN gaps.
#[derive(Debug, Clone)]
pub struct GapFillSegment {
    pub name: String,
}

impl GapFillSegment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Segment for GapFillSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Table) -> Result<Table> {
        Ok(fill_gaps(input))
    }
}

/// NaN-ignoring means of the selected columns (all when `None`) as a
/// one-row table.
#[derive(Debug, Clone)]
pub struct ColMeansSegment {
    pub name: String,
    pub columns: Option<Vec<ColumnSelector>>,
}

impl ColMeansSegment {
    pub fn new(name: impl Into<String>, columns: Option<Vec<ColumnSelector>>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

impl Segment for ColMeansSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Table) -> Result<Table> {
        col_means(&input, self.columns.as_deref())
    }
}

/// Ordered list of segments run one after another.
#[derive(Default)]
pub struct Pipeline {
    segments: Vec<Box<dyn Segment + Send + Sync>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment and return its position.
    pub fn push(&mut self, segment: impl Segment + Send + Sync + 'static) -> usize {
        self.segments.push(Box::new(segment));
        self.segments.len() - 1
    }

    /// Builder-style [`Pipeline::push`].
    pub fn with(mut self, segment: impl Segment + Send + Sync + 'static) -> Self {
        self.push(segment);
        self
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.name()).collect()
    }

    /// Run every segment in order, threading the table through.
    pub fn run(&self, input: Table) -> Result<Table> {
        if self.segments.is_empty() {
            return Err(Error::EmptyPipeline);
        }
        let mut table = input;
        for segment in &self.segments {
            debug!(
                segment = segment.name(),
                n_rows = table.n_rows(),
                n_cols = table.n_cols(),
                "running segment"
            );
            table = segment.process(table)?;
        }
        Ok(table)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("segments", &self.names())
            .finish()
    }
}
