/// Crate-level error type for recurrence analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A required size or count is zero or otherwise invalid.
    #[error("invalid size for `{name}`: {value} ({reason})")]
    InvalidSize {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// Input arrays have incompatible shapes for the operation.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Positional column selector past the last column.
    #[error("column index {index} out of range for table with {n_cols} columns")]
    ColumnIndexOutOfRange { index: usize, n_cols: usize },

    /// Named column selector that matches no column.
    #[error("no column named `{0}`")]
    UnknownColumn(String),

    /// A pipeline was run without any segments.
    #[error("pipeline has no segments")]
    EmptyPipeline,
}

/// Convenience Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
