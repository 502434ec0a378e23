//! Recurrence quantification analysis for motion-capture time series.
//!
//! `mocap_rqa` quantifies movement dynamics and interpersonal coordination
//! from marker trajectories. A recording is held as a [`table::Table`] of
//! named numeric columns; recurrence quantification analysis (RQA) runs on
//! one column against itself, on two columns against each other, or on two
//! columns over sliding windows.
//!
//! # Quick Start
//!
//! ```rust
//! use mocap_rqa::rqa::{RqaConfig, WindowConfig, cross_rqa, windowed_cross_rqa};
//! use mocap_rqa::table::{ColumnSelector, Table};
//!
//! let table = Table::from_columns(vec![
//!     ("leader_vx", vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0]),
//!     ("follower_vx", vec![3.0, 3.0, 2.0, 2.0, 3.0, 3.0, 2.0, 2.0]),
//! ]).unwrap();
//! let cfg = RqaConfig::default();
//!
//! let whole = cross_rqa(&table, &"leader_vx".into(), &"follower_vx".into(), &cfg).unwrap();
//! assert_eq!(whole.len(), 1);
//!
//! let windows = WindowConfig::new(4, 2);
//! let (first, second) = (ColumnSelector::Index(0), ColumnSelector::Index(1));
//! let per_window = windowed_cross_rqa(&table, &first, &second, &cfg, &windows).unwrap();
//! assert_eq!(per_window.column("recurrence_rate").unwrap(), vec![0.25, 0.25, 0.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`rqa`] | Embedding, recurrence matrices, line distributions, RQA measures and drivers |
//! | [`table`] | Named numeric columns and column selectors |
//! | [`transform`] | Lagged differences, gap filling, NaN-aware means |
//! | [`pipeline`] | Chaining named table-to-table segments |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Invalid parameters and column selectors
//! fail immediately; empty input and the absence of recurrences are not
//! errors and produce empty tables or zero-valued measures.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `parallel` | Compute the windows of windowed cross-RQA with rayon |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod pipeline;
pub mod rqa;
pub mod table;
pub mod transform;
