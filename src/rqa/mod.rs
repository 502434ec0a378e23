//! Recurrence quantification analysis (RQA).
//!
//! The pipeline for one analysis is: time-delay [`embed`] both sequences,
//! threshold their pairwise distances into a [`recurrence_matrix`], extract
//! the [`diagonal_line_distribution`] and [`vertical_line_distribution`],
//! and reduce everything to [`RqaStats`]. [`compute_rqa`] runs all steps;
//! [`auto_rqa`], [`cross_rqa`] and [`windowed_cross_rqa`] are the table-level
//! drivers built on it.

mod analysis;
mod config;
mod embedding;
mod lines;
mod recurrence;
mod stats;

// Parameters
pub use config::{RqaConfig, WindowConfig};

// Phase-space reconstruction
pub use embedding::{embed, embedded_len};

// Recurrence matrices
pub use recurrence::{distance_matrix, recurrence_matrix};

// Line-length distributions
pub use lines::{diagonal_line_distribution, vertical_line_distribution};

// Measures
pub use stats::RqaStats;

// Drivers
pub use analysis::{RqaTable, auto_rqa, compute_rqa, cross_rqa, windowed_cross_rqa};
