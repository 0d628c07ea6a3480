//! Command implementations

pub mod feedback;
pub mod matrix;
pub mod optimal;
pub mod partition;
pub mod select;

pub use feedback::{FeedbackResult, feedback};
pub use matrix::{MatrixResult, prepare_matrix};
pub use optimal::{OptimalConfig, OptimalResult, SearchMode, SearchReport, find_optimal};
pub use partition::{PartitionGroup, PartitionResult, partition_subset};
pub use select::{Selection, SelectionError};
