//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_feedback_result, print_matrix_result, print_optimal_result, print_partition_result,
    print_store_warning,
};
pub use formatters::search_progress;
