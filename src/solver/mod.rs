//! Optimal guess search
//!
//! [`SearchEngine`] runs the memoized expected-value recursion in one thread.
//! [`WorkDistributor`] spreads the top-level guesses over a worker pool, each
//! worker with its own engine.

mod distributor;
mod optimal;
mod partition;
mod search;
mod subset_key;

pub use distributor::{Distributed, WorkDistributor};
pub use optimal::Optimal;
pub use partition::Partition;
pub use search::{SearchEngine, SearchStats};
pub use subset_key::subset_key;
