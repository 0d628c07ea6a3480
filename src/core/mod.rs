//! Core domain types
//!
//! Words and the feedback codec. Everything here is pure and has no
//! dependency on the vocabulary or the search.

mod pattern;
mod word;

pub use pattern::Pattern;
pub use word::{Word, WordError};
