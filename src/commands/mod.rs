//! Command implementations

pub mod score;
pub mod simple;

pub use score::score_words;
pub use simple::{Console, run_simple};
