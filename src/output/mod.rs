//! Terminal output formatting
//!
//! Board layout, share summaries and colored console printing.

pub mod display;
pub mod formatters;

pub use display::{keyboard_lines, print_scored_guess, print_statistics, row_string};
pub use formatters::{KEYBOARD_ROWS, Tile, board, share_grid};
