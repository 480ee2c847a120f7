//! Terminal output formatting
//!
//! Board printing for the line-based CLI and the shareable emoji grid.

pub mod display;
pub mod share;

pub use display::{print_board, print_keyboard, print_stats};
pub use share::share_text;
