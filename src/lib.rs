//! Evil Termo
//!
//! A Portuguese word-guessing game with a twist: every wrong guess fires a
//! penalty that obscures part of the board, a hint costs a whole turn, and a
//! lost game ends in a timed anagram challenge.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_termo::core::{Word, evaluate};
//!
//! let guess = Word::new("farol").unwrap();
//! let solution = Word::new("flora").unwrap();
//!
//! let outcomes = evaluate(&guess, &solution);
//! println!("{outcomes:?}");
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Hint generation
pub mod hint;

// Word lists
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
