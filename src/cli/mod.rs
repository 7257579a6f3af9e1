//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Key polling and key → action mapping using crossterm
//! - `display.rs`: Terminal rendering of the session

pub mod display;
pub mod input;

pub use display::Display;
pub use input::{Action, InputHandler};
