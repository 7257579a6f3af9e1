//! Session Management: deck state, reordering and the event reducer
//!
//! # Components
//! - `state.rs`: SessionState and its deck operations
//! - `order.rs`: Shuffle/unshuffle restricted to enabled positions
//! - `engine.rs`: Event reducer with two-phase transitions

pub mod engine;
pub mod order;
pub mod state;

pub use engine::{Engine, Event, TransitionKind};
pub use state::{EnabledCategories, Outcome, SessionState};
