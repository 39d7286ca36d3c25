//! Shared test fixtures and utilities for the Forkpath narrative engine.

mod clock;
mod story;

pub use clock::{FixedClock, fixed_now};
pub use story::labelled_story_book;
