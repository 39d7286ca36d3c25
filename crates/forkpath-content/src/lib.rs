//! Forkpath — Content bounded context.
//!
//! Owns the story book (story fragments per depth plus the ending list) and
//! the pure functions that map a choice path onto story text, ending text,
//! and image keys. Nothing here holds mutable state.

pub mod corpus;
pub mod path;
pub mod resolver;

/// Depth at which a run ends. Runs start at depth 1.
pub const MAX_DEPTH: u32 = 5;
