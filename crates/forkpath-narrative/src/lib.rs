//! Forkpath — Narrative Progression bounded context.
//!
//! Responsible for the run state machine (path, depth, termination) and the
//! session controller that turns choices into display payloads.

pub mod application;
pub mod domain;
