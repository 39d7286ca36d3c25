//! Domain model for the Narrative Progression context.

pub mod aggregates;
pub mod commands;
pub mod events;
