//! Application layer: the session controller and payload queries.

pub mod command_handlers;
pub mod query_handlers;
