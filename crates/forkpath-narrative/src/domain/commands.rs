//! Commands for the Narrative Progression context.

use forkpath_content::path::Direction;
use forkpath_core::command::Command;
use uuid::Uuid;

/// Command to take one branch.
#[derive(Debug, Clone)]
pub struct MakeChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The branch taken.
    pub direction: Direction,
}

impl Command for MakeChoice {
    fn command_type(&self) -> &'static str {
        "narrative.make_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to abandon the current run and start over.
#[derive(Debug, Clone)]
pub struct RestartRun {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for RestartRun {
    fn command_type(&self) -> &'static str {
        "narrative.restart_run"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
