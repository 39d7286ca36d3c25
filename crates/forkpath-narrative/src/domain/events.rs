//! Domain events for the Narrative Progression context.

use forkpath_content::path::Direction;
use forkpath_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type for [`ChoiceMade`].
pub const CHOICE_MADE_EVENT_TYPE: &str = "narrative.choice_made";
/// Event type for [`RunTerminated`].
pub const RUN_TERMINATED_EVENT_TYPE: &str = "narrative.run_terminated";
/// Event type for [`RunReset`].
pub const RUN_RESET_EVENT_TYPE: &str = "narrative.run_reset";

/// Emitted when a branch is taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMade {
    /// The run identifier.
    pub run_id: Uuid,
    /// The branch taken.
    pub direction: Direction,
    /// Depth reached by taking it.
    pub depth: u32,
}

/// Emitted when a run reaches its final depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTerminated {
    /// The run identifier.
    pub run_id: Uuid,
    /// The complete path, e.g. `LRRL`.
    pub path: String,
}

/// Emitted when a run is reset to its starting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReset {
    /// The run identifier.
    pub run_id: Uuid,
}

/// Event payload variants for the Narrative Progression context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NarrativeEventKind {
    /// A branch was taken.
    ChoiceMade(ChoiceMade),
    /// The run reached its final depth.
    RunTerminated(RunTerminated),
    /// The run was reset.
    RunReset(RunReset),
}

impl NarrativeEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ChoiceMade(_) => CHOICE_MADE_EVENT_TYPE,
            Self::RunTerminated(_) => RUN_TERMINATED_EVENT_TYPE,
            Self::RunReset(_) => RUN_RESET_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Narrative Progression context.
#[derive(Debug, Clone)]
pub struct NarrativeEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: NarrativeEventKind,
}

impl DomainEvent for NarrativeEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("NarrativeEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
