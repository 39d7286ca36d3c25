//! Aggregate roots for the Narrative Progression context.

use forkpath_content::MAX_DEPTH;
use forkpath_content::path::{Direction, Path};
use forkpath_core::aggregate::AggregateRoot;
use forkpath_core::clock::Clock;
use forkpath_core::event::EventMetadata;
use serde::Serialize;
use uuid::Uuid;

use super::events::{ChoiceMade, NarrativeEvent, NarrativeEventKind, RunReset, RunTerminated};

/// Run progression state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunPhase {
    /// `depth < MAX_DEPTH`; choices are accepted.
    Active,
    /// `depth == MAX_DEPTH`; choices are ignored until reset.
    Terminal,
}

/// What a call to [`Run::choose`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The choice was applied and the run is still active.
    Advanced,
    /// The choice was applied and the run reached its final depth.
    Terminated,
    /// The run was already terminal; nothing changed.
    AlreadyTerminal,
}

/// Read-only view of a run at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSnapshot {
    /// Choices taken so far.
    pub path: Path,
    /// Current depth, always `path.len() + 1`.
    pub depth: u32,
    /// Whether the run has reached `MAX_DEPTH`.
    pub is_terminal: bool,
}

/// The aggregate root for one playthrough.
#[derive(Debug)]
pub struct Run {
    /// Aggregate identifier. Survives resets.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Choices taken since the last reset.
    pub(crate) path: Path,
    /// Current depth, starting at 1.
    pub(crate) depth: u32,
    /// Current phase.
    pub(crate) phase: RunPhase,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<NarrativeEvent>,
}

impl Run {
    /// Creates a run at depth 1 with an empty path.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            path: Path::new(),
            depth: 1,
            phase: RunPhase::Active,
            uncommitted_events: Vec::new(),
        }
    }

    /// Takes one branch.
    ///
    /// Records `ChoiceMade`, plus `RunTerminated` when the final depth is
    /// reached. A terminal run is left untouched.
    pub fn choose(
        &mut self,
        direction: Direction,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> ChoiceOutcome {
        if self.phase == RunPhase::Terminal {
            return ChoiceOutcome::AlreadyTerminal;
        }

        let choice = NarrativeEventKind::ChoiceMade(ChoiceMade {
            run_id: self.id,
            direction,
            depth: self.depth + 1,
        });
        self.record(choice, correlation_id, clock);

        if self.depth < MAX_DEPTH {
            return ChoiceOutcome::Advanced;
        }

        let terminated = NarrativeEventKind::RunTerminated(RunTerminated {
            run_id: self.id,
            path: self.path.to_string(),
        });
        self.record(terminated, correlation_id, clock);
        ChoiceOutcome::Terminated
    }

    /// Returns to depth 1 with an empty path, from any state.
    pub fn reset(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let reset = NarrativeEventKind::RunReset(RunReset { run_id: self.id });
        self.record(reset, correlation_id, clock);
    }

    /// Returns the current path, depth and terminal flag.
    #[must_use]
    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            path: self.path.clone(),
            depth: self.depth,
            is_terminal: self.is_terminal(),
        }
    }

    /// Whether the run has reached its final depth.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == RunPhase::Terminal
    }

    /// Returns the next sequence number for a new event.
    fn next_sequence_number(&self) -> i64 {
        self.version + 1
    }

    fn record(&mut self, kind: NarrativeEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = NarrativeEvent {
            metadata: EventMetadata::caused_by_command(
                kind.event_type(),
                self.id,
                self.next_sequence_number(),
                correlation_id,
                clock.now(),
            ),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for Run {
    type Event = NarrativeEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            NarrativeEventKind::ChoiceMade(payload) => {
                self.path.push(payload.direction);
                self.depth = payload.depth;
                if self.depth >= MAX_DEPTH {
                    self.phase = RunPhase::Terminal;
                }
            }
            NarrativeEventKind::RunTerminated(_) => {
                self.phase = RunPhase::Terminal;
            }
            NarrativeEventKind::RunReset(_) => {
                self.path.clear();
                self.depth = 1;
                self.phase = RunPhase::Active;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
