//! Command handlers for the Narrative Progression context.
//!
//! The [`SessionController`] owns one run and the story book. Each command
//! applies at most one transition, drains the run's events into the log, and
//! returns the payload for the resulting state.

use std::sync::Arc;

use forkpath_content::corpus::StoryBook;
use forkpath_content::path::Direction;
use forkpath_core::aggregate::AggregateRoot;
use forkpath_core::clock::Clock;
use forkpath_core::command::Command;
use forkpath_core::event::DomainEvent;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::application::query_handlers::{DisplayPayload, build_payload};
use crate::domain::aggregates::{ChoiceOutcome, Run, RunSnapshot};
use crate::domain::commands::{MakeChoice, RestartRun};

/// Drives a single run from start to ending.
pub struct SessionController {
    run: Run,
    book: Arc<StoryBook>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("run", &self.run)
            .field("book_hash", &self.book.version_hash())
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Creates a controller with a fresh run.
    #[must_use]
    pub fn new(book: Arc<StoryBook>, clock: Arc<dyn Clock>) -> Self {
        Self {
            run: Run::new(Uuid::new_v4()),
            book,
            clock,
        }
    }

    /// The story book this session reads from.
    #[must_use]
    pub fn book(&self) -> &StoryBook {
        &self.book
    }

    /// Read-only view of the run.
    #[must_use]
    pub fn snapshot(&self) -> RunSnapshot {
        self.run.snapshot()
    }

    /// Payload for the current state. Never mutates.
    #[must_use]
    pub fn current_payload(&self) -> DisplayPayload {
        build_payload(&self.run.snapshot(), &self.book)
    }

    /// Handles the `MakeChoice` command.
    ///
    /// An active run advances by one step. A terminal run is left as is and
    /// the ending payload is delivered again.
    #[instrument(skip(self, command), fields(
        run_id = %self.run.id,
        correlation_id = %command.correlation_id,
        direction = %command.direction
    ))]
    pub fn handle_make_choice(&mut self, command: &MakeChoice) -> DisplayPayload {
        let outcome = self
            .run
            .choose(command.direction, command.correlation_id, self.clock.as_ref());

        match outcome {
            ChoiceOutcome::Advanced => debug!("run advanced"),
            ChoiceOutcome::Terminated => info!(path = %self.run.snapshot().path, "run ended"),
            ChoiceOutcome::AlreadyTerminal => {
                debug!("run already ended; re-delivering ending");
            }
        }

        self.publish_events(command);
        self.current_payload()
    }

    /// Handles the `RestartRun` command.
    #[instrument(skip(self, command), fields(
        run_id = %self.run.id,
        correlation_id = %command.correlation_id
    ))]
    pub fn handle_restart_run(&mut self, command: &RestartRun) -> DisplayPayload {
        self.run.reset(command.correlation_id, self.clock.as_ref());
        info!("run restarted");

        self.publish_events(command);
        self.current_payload()
    }

    /// Takes `direction` under a fresh correlation ID.
    pub fn on_choice(&mut self, direction: Direction) -> DisplayPayload {
        self.handle_make_choice(&MakeChoice {
            correlation_id: Uuid::new_v4(),
            direction,
        })
    }

    /// Parses raw choice input. Anything that is not a direction is logged
    /// and ignored, and the unchanged current payload is returned.
    pub fn on_raw_choice(&mut self, raw: &str) -> DisplayPayload {
        match raw.parse::<Direction>() {
            Ok(direction) => self.on_choice(direction),
            Err(err) => {
                warn!(%err, "ignoring choice input");
                self.current_payload()
            }
        }
    }

    /// Restarts under a fresh correlation ID.
    pub fn on_restart(&mut self) -> DisplayPayload {
        self.handle_restart_run(&RestartRun {
            correlation_id: Uuid::new_v4(),
        })
    }

    fn publish_events(&mut self, command: &dyn Command) {
        for event in self.run.uncommitted_events() {
            let meta = event.metadata();
            info!(
                command_type = command.command_type(),
                event_type = event.event_type(),
                sequence_number = meta.sequence_number,
                payload = %event.to_payload(),
                "run event recorded"
            );
        }
        self.run.clear_uncommitted_events();
        debug!(version = self.run.version(), "events drained");
    }
}
