//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use forkpath_content::corpus::StoryBook;
use forkpath_core::clock::Clock;
use forkpath_core::error::DomainError;
use forkpath_narrative::application::command_handlers::SessionController;

use crate::assets::AssetResolver;

/// Application state shared across all request handlers.
///
/// Requests are served concurrently, so the session sits behind one mutex
/// held for the whole of each command.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The hosted session.
    session: Arc<Mutex<SessionController>>,
    /// Image key → URL mapping.
    pub assets: AssetResolver,
}

impl AppState {
    /// Create new application state around a fresh session.
    #[must_use]
    pub fn new(book: Arc<StoryBook>, clock: Arc<dyn Clock>, assets: AssetResolver) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionController::new(book, clock))),
            assets,
        }
    }

    /// Locks the session for one command.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a previous holder panicked.
    pub fn session(&self) -> Result<MutexGuard<'_, SessionController>, DomainError> {
        self.session
            .lock()
            .map_err(|_| DomainError::Infrastructure("session lock poisoned".to_owned()))
    }
}
