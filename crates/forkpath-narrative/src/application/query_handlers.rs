//! Query handlers for the Narrative Progression context.
//!
//! Builds the display payload the presentation layer renders. Payloads are
//! derived entirely from a run snapshot and the story book.

use forkpath_content::MAX_DEPTH;
use forkpath_content::corpus::StoryBook;
use forkpath_content::path::{Direction, Path};
use forkpath_content::resolver::{ImageKey, ending_for, image_key_for, story_for};
use serde::Serialize;

use crate::domain::aggregates::RunSnapshot;

/// Title of the opening screen.
pub const START_TITLE: &str = "Start";
/// Title shown once the run has ended.
pub const GAME_OVER_TITLE: &str = "Game Over";

/// Everything the presentation layer needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    /// Screen heading.
    pub title: String,
    /// Story fragment, or the ending once terminal.
    pub body_text: String,
    /// Scene image key, `start` or `<depth><symbol>`.
    pub image_key: ImageKey,
    /// Status line: depth, path and maximum depth.
    pub meta_line: String,
    /// Whether the run has ended.
    pub is_terminal: bool,
    /// Choices on offer; empty once terminal.
    pub available_choices: Vec<Direction>,
    /// Current depth.
    pub depth: u32,
    /// Choices taken so far.
    pub path: Path,
}

/// Builds the payload for `snapshot`.
#[must_use]
pub fn build_payload(snapshot: &RunSnapshot, book: &StoryBook) -> DisplayPayload {
    let RunSnapshot {
        path,
        depth,
        is_terminal,
    } = snapshot;

    let (title, body_text, available_choices) = if *is_terminal {
        (
            GAME_OVER_TITLE.to_owned(),
            ending_for(book.endings(), path),
            Vec::new(),
        )
    } else {
        let title = if path.is_empty() {
            START_TITLE.to_owned()
        } else {
            format!("Node {depth} — Path: {path}")
        };
        (
            title,
            story_for(book.stories(), *depth, path),
            Direction::ALL.to_vec(),
        )
    };

    DisplayPayload {
        title,
        body_text: body_text.to_owned(),
        image_key: image_key_for(*depth, path),
        meta_line: meta_line(*depth, path),
        is_terminal: *is_terminal,
        available_choices,
        depth: *depth,
        path: path.clone(),
    }
}

fn meta_line(depth: u32, path: &Path) -> String {
    format!(
        "Depth: {depth} · Path: {} · Max depth: {MAX_DEPTH}",
        path.display_or_start()
    )
}
