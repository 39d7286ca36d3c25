//! Story book fixture whose text names its own position.

use std::collections::BTreeMap;

use forkpath_content::MAX_DEPTH;
use forkpath_content::corpus::{EndingCorpus, StoryBook, StoryCorpus};

/// A story book where fragment `v` at depth `d` reads `"depth d variant v"`
/// and ending `i` reads `"ending i"`, with `ending_count` endings.
///
/// # Panics
///
/// Panics if `ending_count` is zero.
#[must_use]
pub fn labelled_story_book(ending_count: usize) -> StoryBook {
    let stories = (1..=MAX_DEPTH)
        .map(|depth| {
            (
                depth,
                [
                    format!("depth {depth} variant 0"),
                    format!("depth {depth} variant 1"),
                ],
            )
        })
        .collect::<BTreeMap<_, _>>();
    let endings = EndingCorpus::new((0..ending_count).map(|i| format!("ending {i}")).collect())
        .expect("labelled_story_book needs at least one ending");

    StoryBook::from_parts(StoryCorpus::new(stories), endings)
}
