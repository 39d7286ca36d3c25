//! Deterministic path → content mapping.
//!
//! Every function here is pure. Story variants and endings are chosen by
//! summing the character codes of the path symbols; the fold is kept as is
//! so existing runs keep their content.

use std::fmt;

use serde::Serialize;

use crate::MAX_DEPTH;
use crate::corpus::{EndingCorpus, StoryCorpus};
use crate::path::{Direction, Path};

/// Shown when the story corpus has no entry for a depth.
pub const STORY_FALLBACK: &str = "The path grows uncertain.";

/// Identifies the scene image for a depth/choice pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    /// The opening screen, before any choice.
    Start,
    /// The image for arriving at `depth` via `choice`.
    Node {
        /// Depth, clamped to `1..=MAX_DEPTH`.
        depth: u32,
        /// The last choice taken.
        choice: Direction,
    },
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Node { depth, choice } => write!(f, "{depth}{}", choice.symbol()),
        }
    }
}

impl Serialize for ImageKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Selects story variant 0 or 1 for `path`.
#[must_use]
pub fn variant_of(path: &Path) -> usize {
    path.code_sum() % 2
}

/// Story text for an active run at `depth`.
///
/// Only meaningful for `1 <= depth < MAX_DEPTH`; terminal depths use
/// [`ending_for`]. Missing entries yield [`STORY_FALLBACK`].
#[must_use]
pub fn story_for<'a>(stories: &'a StoryCorpus, depth: u32, path: &Path) -> &'a str {
    stories
        .fragments(depth)
        .map_or(STORY_FALLBACK, |fragments| &fragments[variant_of(path)])
}

/// Ending text for a terminal run.
#[must_use]
pub fn ending_for<'a>(endings: &'a EndingCorpus, path: &Path) -> &'a str {
    endings.get_wrapped(path.code_sum())
}

/// Image key for the screen reached at `depth` by `path`.
#[must_use]
pub fn image_key_for(depth: u32, path: &Path) -> ImageKey {
    match path.last() {
        None => ImageKey::Start,
        Some(choice) => ImageKey::Node {
            depth: depth.clamp(1, MAX_DEPTH),
            choice,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn stories() -> StoryCorpus {
        let mut entries = BTreeMap::new();
        for depth in 1..=MAX_DEPTH {
            entries.insert(depth, [format!("d{depth}-v0"), format!("d{depth}-v1")]);
        }
        StoryCorpus::new(entries)
    }

    fn endings() -> EndingCorpus {
        EndingCorpus::new((0..8).map(|i| format!("ending-{i}")).collect()).unwrap()
    }

    fn path(s: &str) -> Path {
        s.parse().unwrap()
    }

    #[test]
    fn test_variant_of_is_deterministic() {
        for raw in ["", "L", "R", "LR", "RRRL"] {
            assert_eq!(variant_of(&path(raw)), variant_of(&path(raw)));
        }
    }

    #[test]
    fn test_variant_of_is_even_for_left_right_symbols() {
        // 'L' = 76 and 'R' = 82 are both even.
        for raw in ["", "L", "R", "LRL", "RRRR"] {
            assert_eq!(variant_of(&path(raw)), 0);
        }
    }

    #[test]
    fn test_story_for_returns_a_fragment_for_each_active_depth() {
        let stories = stories();
        for depth in 1..MAX_DEPTH {
            let text = story_for(&stories, depth, &path("LR"));
            let fragments = stories.fragments(depth).unwrap();
            assert!(fragments.iter().any(|f| f == text), "depth {depth}: {text}");
        }
    }

    #[test]
    fn test_story_for_falls_back_when_depth_missing() {
        let stories = StoryCorpus::default();

        assert_eq!(story_for(&stories, 2, &path("L")), STORY_FALLBACK);
    }

    #[test]
    fn test_ending_for_folds_character_codes() {
        let endings = endings();

        // 4 * 76 = 304, 304 % 8 = 0
        assert_eq!(ending_for(&endings, &path("LLLL")), "ending-0");
        // 76 + 82 * 3 = 322, 322 % 8 = 2
        assert_eq!(ending_for(&endings, &path("LRRR")), "ending-2");
        // 4 * 82 = 328, 328 % 8 = 0
        assert_eq!(ending_for(&endings, &path("RRRR")), "ending-0");
    }

    #[test]
    fn test_ending_for_always_returns_corpus_member() {
        let endings = endings();
        for raw in ["", "L", "LR", "RLR", "LLRR", "RRRRR"] {
            let text = ending_for(&endings, &path(raw));
            assert!(endings.contains(text));
            assert_eq!(text, ending_for(&endings, &path(raw)));
        }
    }

    #[test]
    fn test_ending_for_supports_single_ending() {
        let endings = EndingCorpus::new(vec!["only".to_owned()]).unwrap();

        assert_eq!(ending_for(&endings, &path("RLRL")), "only");
    }

    #[test]
    fn test_image_key_for_empty_path_is_start() {
        assert_eq!(image_key_for(1, &Path::new()), ImageKey::Start);
        assert_eq!(image_key_for(1, &Path::new()).to_string(), "start");
    }

    #[test]
    fn test_image_key_for_composes_depth_then_symbol() {
        assert_eq!(image_key_for(2, &path("L")).to_string(), "2L");
        assert_eq!(image_key_for(4, &path("LRR")).to_string(), "4R");
    }

    #[test]
    fn test_image_key_for_clamps_depth() {
        assert_eq!(image_key_for(9, &path("LLLLR")).to_string(), "5R");
        assert_eq!(image_key_for(0, &path("L")).to_string(), "1L");
    }

    #[test]
    fn test_image_key_serializes_as_string() {
        let json = serde_json::to_string(&image_key_for(3, &path("RL"))).unwrap();
        assert_eq!(json, r#""3L""#);
    }
}
