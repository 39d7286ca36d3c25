//! Choice directions and the path of choices taken during a run.

use std::fmt;
use std::str::FromStr;

use forkpath_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One binary choice. Serialized as its single-character symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The left branch, symbol `L`.
    #[serde(rename = "L")]
    Left,
    /// The right branch, symbol `R`.
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    /// Both directions in presentation order.
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Returns the single-character symbol used in paths and image keys.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Returns the character code of the symbol, the unit of the path fold.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Left => b'L',
            Self::Right => b'R',
        }
    }

    /// Returns the button label shown for this choice.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left (L)",
            Self::Right => "Right (R)",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Direction {
    type Error = DomainError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' | 'l' => Ok(Self::Left),
            'R' | 'r' => Ok(Self::Right),
            other => Err(DomainError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    /// Accepts the symbol or the full word, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            return Ok(Self::Left);
        }
        if trimmed.eq_ignore_ascii_case("right") {
            return Ok(Self::Right);
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| invalid(s)),
            _ => Err(invalid(s)),
        }
    }
}

fn invalid(raw: &str) -> DomainError {
    DomainError::InvalidDirection(raw.to_owned())
}

/// The ordered choices made since the start of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Direction>);

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one choice.
    pub fn push(&mut self, direction: Direction) {
        self.0.push(direction);
    }

    /// Empties the path.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of choices taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no choice has been taken yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent choice, if any.
    #[must_use]
    pub fn last(&self) -> Option<Direction> {
        self.0.last().copied()
    }

    /// Iterates over the choices in order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }

    /// Sum of the character codes of every symbol in the path.
    #[must_use]
    pub fn code_sum(&self) -> usize {
        self.iter().map(|d| usize::from(d.code())).sum()
    }

    /// Renders the path for display, `Start` when empty.
    #[must_use]
    pub fn display_or_start(&self) -> String {
        if self.is_empty() {
            "Start".to_owned()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.0 {
            write!(f, "{}", direction.symbol())?;
        }
        Ok(())
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Path {
    type Err = DomainError;

    /// Parses a run of symbols such as `LRRL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| Direction::try_from(c).map_err(|_| invalid(s)))
            .collect()
    }
}

impl Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
