//! Player marks.
//!
//! ## Mark
//!
//! The two symbols that can occupy a cell. `X` always moves first in a
//! fresh game; `O` is the automated opponent unless configured otherwise.
//!
//! Empty cells are modelled as `None` in an `Option<Mark>`, never as a
//! third mark variant.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the two player symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First mover (the human side in the default setup).
    X,
    /// Second mover.
    O,
}

impl Mark {
    /// Both marks, in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// Get the other mark.
    ///
    /// ```
    /// use oxo_engine::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used in saved documents.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parse a symbol character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a string is not exactly `"X"` or `"O"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown mark {0:?}")]
pub struct ParseMarkError(pub String);

impl FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(ParseMarkError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::ALL {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(format!("{}", Mark::O), "O");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::O));
        assert!("".parse::<Mark>().is_err());
        assert!("x".parse::<Mark>().is_err());
        assert!("XO".parse::<Mark>().is_err());
        assert!("Draw".parse::<Mark>().is_err());
    }
}
