use std::num::NonZero;

use serde::{Deserialize, Serialize};

/// Per-session settings of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Hints available per puzzle.
    pub max_hints: u8,
    /// Maximum number of undo/redo snapshots kept, unbounded when `None`.
    pub history_capacity: Option<NonZero<usize>>,
}

impl GameOptions {
    /// Hints available per puzzle by default.
    pub const DEFAULT_MAX_HINTS: u8 = 3;

    /// Sets the hint budget.
    #[must_use]
    pub const fn max_hints(self, max_hints: u8) -> Self {
        Self { max_hints, ..self }
    }

    /// Caps the history, dropping the oldest undo steps beyond `history_capacity`.
    #[must_use]
    pub const fn history_capacity(self, history_capacity: Option<NonZero<usize>>) -> Self {
        Self {
            history_capacity,
            ..self
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_hints: Self::DEFAULT_MAX_HINTS,
            history_capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: GameOptions = serde_json::from_str(r#"{"max_hints":5}"#).unwrap();
        assert_eq!(options.max_hints, 5);
        assert_eq!(options.history_capacity, None);
    }

    #[test]
    fn test_history_capacity_is_optional() {
        let options: GameOptions = serde_json::from_str(r#"{"history_capacity":40}"#).unwrap();
        assert_eq!(options.history_capacity, NonZero::new(40));

        let options: GameOptions = serde_json::from_str(r#"{"history_capacity":null}"#).unwrap();
        assert_eq!(options.history_capacity, None);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(serde_json::from_str::<GameOptions>(r#"{"history_capacity":0}"#).is_err());
    }
}
