use serde::{Deserialize, Serialize};

/// Validation outcome of a grid cell.
///
/// A cell stays [`Unknown`](Self::Unknown) until every player field is filled in.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Correctness {
    /// Not yet decidable.
    #[default]
    Unknown,
    /// The entry reproduces the cell value.
    Correct,
    /// The entry is complete but wrong.
    Incorrect,
}

impl From<bool> for Correctness {
    fn from(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}
