//! Session status and attempt records.

use serde::{Deserialize, Serialize};

use crate::core::Code;
use crate::feedback::Feedback;

/// Session lifecycle. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Won,
    Lost,
}

impl Status {
    /// Has the session ended?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One accepted guess and its feedback. Never mutated once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Position in the session history, starting at 0.
    pub index: usize,
    pub guess: Code,
    pub feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub fn new(index: usize, guess: Code, feedback: Feedback) -> Self {
        Self { index, guess, feedback }
    }

    /// Did this attempt crack the code?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}
