//! Per-position feedback marks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::MAX_CODE_LENGTH;

/// Classification of one guess position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMark {
    /// Right symbol, right position.
    Exact,
    /// Right symbol, wrong position.
    Present,
    /// No unclaimed occurrence of the symbol remains in the secret.
    Absent,
}

impl FeedbackMark {
    /// Single-character form: `=` exact, `~` present, `.` absent.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Exact => '=',
            Self::Present => '~',
            Self::Absent => '.',
        }
    }
}

/// Peg-style totals for a feedback row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackCounts {
    pub exact: usize,
    pub present: usize,
    pub absent: usize,
}

/// Feedback for a whole guess, aligned with the guess positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    marks: SmallVec<[FeedbackMark; MAX_CODE_LENGTH]>,
}

impl Feedback {
    /// Create feedback from marks.
    #[must_use]
    pub fn new(marks: impl IntoIterator<Item = FeedbackMark>) -> Self {
        Self {
            marks: marks.into_iter().collect(),
        }
    }

    /// The marks in guess order.
    #[must_use]
    pub fn marks(&self) -> &[FeedbackMark] {
        &self.marks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Is every mark `Exact`?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == FeedbackMark::Exact)
    }

    /// Count marks by kind.
    #[must_use]
    pub fn counts(&self) -> FeedbackCounts {
        self.marks.iter().fold(FeedbackCounts::default(), |mut counts, mark| {
            match mark {
                FeedbackMark::Exact => counts.exact += 1,
                FeedbackMark::Present => counts.present += 1,
                FeedbackMark::Absent => counts.absent += 1,
            }
            counts
        })
    }
}

impl std::ops::Index<usize> for Feedback {
    type Output = FeedbackMark;

    fn index(&self, index: usize) -> &FeedbackMark {
        &self.marks[index]
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}
