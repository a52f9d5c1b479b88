//! Two-pass, duplicate-safe guess evaluation.

use smallvec::SmallVec;

use crate::core::{Code, Symbol, MAX_CODE_LENGTH};

use super::mark::{Feedback, FeedbackMark};

/// Scores guesses against a secret.
pub struct GuessEvaluator;

impl GuessEvaluator {
    /// Compute feedback for `guess` against `secret`.
    ///
    /// Each secret occurrence is claimed by at most one guess position.
    /// Exact matches claim first; remaining positions then claim the
    /// leftmost unclaimed occurrence of their symbol, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `secret` and `guess` differ in length.
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Feedback {
        assert_eq!(
            secret.len(),
            guess.len(),
            "Guess length must equal secret length"
        );

        // Unclaimed secret symbols; `None` once consumed.
        let mut pool: SmallVec<[Option<Symbol>; MAX_CODE_LENGTH]> =
            secret.symbols().iter().copied().map(Some).collect();
        let mut marks: SmallVec<[Option<FeedbackMark>; MAX_CODE_LENGTH]> =
            SmallVec::from_elem(None, guess.len());

        for (i, (&g, &s)) in guess.symbols().iter().zip(secret.symbols()).enumerate() {
            if g == s {
                marks[i] = Some(FeedbackMark::Exact);
                pool[i] = None;
            }
        }

        for (i, &g) in guess.symbols().iter().enumerate() {
            if marks[i].is_some() {
                continue;
            }
            let mark = match pool.iter_mut().find(|slot| **slot == Some(g)) {
                Some(slot) => {
                    *slot = None;
                    FeedbackMark::Present
                }
                None => FeedbackMark::Absent,
            };
            marks[i] = Some(mark);
        }

        Feedback::new(marks.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackMark::*;

    fn eval(secret: &str, guess: &str) -> Vec<FeedbackMark> {
        let secret: Code = secret.parse().unwrap();
        let guess: Code = guess.parse().unwrap();
        GuessEvaluator::evaluate(&secret, &guess).marks().to_vec()
    }

    #[test]
    fn test_swapped_pair() {
        assert_eq!(eval("1234", "1243"), vec![Exact, Exact, Present, Present]);
    }

    #[test]
    fn test_exact_claims_before_present() {
        assert_eq!(eval("1123", "1111"), vec![Exact, Exact, Absent, Absent]);
    }

    #[test]
    fn test_full_permutation_of_pairs() {
        assert_eq!(eval("5566", "6655"), vec![Present, Present, Present, Present]);
    }

    #[test]
    fn test_all_exact() {
        let marks = eval("9081", "9081");
        assert!(marks.iter().all(|&m| m == Exact));
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(eval("1234", "5678"), vec![Absent; 4]);
    }

    #[test]
    fn test_single_secret_occurrence_claimed_once() {
        // The secret's only 2 is claimed by the exact match.
        assert_eq!(eval("1234", "2225"), vec![Absent, Exact, Absent, Absent]);
        assert_eq!(eval("1200", "3311"), vec![Absent, Absent, Present, Absent]);
    }

    #[test]
    fn test_later_exact_not_stolen_by_earlier_present() {
        // Position 3's exact 1 must not be consumed by position 0.
        assert_eq!(eval("2341", "1111"), vec![Absent, Absent, Absent, Exact]);
        assert_eq!(eval("1231", "3111"), vec![Present, Present, Absent, Exact]);
    }

    #[test]
    fn test_case_insensitive_letters() {
        assert_eq!(eval("AB9", "ba9"), vec![Present, Present, Exact]);
    }

    #[test]
    #[should_panic(expected = "Guess length must equal secret length")]
    fn test_length_mismatch_panics() {
        let _ = eval("1234", "123");
    }
}
