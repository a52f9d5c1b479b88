//! Guess evaluation integration tests.
//!
//! Covers the worked examples plus property tests for conservation and
//! single claiming of secret occurrences.

use crack_code::core::{Alphabet, Code, Symbol};
use crack_code::feedback::{FeedbackMark, GuessEvaluator};
use proptest::prelude::*;

use FeedbackMark::*;

fn code(s: &str) -> Code {
    s.parse().unwrap()
}

fn marks(secret: &str, guess: &str) -> Vec<FeedbackMark> {
    GuessEvaluator::evaluate(&code(secret), &code(guess)).marks().to_vec()
}

/// Secret and guess of equal length over a narrow alphabet, so repeats are common.
fn pair() -> impl Strategy<Value = (Code, Code)> {
    (3usize..=10).prop_flat_map(|len| {
        let symbols = || prop::collection::vec(0usize..4, len);
        (symbols(), symbols()).prop_map(|(s, g)| {
            let to_code = |v: Vec<usize>| -> Code { v.into_iter().map(|i| Alphabet::digits().symbol(i)).collect() };
            (to_code(s), to_code(g))
        })
    })
}

fn occurrences(code: &Code, symbol: Symbol) -> usize {
    code.symbols().iter().filter(|&&s| s == symbol).count()
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_example_swapped_tail() {
    assert_eq!(marks("1234", "1243"), vec![Exact, Exact, Present, Present]);
}

#[test]
fn test_example_repeated_guess_symbol() {
    assert_eq!(marks("1123", "1111"), vec![Exact, Exact, Absent, Absent]);
}

#[test]
fn test_example_swapped_pairs() {
    assert_eq!(marks("5566", "6655"), vec![Present, Present, Present, Present]);
}

#[test]
fn test_single_pass_overcount_avoided() {
    // A membership-only check would mark every 1 as present.
    assert_eq!(marks("1000", "2111"), vec![Absent, Present, Absent, Absent]);
}

#[test]
fn test_extreme_alphabet_guess() {
    assert_eq!(marks("Z0Z0", "zz00"), vec![Exact, Present, Present, Exact]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_feedback_aligned_with_guess((secret, guess) in pair()) {
        let feedback = GuessEvaluator::evaluate(&secret, &guess);
        prop_assert_eq!(feedback.len(), guess.len());
    }

    #[test]
    fn prop_exact_iff_positions_match((secret, guess) in pair()) {
        let feedback = GuessEvaluator::evaluate(&secret, &guess);
        for i in 0..guess.len() {
            prop_assert_eq!(feedback[i] == Exact, guess[i] == secret[i]);
        }
    }

    #[test]
    fn prop_matches_equal_multiset_intersection((secret, guess) in pair()) {
        let counts = GuessEvaluator::evaluate(&secret, &guess).counts();
        let intersection: usize = Alphabet::digits()
            .iter()
            .map(|s| occurrences(&secret, s).min(occurrences(&guess, s)))
            .sum();

        prop_assert!(counts.exact + counts.present <= intersection);
        prop_assert_eq!(counts.exact + counts.present, intersection);
        prop_assert_eq!(counts.exact + counts.present + counts.absent, guess.len());
    }

    #[test]
    fn prop_no_secret_occurrence_claimed_twice((secret, guess) in pair()) {
        let feedback = GuessEvaluator::evaluate(&secret, &guess);
        for symbol in Alphabet::digits().iter() {
            let claimed = guess
                .symbols()
                .iter()
                .zip(feedback.marks())
                .filter(|&(&g, &m)| g == symbol && m != Absent)
                .count();
            prop_assert!(claimed <= occurrences(&secret, symbol));
        }
    }

    #[test]
    fn prop_self_guess_is_solved((secret, _guess) in pair()) {
        prop_assert!(GuessEvaluator::evaluate(&secret, &secret).is_solved());
    }
}
