//! Guess feedback.
//!
//! [`GuessEvaluator::evaluate`] classifies every guess position as
//! [`FeedbackMark::Exact`], [`FeedbackMark::Present`] or
//! [`FeedbackMark::Absent`] using a two-pass scan that never lets one
//! secret occurrence satisfy two guess positions.
//!
//! ```
//! use crack_code::core::Code;
//! use crack_code::feedback::{FeedbackMark, GuessEvaluator};
//!
//! let secret: Code = "1123".parse().unwrap();
//! let guess: Code = "1111".parse().unwrap();
//! let feedback = GuessEvaluator::evaluate(&secret, &guess);
//!
//! use FeedbackMark::*;
//! assert_eq!(feedback.marks(), &[Exact, Exact, Absent, Absent]);
//! ```

pub mod mark;
pub mod evaluator;

pub use mark::{Feedback, FeedbackCounts, FeedbackMark};
pub use evaluator::GuessEvaluator;
