//! Game configuration types.
//!
//! A session is configured by:
//! - `code_length`: number of positions, clamped into `3..=10`
//! - `Difficulty`: alphabet and repetition policy for the secret
//! - `AttemptMode`: capped or open-ended play
//! - `RuleConstants`: attempt cap, forfeit threshold, display window
//!
//! Out-of-range values are clamped here, so generators and the session
//! only ever see validated configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symbol::Alphabet;

/// Shortest configurable code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Longest configurable code. Also the size of the easy-tier alphabet,
/// so unique-symbol generation can always succeed.
pub const MAX_CODE_LENGTH: usize = 10;

/// Default code length.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Errors parsing configuration values from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected easy, normal, hard or extreme)")]
    UnknownDifficulty(String),

    #[error("unknown attempt mode '{0}' (expected limited or infinite)")]
    UnknownAttemptMode(String),
}

/// Secret generation policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Digits, no repeated symbol.
    Easy,
    /// Digits, repeats allowed.
    #[default]
    Normal,
    /// Digits, at least one repeat forced for long codes.
    Hard,
    /// Digits and letters, repeats allowed.
    Extreme,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Extreme];

    /// Alphabet secrets are drawn from.
    #[must_use]
    pub const fn alphabet(self) -> Alphabet {
        match self {
            Self::Easy | Self::Normal | Self::Hard => Alphabet::digits(),
            Self::Extreme => Alphabet::alphanumeric(),
        }
    }

    /// One-line rules text for this tier.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Easy => "Numbers 0-9, no repetitions",
            Self::Normal => "Numbers 0-9, possible repetitions",
            Self::Hard => "Numbers 0-9, at least one repetition in codes of 6 or more",
            Self::Extreme => "Numbers and letters (A-Z), possible repetitions",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// Whether attempts are capped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptMode {
    /// Lost once the attempt cap is reached without a win.
    #[default]
    Limited,
    /// No cap. Lost only by forfeit.
    Infinite,
}

impl AttemptMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Infinite => "infinite",
        }
    }

    /// One-line rules text for this mode.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Limited => "A fixed number of attempts to crack the code",
            Self::Infinite => "Unlimited attempts; only the most recent are shown",
        }
    }
}

impl std::fmt::Display for AttemptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttemptMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "limited" => Ok(Self::Limited),
            "infinite" => Ok(Self::Infinite),
            _ => Err(ConfigError::UnknownAttemptMode(s.to_string())),
        }
    }
}

/// Policy constants governing termination and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConstants {
    /// Total attempts allowed in limited mode.
    #[serde(deserialize_with = "deserialize_at_least_one")]
    pub attempt_cap: usize,

    /// Attempts required before an extreme session may be forfeited.
    #[serde(deserialize_with = "deserialize_at_least_one")]
    pub forfeit_threshold: usize,

    /// Most recent attempts shown in infinite mode.
    #[serde(deserialize_with = "deserialize_at_least_one")]
    pub display_window: usize,
}

impl Default for RuleConstants {
    fn default() -> Self {
        Self {
            attempt_cap: 10,
            forfeit_threshold: 10,
            display_window: 5,
        }
    }
}

impl RuleConstants {
    /// Set the limited-mode attempt cap (at least 1).
    #[must_use]
    pub fn with_attempt_cap(mut self, cap: usize) -> Self {
        self.attempt_cap = cap.max(1);
        self
    }

    /// Set the forfeit threshold (at least 1).
    #[must_use]
    pub fn with_forfeit_threshold(mut self, threshold: usize) -> Self {
        self.forfeit_threshold = threshold.max(1);
        self
    }

    /// Set the infinite-mode display window (at least 1).
    #[must_use]
    pub fn with_display_window(mut self, window: usize) -> Self {
        self.display_window = window.max(1);
        self
    }
}

/// Complete session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of positions, always within `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
    #[serde(deserialize_with = "deserialize_code_length")]
    code_length: usize,

    pub difficulty: Difficulty,

    pub attempt_mode: AttemptMode,

    pub rules: RuleConstants,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH, Difficulty::default(), AttemptMode::default())
    }
}

impl GameConfig {
    /// Create a configuration, clamping `code_length` into the valid range.
    #[must_use]
    pub fn new(code_length: usize, difficulty: Difficulty, attempt_mode: AttemptMode) -> Self {
        Self {
            code_length: clamp_code_length(code_length),
            difficulty,
            attempt_mode,
            rules: RuleConstants::default(),
        }
    }

    /// The validated code length.
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Set the code length, clamping into the valid range.
    #[must_use]
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = clamp_code_length(code_length);
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the attempt mode.
    #[must_use]
    pub fn with_attempt_mode(mut self, attempt_mode: AttemptMode) -> Self {
        self.attempt_mode = attempt_mode;
        self
    }

    /// Set the policy constants.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleConstants) -> Self {
        self.rules = rules;
        self
    }

    /// Attempt cap, if this configuration has one.
    #[must_use]
    pub fn attempt_limit(&self) -> Option<usize> {
        match self.attempt_mode {
            AttemptMode::Limited => Some(self.rules.attempt_cap),
            AttemptMode::Infinite => None,
        }
    }
}

/// Clamp a requested length into `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
#[must_use]
pub fn clamp_code_length(code_length: usize) -> usize {
    code_length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH)
}

fn deserialize_code_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    usize::deserialize(deserializer).map(clamp_code_length)
}

fn deserialize_at_least_one<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    usize::deserialize(deserializer).map(|value| value.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.code_length(), 4);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.attempt_mode, AttemptMode::Limited);
        assert_eq!(config.rules, RuleConstants::default());
        assert_eq!(config.attempt_limit(), Some(10));
    }

    #[test]
    fn test_code_length_clamped() {
        assert_eq!(GameConfig::new(0, Difficulty::Easy, AttemptMode::Limited).code_length(), 3);
        assert_eq!(GameConfig::new(2, Difficulty::Easy, AttemptMode::Limited).code_length(), 3);
        assert_eq!(GameConfig::new(7, Difficulty::Easy, AttemptMode::Limited).code_length(), 7);
        assert_eq!(GameConfig::new(99, Difficulty::Easy, AttemptMode::Limited).code_length(), 10);
        assert_eq!(GameConfig::default().with_code_length(11).code_length(), 10);
    }

    #[test]
    fn test_infinite_has_no_limit() {
        let config = GameConfig::default().with_attempt_mode(AttemptMode::Infinite);
        assert_eq!(config.attempt_limit(), None);
    }

    #[test]
    fn test_rule_constants_builders() {
        let rules = RuleConstants::default()
            .with_attempt_cap(6)
            .with_forfeit_threshold(0)
            .with_display_window(3);

        assert_eq!(rules.attempt_cap, 6);
        assert_eq!(rules.forfeit_threshold, 1);
        assert_eq!(rules.display_window, 3);

        let config = GameConfig::default().with_rules(rules);
        assert_eq!(config.attempt_limit(), Some(6));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("EXTREME".parse::<Difficulty>(), Ok(Difficulty::Extreme));
        assert_eq!(
            "brutal".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty("brutal".to_string()))
        );
    }

    #[test]
    fn test_attempt_mode_parse() {
        assert_eq!("Limited".parse::<AttemptMode>(), Ok(AttemptMode::Limited));
        assert_eq!("infinite".parse::<AttemptMode>(), Ok(AttemptMode::Infinite));
        assert!(matches!(
            "forever".parse::<AttemptMode>(),
            Err(ConfigError::UnknownAttemptMode(_))
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
        assert_eq!(AttemptMode::Infinite.to_string(), "infinite");
    }

    #[test]
    fn test_alphabet_per_difficulty() {
        assert_eq!(Difficulty::Easy.alphabet().len(), 10);
        assert_eq!(Difficulty::Normal.alphabet().len(), 10);
        assert_eq!(Difficulty::Hard.alphabet().len(), 10);
        assert_eq!(Difficulty::Extreme.alphabet().len(), 36);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(6, Difficulty::Hard, AttemptMode::Infinite);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"hard\""));
        assert!(json.contains("\"infinite\""));

        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_deserialize_clamps_length() {
        let json = serde_json::to_string(&GameConfig::default())
            .unwrap()
            .replace("\"code_length\":4", "\"code_length\":42");
        let config: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.code_length(), MAX_CODE_LENGTH);
    }

    #[test]
    fn test_deserialize_clamps_zero_rules() {
        let json = r#"{
            "code_length": 4,
            "difficulty": "extreme",
            "attempt_mode": "infinite",
            "rules": { "attempt_cap": 0, "forfeit_threshold": 0, "display_window": 0 }
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.rules,
            RuleConstants {
                attempt_cap: 1,
                forfeit_threshold: 1,
                display_window: 1,
            }
        );

        let back: GameConfig = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Difficulty::Easy.description(), "Numbers 0-9, no repetitions");
        assert!(Difficulty::Hard.description().contains("6 or more"));
        assert!(Difficulty::Extreme.description().contains("A-Z"));
        assert_ne!(AttemptMode::Limited.description(), AttemptMode::Infinite.description());
        for d in Difficulty::ALL {
            assert!(!d.description().is_empty());
        }
    }
}
