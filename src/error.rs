//! Error types.

use thiserror::Error;

/// Failure to parse card notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Wrong number of characters for the expected cards.
    #[error("malformed card text: {0:?}")]
    Length(String),
    /// Rank character outside `23456789TJQKA`.
    #[error("unknown rank character {0:?}")]
    Rank(char),
    /// Suit character outside `cdhs`.
    #[error("unknown suit character {0:?}")]
    Suit(char),
    /// A hole key such as `"QQs"`.
    #[error("a pair cannot be suited: {0:?}")]
    SuitedPair(String),
}

/// Starting-hand table load/save failures. All of these are fatal
/// configuration errors: the engine has no fallback strength.
#[derive(Debug, Error)]
pub enum TableError {
    /// Reading or writing the table file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a JSON object of numbers.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A key that names no starting hand.
    #[error("unknown hole key {key:?}: {source}")]
    UnknownKey {
        /// The key as written in the file.
        key: String,
        /// Why it failed to parse.
        source: ParseCardError,
    },
    /// The same class listed twice, possibly under two spellings.
    #[error("hole key {0} listed twice")]
    DuplicateKey(String),
    /// A class with no entry.
    #[error("table is missing hole key {0}")]
    MissingKey(String),
    /// A strength outside `[0, 1]`.
    #[error("strength {value} for {key} is outside [0, 1]")]
    InvalidStrength {
        /// The offending class.
        key: String,
        /// The rejected value.
        value: f64,
    },
}

/// Errors that can occur when validating engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("IO error: {0}")]
    Io(String),
    /// The config file is not valid JSON for [`crate::EngineConfig`].
    #[error("parse error: {0}")]
    Parse(String),
    /// A probability or strength outside `[0, 1]`.
    #[error("{name} = {value} is out of range [0, 1]")]
    OutOfUnitRange {
        /// Field name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value that must be strictly above zero.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Field name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value that may be zero but not below it.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Field name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// `min_samples` above `max_samples`.
    #[error("sample bounds inverted: min {min} > max {max}")]
    SampleBounds {
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },
    /// [`crate::Player::from_config`] needs `table_path`.
    #[error("no starting-hand table path configured")]
    MissingTablePath,
}

/// Top-level engine error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Starting-hand table failure.
    #[error(transparent)]
    Table(#[from] TableError),
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Malformed card text.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// A deal that is not six cards.
    #[error("expected {expected} dealt cards, got {actual}")]
    DealSize {
        /// Cards required.
        expected: usize,
        /// Cards received.
        actual: usize,
    },
    /// The same card dealt twice.
    #[error("card {0} dealt twice")]
    DuplicateCard(String),
    /// Actions requested before the round's allocation exists.
    #[error("no allocation for the current round")]
    NoAllocation,
}
