//! Engine configuration loaded from JSON.
//!
//! Every section has defaults, so an empty object `{}` is a valid config and
//! a file only needs the fields it overrides:
//!
//! ```json
//! {
//!   "seed": 7,
//!   "table_path": "hole_strengths.json",
//!   "equity": { "base": 600, "adaptive": false },
//!   "tuner": { "window": 10 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::equity::SampleBudget;
use crate::error::ConfigError;
use crate::policy::PolicyConfig;
use crate::tuner::{ThresholdState, TunerConfig};

/// Match parameters set by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds in a match; paces the adaptive sample budget.
    pub num_rounds: u32,
    /// Game clock at start, in seconds.
    pub clock_secs: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_rounds: 1000,
            clock_secs: 30.0,
        }
    }
}

/// Root configuration for a [`Player`](crate::player::Player).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Starting-hand table to load.
    pub table_path: Option<PathBuf>,
    /// Match length and clock.
    pub game: GameConfig,
    /// Initial thresholds; the tuner moves them during play.
    pub thresholds: ThresholdState,
    /// Betting policy constants.
    pub policy: PolicyConfig,
    /// Monte Carlo sample count per decision.
    pub equity: SampleBudget,
    /// Threshold tuner schedule.
    pub tuner: TunerConfig,
}

impl EngineConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Builder method: fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the starting-hand table path.
    pub fn with_table_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.table_path = Some(path.into());
        self
    }

    /// Builder method: set the match parameters.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Builder method: set the initial thresholds.
    pub fn with_thresholds(mut self, thresholds: ThresholdState) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Builder method: set the policy constants.
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: set the Monte Carlo sample budget.
    pub fn with_equity(mut self, equity: SampleBudget) -> Self {
        self.equity = equity;
        self
    }

    /// Builder method: set the tuner schedule.
    pub fn with_tuner(mut self, tuner: TunerConfig) -> Self {
        self.tuner = tuner;
        self
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.num_rounds == 0 {
            return Err(ConfigError::NotPositive {
                name: "game.num_rounds",
                value: 0.0,
            });
        }
        if self.game.clock_secs <= 0.0 || !self.game.clock_secs.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "game.clock_secs",
                value: self.game.clock_secs,
            });
        }

        let budget = &self.equity;
        if budget.base == 0 || budget.min == 0 {
            return Err(ConfigError::NotPositive {
                name: "equity.base",
                value: budget.base.min(budget.min) as f64,
            });
        }
        if budget.min > budget.max {
            return Err(ConfigError::SampleBounds {
                min: budget.min,
                max: budget.max,
            });
        }
        if budget.safety <= 0.0 || !budget.safety.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "equity.safety",
                value: budget.safety,
            });
        }

        self.thresholds.validate()?;
        self.policy.validate()?;
        self.tuner.validate()?;
        Ok(())
    }
}
