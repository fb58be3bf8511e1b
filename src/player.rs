//! Round lifecycle.
//!
//! The external engine drives a [`Player`] through three callbacks per round:
//! [`Player::handle_new_round`] with the six dealt cards,
//! [`Player::get_actions`] once per decision point, and
//! [`Player::handle_round_over`] with the round's payoff. The player owns the
//! thresholds and hands them to the policy and the tuner by reference.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::allocator::{allocate, validate_deal, BoardAllocation};
use crate::cards::Card;
use crate::config::EngineConfig;
use crate::equity::EquityEstimator;
use crate::error::{ConfigError, EngineError};
use crate::policy::{BettingPolicy, BoardAction, RoundView};
use crate::table::StartingHandTable;
use crate::tuner::{ThresholdState, ThresholdTuner, TunerOutcome};
use crate::NUM_BOARDS;

/// Three-board decision engine.
#[derive(Debug)]
pub struct Player<R: Rng = StdRng> {
    config: EngineConfig,
    table: StartingHandTable,
    thresholds: ThresholdState,
    tuner: ThresholdTuner,
    policy: BettingPolicy<R>,
    tuner_rng: R,
    allocation: Option<BoardAllocation>,
}

impl Player<StdRng> {
    /// Build from a config and an already loaded table. Seeded from
    /// `config.seed`, or from entropy when unset.
    pub fn new(config: EngineConfig, table: StartingHandTable) -> Result<Self, EngineError> {
        let (policy_rng, tuner_rng) = match config.seed {
            Some(seed) => (StdRng::seed_from_u64(seed), StdRng::seed_from_u64(seed.wrapping_add(1))),
            None => (StdRng::from_entropy(), StdRng::from_entropy()),
        };
        Self::with_rngs(config, table, policy_rng, tuner_rng)
    }

    /// Build from a config, loading the table from `config.table_path`.
    pub fn from_config(config: EngineConfig) -> Result<Self, EngineError> {
        let path = config.table_path.as_ref().ok_or(ConfigError::MissingTablePath)?;
        let table = StartingHandTable::from_json_file(path)?;
        Self::new(config, table)
    }
}

impl<R: Rng> Player<R> {
    /// Build with explicit random sources for the policy and the tuner.
    pub fn with_rngs(config: EngineConfig, table: StartingHandTable, policy_rng: R, tuner_rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!("{:<32}{}", "initial thresholds", config.thresholds);
        Ok(Self {
            thresholds: config.thresholds,
            tuner: ThresholdTuner::new(config.tuner),
            policy: BettingPolicy::with_parts(config.policy, EquityEstimator::new(), policy_rng),
            tuner_rng,
            allocation: None,
            table,
            config,
        })
    }

    /// Configuration the player was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loaded starting-hand table.
    pub fn table(&self) -> &StartingHandTable {
        &self.table
    }

    /// Current thresholds, as last moved by the tuner.
    pub fn thresholds(&self) -> &ThresholdState {
        &self.thresholds
    }

    /// Tuner state: window sum and running experiment.
    pub fn tuner(&self) -> &ThresholdTuner {
        &self.tuner
    }

    /// This round's allocation, if a round is in progress.
    pub fn allocation(&self) -> Option<&BoardAllocation> {
        self.allocation.as_ref()
    }

    /// Split the six dealt cards across the boards.
    pub fn handle_new_round(&mut self, cards: &[Card]) -> Result<&BoardAllocation, EngineError> {
        let deal = validate_deal(cards)?;
        Ok(&*self.allocation.insert(allocate(&deal, &self.table)))
    }

    /// One action per board for the current decision point.
    pub fn get_actions(&mut self, view: &RoundView) -> Result<[BoardAction; NUM_BOARDS], EngineError> {
        let allocation = self.allocation.as_ref().ok_or(EngineError::NoAllocation)?;
        let game = &self.config.game;
        let samples = self.config.equity.samples(&view.clock(game.clock_secs, game.num_rounds));
        let decisions = self.policy.decide(view, allocation, &self.table, &self.thresholds, samples);
        Ok(decisions.map(|d| d.action))
    }

    /// Feed the round's payoff to the tuner and clear the allocation.
    pub fn handle_round_over(&mut self, round: u32, payoff: i64) -> TunerOutcome {
        self.allocation = None;
        let outcome = self.tuner.observe(&mut self.thresholds, round, payoff, &mut self.tuner_rng);
        if round == self.config.game.num_rounds {
            log::info!("{:<32}{}", "final thresholds", self.thresholds);
        }
        outcome
    }
}
