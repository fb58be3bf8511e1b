//! # Triboard
//!
//! Decision engine for three-board simultaneous poker. Each round deals six
//! private cards that are split into three two-card hands, one per board, and
//! each board is then bet independently street by street from one shared
//! stack.
//!
//! ## Quick Start
//!
//! ```ignore
//! use triboard::{EngineConfig, Player, StartingHandTable};
//!
//! let table = StartingHandTable::from_json_file("hole_strengths.json")?;
//! let mut player = Player::new(EngineConfig::default(), table)?;
//!
//! player.handle_new_round(&dealt_cards)?;
//! let actions = player.get_actions(&round_view)?;
//! player.handle_round_over(round, payoff);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards, boards, canonical hole keys and hand evaluation
//! - [`table`]: starting-hand strength table (load, save, generate)
//! - [`allocator`]: six cards into three hands
//! - [`equity`]: Monte Carlo equity and the sample budget
//! - [`policy`]: per-board betting decisions under a shared stack
//! - [`tuner`]: online threshold hill climbing
//! - [`player`]: round lifecycle tying the above together
//!
//! ## Architecture
//!
//! ```text
//!   deal (6 cards) ──► allocator ──► BoardAllocation
//!                                        │
//!   RoundView ─────────────────────► policy ──► [BoardAction; 3]
//!                                   │      ▲
//!                 table / equity ◄──┘      │ ThresholdState
//!                                          │
//!   round payoff ─────────────────────► tuner
//! ```

#![warn(missing_docs)]

/// Greedy allocation of the deal to the boards.
pub mod allocator;
/// Cards, boards, hole keys and hand evaluation.
pub mod cards;
/// JSON engine configuration.
pub mod config;
/// Monte Carlo equity and sample budgets.
pub mod equity;
/// Error types.
pub mod error;
/// Round lifecycle driven by the engine.
pub mod player;
/// Per-board betting policy.
pub mod policy;
/// Starting-hand strength table.
pub mod table;
/// Online threshold tuner.
pub mod tuner;

/// Boards played simultaneously each round.
pub const NUM_BOARDS: usize = 3;

pub use allocator::{allocate, BoardAllocation};
pub use cards::{Board, Card, HoleCards, HoleKey, Street};
pub use config::{EngineConfig, GameConfig};
pub use equity::{EquityEstimator, GameClock, SampleBudget};
pub use error::{ConfigError, EngineError, ParseCardError, TableError};
pub use player::Player;
pub use policy::{BettingPolicy, BoardAction, BoardState, RoundView};
pub use table::StartingHandTable;
pub use tuner::{ThresholdState, ThresholdTuner, TunerOutcome};
