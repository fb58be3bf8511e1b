//! Per-board betting policy.
//!
//! - `action`: board actions and legal-action sets
//! - `board`: the engine's view of a decision point
//! - `budget`: chips committed across boards in one cycle
//! - `betting`: the decision procedure

pub mod action;
pub mod betting;
pub mod board;
pub mod budget;

pub use action::{ActionKind, BoardAction, LegalActions};
pub use betting::{BettingPolicy, BoardDecision, PolicyConfig};
pub use board::{ActiveBoard, BoardState, RoundView};
pub use budget::StackBudget;
