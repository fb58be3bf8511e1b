//! Engine-supplied view of a decision point.

use crate::cards::{Board, Street};
use crate::equity::GameClock;
use crate::policy::action::LegalActions;
use crate::NUM_BOARDS;

/// A board still in play.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveBoard {
    /// Community cards dealt so far on this board.
    pub community: Board,
    /// Chips we have put in this betting round.
    pub my_pip: u32,
    /// Chips the opponent has put in this betting round.
    pub opp_pip: u32,
    /// Pot before this betting round.
    pub pot: u32,
    /// Action kinds the engine accepts on this board.
    pub legal: LegalActions,
    /// Smallest legal raise-to total.
    pub min_raise: u32,
    /// Largest legal raise-to total.
    pub max_raise: u32,
}

impl ActiveBoard {
    /// Chips needed to match the opponent.
    pub fn continue_cost(&self) -> u32 {
        self.opp_pip.saturating_sub(self.my_pip)
    }

    /// Pot including both players' pips.
    pub fn pot_total(&self) -> u32 {
        self.pot + self.my_pip + self.opp_pip
    }
}

/// A board is either still being bet on or finished for this round.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    /// Still in play.
    Active(ActiveBoard),
    /// Folded or showed down. Only a check is emitted.
    Terminal,
}

/// Everything the engine passes in for one decision call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundView {
    /// Street shared by all three boards.
    pub street: Street,
    /// Per-board state, in slot order.
    pub boards: [BoardState; NUM_BOARDS],
    /// Our chips not yet committed on any board.
    pub my_stack: u32,
    /// Opponent chips not yet committed.
    pub opp_stack: u32,
    /// Current round, 1-based.
    pub round: u32,
    /// Seconds left on our game clock.
    pub game_clock: f64,
}

impl RoundView {
    /// State of board `index` (0-2).
    pub fn board(&self, index: usize) -> &BoardState {
        &self.boards[index]
    }

    pub(crate) fn clock(&self, total_secs: f64, total_rounds: u32) -> GameClock {
        GameClock {
            remaining_secs: self.game_clock,
            total_secs,
            round: self.round,
            total_rounds,
        }
    }
}
