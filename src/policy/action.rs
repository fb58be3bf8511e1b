//! Per-board actions and legal-action sets.

use std::fmt;

use crate::cards::HoleCards;

/// Action kinds the engine may allow on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Place hole cards on a board (first decision of a round).
    Assign,
    /// Pass without betting.
    Check,
    /// Match the opponent's pip.
    Call,
    /// Raise to a new total.
    Raise,
    /// Give up the board.
    Fold,
}

impl ActionKind {
    fn bit(self) -> u8 {
        match self {
            ActionKind::Assign => 1,
            ActionKind::Check => 1 << 1,
            ActionKind::Call => 1 << 2,
            ActionKind::Raise => 1 << 3,
            ActionKind::Fold => 1 << 4,
        }
    }
}

/// Set of legal action kinds for one board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LegalActions(u8);

impl LegalActions {
    /// The empty set.
    pub fn none() -> Self {
        Self(0)
    }

    /// Set holding `kinds`.
    pub fn of(kinds: &[ActionKind]) -> Self {
        kinds.iter().fold(Self::none(), |set, &k| set.with(k))
    }

    /// Check and raise: facing no bet.
    pub fn initiative() -> Self {
        Self::of(&[ActionKind::Check, ActionKind::Raise])
    }

    /// Fold, call and raise: facing a bet.
    pub fn facing_bet() -> Self {
        Self::of(&[ActionKind::Fold, ActionKind::Call, ActionKind::Raise])
    }

    /// This set plus `kind`.
    pub fn with(self, kind: ActionKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// This set minus `kind`.
    pub fn without(self, kind: ActionKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    /// True if `kind` is legal.
    #[inline]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True when nothing is legal.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for LegalActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds = [
            ActionKind::Assign,
            ActionKind::Check,
            ActionKind::Call,
            ActionKind::Raise,
            ActionKind::Fold,
        ];
        f.debug_set().entries(kinds.iter().filter(|&&k| self.contains(k))).finish()
    }
}

/// The single action emitted for a board at a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardAction {
    /// Place a hole hand on the board. Costs nothing.
    Assign(HoleCards),
    /// Pass.
    Check,
    /// Match the opponent's pip.
    Call,
    /// Raise to the given total contribution for this betting round.
    Raise(u32),
    /// Give up the board.
    Fold,
}

impl BoardAction {
    /// Kind of this action, for legality checks.
    pub fn kind(&self) -> ActionKind {
        match self {
            BoardAction::Assign(_) => ActionKind::Assign,
            BoardAction::Check => ActionKind::Check,
            BoardAction::Call => ActionKind::Call,
            BoardAction::Raise(_) => ActionKind::Raise,
            BoardAction::Fold => ActionKind::Fold,
        }
    }

    /// True for raises.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, BoardAction::Raise(_))
    }

    /// Raise-to amount if applicable.
    pub fn amount(&self) -> Option<u32> {
        match self {
            BoardAction::Raise(amount) => Some(*amount),
            _ => None,
        }
    }

    /// Short code for logs: `A`, `X`, `C`, `R<amount>`, `F`.
    pub fn short_code(&self) -> String {
        match self {
            BoardAction::Assign(_) => "A".to_string(),
            BoardAction::Check => "X".to_string(),
            BoardAction::Call => "C".to_string(),
            BoardAction::Raise(amount) => format!("R{}", amount),
            BoardAction::Fold => "F".to_string(),
        }
    }
}

impl fmt::Display for BoardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardAction::Assign(hole) => write!(f, "Assign {}", hole),
            BoardAction::Check => write!(f, "Check"),
            BoardAction::Call => write!(f, "Call"),
            BoardAction::Raise(amount) => write!(f, "Raise to {}", amount),
            BoardAction::Fold => write!(f, "Fold"),
        }
    }
}
