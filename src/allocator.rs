//! Card allocation: six dealt cards into three two-card hands.
//!
//! Greedy maximum-weight pairing: scan every remaining pair, take the one
//! with the highest starting-hand strength, remove its cards, repeat. The
//! first (strongest) pick goes to the back board, the last to board 0. Ties
//! keep the first pair encountered after sorting the cards by rank,
//! descending. This is a heuristic, not a global optimum over the 15
//! possible partitions.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{Card, CardMask, HoleCards};
use crate::error::EngineError;
use crate::table::StartingHandTable;
use crate::NUM_BOARDS;

/// Cards dealt to one player per round.
pub const DEAL_SIZE: usize = 2 * NUM_BOARDS;

/// Hole hand and its table strength for each board.
///
/// The union of the three hands is exactly the six dealt cards.
#[derive(Clone, Copy, PartialEq)]
pub struct BoardAllocation {
    holes: [HoleCards; NUM_BOARDS],
    strengths: [f64; NUM_BOARDS],
}

impl BoardAllocation {
    /// Hole hand placed on `board` (0-2).
    pub fn hole(&self, board: usize) -> HoleCards {
        self.holes[board]
    }

    /// The three hands in board order.
    pub fn holes(&self) -> &[HoleCards; NUM_BOARDS] {
        &self.holes
    }

    /// Pre-flop table strength of the hand on `board`.
    pub fn strength(&self, board: usize) -> f64 {
        self.strengths[board]
    }

    /// Table strengths in board order.
    pub fn strengths(&self) -> &[f64; NUM_BOARDS] {
        &self.strengths
    }

    /// All six cards, board by board.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.holes.iter().flat_map(|h| h.cards())
    }
}

impl fmt::Debug for BoardAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.holes.iter().zip(&self.strengths).map(|(h, s)| format!("{} ({:.3})", h, s)))
            .finish()
    }
}

/// Check the engine's deal: exactly six distinct cards.
pub fn validate_deal(cards: &[Card]) -> Result<[Card; DEAL_SIZE], EngineError> {
    let deal: [Card; DEAL_SIZE] = cards.try_into().map_err(|_| EngineError::DealSize {
        expected: DEAL_SIZE,
        actual: cards.len(),
    })?;
    let mut seen = CardMask::new();
    for card in deal {
        if !seen.insert(card) {
            return Err(EngineError::DuplicateCard(card.to_string()));
        }
    }
    Ok(deal)
}

/// Split six distinct cards into three hands, strongest on the back board.
pub fn allocate(cards: &[Card; DEAL_SIZE], table: &StartingHandTable) -> BoardAllocation {
    let mut remaining = cards.to_vec();
    remaining.sort_by(|a, b| b.rank().cmp(&a.rank()));

    let mut picks = Vec::with_capacity(NUM_BOARDS);
    while remaining.len() >= 2 {
        let (i, j, strength) = best_pair(&remaining, table);
        let hole = HoleCards::new(remaining[i], remaining[j]);
        remaining.remove(j);
        remaining.remove(i);
        picks.push((hole, strength));
    }
    debug_assert_eq!(picks.len(), NUM_BOARDS);

    let allocation = BoardAllocation {
        holes: [picks[2].0, picks[1].0, picks[0].0],
        strengths: [picks[2].1, picks[1].1, picks[0].1],
    };
    log::debug!("allocated {:?}", allocation);
    allocation
}

/// Indices `i < j` of the strongest pair, first encountered on ties.
fn best_pair(cards: &[Card], table: &StartingHandTable) -> (usize, usize, f64) {
    let mut best = (0, 1, table.strength(&HoleCards::new(cards[0], cards[1])));
    for i in 0..cards.len() - 1 {
        for j in i + 1..cards.len() {
            let strength = table.strength(&HoleCards::new(cards[i], cards[j]));
            if strength > best.2 {
                best = (i, j, strength);
            }
        }
    }
    best
}

/// Mean table strength per board slot over `deals` random deals.
pub fn slot_averages<R: Rng + ?Sized>(table: &StartingHandTable, deals: usize, rng: &mut R) -> [f64; NUM_BOARDS] {
    let mut deck: Vec<Card> = Card::all().collect();
    let mut totals = [0.0; NUM_BOARDS];
    for _ in 0..deals {
        let (drawn, _) = deck.partial_shuffle(rng, DEAL_SIZE);
        let mut deal = [drawn[0]; DEAL_SIZE];
        deal.copy_from_slice(drawn);
        let allocation = allocate(&deal, table);
        for (total, s) in totals.iter_mut().zip(allocation.strengths()) {
            *total += s;
        }
    }
    totals.map(|t| if deals == 0 { 0.0 } else { t / deals as f64 })
}
