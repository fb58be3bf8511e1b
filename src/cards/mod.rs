//! Card primitives.
//!
//! - `card`: cards, hole hands, community boards, streets and card sets
//! - `key`: canonical (suit-isomorphic) starting-hand keys
//! - `eval`: the hand-comparison seam and the built-in evaluator

pub mod card;
pub mod eval;
pub mod key;

pub use card::{parse_cards, Board, Card, CardMask, HoleCards, Street};
pub use eval::{Evaluator, HandCategory, HandEvaluator, HandRank};
pub use key::{HoleKey, NUM_HOLE_KEYS};
