//! Hand evaluation.
//!
//! The decision engine only ever compares two evaluated hands, so the
//! evaluator sits behind the [`Evaluator`] trait. [`HandEvaluator`] is the
//! built-in implementation: it ranks 5 to 7 cards directly from rank counts
//! and per-suit rank masks without enumerating 5-card subsets.

use std::cmp::Ordering;

use super::card::Card;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No made hand.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pair.
    TwoPair = 2,
    /// Trips or a set.
    ThreeOfAKind = 3,
    /// Five ranks in a row, the wheel included.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Trips plus a pair.
    FullHouse = 6,
    /// Quads.
    FourOfAKind = 7,
    /// Straight in one suit.
    StraightFlush = 8,
}

impl HandCategory {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }
}

/// Totally ordered hand value; higher is better.
///
/// Layout: category in bits 20..24, then up to five 4-bit ranks, most
/// significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandRank(u32);

impl HandRank {
    fn new(category: HandCategory, ranks: &[u8]) -> Self {
        let value = ranks
            .iter()
            .take(5)
            .enumerate()
            .fold((category as u32) << 20, |acc, (i, &r)| acc | (r as u32) << (16 - i * 4));
        Self(value)
    }

    /// Category encoded in the top bits.
    pub fn category(&self) -> HandCategory {
        HandCategory::from_bits(self.0 >> 20)
    }
}

/// Comparison primitive consumed by the equity estimator.
pub trait Evaluator: Send + Sync {
    /// Rank the best five-card hand among `cards` (5 to 7 cards).
    fn evaluate(&self, cards: &[Card]) -> HandRank;

    /// Compare two hands.
    fn compare(&self, a: &[Card], b: &[Card]) -> Ordering {
        self.evaluate(a).cmp(&self.evaluate(b))
    }
}

/// Built-in 5-7 card evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create the evaluator. It holds no state.
    pub fn new() -> Self {
        Self
    }
}

const WHEEL: u16 = 0b1_0000_0000_1111;

/// High card of the best straight in a rank mask.
fn straight_high(bits: u16) -> Option<u8> {
    (4..=12u8)
        .rev()
        .find(|&high| {
            let run = 0b11111u16 << (high - 4);
            bits & run == run
        })
        .or_else(|| (bits & WHEEL == WHEEL).then_some(3))
}

/// Highest `n` ranks present in `bits`, skipping `exclude`.
fn top_ranks(bits: u16, n: usize, exclude: &[u8]) -> Vec<u8> {
    (0..13u8)
        .rev()
        .filter(|&r| bits & (1 << r) != 0 && !exclude.contains(&r))
        .take(n)
        .collect()
}

impl Evaluator for HandEvaluator {
    fn evaluate(&self, cards: &[Card]) -> HandRank {
        debug_assert!((5..=7).contains(&cards.len()), "evaluate takes 5-7 cards");

        let mut counts = [0u8; 13];
        let mut suits = [0u16; 4];
        let mut bits = 0u16;
        for card in cards {
            counts[card.rank() as usize] += 1;
            suits[card.suit() as usize] |= 1 << card.rank();
            bits |= 1 << card.rank();
        }

        let flush = suits.iter().copied().find(|s| s.count_ones() >= 5);
        if let Some(high) = flush.and_then(straight_high) {
            return HandRank::new(HandCategory::StraightFlush, &[high]);
        }

        let by_count = |n: u8| -> Vec<u8> { (0..13u8).rev().filter(|&r| counts[r as usize] == n).collect() };
        let quads = by_count(4);
        let trips = by_count(3);
        let pairs = by_count(2);

        if let Some(&quad) = quads.first() {
            let kicker = top_ranks(bits, 1, &[quad]);
            return HandRank::new(HandCategory::FourOfAKind, &[quad, kicker[0]]);
        }

        if let Some(&trip) = trips.first() {
            let filler = trips.get(1).into_iter().chain(pairs.first()).copied().max();
            if let Some(pair) = filler {
                return HandRank::new(HandCategory::FullHouse, &[trip, pair]);
            }
        }

        if let Some(suit_bits) = flush {
            return HandRank::new(HandCategory::Flush, &top_ranks(suit_bits, 5, &[]));
        }

        if let Some(high) = straight_high(bits) {
            return HandRank::new(HandCategory::Straight, &[high]);
        }

        if let Some(&trip) = trips.first() {
            let mut ranks = vec![trip];
            ranks.extend(top_ranks(bits, 2, &[trip]));
            return HandRank::new(HandCategory::ThreeOfAKind, &ranks);
        }

        if pairs.len() >= 2 {
            let (a, b) = (pairs[0], pairs[1]);
            let mut ranks = vec![a, b];
            ranks.extend(top_ranks(bits, 1, &[a, b]));
            return HandRank::new(HandCategory::TwoPair, &ranks);
        }

        if let Some(&pair) = pairs.first() {
            let mut ranks = vec![pair];
            ranks.extend(top_ranks(bits, 3, &[pair]));
            return HandRank::new(HandCategory::OnePair, &ranks);
        }

        HandRank::new(HandCategory::HighCard, &top_ranks(bits, 5, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::parse_cards;

    fn rank(s: &str) -> HandRank {
        HandEvaluator.evaluate(&parse_cards(s).unwrap())
    }

    #[test]
    fn test_categories() {
        let cases = [
            ("As Kd Qh Jc 9s", HandCategory::HighCard),
            ("As Ad Kh Qc Js", HandCategory::OnePair),
            ("As Ad Kh Kc Js", HandCategory::TwoPair),
            ("As Ad Ah Kc Js", HandCategory::ThreeOfAKind),
            ("Ts 9d 8h 7c 6s", HandCategory::Straight),
            ("5s 4d 3h 2c As", HandCategory::Straight),
            ("As Ks 9s 7s 2s", HandCategory::Flush),
            ("As Ad Ah Kc Kd", HandCategory::FullHouse),
            ("As Ad Ah Ac Ks", HandCategory::FourOfAKind),
            ("9s 8s 7s 6s 5s", HandCategory::StraightFlush),
        ];
        for (cards, category) in cases {
            assert_eq!(rank(cards).category(), category, "{}", cards);
        }
    }

    #[test]
    fn test_seven_cards_pick_best() {
        assert_eq!(rank("Ah As Ad Ac Kh Qs Jd").category(), HandCategory::FourOfAKind);
        // two trips make a full house with the lower trip as the pair
        assert_eq!(rank("Ah As Ad Kc Kh Ks 2d"), rank("Ah As Ad Kc Kh 7s 2d"));
        // flush beats the straight on the same board
        assert_eq!(rank("9h 8h 7h 6c 5h 2h Kd").category(), HandCategory::Flush);
        // steel wheel
        assert_eq!(rank("Ah 2h 3h 4h 5h Kd Qc").category(), HandCategory::StraightFlush);
    }

    #[test]
    fn test_ordering() {
        assert!(rank("Ah Ad Qs Jc 7d 3s 2h") > rank("Kh Kd Qs Jc 7d 3s 2h"));
        assert!(rank("6s 5d 4h 3c 2s") > rank("5s 4d 3h 2c As"));
        assert!(rank("As Kd 9h 7c 5s") > rank("As Kd 9h 7c 4s"));
        assert_eq!(
            HandEvaluator.compare(&parse_cards("As Kd 9h 7c 5s").unwrap(), &parse_cards("Ac Kh 9d 7s 5c").unwrap()),
            Ordering::Equal
        );
    }
}
