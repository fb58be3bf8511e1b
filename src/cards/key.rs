//! Canonical starting-hand keys.
//!
//! A hole hand is reduced to its suit-isomorphism class: two ranks (higher
//! first) plus a suited/offsuit flag. There are 169 classes:
//! - 13 pairs (22-AA), indices 0-12
//! - 78 suited hands, indices 13-90
//! - 78 offsuit hands, indices 91-168

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::card::{HoleCards, RANK_CHARS};
use crate::error::ParseCardError;

/// Number of canonical starting-hand classes.
pub const NUM_HOLE_KEYS: usize = 169;

/// Canonical key for a two-card starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HoleKey {
    high: u8,
    low: u8,
    suited: bool,
}

impl HoleKey {
    /// Build a key from ranks in any order. Pairs are never suited.
    pub fn new(rank_a: u8, rank_b: u8, suited: bool) -> Self {
        let (high, low) = if rank_a >= rank_b { (rank_a, rank_b) } else { (rank_b, rank_a) };
        Self { high, low, suited: suited && high != low }
    }

    /// Key of a concrete hole hand.
    pub fn of(hole: &HoleCards) -> Self {
        Self::new(hole.high().rank(), hole.low().rank(), hole.is_suited())
    }

    /// Higher rank (0-12).
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Lower rank; equal to [`HoleKey::high`] for pairs.
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Suited flag. Always false for pairs.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// True for the 13 pocket pairs.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Dense index in 0..169.
    pub fn index(&self) -> usize {
        let triangle = (self.high as usize * (self.high as usize).saturating_sub(1)) / 2 + self.low as usize;
        if self.is_pair() {
            self.high as usize
        } else if self.suited {
            13 + triangle
        } else {
            91 + triangle
        }
    }

    /// Inverse of [`HoleKey::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=12 => Some(Self::new(index as u8, index as u8, false)),
            13..=90 => {
                let (high, low) = untriangle(index - 13);
                Some(Self::new(high, low, true))
            }
            91..=168 => {
                let (high, low) = untriangle(index - 91);
                Some(Self::new(high, low, false))
            }
            _ => None,
        }
    }

    /// Every class, in index order.
    pub fn all() -> impl Iterator<Item = HoleKey> {
        (0..NUM_HOLE_KEYS).filter_map(Self::from_index)
    }

    /// A concrete representative of this class.
    pub fn representative(&self) -> HoleCards {
        use super::card::Card;
        if self.suited {
            HoleCards::new(Card::new(self.high, 3), Card::new(self.low, 3))
        } else {
            HoleCards::new(Card::new(self.high, 3), Card::new(self.low, 2))
        }
    }

    /// Number of concrete combos in this class.
    pub fn combos(&self) -> u8 {
        match (self.is_pair(), self.suited) {
            (true, _) => 6,
            (false, true) => 4,
            (false, false) => 12,
        }
    }
}

/// Decode `high * (high - 1) / 2 + low` with `low < high`.
fn untriangle(offset: usize) -> (u8, u8) {
    let mut high = 1usize;
    while (high + 1) * high / 2 <= offset {
        high += 1;
    }
    let low = offset - high * (high - 1) / 2;
    (high as u8, low as u8)
}

impl From<&HoleCards> for HoleKey {
    fn from(hole: &HoleCards) -> Self {
        Self::of(hole)
    }
}

impl fmt::Display for HoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = RANK_CHARS[self.high as usize];
        let low = RANK_CHARS[self.low as usize];
        if self.is_pair() {
            write!(f, "{}{}", high, low)
        } else {
            write!(f, "{}{}{}", high, low, if self.suited { 's' } else { 'o' })
        }
    }
}

impl FromStr for HoleKey {
    type Err = ParseCardError;

    /// Accepts "AKs", "AKo", "QQ" and the pair form "QQo".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let rank = |c: char| {
            RANK_CHARS
                .iter()
                .position(|&r| r == c.to_ascii_uppercase())
                .map(|r| r as u8)
                .ok_or(ParseCardError::Rank(c))
        };
        let (a, b, suited) = match chars.as_slice() {
            [a, b] => (rank(*a)?, rank(*b)?, false),
            [a, b, 's'] | [a, b, 'S'] => (rank(*a)?, rank(*b)?, true),
            [a, b, 'o'] | [a, b, 'O'] => (rank(*a)?, rank(*b)?, false),
            [_, _, s] => return Err(ParseCardError::Suit(*s)),
            _ => return Err(ParseCardError::Length(s.to_string())),
        };
        if a == b && suited {
            return Err(ParseCardError::SuitedPair(s.to_string()));
        }
        if a != b && chars.len() == 2 {
            return Err(ParseCardError::Length(s.to_string()));
        }
        Ok(Self::new(a, b, suited))
    }
}

impl Serialize for HoleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HoleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
