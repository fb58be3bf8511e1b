//! Card representation.
//!
//! - `Card`: a single playing card with rank and suit
//! - `HoleCards`: the two private cards played on one board
//! - `Board`: community cards visible on one board (0, 3, 4 or 5)
//! - `Street`: betting stage, identified by the number of visible cards
//! - `CardMask`: 52-bit set of cards, used to build the remaining deck

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCardError;

/// Rank of the deuce, the lowest card (ranks run 0-12: 2-A).
pub const RANK_2: u8 = 0;
/// Rank of the ace.
pub const RANK_A: u8 = 12;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Rank characters, engine notation (ten is `T`).
pub const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters.
pub const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// A single playing card, stored as `rank * 4 + suit`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Create a card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13, "rank must be 0-12");
        debug_assert!(suit < 4, "suit must be 0-3");
        Self(rank * 4 + suit)
    }

    /// Card id (0-51), the bit position in a [`CardMask`].
    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Rank, 0 (deuce) through 12 (ace).
    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / 4
    }

    /// Suit, 0-3 in `cdhs` order.
    #[inline]
    pub fn suit(self) -> u8 {
        self.0 % 4
    }

    /// Rank in engine notation, e.g. `'T'`.
    pub fn rank_char(self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Suit in engine notation, e.g. `'h'`.
    pub fn suit_char(self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }

    /// All 52 cards in id order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse engine notation such as "As", "Td", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.to_string()));
        };
        let rank = RANK_CHARS
            .iter()
            .position(|&c| c == r.to_ascii_uppercase())
            .ok_or(ParseCardError::Rank(r))?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == u.to_ascii_lowercase())
            .ok_or(ParseCardError::Suit(u))?;
        Ok(Self::new(rank as u8, suit as u8))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parse a whitespace-optional run of cards, e.g. "AsKd 2c".
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() % 2 != 0 {
        return Err(ParseCardError::Length(s.to_string()));
    }
    compact
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).parse())
        .collect()
}

/// Two distinct cards assigned to one board, higher rank first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    high: Card,
    low: Card,
}

impl HoleCards {
    /// Order two cards by rank (higher first). The cards must be distinct.
    pub fn new(a: Card, b: Card) -> Self {
        debug_assert_ne!(a, b, "hole cards must be distinct");
        if a.rank() >= b.rank() {
            Self { high: a, low: b }
        } else {
            Self { high: b, low: a }
        }
    }

    /// The higher-ranked card (either one for a pair).
    pub fn high(&self) -> Card {
        self.high
    }

    /// The lower-ranked card.
    pub fn low(&self) -> Card {
        self.low
    }

    /// Both cards, higher first.
    pub fn cards(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    /// True when both cards share a suit.
    pub fn is_suited(&self) -> bool {
        self.high.suit() == self.low.suit()
    }

    /// True when both cards share a rank.
    pub fn is_pair(&self) -> bool {
        self.high.rank() == self.low.rank()
    }
}

impl FromStr for HoleCards {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            [a, b] if a != b => Ok(Self::new(*a, *b)),
            _ => Err(ParseCardError::Length(s.to_string())),
        }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Betting stage of a board, identified by its visible community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Street {
    /// No community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// All five community cards.
    River,
}

impl Street {
    /// Street for a count of visible community cards (0, 3, 4, 5).
    pub fn from_visible(count: usize) -> Option<Street> {
        match count {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// Number of visible community cards on this street.
    pub fn visible(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// True before any community card is dealt.
    pub fn is_preflop(self) -> bool {
        self == Street::Preflop
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

/// Community cards on one board.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// An empty (pre-flop) board.
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    /// Wrap up to five community cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() <= 5);
        Self { cards }
    }

    /// Number of community cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no community card is out.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All community cards, in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first `street.visible()` cards; the engine may report the whole
    /// run-out while only part of it is face up.
    pub fn visible(&self, street: Street) -> &[Card] {
        &self.cards[..street.visible().min(self.cards.len())]
    }

    /// Street implied by the number of cards, if it is a legal count.
    pub fn street(&self) -> Option<Street> {
        Street::from_visible(self.cards.len())
    }
}

impl FromStr for Board {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        if cards.len() > 5 {
            return Err(ParseCardError::Length(s.to_string()));
        }
        Ok(Self::from_cards(cards))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Set of cards as a 52-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardMask(u64);

impl CardMask {
    /// The empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// Set holding `cards`.
    pub fn of(cards: &[Card]) -> Self {
        cards.iter().fold(Self::new(), |mut mask, &c| {
            mask.insert(c);
            mask
        })
    }

    /// Insert a card; returns false if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// True if `card` is in the set.
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when the set holds no card.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Every card of the deck not in this set, in id order.
    pub fn complement(&self) -> Vec<Card> {
        Card::all().filter(|&c| !self.contains(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, 3);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.to_string(), "As");
        assert_eq!(Card::new(RANK_2, 0).to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        for s in ["As", "Kh", "2c", "Td"] {
            assert_eq!(s.parse::<Card>().unwrap().to_string(), s);
        }
        assert!("XX".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("Asd".parse::<Card>().is_err());
    }

    #[test]
    fn test_hole_cards_ordering() {
        let hc: HoleCards = "5dAh".parse().unwrap();
        assert_eq!(hc.high().rank(), RANK_A);
        assert!(!hc.is_suited());
        assert!("KsQs".parse::<HoleCards>().unwrap().is_suited());
        assert!("9h9c".parse::<HoleCards>().unwrap().is_pair());
        assert!("AsAs".parse::<HoleCards>().is_err());
    }

    #[test]
    fn test_board_streets() {
        let board: Board = "AhKsQd".parse().unwrap();
        assert_eq!(board.street(), Some(Street::Flop));
        assert_eq!(Board::new().street(), Some(Street::Preflop));
        assert_eq!(Board::from_cards(parse_cards("AhKs").unwrap()).street(), None);

        let runout: Board = "AhKsQd2c3c".parse().unwrap();
        assert_eq!(runout.visible(Street::Turn).len(), 4);
    }

    #[test]
    fn test_mask_complement() {
        let dead = parse_cards("AsAh").unwrap();
        let mut mask = CardMask::of(&dead);
        assert_eq!(mask.len(), 2);
        assert!(!mask.insert(dead[0]));
        let rest = mask.complement();
        assert_eq!(rest.len(), 50);
        assert!(!rest.contains(&dead[1]));
    }
}
