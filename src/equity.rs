//! Monte Carlo equity estimation.
//!
//! Estimates the probability that a hole hand beats a uniformly random
//! opponent hand over a uniformly random run-out, counting ties as half a
//! win. Each sample draws, without replacement from the unseen cards, two
//! opponent cards and the missing community cards; a win scores 2, a tie 1.
//! The estimate is `score / (2 * samples)`.
//!
//! The sample count trades latency for noise (standard error shrinks as
//! `1/sqrt(N)`), so callers pick it per decision with [`SampleBudget`].

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardMask, Evaluator, HandEvaluator, HoleCards, Street};

/// Samples per rayon task in [`EquityEstimator::estimate_parallel`].
const PARALLEL_CHUNK: usize = 64;

/// Monte Carlo win-probability estimator.
#[derive(Debug, Clone, Default)]
pub struct EquityEstimator<E: Evaluator = HandEvaluator> {
    evaluator: E,
}

impl EquityEstimator<HandEvaluator> {
    /// Estimator backed by the built-in [`HandEvaluator`].
    pub fn new() -> Self {
        Self { evaluator: HandEvaluator::new() }
    }
}

impl<E: Evaluator> EquityEstimator<E> {
    /// Use a different hand evaluator.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Estimate equity of `hole` given the visible `community` cards on `street`.
    ///
    /// `community` must be disjoint from `hole`. Cards beyond
    /// `street.visible()` are ignored, so a board reported with its whole
    /// run-out is estimated as of `street`. A shorter `community` has its
    /// missing cards sampled. Deterministic for a given RNG state.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        hole: &HoleCards,
        community: &[Card],
        street: Street,
        samples: usize,
        rng: &mut R,
    ) -> f64 {
        if samples == 0 {
            return 0.5;
        }
        let community = face_up(community, street);
        let mut deck = unseen(hole, community);
        let score = self.score(hole, community, &mut deck, samples, rng);
        score as f64 / (2 * samples) as f64
    }

    /// Same estimate split across rayon workers.
    ///
    /// Samples are grouped into fixed-size chunks, each with its own RNG
    /// stream derived from `seed` and the chunk index, so the result does not
    /// depend on scheduling.
    pub fn estimate_parallel(
        &self,
        hole: &HoleCards,
        community: &[Card],
        street: Street,
        samples: usize,
        seed: u64,
    ) -> f64 {
        if samples == 0 {
            return 0.5;
        }
        let community = face_up(community, street);
        let deck = unseen(hole, community);
        let chunks = samples.div_ceil(PARALLEL_CHUNK);
        let score: u64 = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let n = PARALLEL_CHUNK.min(samples - chunk * PARALLEL_CHUNK);
                let mut rng = StdRng::seed_from_u64(chunk_seed(seed, chunk));
                let mut deck = deck.clone();
                self.score(hole, community, &mut deck, n, &mut rng)
            })
            .sum();
        score as f64 / (2 * samples) as f64
    }

    fn score<R: Rng + ?Sized>(
        &self,
        hole: &HoleCards,
        community: &[Card],
        deck: &mut [Card],
        samples: usize,
        rng: &mut R,
    ) -> u64 {
        let visible = community.len();
        let draw = 2 + (5 - visible);
        debug_assert!(deck.len() >= draw, "not enough unseen cards to sample");

        let mut mine = [hole.high(); 7];
        let mut theirs = [hole.high(); 7];
        mine[1] = hole.low();
        mine[2..2 + visible].copy_from_slice(community);
        theirs[2..2 + visible].copy_from_slice(community);

        let mut score = 0u64;
        for _ in 0..samples {
            let (drawn, _) = deck.partial_shuffle(rng, draw);
            theirs[0] = drawn[0];
            theirs[1] = drawn[1];
            mine[2 + visible..].copy_from_slice(&drawn[2..]);
            theirs[2 + visible..].copy_from_slice(&drawn[2..]);

            score += match self.evaluator.compare(&mine, &theirs) {
                Ordering::Greater => 2,
                Ordering::Equal => 1,
                Ordering::Less => 0,
            };
        }
        score
    }
}

/// The cards of `community` that are face up on `street`.
fn face_up(community: &[Card], street: Street) -> &[Card] {
    &community[..street.visible().min(community.len())]
}

/// Full deck minus the hole cards and visible community cards.
fn unseen(hole: &HoleCards, community: &[Card]) -> Vec<Card> {
    let mut known = CardMask::of(community);
    for card in hole.cards() {
        known.insert(card);
    }
    known.complement()
}

fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Snapshot of the shared game clock at a decision point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    /// Seconds left on the game clock.
    pub remaining_secs: f64,
    /// Seconds on the clock at game start.
    pub total_secs: f64,
    /// Current round, 1-based.
    pub round: u32,
    /// Rounds in the whole game.
    pub total_rounds: u32,
}

impl GameClock {
    /// Fraction of the clock already spent.
    pub fn time_used(&self) -> f64 {
        if self.total_secs <= 0.0 {
            return 0.0;
        }
        ((self.total_secs - self.remaining_secs) / self.total_secs).clamp(0.0, 1.0)
    }

    /// Fraction of rounds reached.
    pub fn rounds_played(&self) -> f64 {
        if self.total_rounds == 0 {
            return 0.0;
        }
        (self.round as f64 / self.total_rounds as f64).clamp(0.0, 1.0)
    }
}

/// Chooses the Monte Carlo sample count for a decision.
///
/// With `adaptive` set, the base count is scaled by how far ahead of the clock
/// the game is: `rounds_played / time_used * safety`. A bot that has spent 10%
/// of its clock on 20% of the rounds can afford roughly twice the samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleBudget {
    /// Sample count at even pace, and the count used when not adaptive.
    pub base: usize,
    /// Floor on the returned count.
    pub min: usize,
    /// Ceiling on the returned count.
    pub max: usize,
    /// Multiplier applied to the pace ratio, below 1 to leave headroom.
    pub safety: f64,
    /// Scale `base` by the clock pace.
    pub adaptive: bool,
}

impl Default for SampleBudget {
    fn default() -> Self {
        Self {
            base: 400,
            min: 50,
            max: 2000,
            safety: 0.9,
            adaptive: true,
        }
    }
}

impl SampleBudget {
    /// Always use `samples`.
    pub fn fixed(samples: usize) -> Self {
        Self {
            base: samples,
            min: samples,
            max: samples,
            safety: 1.0,
            adaptive: false,
        }
    }

    /// Sample count for the current clock, within `[min, max]`.
    pub fn samples(&self, clock: &GameClock) -> usize {
        let bounded = |n: usize| n.max(self.min).min(self.max).max(1);
        if !self.adaptive {
            return bounded(self.base);
        }
        let used = clock.time_used();
        let played = clock.rounds_played();
        if used <= 0.0 || played <= 0.0 {
            return bounded(self.base);
        }
        let scaled = self.base as f64 * (played / used) * self.safety;
        bounded(scaled.round() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn hole(s: &str) -> HoleCards {
        s.parse().unwrap()
    }

    #[test]
    fn test_deterministic_with_seed() {
        let est = EquityEstimator::new();
        let community = parse_cards("Ah 7c 2d").unwrap();
        let a = est.estimate(&hole("KsKd"), &community, Street::Flop, 300, &mut StdRng::seed_from_u64(7));
        let b = est.estimate(&hole("KsKd"), &community, Street::Flop, 300, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!((0.0..=1.0).contains(&a));
    }

    #[test]
    fn test_dominant_hand_converges_high() {
        // quad aces on the river: only a straight flush could beat it
        let est = EquityEstimator::new();
        let community = parse_cards("Ad Ac 7h 2s 9d").unwrap();
        let equity = est.estimate(&hole("AhAs"), &community, Street::River, 2000, &mut StdRng::seed_from_u64(1));
        assert!(equity > 0.99, "quads equity {}", equity);
    }

    #[test]
    fn test_royal_board_always_ties() {
        let est = EquityEstimator::new();
        let community = parse_cards("As Ks Qs Js Ts").unwrap();
        let equity = est.estimate(&hole("2c3d"), &community, Street::River, 500, &mut StdRng::seed_from_u64(3));
        assert_eq!(equity, 0.5);
    }

    #[test]
    fn test_dead_hand_converges_low() {
        // the board plays for us; any opponent card above a four beats it
        let est = EquityEstimator::new();
        let community = parse_cards("4h 5s 9d Tc Kd").unwrap();
        let equity = est.estimate(&hole("2c3d"), &community, Street::River, 2000, &mut StdRng::seed_from_u64(5));
        assert!(equity < 0.02, "23o equity {}", equity);
    }

    #[test]
    fn test_preflop_ordering() {
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(11);
        let aces = est.estimate(&hole("AhAs"), &[], Street::Preflop, 2000, &mut rng);
        let trash = est.estimate(&hole("7h2s"), &[], Street::Preflop, 2000, &mut rng);
        assert!(aces > 0.8, "AA equity {}", aces);
        assert!(trash < 0.4, "72o equity {}", trash);
    }

    #[test]
    fn test_parallel_matches_contract() {
        let est = EquityEstimator::new();
        let community = parse_cards("Qh Jh 3c 4d").unwrap();
        let a = est.estimate_parallel(&hole("AhKh"), &community, Street::Turn, 1000, 99);
        let b = est.estimate_parallel(&hole("AhKh"), &community, Street::Turn, 1000, 99);
        assert_eq!(a, b);
        let serial = est.estimate(&hole("AhKh"), &community, Street::Turn, 4000, &mut StdRng::seed_from_u64(99));
        assert!((a - serial).abs() < 0.08, "parallel {} vs serial {}", a, serial);
    }

    #[test]
    fn test_community_beyond_street_is_ignored() {
        // the engine can report the whole run-out while only the flop is up
        let est = EquityEstimator::new();
        let runout = parse_cards("Qh Jh 3c 4d 9s").unwrap();
        let on_flop = |community: &[Card], street| {
            est.estimate(&hole("AhKh"), community, street, 400, &mut StdRng::seed_from_u64(21))
        };
        let full = on_flop(&runout[..], Street::Flop);
        assert!((0.0..=1.0).contains(&full));
        assert_eq!(full, on_flop(&runout[..3], Street::Flop));

        // fewer cards than the street shows: the missing ones are sampled
        assert_eq!(on_flop(&runout[..3], Street::River), full);

        let parallel = est.estimate_parallel(&hole("AhKh"), &runout, Street::Flop, 500, 8);
        assert_eq!(parallel, est.estimate_parallel(&hole("AhKh"), &runout[..3], Street::Flop, 500, 8));
    }

    #[test]
    fn test_sample_budget() {
        let budget = SampleBudget::default();
        let mut clock = GameClock {
            remaining_secs: 30.0,
            total_secs: 30.0,
            round: 1,
            total_rounds: 1000,
        };
        assert_eq!(budget.samples(&clock), 400);

        // half the rounds played on a fifth of the clock
        clock.round = 500;
        clock.remaining_secs = 24.0;
        assert_eq!(budget.samples(&clock), 900);

        // far behind the clock
        clock.remaining_secs = 1.0;
        clock.round = 100;
        assert_eq!(budget.samples(&clock), 50);

        assert_eq!(SampleBudget::fixed(123).samples(&clock), 123);
    }
}
