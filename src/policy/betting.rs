//! Per-board betting decisions.
//!
//! Each active board goes through the same steps: strength (table pre-flop,
//! Monte Carlo post-flop), a candidate raise size clamped into the board's
//! bounds, a "commit" action chosen by precedence raise > call > check >
//! fold, and then a response to opponent pressure. Boards are decided in
//! order and share one [`StackBudget`], so later boards only see chips the
//! earlier ones left uncommitted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::allocator::BoardAllocation;
use crate::cards::{Board, Evaluator, HandEvaluator, HoleCards, Street};
use crate::equity::EquityEstimator;
use crate::error::ConfigError;
use crate::policy::action::{ActionKind, BoardAction};
use crate::policy::board::{ActiveBoard, BoardState, RoundView};
use crate::policy::budget::StackBudget;
use crate::table::StartingHandTable;
use crate::tuner::ThresholdState;
use crate::NUM_BOARDS;

/// Fixed constants of the betting policy. The tunable cutoffs live in
/// [`ThresholdState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Chips added per unit of strength above `preflop_raise_center`.
    pub preflop_raise_slope: f64,
    /// Pre-flop strength that raises by exactly the continue cost.
    pub preflop_raise_center: f64,
    /// Strength at which the post-flop curve's exponent is zero.
    pub curve_baseline: f64,
    /// Continue cost above which strength is discounted.
    pub intimidation_threshold: f64,
    /// Weight of the `sqrt(cost) * sqrt(strength)` discount.
    pub intimidation_scale: f64,
    /// Pre-flop continue cost above which the discount is skipped.
    pub preflop_bluff_ignore: f64,
    /// Calls with strength only above the call cutoff need
    /// `sqrt(continue_cost)` below this.
    pub call_pressure_limit: f64,
    /// Probability of committing is `raise_probability_scale * strength`.
    pub raise_probability_scale: f64,
    /// Run post-flop Monte Carlo on the rayon pool.
    pub parallel_equity: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            preflop_raise_slope: 10.0,
            preflop_raise_center: 0.5,
            curve_baseline: 0.321875,
            intimidation_threshold: 0.0,
            intimidation_scale: 0.05,
            preflop_bluff_ignore: 20.0,
            call_pressure_limit: 6.0,
            raise_probability_scale: 1.4,
            parallel_equity: false,
        }
    }
}

impl PolicyConfig {
    /// Validate the constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("policy.intimidation_threshold", self.intimidation_threshold),
            ("policy.intimidation_scale", self.intimidation_scale),
            ("policy.preflop_bluff_ignore", self.preflop_bluff_ignore),
            ("policy.call_pressure_limit", self.call_pressure_limit),
            ("policy.raise_probability_scale", self.raise_probability_scale),
        ];
        for (name, value) in non_negative {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.preflop_raise_center) {
            return Err(ConfigError::OutOfUnitRange {
                name: "policy.preflop_raise_center",
                value: self.preflop_raise_center,
            });
        }
        if !(0.0..=1.0).contains(&self.curve_baseline) {
            return Err(ConfigError::OutOfUnitRange {
                name: "policy.curve_baseline",
                value: self.curve_baseline,
            });
        }
        Ok(())
    }
}

/// Action chosen for one board, with the chips it commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardDecision {
    /// Action sent to the engine.
    pub action: BoardAction,
    /// Chips this action commits from the stack.
    pub cost: u32,
    /// Strength used for the decision; `None` for assign and terminal boards.
    pub strength: Option<f64>,
}

impl BoardDecision {
    fn free(action: BoardAction) -> Self {
        Self {
            action,
            cost: 0,
            strength: None,
        }
    }
}

/// Betting policy with an injected random source.
#[derive(Debug, Clone)]
pub struct BettingPolicy<R: Rng = StdRng, E: Evaluator = HandEvaluator> {
    config: PolicyConfig,
    estimator: EquityEstimator<E>,
    rng: R,
}

impl BettingPolicy<StdRng, HandEvaluator> {
    /// Seeded policy, or entropy-seeded when `seed` is `None`.
    pub fn new(config: PolicyConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(config, EquityEstimator::new(), rng)
    }
}

impl<R: Rng, E: Evaluator> BettingPolicy<R, E> {
    /// Assemble a policy from an explicit estimator and random source.
    pub fn with_parts(config: PolicyConfig, estimator: EquityEstimator<E>, rng: R) -> Self {
        Self { config, estimator, rng }
    }

    /// Policy constants.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// One decision cycle: an action for every board, in board order.
    ///
    /// The summed cost of the returned decisions never exceeds `view.my_stack`.
    pub fn decide(
        &mut self,
        view: &RoundView,
        allocation: &BoardAllocation,
        table: &StartingHandTable,
        thresholds: &ThresholdState,
        samples: usize,
    ) -> [BoardDecision; NUM_BOARDS] {
        let mut budget = StackBudget::new(view.my_stack);
        let mut decisions = [BoardDecision::free(BoardAction::Check); NUM_BOARDS];

        for (i, decision) in decisions.iter_mut().enumerate() {
            let hole = allocation.hole(i);
            *decision = match view.board(i) {
                BoardState::Active(board) if board.legal.contains(ActionKind::Assign) => {
                    BoardDecision::free(BoardAction::Assign(hole))
                }
                BoardState::Terminal => BoardDecision::free(BoardAction::Check),
                BoardState::Active(board) => {
                    let strength = self.strength(view.street, &hole, &board.community, table, samples);
                    self.respond(view.street, board, strength, thresholds, &mut budget)
                }
            };
            log::debug!(
                "board {} {:<6} {} cost {} committed {}/{}",
                i,
                decision.action.short_code(),
                decision.strength.map_or_else(|| "-".to_string(), |s| format!("{:.3}", s)),
                decision.cost,
                budget.committed(),
                budget.stack(),
            );
        }
        decisions
    }

    /// Hand strength at `street`: table lookup pre-flop, Monte Carlo after.
    pub fn strength(
        &mut self,
        street: Street,
        hole: &HoleCards,
        community: &Board,
        table: &StartingHandTable,
        samples: usize,
    ) -> f64 {
        if street.is_preflop() {
            return table.strength(hole);
        }
        let visible = community.visible(street);
        let Some(seen) = Street::from_visible(visible.len()) else {
            log::warn!("board shows {} cards on the {}, using table strength", visible.len(), street);
            return table.strength(hole);
        };
        if self.config.parallel_equity {
            let seed = self.rng.gen();
            self.estimator.estimate_parallel(hole, visible, seen, samples, seed)
        } else {
            self.estimator.estimate(hole, visible, seen, samples, &mut self.rng)
        }
    }

    /// Candidate raise-to amount, clamped into `[min_raise, max_raise]`.
    pub fn raise_target(&self, street: Street, board: &ActiveBoard, strength: f64, thresholds: &ThresholdState) -> u32 {
        let base = (board.my_pip + board.continue_cost()) as f64;
        let raw = if strength <= thresholds.raise_cutoff(street) {
            0
        } else if street.is_preflop() {
            (base + (strength - self.config.preflop_raise_center) * self.config.preflop_raise_slope) as i64
        } else {
            let curve = thresholds.raise_curve;
            let streets = street.visible() as f64;
            let size = streets * streets * (curve.growth * (strength - self.config.curve_baseline)).exp();
            (base + size - curve.offset) as i64
        };
        let clamped = raw.max(board.min_raise as i64).min(board.max_raise as i64);
        clamped.max(0) as u32
    }

    /// Decide one active board and commit its cost to `budget`.
    pub fn respond(
        &mut self,
        street: Street,
        board: &ActiveBoard,
        strength: f64,
        thresholds: &ThresholdState,
        budget: &mut StackBudget,
    ) -> BoardDecision {
        let cont = board.continue_cost();
        let raise_cut = thresholds.raise_cutoff(street);
        let commit = self.commit_action(street, board, strength, thresholds, budget);

        let (action, cost) = if cont > 0 {
            let pressure = (cont as f64 - self.config.intimidation_threshold).max(0.0);
            let adjusted = self.intimidate(street, cont, strength);
            let pot_odds = cont as f64 / (board.pot_total() + cont) as f64;

            if adjusted < pot_odds {
                (BoardAction::Fold, 0)
            } else if self.coin() < self.config.raise_probability_scale * adjusted && strength > raise_cut {
                commit
            } else if (pressure.sqrt() < self.config.call_pressure_limit && strength > thresholds.call_cutoff(street))
                || strength > raise_cut
            {
                if budget.can_afford(cont) {
                    (BoardAction::Call, cont)
                } else {
                    (BoardAction::Fold, 0)
                }
            } else {
                (BoardAction::Fold, 0)
            }
        } else if self.coin() < self.config.raise_probability_scale * strength && strength > raise_cut {
            commit
        } else {
            (BoardAction::Check, 0)
        };

        let (action, cost) = legalize(board, action, cost, budget);
        let committed = budget.commit(cost);
        debug_assert!(committed, "decision cost exceeds remaining stack");
        BoardDecision {
            action,
            cost: if committed { cost } else { 0 },
            strength: Some(strength),
        }
    }

    /// Default action and cost before any pressure response.
    fn commit_action(
        &self,
        street: Street,
        board: &ActiveBoard,
        strength: f64,
        thresholds: &ThresholdState,
        budget: &StackBudget,
    ) -> (BoardAction, u32) {
        let cont = board.continue_cost();
        let amount = self.raise_target(street, board, strength, thresholds);
        let raise_cost = amount.saturating_sub(board.my_pip);

        if board.legal.contains(ActionKind::Raise) && budget.can_afford(raise_cost) && raise_cost > cont {
            (BoardAction::Raise(amount), raise_cost)
        } else if board.legal.contains(ActionKind::Call) && budget.can_afford(cont) {
            (BoardAction::Call, cont)
        } else if board.legal.contains(ActionKind::Check) {
            (BoardAction::Check, 0)
        } else {
            (BoardAction::Fold, 0)
        }
    }

    /// Strength discounted by `scale * sqrt(cost - threshold) * sqrt(strength)`,
    /// floored at zero. Large pre-flop bets are treated as bluffs and skipped.
    fn intimidate(&self, street: Street, cont: u32, strength: f64) -> f64 {
        let cost = cont as f64;
        if cost <= self.config.intimidation_threshold {
            return strength;
        }
        if street.is_preflop() && cost > self.config.preflop_bluff_ignore {
            return strength;
        }
        let discount = self.config.intimidation_scale * (cost - self.config.intimidation_threshold).sqrt() * strength.sqrt();
        (strength - discount).max(0.0)
    }

    #[inline]
    fn coin(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Replace an action the board does not allow with the cheapest legal one:
/// check, fold, an affordable call, then an affordable minimum raise.
///
/// When no legal action fits the remaining stack, a legal call (or minimum
/// raise) is sent all-in, costed at what is left.
fn legalize(board: &ActiveBoard, action: BoardAction, cost: u32, budget: &StackBudget) -> (BoardAction, u32) {
    let legal = board.legal;
    if legal.contains(action.kind()) {
        return (action, cost);
    }
    let cont = board.continue_cost();
    let min_raise_cost = board.min_raise.saturating_sub(board.my_pip);
    let fallback = if legal.contains(ActionKind::Check) {
        (BoardAction::Check, 0)
    } else if legal.contains(ActionKind::Fold) {
        (BoardAction::Fold, 0)
    } else if legal.contains(ActionKind::Call) && budget.can_afford(cont) {
        (BoardAction::Call, cont)
    } else if legal.contains(ActionKind::Raise) && budget.can_afford(min_raise_cost) {
        (BoardAction::Raise(board.min_raise), min_raise_cost)
    } else {
        let forced = if legal.contains(ActionKind::Call) {
            (BoardAction::Call, cont)
        } else if legal.contains(ActionKind::Raise) {
            (BoardAction::Raise(board.min_raise), min_raise_cost)
        } else {
            (BoardAction::Check, 0)
        };
        log::error!(
            "no affordable legal action in {:?} with {} chips left, sending {} all-in",
            legal,
            budget.remaining(),
            forced.0
        );
        return (forced.0, forced.1.min(budget.remaining()));
    };
    log::warn!("{} is not legal on this board ({:?}), sending {}", action, legal, fallback.0);
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::{allocate, validate_deal};
    use crate::cards::parse_cards;
    use crate::policy::action::LegalActions;
    use crate::table::tests::heuristic_table;
    use crate::tuner::StreetCutoffs;

    fn policy(seed: u64) -> BettingPolicy {
        BettingPolicy::new(PolicyConfig::default(), Some(seed))
    }

    fn simple_thresholds() -> ThresholdState {
        ThresholdState {
            raise_min: StreetCutoffs::new(0.6, 0.6),
            call_min: StreetCutoffs::new(0.5, 0.5),
            ..Default::default()
        }
    }

    fn board(my_pip: u32, opp_pip: u32, pot: u32, legal: LegalActions) -> ActiveBoard {
        ActiveBoard {
            community: Board::new(),
            my_pip,
            opp_pip,
            pot,
            legal,
            min_raise: opp_pip.max(2) * 2,
            max_raise: 200,
        }
    }

    fn raise_rate(strength: f64, trials: usize) -> f64 {
        let mut policy = policy(9);
        let thresholds = simple_thresholds();
        let b = board(0, 0, 100, LegalActions::initiative());
        let raises = (0..trials)
            .filter(|_| {
                let mut budget = StackBudget::new(200);
                let decision = policy.respond(Street::Flop, &b, strength, &thresholds, &mut budget);
                assert_ne!(decision.action, BoardAction::Fold);
                decision.action.is_aggressive()
            })
            .count();
        raises as f64 / trials as f64
    }

    #[test]
    fn test_initiative_raise_rate() {
        // 1.4 * 0.8 > 1: always raise, never check
        assert_eq!(raise_rate(0.8, 2000), 1.0);
        // below the raise cutoff: always check
        assert_eq!(raise_rate(0.55, 2000), 0.0);
        // 1.4 * 0.65 = 0.91
        let rate = raise_rate(0.65, 4000);
        assert!((rate - 0.91).abs() < 0.03, "raise rate {}", rate);
    }

    #[test]
    fn test_pot_odds_fold_law() {
        let thresholds = simple_thresholds();
        let mut policy = policy(3);
        // continue cost 50 into a total pot of 60: pot odds 50/110 ~ 0.45
        let b = board(0, 50, 10, LegalActions::facing_bet());
        for strength in [0.0, 0.2, 0.4, 0.44] {
            for _ in 0..200 {
                let mut budget = StackBudget::new(200);
                let d = policy.respond(Street::Turn, &b, strength, &thresholds, &mut budget);
                assert_eq!(d.action, BoardAction::Fold, "strength {}", strength);
                assert_eq!(budget.committed(), 0);
            }
        }

        // strong hands still fold when the discount drags them under the odds
        let adjusted = policy.intimidate(Street::Turn, 50, 0.5);
        assert!(adjusted < 50.0 / 110.0);
        let mut budget = StackBudget::new(200);
        let d = policy.respond(Street::Turn, &b, 0.5, &thresholds, &mut budget);
        assert_eq!(d.action, BoardAction::Fold);
    }

    #[test]
    fn test_preflop_bluff_ignore() {
        let policy = policy(1);
        assert_eq!(policy.intimidate(Street::Preflop, 30, 0.6), 0.6);
        assert!(policy.intimidate(Street::Flop, 30, 0.6) < 0.6);
        assert!(policy.intimidate(Street::Preflop, 16, 0.6) < 0.6);
        assert_eq!(policy.intimidate(Street::River, 10_000, 0.5), 0.0);
    }

    #[test]
    fn test_calls_under_light_pressure() {
        let thresholds = simple_thresholds();
        let mut policy = policy(5);
        // small bet into a big pot, strength between call and raise cutoffs
        let b = board(0, 4, 200, LegalActions::facing_bet());
        for _ in 0..100 {
            let mut budget = StackBudget::new(200);
            let d = policy.respond(Street::River, &b, 0.58, &thresholds, &mut budget);
            assert_eq!(d.action, BoardAction::Call);
            assert_eq!(d.cost, 4);
        }

        // same hand cannot afford the call
        let mut budget = StackBudget::new(200);
        budget.commit(198);
        let d = policy.respond(Street::River, &b, 0.58, &thresholds, &mut budget);
        assert_eq!(d.action, BoardAction::Fold);
    }

    #[test]
    fn test_raise_bounds() {
        let policy = policy(2);
        let thresholds = ThresholdState::default();
        let b = ActiveBoard {
            min_raise: 10,
            max_raise: 40,
            ..board(2, 6, 20, LegalActions::facing_bet())
        };
        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            for i in 0..=100 {
                let target = policy.raise_target(street, &b, i as f64 / 100.0, &thresholds);
                assert!((10..=40).contains(&target), "{} at {}: {}", street, i, target);
            }
        }
        // weak hands sit at the minimum, the river curve saturates at the max
        assert_eq!(policy.raise_target(Street::River, &b, 0.1, &thresholds), 10);
        assert_eq!(policy.raise_target(Street::River, &b, 0.99, &thresholds), 40);
        // pre-flop: 2 + 4 + (0.9 - 0.5) * 10 = 10
        let wide = ActiveBoard { min_raise: 0, ..b.clone() };
        assert_eq!(policy.raise_target(Street::Preflop, &wide, 0.9, &thresholds), 10);
    }

    #[test]
    fn test_stack_safety_across_boards() {
        let table = heuristic_table();
        let thresholds = simple_thresholds();
        let mut policy = policy(11);
        let cards = validate_deal(&parse_cards("As Ah Ks Kh Qs Qh").unwrap()).unwrap();
        let allocation = allocate(&cards, &table);

        for stack in [0u32, 5, 30, 80, 200] {
            for _ in 0..50 {
                let active = BoardState::Active(ActiveBoard {
                    min_raise: 4,
                    max_raise: 200,
                    ..board(2, 2, 4, LegalActions::initiative())
                });
                let view = RoundView {
                    street: Street::Preflop,
                    boards: [active.clone(), active.clone(), active],
                    my_stack: stack,
                    opp_stack: 200,
                    round: 1,
                    game_clock: 30.0,
                };
                let decisions = policy.decide(&view, &allocation, &table, &thresholds, 100);
                let total: u32 = decisions.iter().map(|d| d.cost).sum();
                assert!(total <= stack, "spent {} of {}", total, stack);
                for d in &decisions {
                    if let BoardAction::Raise(amount) = d.action {
                        assert!((4..=200).contains(&amount));
                    }
                }
            }
        }
    }

    #[test]
    fn test_assign_and_terminal_boards() {
        let table = heuristic_table();
        let mut policy = policy(4);
        let cards = validate_deal(&parse_cards("As Ah Kd Ks 2c 2d").unwrap()).unwrap();
        let allocation = allocate(&cards, &table);
        let assign = BoardState::Active(board(0, 0, 0, LegalActions::of(&[ActionKind::Assign])));
        let view = RoundView {
            street: Street::Preflop,
            boards: [assign.clone(), BoardState::Terminal, assign],
            my_stack: 200,
            opp_stack: 200,
            round: 1,
            game_clock: 30.0,
        };
        let decisions = policy.decide(&view, &allocation, &table, &ThresholdState::default(), 100);
        assert_eq!(decisions[0].action, BoardAction::Assign(allocation.hole(0)));
        assert_eq!(decisions[1].action, BoardAction::Check);
        assert_eq!(decisions[2].action, BoardAction::Assign(allocation.hole(2)));
        assert!(decisions.iter().all(|d| d.cost == 0 && d.strength.is_none()));
    }

    #[test]
    fn test_postflop_uses_equity() {
        let table = heuristic_table();
        let mut policy = policy(6);
        let hole: HoleCards = "AhAs".parse().unwrap();
        let community: Board = "Ad Ac 7h 2s 9d".parse().unwrap();
        let strength = policy.strength(Street::River, &hole, &community, &table, 500);
        assert!(strength > 0.99);
        // run-out reported in full on the flop: only the first three count
        let flop = policy.strength(Street::Flop, &hole, &community, &table, 500);
        assert!(flop > 0.95);
    }

    #[test]
    fn test_coin_flip_raise_facing_bet() {
        // adjusted strength 0.9 - 0.05 * sqrt(10) * sqrt(0.9) ~ 0.75, and
        // 1.4 * 0.75 > 1, so the commit raise fires every time
        let thresholds = simple_thresholds();
        let mut policy = policy(12);
        let b = board(0, 10, 100, LegalActions::facing_bet());
        for _ in 0..2000 {
            let mut budget = StackBudget::new(200);
            let d = policy.respond(Street::River, &b, 0.9, &thresholds, &mut budget);
            let BoardAction::Raise(amount) = d.action else {
                panic!("expected a raise, got {}", d.action);
            };
            assert!((b.min_raise..=b.max_raise).contains(&amount));
            assert_eq!(d.cost, amount);
            assert_eq!(budget.committed(), amount);
        }
    }

    #[test]
    fn test_heavy_pressure_folds_despite_odds() {
        // strength between the cutoffs, pot odds ~0.03: only the pressure
        // limit decides. sqrt(36) = 6 is not below it, sqrt(35) is.
        let thresholds = simple_thresholds();
        let mut policy = policy(13);
        let heavy = board(0, 36, 1000, LegalActions::facing_bet());
        let pot_odds = 36.0 / (heavy.pot_total() + 36) as f64;
        assert!(policy.intimidate(Street::River, 36, 0.58) > pot_odds);
        for _ in 0..200 {
            let mut budget = StackBudget::new(200);
            let d = policy.respond(Street::River, &heavy, 0.58, &thresholds, &mut budget);
            assert_eq!(d.action, BoardAction::Fold);
            assert_eq!(d.cost, 0);
            assert_eq!(budget.committed(), 0);
        }

        let lighter = board(0, 35, 1000, LegalActions::facing_bet());
        let mut budget = StackBudget::new(200);
        let d = policy.respond(Street::River, &lighter, 0.58, &thresholds, &mut budget);
        assert_eq!(d.action, BoardAction::Call);
        assert_eq!(d.cost, 35);
    }

    #[test]
    fn test_unaffordable_legal_set_stays_legal() {
        // only call and raise allowed, neither fits the ten chips left
        let thresholds = simple_thresholds();
        let mut policy = policy(14);
        let b = board(0, 50, 10, LegalActions::of(&[ActionKind::Call, ActionKind::Raise]));
        let mut budget = StackBudget::new(200);
        budget.commit(190);
        let d = policy.respond(Street::Turn, &b, 0.1, &thresholds, &mut budget);
        assert!(b.legal.contains(d.action.kind()), "{} not legal", d.action);
        assert_eq!(d.action, BoardAction::Call);
        assert_eq!(d.cost, 10);
        assert_eq!(budget.remaining(), 0);

        // a minimum raise is the cheapest legal action when call is not offered
        let b = board(0, 0, 10, LegalActions::of(&[ActionKind::Raise]));
        let mut budget = StackBudget::new(100);
        let d = policy.respond(Street::Turn, &b, 0.1, &thresholds, &mut budget);
        assert_eq!(d.action, BoardAction::Raise(4));
        assert_eq!(d.cost, 4);
        assert_eq!(budget.committed(), 4);
    }

    #[test]
    fn test_negative_constants_rejected() {
        let config = PolicyConfig { call_pressure_limit: -1.0, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative { name: "policy.call_pressure_limit", value: -1.0 })
        );
        let zero = PolicyConfig { intimidation_scale: 0.0, ..Default::default() };
        assert_eq!(zero.validate(), Ok(()));
    }

    #[test]
    fn test_illegal_commit_falls_back() {
        // check is chosen but only fold and call are allowed
        let thresholds = simple_thresholds();
        let mut policy = policy(8);
        let b = board(0, 0, 10, LegalActions::of(&[ActionKind::Fold, ActionKind::Call]));
        let mut budget = StackBudget::new(100);
        let d = policy.respond(Street::Flop, &b, 0.1, &thresholds, &mut budget);
        assert_eq!(d.action, BoardAction::Fold);
        assert_eq!(d.cost, 0);
    }
}
