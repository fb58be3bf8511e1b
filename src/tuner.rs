//! Online threshold tuning.
//!
//! A stochastic hill climber over the betting thresholds. Round payoffs are
//! summed over a fixed window; at each window boundary the sum is compared to
//! a target:
//!
//! - below target, no experiment running: perturb every threshold and start one
//! - below target, experiment running: restore the pre-experiment thresholds
//! - above target: keep the thresholds, the experiment (if any) becomes baseline
//! - exactly on target: nothing changes
//!
//! The accumulator resets at every boundary. Perturbation size shrinks with
//! `1 / sqrt(round / window)`.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Street;
use crate::error::ConfigError;

/// A pre-flop / post-flop pair of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreetCutoffs {
    /// Value used with no community cards.
    pub preflop: f64,
    /// Value used on flop, turn and river.
    pub postflop: f64,
}

impl StreetCutoffs {
    /// Pair from the two values.
    pub fn new(preflop: f64, postflop: f64) -> Self {
        Self { preflop, postflop }
    }

    /// The value that applies on `street`.
    #[inline]
    pub fn for_street(&self, street: Street) -> f64 {
        if street.is_preflop() {
            self.preflop
        } else {
            self.postflop
        }
    }
}

/// Post-flop raise sizing curve:
/// `street² · exp(growth · (strength − baseline)) − offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaiseCurve {
    /// Exponential growth rate in strength.
    pub growth: f64,
    /// Chips subtracted from the curve.
    pub offset: f64,
}

/// Tunable betting thresholds, read by the policy and written only by the
/// tuner at round boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdState {
    /// Minimum strength to consider raising.
    pub raise_min: StreetCutoffs,
    /// Minimum strength to call under light pressure.
    pub call_min: StreetCutoffs,
    /// Post-flop raise sizing.
    pub raise_curve: RaiseCurve,
}

impl Default for ThresholdState {
    fn default() -> Self {
        Self {
            raise_min: StreetCutoffs::new(0.6066179515462299, 0.7212909509127321),
            call_min: StreetCutoffs::new(0.5570778707878955, 0.6207629881906793),
            raise_curve: RaiseCurve {
                growth: 1.8301191486578343,
                offset: 14.439631715170798,
            },
        }
    }
}

impl ThresholdState {
    /// Raise cutoff on `street`.
    pub fn raise_cutoff(&self, street: Street) -> f64 {
        self.raise_min.for_street(street)
    }

    /// Call cutoff on `street`.
    pub fn call_cutoff(&self, street: Street) -> f64 {
        self.call_min.for_street(street)
    }

    /// Add `delta` to every field.
    pub fn apply(&mut self, delta: &ThresholdDelta) {
        self.raise_min.preflop += delta.raise_min.preflop;
        self.raise_min.postflop += delta.raise_min.postflop;
        self.call_min.preflop += delta.call_min.preflop;
        self.call_min.postflop += delta.call_min.postflop;
        self.raise_curve.growth += delta.raise_curve.growth;
        self.raise_curve.offset += delta.raise_curve.offset;
    }

    /// Check every cutoff lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cutoffs = [
            ("thresholds.raise_min.preflop", self.raise_min.preflop),
            ("thresholds.raise_min.postflop", self.raise_min.postflop),
            ("thresholds.call_min.preflop", self.call_min.preflop),
            ("thresholds.call_min.postflop", self.call_min.postflop),
        ];
        for (name, value) in cutoffs {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ThresholdState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "raise {:.4}/{:.4} call {:.4}/{:.4} curve {:.4}/{:.3}",
            self.raise_min.preflop,
            self.raise_min.postflop,
            self.call_min.preflop,
            self.call_min.postflop,
            self.raise_curve.growth,
            self.raise_curve.offset,
        )
    }
}

/// A perturbation of every threshold, same shape as [`ThresholdState`].
pub type ThresholdDelta = ThresholdState;

/// Tuner schedule and perturbation sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunerConfig {
    /// Rounds per observation window.
    pub window: u32,
    /// Payoff per round the window must beat.
    pub target_per_round: f64,
    /// Half-width of the uniform perturbation on the four cutoffs.
    pub cutoff_step: f64,
    /// Half-width for the curve growth rate.
    pub growth_step: f64,
    /// Half-width for the curve offset.
    pub offset_step: f64,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            window: 5,
            target_per_round: 6.0,
            cutoff_step: 0.025,
            growth_step: 0.05,
            offset_step: 2.0,
        }
    }
}

impl TunerConfig {
    /// Payoff sum the window is compared against.
    pub fn target(&self) -> f64 {
        self.target_per_round * self.window as f64
    }

    /// Validate the schedule. Steps may be zero, which freezes that field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::NotPositive {
                name: "tuner.window",
                value: 0.0,
            });
        }
        let steps = [
            ("tuner.cutoff_step", self.cutoff_step),
            ("tuner.growth_step", self.growth_step),
            ("tuner.offset_step", self.offset_step),
        ];
        for (name, value) in steps {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}

/// What the tuner did on an observed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TunerOutcome {
    /// Not a window boundary.
    Accumulating,
    /// Below target: a new experiment was applied.
    Mutated(ThresholdDelta),
    /// Below target again: the running experiment was undone.
    Reverted,
    /// Above target: thresholds kept as the new baseline.
    Kept,
    /// Exactly on target.
    Tied,
}

/// Window-based hill climber over a [`ThresholdState`].
#[derive(Debug, Clone)]
pub struct ThresholdTuner {
    config: TunerConfig,
    accumulated: i64,
    /// Thresholds before the running experiment; restored bit for bit on revert.
    baseline: Option<ThresholdState>,
}

impl ThresholdTuner {
    /// Tuner with an empty window and no experiment.
    pub fn new(config: TunerConfig) -> Self {
        Self {
            config,
            accumulated: 0,
            baseline: None,
        }
    }

    /// Schedule and step sizes.
    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Payoff summed since the last boundary.
    pub fn accumulated(&self) -> i64 {
        self.accumulated
    }

    /// True while an experiment awaits its verdict.
    pub fn is_mutating(&self) -> bool {
        self.baseline.is_some()
    }

    /// Record the payoff of `round` (1-based) and act on window boundaries.
    pub fn observe<R: Rng + ?Sized>(
        &mut self,
        state: &mut ThresholdState,
        round: u32,
        payoff: i64,
        rng: &mut R,
    ) -> TunerOutcome {
        self.accumulated += payoff;
        let window = self.config.window.max(1);
        if round == 0 || round % window != 0 {
            return TunerOutcome::Accumulating;
        }

        let total = self.accumulated as f64;
        let target = self.config.target();
        self.accumulated = 0;

        if total < target {
            match self.baseline.take() {
                None => {
                    let delta = self.sample_delta(round, rng);
                    self.baseline = Some(*state);
                    state.apply(&delta);
                    log::info!("{:<32}{}", format!("round {} mutation", round), state);
                    TunerOutcome::Mutated(delta)
                }
                Some(baseline) => {
                    *state = baseline;
                    log::info!("{:<32}{}", format!("round {} revert", round), state);
                    TunerOutcome::Reverted
                }
            }
        } else if total == target {
            log::info!("{:<32}{}", format!("round {} on target", round), state);
            TunerOutcome::Tied
        } else {
            self.baseline = None;
            log::info!("{:<32}{}", format!("round {} keep", round), state);
            TunerOutcome::Kept
        }
    }

    fn sample_delta<R: Rng + ?Sized>(&self, round: u32, rng: &mut R) -> ThresholdDelta {
        let scale = 1.0 / (round as f64 / self.config.window.max(1) as f64).sqrt();
        let mut draw = |half_width: f64| (rng.gen::<f64>() * 2.0 - 1.0) * half_width * scale;
        let c = self.config.cutoff_step;
        ThresholdDelta {
            raise_min: StreetCutoffs::new(draw(c), draw(c)),
            call_min: StreetCutoffs::new(draw(c), draw(c)),
            raise_curve: RaiseCurve {
                growth: draw(self.config.growth_step),
                offset: draw(self.config.offset_step),
            },
        }
    }
}

impl Default for ThresholdTuner {
    fn default() -> Self {
        Self::new(TunerConfig::default())
    }
}
