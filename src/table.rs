//! Starting-hand strength table.
//!
//! Maps each of the 169 canonical hole keys to its expected win probability
//! against a random hand. The table is read-only after load and must be
//! exhaustive: a missing key is a configuration error caught at load time, so
//! lookups afterwards cannot fail.
//!
//! File format is a flat JSON object, e.g. `{"AA": 0.852, "AKs": 0.670, ...}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::cards::{Evaluator, HoleCards, HoleKey, Street, NUM_HOLE_KEYS};
use crate::equity::EquityEstimator;
use crate::error::TableError;

/// Pre-flop strength per canonical starting hand.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingHandTable {
    strengths: [f64; NUM_HOLE_KEYS],
}

impl StartingHandTable {
    /// Build from `(key, strength)` entries. Every key must appear exactly
    /// once with a strength in `[0, 1]`.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (HoleKey, f64)>,
    {
        let mut slots: [Option<f64>; NUM_HOLE_KEYS] = [None; NUM_HOLE_KEYS];
        for (key, value) in entries {
            if !(0.0..=1.0).contains(&value) {
                return Err(TableError::InvalidStrength { key: key.to_string(), value });
            }
            let slot = &mut slots[key.index()];
            if slot.replace(value).is_some() {
                return Err(TableError::DuplicateKey(key.to_string()));
            }
        }

        let mut strengths = [0.0; NUM_HOLE_KEYS];
        for key in HoleKey::all() {
            strengths[key.index()] = slots[key.index()].ok_or_else(|| TableError::MissingKey(key.to_string()))?;
        }
        Ok(Self { strengths })
    }

    /// Build by evaluating `f` on every key.
    pub fn from_fn<F: Fn(HoleKey) -> f64>(f: F) -> Result<Self, TableError> {
        Self::from_entries(HoleKey::all().map(|k| (k, f(k))))
    }

    /// Parse the JSON object format.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: FxHashMap<String, f64> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let key = name
                .parse::<HoleKey>()
                .map_err(|source| TableError::UnknownKey { key: name.clone(), source })?;
            entries.push((key, value));
        }
        Self::from_entries(entries)
    }

    /// Load the JSON table from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let content = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&content)?;
        log::info!("{:<32}{}", "loaded starting-hand table", path.as_ref().display());
        Ok(table)
    }

    /// Serialize as a pretty JSON object with keys sorted.
    pub fn to_json_string(&self) -> Result<String, TableError> {
        let ordered: BTreeMap<String, f64> = self.iter().map(|(k, v)| (k.to_string(), v)).collect();
        Ok(serde_json::to_string_pretty(&ordered)?)
    }

    /// Write [`StartingHandTable::to_json_string`] to `path`.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        fs::write(path.as_ref(), self.to_json_string()?)?;
        log::info!("{:<32}{}", "saved starting-hand table", path.as_ref().display());
        Ok(())
    }

    /// Strength of a concrete hole hand.
    #[inline]
    pub fn strength(&self, hole: &HoleCards) -> f64 {
        self.key_strength(HoleKey::of(hole))
    }

    /// Strength of a canonical key.
    #[inline]
    pub fn key_strength(&self, key: HoleKey) -> f64 {
        self.strengths[key.index()]
    }

    /// All entries in key-index order.
    pub fn iter(&self) -> impl Iterator<Item = (HoleKey, f64)> + '_ {
        HoleKey::all().map(move |k| (k, self.key_strength(k)))
    }

    /// Estimate every class by Monte Carlo against a random hand.
    ///
    /// Keys are processed in parallel; key `i` uses the RNG stream seeded with
    /// `seed + i`, so the table is reproducible.
    pub fn generate<E: Evaluator>(estimator: &EquityEstimator<E>, samples: usize, seed: u64) -> Self {
        Self::generate_with_progress(estimator, samples, seed, |_| {})
    }

    /// [`StartingHandTable::generate`] reporting the number of finished keys.
    pub fn generate_with_progress<E, F>(estimator: &EquityEstimator<E>, samples: usize, seed: u64, progress: F) -> Self
    where
        E: Evaluator,
        F: Fn(usize) + Sync,
    {
        let done = AtomicUsize::new(0);
        let values: Vec<f64> = HoleKey::all()
            .collect::<Vec<_>>()
            .par_iter()
            .map(|key| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(key.index() as u64));
                let equity = estimator.estimate(&key.representative(), &[], Street::Preflop, samples, &mut rng);
                progress(done.fetch_add(1, Ordering::Relaxed) + 1);
                equity
            })
            .collect();

        let mut strengths = [0.0; NUM_HOLE_KEYS];
        strengths.copy_from_slice(&values);
        log::info!("{:<32}{} samples per hand, seed {}", "generated starting-hand table", samples, seed);
        Self { strengths }
    }
}
