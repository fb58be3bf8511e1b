//! Starting-hand table generator.
//!
//! Estimates every canonical starting hand against a random hand by Monte
//! Carlo and writes the JSON table the engine loads.
//!
//! Usage: `gen_table [samples] [output] [seed]`
//! (defaults: 20000, `hole_strengths.json`, 0)

use std::process;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use triboard::cards::NUM_HOLE_KEYS;
use triboard::{EquityEstimator, StartingHandTable};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let samples: usize = parse_arg(args.next(), 20_000, "samples");
    let output = args.next().unwrap_or_else(|| "hole_strengths.json".to_string());
    let seed: u64 = parse_arg(args.next(), 0, "seed");

    println!("=== Starting-Hand Table ===");
    println!("Samples per hand: {}", samples);
    println!("Seed: {}", seed);
    println!();

    let start = Instant::now();
    let progress = ProgressBar::new(NUM_HOLE_KEYS as u64);
    progress.set_style(
        ProgressStyle::with_template("{elapsed_precise} [{bar:40}] {pos}/{len} hands")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let table = StartingHandTable::generate_with_progress(&EquityEstimator::new(), samples, seed, |_| progress.inc(1));
    progress.finish();

    let mut ranked: Vec<_> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    println!("\nStrongest: {}", summarize(ranked.iter().take(5)));
    println!("Weakest:   {}", summarize(ranked.iter().rev().take(5)));

    if let Err(e) = table.save_json(&output) {
        eprintln!("Failed to write {}: {}", output, e);
        process::exit(1);
    }
    println!("\nWrote {} in {:.2}s", output, start.elapsed().as_secs_f64());
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, name: &str) -> T {
    match arg {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            eprintln!("Invalid {}: {}", name, s);
            process::exit(2);
        }),
    }
}

fn summarize<'a, I>(entries: I) -> String
where
    I: Iterator<Item = &'a (triboard::HoleKey, f64)>,
{
    entries
        .map(|(key, strength)| format!("{} {:.3}", key, strength))
        .collect::<Vec<_>>()
        .join(", ")
}
