//! Average table strength per board slot.
//!
//! Deals random six-card hands, allocates them, and reports the mean
//! starting-hand strength landing on each board.
//!
//! Usage: `allocation_stats [table.json] [deals] [seed]`

use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use triboard::allocator::slot_averages;
use triboard::StartingHandTable;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "hole_strengths.json".to_string());
    let deals: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let seed: Option<u64> = args.next().and_then(|s| s.parse().ok());

    let table = match StartingHandTable::from_json_file(&path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            process::exit(1);
        }
    };

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let averages = slot_averages(&table, deals, &mut rng);

    println!("=== Allocation Statistics ({} deals) ===", deals);
    for (slot, avg) in averages.iter().enumerate() {
        println!("Board {}: {:.4}", slot, avg);
    }
}
