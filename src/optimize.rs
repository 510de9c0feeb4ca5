//! Layout search: seeded first-improvement hill climbing over key swaps.

use log::{debug, info};
use rand::Rng;

use crate::cost::BigramCounts;
use crate::geometry::DistanceTable;
use crate::keyboard::Keyboard;
use crate::utils::rng::SeedSequence;

/// Parameters of a layout search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Swap proposals per restart.
    pub iterations: u32,
    pub seed: u64,
    /// Independent climbs. The first starts from the given keyboard, the rest from random layouts.
    pub restarts: u32,
}

impl Default for SearchOptions {
    fn default() -> Self { Self { iterations: 2_000, seed: 0, restarts: 1 } }
}

/// Best layout found by `optimize`.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub keyboard: Keyboard,
    pub cost: f64,
    pub initial_cost: f64,
    /// Swaps that lowered the cost.
    pub accepted: u32,
    /// Layouts priced.
    pub evaluated: u32,
}

/// Look for a cheaper layout for `text`, starting from `start`.
///
/// The returned keyboard never costs more than `start`.
pub fn optimize(text: &str, start: &Keyboard, options: &SearchOptions) -> SearchOutcome {
    let counts = BigramCounts::from_text(text, start);
    let table = DistanceTable::clamped(start.grid(), start.len());
    let initial_cost = counts.cost_with(start, &table);
    info!(
        "event=optimize module=optimize status=start keys={} iterations={} restarts={} cost={initial_cost:.3}",
        start.len(),
        options.iterations,
        options.restarts
    );

    let mut best = start.clone();
    let mut best_cost = initial_cost;
    let mut accepted = 0u32;
    let mut evaluated = 1u32;
    let mut seeds = SeedSequence::new(options.seed);

    for restart in 0..options.restarts.max(1) {
        let mut rng = seeds.next_rng();
        let mut current = if restart == 0 {
            start.clone()
        } else {
            start.shuffled(&mut rng)
        };
        let mut current_cost = counts.cost_with(&current, &table);
        evaluated += 1;

        if current.len() >= 2 {
            for _ in 0..options.iterations {
                let a = rng.gen_range(0..current.len());
                let b = rng.gen_range(0..current.len());
                if a == b || current.swap(a, b).is_err() {
                    continue;
                }
                let cost = counts.cost_with(&current, &table);
                evaluated += 1;
                if cost < current_cost {
                    current_cost = cost;
                    accepted += 1;
                } else if current.swap(a, b).is_err() {
                    break;
                }
            }
        }

        debug!("event=optimize module=optimize status=restart index={restart} cost={current_cost:.3}");
        if current_cost < best_cost {
            best_cost = current_cost;
            best = current;
        }
    }

    info!(
        "event=optimize module=optimize status=done cost={best_cost:.3} accepted={accepted} evaluated={evaluated}"
    );
    SearchOutcome { keyboard: best, cost: best_cost, initial_cost, accepted, evaluated }
}
