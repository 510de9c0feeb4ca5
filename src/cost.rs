//! Travel cost of typing a text on a keyboard.
//!
//! A single pointer moves from key to key. The cost is the total Euclidean
//! distance travelled, in cell units. Two formulations are provided:
//! `compute_cost` walks the text once, `compute_cost_ours` first reduces the
//! text to bigram counts and then prices them against a distance table, which
//! lets the same counts price many layouts.

use std::collections::HashMap;

use log::debug;

use crate::geometry::{compute_cell_location, distance, DistanceTable};
use crate::keyboard::Keyboard;

/// Map `text` onto the symbols of `keyboard`.
///
/// A character the keyboard carries is typed as is; otherwise its lowercase
/// form is tried. Whitespace becomes a space when the keyboard has a space key.
/// Returns the typed symbols and the number of characters dropped.
pub fn normalize_text(text: &str, keyboard: &Keyboard) -> (Vec<char>, usize) {
    let has_space = keyboard.contains(' ');
    let mut typed = Vec::with_capacity(text.len());
    let mut skipped = 0usize;
    for c in text.chars() {
        let c = if has_space && c.is_whitespace() { ' ' } else { c };
        if keyboard.contains(c) {
            typed.push(c);
            continue;
        }
        for lower in c.to_lowercase() {
            if keyboard.contains(lower) {
                typed.push(lower);
            } else {
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        debug!("event=cost_normalize module=cost status=skipped count={skipped}");
    }
    (typed, skipped)
}

/// Distance travelled to type `text` on `keyboard`, following the text in order.
pub fn compute_cost(text: &str, keyboard: &Keyboard) -> f64 {
    let (typed, _) = normalize_text(text, keyboard);
    let grid = keyboard.grid();
    let mut current = keyboard
        .start_cell()
        .and_then(|cell| compute_cell_location(cell, grid).ok());
    let mut total = 0.0;
    for c in typed {
        let Some(next) = keyboard.location_of(c) else { continue };
        if let Some(prev) = current {
            total += distance(&prev, &next);
        }
        current = Some(next);
    }
    total
}

/// Same cost as `compute_cost`, computed from bigram counts and a distance table.
pub fn compute_cost_ours(text: &str, keyboard: &Keyboard) -> f64 {
    BigramCounts::from_text(text, keyboard).cost(keyboard)
}

/// Ordered pairs of consecutively typed symbols and how often they occur.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BigramCounts {
    first: Option<char>,
    pairs: Vec<(char, char, u64)>,
    total: u64,
}

impl BigramCounts {
    pub fn from_text(text: &str, keyboard: &Keyboard) -> Self {
        let (typed, _) = normalize_text(text, keyboard);
        let mut counts: HashMap<(char, char), u64> = HashMap::new();
        for w in typed.windows(2) {
            // repeated keys cost nothing
            if w[0] != w[1] {
                *counts.entry((w[0], w[1])).or_insert(0) += 1;
            }
        }
        let mut pairs: Vec<(char, char, u64)> =
            counts.into_iter().map(|((a, b), n)| (a, b, n)).collect();
        pairs.sort_unstable();
        Self { first: typed.first().copied(), pairs, total: typed.len() as u64 }
    }

    /// First symbol typed, if any.
    pub fn first(&self) -> Option<char> { self.first }

    /// Distinct moving bigrams with their counts, sorted by symbol pair.
    pub fn pairs(&self) -> &[(char, char, u64)] { &self.pairs }

    /// Number of symbols typed.
    pub fn total_presses(&self) -> u64 { self.total }

    /// Price these counts on `keyboard`.
    pub fn cost(&self, keyboard: &Keyboard) -> f64 {
        let table = DistanceTable::clamped(keyboard.grid(), keyboard.len());
        self.cost_with(keyboard, &table)
    }

    /// Price these counts on `keyboard` using a prebuilt distance table.
    pub fn cost_with(&self, keyboard: &Keyboard, table: &DistanceTable) -> f64 {
        let mut total = 0.0;
        if let (Some(start), Some(first)) = (keyboard.start_cell(), self.first) {
            if let Some(cell) = keyboard.position_of(first) {
                if start < table.cells() && cell < table.cells() {
                    total += table.get(start, cell);
                } else if let (Ok(a), Ok(b)) = (
                    compute_cell_location(start, keyboard.grid()),
                    compute_cell_location(cell, keyboard.grid()),
                ) {
                    total += distance(&a, &b);
                }
            }
        }
        for &(a, b, n) in &self.pairs {
            if let (Some(pa), Some(pb)) = (keyboard.position_of(a), keyboard.position_of(b)) {
                total += n as f64 * table.get(pa, pb);
            }
        }
        total
    }
}

/// How often each key of `keyboard` is pressed when typing `text`.
pub fn key_presses(text: &str, keyboard: &Keyboard) -> HashMap<char, u64> {
    let (typed, _) = normalize_text(text, keyboard);
    let mut counts = HashMap::new();
    for c in typed {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::geometry::ROW_HEIGHT;

    fn row() -> Keyboard {
        Keyboard::new("abcd", &LayoutConfig::new(1, 4, "abcd")).unwrap()
    }

    #[test]
    fn walks_along_a_single_row() {
        let kb = row();
        assert_eq!(compute_cost("abcd", &kb), 3.0);
        assert_eq!(compute_cost("ad", &kb), 3.0);
        assert_eq!(compute_cost("adad", &kb), 9.0);
        assert_eq!(compute_cost_ours("adad", &kb), 9.0);
    }

    #[test]
    fn empty_and_single_symbol_texts_are_free() {
        let kb = row();
        assert_eq!(compute_cost("", &kb), 0.0);
        assert_eq!(compute_cost("b", &kb), 0.0);
        assert_eq!(compute_cost("bbbb", &kb), 0.0);
        assert_eq!(compute_cost_ours("bbbb", &kb), 0.0);
    }

    #[test]
    fn unknown_symbols_are_skipped_and_case_ignored() {
        let kb = row();
        assert_eq!(compute_cost("A-x-D", &kb), compute_cost("ad", &kb));
        let (typed, skipped) = normalize_text("A-x-D", &kb);
        assert_eq!(typed, vec!['a', 'd']);
        assert_eq!(skipped, 3);
    }

    #[test]
    fn uppercase_keys_are_typed_as_written() {
        let cfg = LayoutConfig::new(1, 4, "ABCD");
        let kb = Keyboard::identity(&cfg).unwrap();
        assert_eq!(compute_cost("AD", &kb), 3.0);
        assert_eq!(compute_cost_ours("AD", &kb), 3.0);
        // no uppercase fallback: lowercase text does not reach uppercase keys
        assert_eq!(compute_cost("ad", &kb), 0.0);
    }

    #[test]
    fn mixed_case_keyboard_prefers_exact_symbol() {
        let cfg = LayoutConfig::new(1, 3, "aAb");
        let kb = Keyboard::identity(&cfg).unwrap();
        let (typed, skipped) = normalize_text("Ab", &kb);
        assert_eq!(typed, vec!['A', 'b']);
        assert_eq!(skipped, 0);
        assert_eq!(compute_cost("Ab", &kb), 1.0);
        assert_eq!(compute_cost("ab", &kb), 2.0);
    }

    #[test]
    fn whitespace_maps_to_space_key() {
        let kb = Keyboard::new("a b", &LayoutConfig::new(1, 3, "ab ")).unwrap();
        let (typed, skipped) = normalize_text("a\n\tb", &kb);
        assert_eq!(typed, vec!['a', ' ', ' ', 'b']);
        assert_eq!(skipped, 0);
        assert_eq!(compute_cost("a\nb", &kb), 2.0);
    }

    #[test]
    fn start_cell_charges_the_first_move() {
        let cfg = LayoutConfig::new(1, 4, "abcd").with_start_cell(0);
        let kb = Keyboard::new("abcd", &cfg).unwrap();
        assert_eq!(compute_cost("d", &kb), 3.0);
        assert_eq!(compute_cost_ours("d", &kb), 3.0);
        assert_eq!(compute_cost("", &kb), 0.0);
    }

    #[test]
    fn diagonal_moves_use_hex_offsets() {
        let cfg = LayoutConfig::new(2, 2, "abcd");
        let kb = Keyboard::new("abcd", &cfg).unwrap();
        // a(0,0) -> d(1.5, h)
        let expected = (1.5f64 * 1.5 + ROW_HEIGHT * ROW_HEIGHT).sqrt();
        assert!((compute_cost("ad", &kb) - expected).abs() < 1e-12);
        assert!((compute_cost_ours("ad", &kb) - expected).abs() < 1e-12);
    }

    #[test]
    fn bigram_counts_skip_repeats() {
        let kb = row();
        let counts = BigramCounts::from_text("aabab", &kb);
        assert_eq!(counts.first(), Some('a'));
        assert_eq!(counts.total_presses(), 5);
        assert_eq!(counts.pairs(), &[('a', 'b', 2), ('b', 'a', 1)]);
    }

    #[test]
    fn counts_price_other_layouts() {
        let cfg = LayoutConfig::new(1, 4, "abcd");
        let counts = BigramCounts::from_text("abab", &Keyboard::identity(&cfg).unwrap());
        let far = Keyboard::new("acdb", &cfg).unwrap();
        assert_eq!(counts.cost(&far), compute_cost("abab", &far));
        assert_eq!(counts.cost(&far), 9.0);
    }

    #[test]
    fn key_presses_counts_each_symbol() {
        let kb = row();
        let presses = key_presses("Abba!", &kb);
        assert_eq!(presses.get(&'a'), Some(&2));
        assert_eq!(presses.get(&'b'), Some(&2));
        assert_eq!(presses.get(&'c'), None);
    }
}
