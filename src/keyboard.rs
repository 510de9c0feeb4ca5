//! Keyboard layouts: a permutation of an alphabet laid on a hex grid.

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::LayoutConfig;
use crate::core::{KeyboardError, Result};
use crate::geometry::{compute_cell_location, CellLocation, Grid};

/// Validate that `keys` is a complete, repetition-free arrangement of the layout alphabet.
///
/// Checks run in a fixed order (length, unknown symbol, duplicate) and the first
/// failure is reported. A right-length, known, repetition-free sequence holds every
/// alphabet symbol, so nothing else can be missing.
pub fn check_keyboard(keys: &str, layout: &LayoutConfig) -> Result<()> {
    layout.validate()?;
    let alphabet = layout.symbols();
    let keys: Vec<char> = keys.chars().collect();

    if keys.len() != alphabet.len() {
        return Err(KeyboardError::WrongLength { expected: alphabet.len(), found: keys.len() });
    }

    let allowed: HashSet<char> = alphabet.iter().copied().collect();
    if let Some(&c) = keys.iter().find(|c| !allowed.contains(*c)) {
        return Err(KeyboardError::UnknownSymbol(c));
    }

    let mut seen = HashSet::with_capacity(keys.len());
    for &c in &keys {
        if !seen.insert(c) {
            return Err(KeyboardError::DuplicateSymbol(c));
        }
    }
    Ok(())
}

/// A validated keyboard. Symbol `i` occupies grid cell `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyboard {
    keys: Vec<char>,
    positions: HashMap<char, usize>,
    grid: Grid,
    start_cell: Option<usize>,
}

impl Keyboard {
    /// Build a keyboard from its symbols in cell order.
    pub fn new(keys: &str, layout: &LayoutConfig) -> Result<Self> {
        check_keyboard(keys, layout)?;
        Self::from_checked(keys.chars().collect(), layout)
    }

    /// The alphabet in its declared order.
    pub fn identity(layout: &LayoutConfig) -> Result<Self> {
        Self::new(&layout.alphabet, layout)
    }

    /// A uniformly shuffled arrangement of the layout alphabet.
    pub fn random<R: Rng + ?Sized>(layout: &LayoutConfig, rng: &mut R) -> Result<Self> {
        layout.validate()?;
        let mut keys = layout.symbols();
        keys.shuffle(rng);
        Self::from_checked(keys, layout)
    }

    /// The same symbols uniformly rearranged, on the same grid and start cell.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut keys = self.keys.clone();
        keys.shuffle(rng);
        Self::from_parts(keys, self.grid, self.start_cell)
    }

    fn from_checked(keys: Vec<char>, layout: &LayoutConfig) -> Result<Self> {
        Ok(Self::from_parts(keys, layout.grid()?, layout.start_cell))
    }

    fn from_parts(keys: Vec<char>, grid: Grid, start_cell: Option<usize>) -> Self {
        let positions = keys.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { keys, positions, grid, start_cell }
    }

    pub fn keys(&self) -> &[char] { &self.keys }
    pub fn grid(&self) -> Grid { self.grid }
    pub fn start_cell(&self) -> Option<usize> { self.start_cell }
    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    pub fn symbol_at(&self, cell: usize) -> Option<char> { self.keys.get(cell).copied() }

    pub fn position_of(&self, symbol: char) -> Option<usize> { self.positions.get(&symbol).copied() }

    pub fn contains(&self, symbol: char) -> bool { self.positions.contains_key(&symbol) }

    /// Planar location of a symbol's key, if the symbol is on the keyboard.
    pub fn location_of(&self, symbol: char) -> Option<CellLocation> {
        let cell = self.position_of(symbol)?;
        compute_cell_location(cell, self.grid).ok()
    }

    /// Exchange the symbols on cells `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.keys.len();
        for cell in [a, b] {
            if cell >= len {
                return Err(KeyboardError::CellOutOfRange { index: cell, capacity: len });
            }
        }
        self.keys.swap(a, b);
        self.positions.insert(self.keys[a], a);
        self.positions.insert(self.keys[b], b);
        Ok(())
    }

    pub fn as_string(&self) -> String { self.keys.iter().collect() }
}

impl fmt::Display for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.keys {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
