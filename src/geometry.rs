//! Hexagonal grid geometry.
//!
//! Cells are addressed row-major (`index = row * cols + col`). Odd rows are
//! shifted right by half a cell, so every cell has up to six neighbours and
//! adjacent cells sit exactly one unit apart.

use crate::core::{KeyboardError, Result};

/// Vertical distance between two consecutive rows of a unit hex grid.
pub const ROW_HEIGHT: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

/// Shape of a hex grid. Only `Grid::new` builds one, so `rows * cols` always fits in `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(KeyboardError::InvalidConfig(format!(
                "grid must have at least one row and one column, got {rows}x{cols}"
            )));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(KeyboardError::InvalidConfig(format!(
                "a {rows}x{cols} grid has more cells than can be addressed"
            )));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> usize { self.rows * self.cols }
}

/// Position of a cell, both in grid coordinates and in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellLocation {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
}

impl CellLocation {
    /// Euclidean distance to another cell, in cell units.
    pub fn distance_to(&self, other: &CellLocation) -> f64 {
        distance(self, other)
    }
}

/// Map a cell index to its row/column and planar coordinates.
pub fn compute_cell_location(index: usize, grid: Grid) -> Result<CellLocation> {
    let capacity = grid.capacity();
    if index >= capacity {
        return Err(KeyboardError::CellOutOfRange { index, capacity });
    }
    Ok(locate(index, grid))
}

fn locate(index: usize, grid: Grid) -> CellLocation {
    let row = index / grid.cols;
    let col = index % grid.cols;
    let offset = if row % 2 == 1 { 0.5 } else { 0.0 };
    CellLocation {
        index,
        row,
        col,
        x: col as f64 + offset,
        y: row as f64 * ROW_HEIGHT,
    }
}

/// Euclidean distance between two cell locations.
pub fn distance(a: &CellLocation, b: &CellLocation) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Dense pairwise distances between the first `cells` cells of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
    cells: usize,
    dist: Vec<f64>,
}

impl DistanceTable {
    pub fn new(grid: Grid, cells: usize) -> Result<Self> {
        let capacity = grid.capacity();
        if cells > capacity {
            return Err(KeyboardError::CellOutOfRange { index: cells - 1, capacity });
        }
        Ok(Self::clamped(grid, cells))
    }

    /// Like `new`, but silently limits `cells` to the grid capacity.
    pub fn clamped(grid: Grid, cells: usize) -> Self {
        let cells = cells.min(grid.capacity());
        let locations: Vec<CellLocation> = (0..cells).map(|i| locate(i, grid)).collect();
        let mut dist = vec![0.0; cells * cells];
        for (i, a) in locations.iter().enumerate() {
            for (j, b) in locations.iter().enumerate().skip(i + 1) {
                let d = distance(a, b);
                dist[i * cells + j] = d;
                dist[j * cells + i] = d;
            }
        }
        Self { cells, dist }
    }

    pub fn cells(&self) -> usize { self.cells }

    /// Distance between cells `a` and `b`. Both must be `< cells()`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.dist[a * self.cells + b]
    }
}
