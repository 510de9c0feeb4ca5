//! Keyboard rendering: honeycomb ASCII art or an RGBA raster of hexagonal keys.

use crate::core::{RenderFrame, Result};
use crate::cost::key_presses;
use crate::geometry::{compute_cell_location, Grid, ROW_HEIGHT};
use crate::keyboard::Keyboard;
use crate::utils::render::encode_png;
use crate::utils::render2d::{Canvas, Color, BLACK, GRAY, RED, STEEL, WHITE};

/// Default distance in pixels between the centers of neighbouring keys.
pub const DEFAULT_CELL_PX: u32 = 40;

/// How `draw` renders a keyboard.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DrawStyle {
    /// One line per grid row, odd rows indented by half a key.
    #[default]
    Text,
    /// Filled hexagon per key, outlines for empty cells.
    Pixels { cell_px: u32 },
    /// Like `Pixels`, with keys shaded by how often `text` presses them.
    Heatmap { text: String, cell_px: u32 },
}

/// Render `keyboard` in the requested style.
pub fn draw(keyboard: &Keyboard, style: &DrawStyle) -> RenderFrame {
    match style {
        DrawStyle::Text => RenderFrame::Text(draw_text(keyboard)),
        DrawStyle::Pixels { cell_px } => draw_pixels(keyboard, *cell_px, |_| STEEL),
        DrawStyle::Heatmap { text, cell_px } => {
            let presses = key_presses(text, keyboard);
            let max = presses.values().copied().max().unwrap_or(0);
            draw_pixels(keyboard, *cell_px, |c| {
                let n = presses.get(&c).copied().unwrap_or(0);
                if max == 0 { STEEL } else { STEEL.lerp(RED, n as f64 / max as f64) }
            })
        }
    }
}

/// `draw` straight to PNG bytes. Only pixel styles can be encoded.
pub fn render_png(keyboard: &Keyboard, style: &DrawStyle) -> Result<Vec<u8>> {
    encode_png(&draw(keyboard, style))
}

fn key_label(c: char) -> char {
    if c == ' ' { '␣' } else { c }
}

fn draw_text(keyboard: &Keyboard) -> String {
    let grid = keyboard.grid();
    let mut lines = Vec::with_capacity(grid.rows());
    for row in 0..grid.rows() {
        let mut line = String::new();
        if row % 2 == 1 {
            line.push_str("  ");
        }
        let cells: Vec<String> = (0..grid.cols())
            .map(|col| match keyboard.symbol_at(row * grid.cols() + col) {
                Some(c) => format!("[{}]", key_label(c)),
                None => " . ".to_string(),
            })
            .collect();
        line.push_str(&cells.join(" "));
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Canvas size for a grid drawn with `cell_px` between key centers.
pub fn canvas_size(grid: Grid, cell_px: u32) -> (u32, u32) {
    let cell = cell_px.max(4) as f64;
    let stagger = if grid.rows() > 1 { 0.5 } else { 0.0 };
    let width = (2.0 * cell + (grid.cols() as f64 - 1.0 + stagger) * cell).ceil() as u32;
    let height = (2.0 * cell + (grid.rows() as f64 - 1.0) * ROW_HEIGHT * cell).ceil() as u32;
    (width, height)
}

/// Pointy-top hexagon around a key center.
fn hexagon(cx: f64, cy: f64, radius: f64) -> [(f64, f64); 6] {
    let mut pts = [(0.0, 0.0); 6];
    for (k, p) in pts.iter_mut().enumerate() {
        let angle = (60.0 * k as f64 - 90.0).to_radians();
        *p = (cx + radius * angle.cos(), cy + radius * angle.sin());
    }
    pts
}

fn draw_pixels<F: Fn(char) -> Color>(keyboard: &Keyboard, cell_px: u32, fill: F) -> RenderFrame {
    let grid = keyboard.grid();
    let cell = cell_px.max(4) as f64;
    let (width, height) = canvas_size(grid, cell_px);
    let mut canvas = Canvas::new(width, height);
    canvas.clear(WHITE);

    // circumradius of a hex whose flat-to-flat width is one cell, shrunk to leave a gap
    let radius = cell / 3f64.sqrt() * 0.92;
    for index in 0..grid.capacity() {
        let Ok(loc) = compute_cell_location(index, grid) else { continue };
        let cx = cell + loc.x * cell;
        let cy = cell + loc.y * cell;
        let shape = hexagon(cx, cy, radius);
        match keyboard.symbol_at(index) {
            Some(c) => {
                canvas.fill_polygon(&shape, fill(c));
                canvas.stroke_polygon(&shape, BLACK);
            }
            None => canvas.stroke_polygon(&shape, GRAY),
        }
    }
    canvas.into_render_frame()
}
