pub mod core;
pub mod config;
pub mod geometry;
pub mod keyboard;
pub mod cost;
pub mod draw;
pub mod optimize;
pub mod api;
pub mod utils;

pub use crate::cost::{compute_cost, compute_cost_ours};
pub use crate::keyboard::check_keyboard;
pub use crate::geometry::compute_cell_location;
pub use crate::draw::draw;

pub use crate::core::{KeyboardError, RenderFrame, Result};
pub use crate::config::{LayoutConfig, DEFAULT_ALPHABET};
pub use crate::geometry::{CellLocation, Grid};
pub use crate::keyboard::Keyboard;
pub use crate::draw::{render_png, DrawStyle};
pub use crate::optimize::{optimize, SearchOptions, SearchOutcome};
pub use crate::utils::{encode_png, save_png};
