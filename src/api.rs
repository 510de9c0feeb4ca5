// Public API surface: an immutable name -> function table built once per process.

use std::collections::HashSet;
use std::sync::OnceLock;

use log::{error, info};

use crate::config::LayoutConfig;
use crate::core::{KeyboardError, RenderFrame, Result};
use crate::draw::DrawStyle;
use crate::geometry::{CellLocation, Grid};
use crate::keyboard::Keyboard;

pub type CostFn = fn(&str, &Keyboard) -> f64;
pub type CheckFn = fn(&str, &LayoutConfig) -> Result<()>;
pub type LocateFn = fn(usize, Grid) -> Result<CellLocation>;
pub type DrawFn = fn(&Keyboard, &DrawStyle) -> RenderFrame;

/// Signature family of an exported function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportKind {
    Cost,
    Check,
    Locate,
    Draw,
}

/// One advertised name of the public surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExportSpec {
    pub name: &'static str,
    /// Module the implementation lives in.
    pub origin: &'static str,
    pub kind: ExportKind,
}

/// The complete advertised surface. Nothing else is exported through the table.
pub const EXPORTS: [ExportSpec; 5] = [
    ExportSpec { name: "compute_cost", origin: "cost", kind: ExportKind::Cost },
    ExportSpec { name: "compute_cost_ours", origin: "cost", kind: ExportKind::Cost },
    ExportSpec { name: "check_keyboard", origin: "keyboard", kind: ExportKind::Check },
    ExportSpec { name: "compute_cell_location", origin: "geometry", kind: ExportKind::Locate },
    ExportSpec { name: "draw", origin: "draw", kind: ExportKind::Draw },
];

/// A registered function pointer.
#[derive(Clone, Copy, Debug)]
pub enum Export {
    Cost(CostFn),
    Check(CheckFn),
    Locate(LocateFn),
    Draw(DrawFn),
}

impl Export {
    pub fn kind(&self) -> ExportKind {
        match self {
            Export::Cost(_) => ExportKind::Cost,
            Export::Check(_) => ExportKind::Check,
            Export::Locate(_) => ExportKind::Locate,
            Export::Draw(_) => ExportKind::Draw,
        }
    }

    /// Address of the underlying function, for identity checks.
    pub fn address(&self) -> usize {
        match *self {
            Export::Cost(f) => f as usize,
            Export::Check(f) => f as usize,
            Export::Locate(f) => f as usize,
            Export::Draw(f) => f as usize,
        }
    }
}

/// Immutable table of exported functions. Every slot is filled by `from_entries`.
#[derive(Clone, Copy, Debug)]
pub struct ApiTable {
    compute_cost: CostFn,
    compute_cost_ours: CostFn,
    check_keyboard: CheckFn,
    compute_cell_location: LocateFn,
    draw: DrawFn,
}

fn missing(name: &str) -> KeyboardError {
    let origin = EXPORTS.iter().find(|s| s.name == name).map_or("?", |s| s.origin);
    KeyboardError::Initialization(format!("{name} from {origin} is missing"))
}

impl ApiTable {
    /// Build a table, requiring `entries` to match `EXPORTS` exactly.
    pub fn from_entries(entries: Vec<(&'static str, Export)>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        let (mut cost, mut ours, mut check, mut locate, mut draw) = (None, None, None, None, None);
        for (name, export) in entries {
            if !seen.insert(name) {
                return Err(KeyboardError::Initialization(format!("{name} registered twice")));
            }
            match (name, export) {
                ("compute_cost", Export::Cost(f)) => cost = Some(f),
                ("compute_cost_ours", Export::Cost(f)) => ours = Some(f),
                ("check_keyboard", Export::Check(f)) => check = Some(f),
                ("compute_cell_location", Export::Locate(f)) => locate = Some(f),
                ("draw", Export::Draw(f)) => draw = Some(f),
                _ => {
                    let spec = EXPORTS.iter().find(|s| s.name == name).ok_or_else(|| {
                        KeyboardError::Initialization(format!("{name} is not part of the public surface"))
                    })?;
                    return Err(KeyboardError::Initialization(format!(
                        "{name} from {} is registered as {:?}, expected {:?}",
                        spec.origin,
                        export.kind(),
                        spec.kind
                    )));
                }
            }
        }
        Ok(Self {
            compute_cost: cost.ok_or_else(|| missing("compute_cost"))?,
            compute_cost_ours: ours.ok_or_else(|| missing("compute_cost_ours"))?,
            check_keyboard: check.ok_or_else(|| missing("check_keyboard"))?,
            compute_cell_location: locate.ok_or_else(|| missing("compute_cell_location"))?,
            draw: draw.ok_or_else(|| missing("draw"))?,
        })
    }

    /// The table over the crate's own implementations.
    pub fn load() -> Result<Self> {
        Self::from_entries(builtin_entries())
    }

    pub fn get(&self, name: &str) -> Option<Export> {
        match name {
            "compute_cost" => Some(Export::Cost(self.compute_cost)),
            "compute_cost_ours" => Some(Export::Cost(self.compute_cost_ours)),
            "check_keyboard" => Some(Export::Check(self.check_keyboard)),
            "compute_cell_location" => Some(Export::Locate(self.compute_cell_location)),
            "draw" => Some(Export::Draw(self.draw)),
            _ => None,
        }
    }

    /// Exported names, in `EXPORTS` order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let exports: &'static [ExportSpec] = &EXPORTS;
        exports.iter().map(|s| s.name)
    }

    pub fn len(&self) -> usize { EXPORTS.len() }
    pub fn is_empty(&self) -> bool { EXPORTS.is_empty() }

    pub fn compute_cost(&self) -> CostFn { self.compute_cost }
    pub fn compute_cost_ours(&self) -> CostFn { self.compute_cost_ours }
    pub fn check_keyboard(&self) -> CheckFn { self.check_keyboard }
    pub fn compute_cell_location(&self) -> LocateFn { self.compute_cell_location }
    pub fn draw(&self) -> DrawFn { self.draw }
}

fn builtin_entries() -> Vec<(&'static str, Export)> {
    vec![
        ("compute_cost", Export::Cost(crate::cost::compute_cost)),
        ("compute_cost_ours", Export::Cost(crate::cost::compute_cost_ours)),
        ("check_keyboard", Export::Check(crate::keyboard::check_keyboard)),
        ("compute_cell_location", Export::Locate(crate::geometry::compute_cell_location)),
        ("draw", Export::Draw(crate::draw::draw)),
    ]
}

static SURFACE: OnceLock<Result<ApiTable>> = OnceLock::new();

/// The process-wide table, built on first use. A failed build is reported on every call.
pub fn surface() -> Result<&'static ApiTable> {
    SURFACE
        .get_or_init(|| {
            let table = ApiTable::load();
            match &table {
                Ok(t) => info!("event=api_load module=api status=ok exports={}", t.len()),
                Err(e) => error!("event=api_load module=api status=error error={e}"),
            }
            table
        })
        .as_ref()
        .map_err(Clone::clone)
}
