//! Layout configuration: grid shape, alphabet and pointer start cell.

use std::collections::HashSet;

use crate::core::{KeyboardError, Result};
use crate::geometry::Grid;

/// Lowercase Latin letters, the Portuguese accented letters and basic punctuation.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzáàâãçéêíóôõú .,-?!";

/// Describes the grid a keyboard is laid on and the symbols it must carry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub rows: usize,
    pub cols: usize,
    pub alphabet: String,
    /// Cell the pointer rests on before typing. `None` means the first key is free.
    pub start_cell: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { rows: 4, cols: 11, alphabet: DEFAULT_ALPHABET.to_string(), start_cell: None }
    }
}

impl LayoutConfig {
    pub fn new<S: Into<String>>(rows: usize, cols: usize, alphabet: S) -> Self {
        Self { rows, cols, alphabet: alphabet.into(), start_cell: None }
    }

    pub fn with_start_cell(mut self, cell: usize) -> Self {
        self.start_cell = Some(cell);
        self
    }

    /// The grid described by `rows` x `cols`.
    pub fn grid(&self) -> Result<Grid> { Grid::new(self.rows, self.cols) }

    /// Alphabet symbols in declared order.
    pub fn symbols(&self) -> Vec<char> { self.alphabet.chars().collect() }

    /// Check that the alphabet is non-empty, unique and fits on the grid.
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid()?;
        let symbols = self.symbols();
        if symbols.is_empty() {
            return Err(KeyboardError::InvalidConfig("alphabet is empty".into()));
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for &c in &symbols {
            if !seen.insert(c) {
                return Err(KeyboardError::InvalidConfig(format!(
                    "alphabet repeats symbol {c:?}"
                )));
            }
        }
        if symbols.len() > grid.capacity() {
            return Err(KeyboardError::InvalidConfig(format!(
                "alphabet has {} symbols but a {}x{} grid only has {} cells",
                symbols.len(),
                grid.rows(),
                grid.cols(),
                grid.capacity()
            )));
        }
        if let Some(cell) = self.start_cell {
            if cell >= grid.capacity() {
                return Err(KeyboardError::CellOutOfRange { index: cell, capacity: grid.capacity() });
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl LayoutConfig {
    /// Parse and validate a TOML layout description. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: LayoutConfig =
            toml::from_str(s).map_err(|e| KeyboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML layout description from disk.
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| KeyboardError::Other(format!("Failed to read config: {}", e)))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabet_fills_default_grid() {
        let cfg = LayoutConfig::default();
        cfg.validate().expect("default config is valid");
        assert_eq!(cfg.symbols().len(), 44);
        assert_eq!(cfg.grid().unwrap().capacity(), 44);
    }

    #[test]
    fn rejects_repeated_symbol() {
        let cfg = LayoutConfig::new(2, 2, "abca");
        assert!(matches!(cfg.validate(), Err(KeyboardError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_alphabet_larger_than_grid() {
        let cfg = LayoutConfig::new(1, 2, "abc");
        assert!(matches!(cfg.validate(), Err(KeyboardError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_grid_whose_cell_count_overflows() {
        let cfg = LayoutConfig::new(usize::MAX / 2 + 1, 2, "ab");
        assert!(matches!(cfg.validate(), Err(KeyboardError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_alphabet() {
        let cfg = LayoutConfig::new(1, 2, "");
        assert!(matches!(cfg.validate(), Err(KeyboardError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_start_cell_outside_grid() {
        let cfg = LayoutConfig::new(1, 3, "abc").with_start_cell(3);
        assert_eq!(cfg.validate(), Err(KeyboardError::CellOutOfRange { index: 3, capacity: 3 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let cfg = LayoutConfig::from_toml_str("rows = 2\ncols = 3\nalphabet = \"abcde\"\n").unwrap();
        assert_eq!(cfg, LayoutConfig::new(2, 3, "abcde"));

        let cfg = LayoutConfig::from_toml_str("start_cell = 5\n").unwrap();
        assert_eq!(cfg.start_cell, Some(5));
        assert_eq!(cfg.alphabet, DEFAULT_ALPHABET);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_syntax_error_is_invalid_config() {
        assert!(matches!(
            LayoutConfig::from_toml_str("rows = "),
            Err(KeyboardError::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_huge_grid_is_invalid_config() {
        let text = "rows = 9223372036854775807\ncols = 4\nalphabet = \"ab\"\n";
        assert!(matches!(LayoutConfig::from_toml_str(text), Err(KeyboardError::InvalidConfig(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_file_round_trip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "rows = 1\ncols = 4\nalphabet = \"abc \"\nstart_cell = 2").unwrap();
        let cfg = LayoutConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(cfg, LayoutConfig::new(1, 4, "abc ").with_start_cell(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_toml_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = LayoutConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, KeyboardError::Other(ref m) if m.starts_with("Failed to read config")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_file_with_invalid_layout_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "rows = 1\ncols = 2\nalphabet = \"abc\"\n").unwrap();
        assert!(matches!(LayoutConfig::from_toml_file(&path), Err(KeyboardError::InvalidConfig(_))));
    }
}
