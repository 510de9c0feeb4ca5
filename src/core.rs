// Core types shared across the crate: the error taxonomy and render frames.

/// A frame returned by `draw`.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderFrame {
    /// Textual representation of a keyboard (honeycomb ASCII art).
    Text(String),
    /// Raw pixel buffer in row-major RGB or RGBA format.
    Pixels {
        width: u32,
        height: u32,
        /// Pixel data. Convention: RGB uses 3 bytes per pixel, RGBA uses 4.
        data: Vec<u8>,
    },
}

impl RenderFrame {
    /// Text content if this is a text frame.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderFrame::Text(s) => Some(s),
            RenderFrame::Pixels { .. } => None,
        }
    }
}

/// Recoverable errors across the keyboard APIs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KeyboardError {
    /// The public API surface could not be assembled. Fatal for `api::surface`.
    #[error("Initialization failure: {0}")]
    Initialization(String),
    #[error("Keyboard has {found} symbols, expected {expected}")]
    WrongLength { expected: usize, found: usize },
    #[error("Symbol {0:?} is not part of the alphabet")]
    UnknownSymbol(char),
    #[error("Symbol {0:?} appears more than once")]
    DuplicateSymbol(char),
    #[error("Cell {index} is outside the grid (capacity {capacity})")]
    CellOutOfRange { index: usize, capacity: usize },
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    #[error("Other error: {0}")]
    Other(String),
}

/// Convenience alias for results using KeyboardError.
pub type Result<T> = std::result::Result<T, KeyboardError>;
