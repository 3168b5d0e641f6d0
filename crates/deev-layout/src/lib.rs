#![forbid(unsafe_code)]

//! Split-pane width model for the Deev editor screens.
//!
//! The primary (left) pane's width is a percentage of its container, held
//! inside a per-screen `[min, max]` band. Everything here is pure data and
//! arithmetic; the pointer lifecycle that drives it lives in `deev-web`.

pub mod preset;
pub mod split;

use std::fmt;

pub use preset::{EditorMode, SplitPaneConfig, SplitPaneLayout, UnknownEditorMode};
pub use split::{
    ClampPolicy, ContainerBounds, PERCENT_SCALE, PaneWidthBounds, PaneWidthPercent, SplitWidths,
};

/// Errors raised while building split-pane bounds or parsing configuration.
///
/// Event handling never produces these; only construction does.
#[derive(Debug)]
pub enum SplitLayoutError {
    /// A bound was NaN or infinite.
    NonFiniteBound { value: f64 },
    /// A bound fell outside `0..=100`.
    BoundOutOfRange { value: f64 },
    /// `min` was greater than `max`.
    InvertedBounds { min: f64, max: f64 },
    /// The configured starting width is not inside the bounds.
    InitialOutOfBounds { initial: f64, min: f64, max: f64 },
    /// The JSON configuration could not be decoded.
    Config(serde_json::Error),
}

impl fmt::Display for SplitLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound { value } => {
                write!(f, "pane width bound must be finite (got {value})")
            }
            Self::BoundOutOfRange { value } => {
                write!(f, "pane width bound must be within 0..=100 (got {value})")
            }
            Self::InvertedBounds { min, max } => {
                write!(f, "pane width min must be <= max (got min={min}, max={max})")
            }
            Self::InitialOutOfBounds { initial, min, max } => {
                write!(f, "initial pane width {initial} is outside bounds [{min}, {max}]")
            }
            Self::Config(error) => write!(f, "invalid split-pane config: {error}"),
        }
    }
}

impl std::error::Error for SplitLayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Config(error) = self {
            return Some(error);
        }
        None
    }
}

impl From<serde_json::Error> for SplitLayoutError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error)
    }
}
