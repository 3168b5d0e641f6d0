//! Per-screen split presets and JSON configuration.
//!
//! Each editor screen embeds one split pane with its own band and starting
//! width:
//!
//! | mode       | min | max | initial |
//! |------------|-----|-----|---------|
//! | `compiler` | 30  | 90  | 70      |
//! | `web`      | 20  | 80  | 50      |
//! | `query`    | 30  | 70  | 50      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SplitLayoutError;
use crate::split::{ClampPolicy, PaneWidthBounds, PaneWidthPercent, SplitWidths};

/// Editor screen hosting a split pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Code editor beside the terminal output.
    Compiler,
    /// HTML/CSS/JS editor beside the live preview.
    Web,
    /// SQL editor beside the result table.
    Query,
}

impl EditorMode {
    pub const ALL: [Self; 3] = [Self::Compiler, Self::Web, Self::Query];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compiler => "compiler",
            Self::Web => "web",
            Self::Query => "query",
        }
    }

    /// Allowed band for the editor pane on this screen.
    #[must_use]
    pub const fn bounds(self) -> PaneWidthBounds {
        match self {
            Self::Compiler => PaneWidthBounds::from_trusted(30.0, 90.0),
            Self::Web => PaneWidthBounds::from_trusted(20.0, 80.0),
            Self::Query => PaneWidthBounds::from_trusted(30.0, 70.0),
        }
    }

    #[must_use]
    pub const fn initial_percent(self) -> f64 {
        match self {
            Self::Compiler => 70.0,
            Self::Web | Self::Query => 50.0,
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized editor mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEditorMode(pub String);

impl fmt::Display for UnknownEditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown editor mode `{}`", self.0)
    }
}

impl std::error::Error for UnknownEditorMode {}

impl FromStr for EditorMode {
    type Err = UnknownEditorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEditorMode(s.to_owned()))
    }
}

/// Unvalidated split-pane settings, as supplied by the embedding view.
///
/// Missing JSON fields fall back to the compiler preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitPaneConfig {
    pub min_percent: f64,
    pub max_percent: f64,
    pub initial_percent: f64,
    pub policy: ClampPolicy,
}

impl Default for SplitPaneConfig {
    fn default() -> Self {
        Self::for_mode(EditorMode::Compiler)
    }
}

impl SplitPaneConfig {
    #[must_use]
    pub const fn for_mode(mode: EditorMode) -> Self {
        let bounds = mode.bounds();
        Self {
            min_percent: bounds.min(),
            max_percent: bounds.max(),
            initial_percent: mode.initial_percent(),
            policy: ClampPolicy::RejectOutOfBand,
        }
    }

    /// Builder-style policy override.
    #[must_use]
    pub const fn with_policy(mut self, policy: ClampPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Decode a config from JSON. Values are not checked until [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, SplitLayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check bounds and starting width.
    pub fn validate(&self) -> Result<SplitPaneLayout, SplitLayoutError> {
        let bounds = PaneWidthBounds::new(self.min_percent, self.max_percent)?;
        let initial =
            bounds
                .accept(self.initial_percent)
                .ok_or(SplitLayoutError::InitialOutOfBounds {
                    initial: self.initial_percent,
                    min: bounds.min(),
                    max: bounds.max(),
                })?;
        Ok(SplitPaneLayout {
            bounds,
            initial,
            policy: self.policy,
        })
    }
}

/// Validated split-pane settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPaneLayout {
    pub bounds: PaneWidthBounds,
    pub initial: PaneWidthPercent,
    pub policy: ClampPolicy,
}

impl SplitPaneLayout {
    /// Preset layout; presets are valid by construction.
    #[must_use]
    pub fn for_mode(mode: EditorMode) -> Self {
        let bounds = mode.bounds();
        Self {
            bounds,
            initial: bounds.saturate(mode.initial_percent()),
            policy: ClampPolicy::RejectOutOfBand,
        }
    }

    #[must_use]
    pub fn initial_widths(&self) -> SplitWidths {
        SplitWidths::from_percent(self.initial)
    }
}
