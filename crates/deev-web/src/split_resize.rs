#![forbid(unsafe_code)]

//! Host-driven split-pane resize controller.
//!
//! Turns divider pointer-down, document pointer-move and document pointer-up
//! into a bounded primary-pane width while:
//! - reading container geometry once per move sample (never cached),
//! - absorbing unusable geometry and out-of-band samples as no-ops, and
//! - emitting explicit cursor commands so the host can toggle the global
//!   `col-resize` affordance for the length of a gesture.
//!
//! ```text
//! Idle --gesture start--> Dragging --gesture end--> Idle
//!                          |    ^
//!                          +----+ pointer move
//! ```

use deev_layout::{
    ClampPolicy, ContainerBounds, EditorMode, PaneWidthBounds, PaneWidthPercent, SplitLayoutError,
    SplitPaneConfig, SplitPaneLayout, SplitWidths,
};

/// Document cursor applied while a gesture is in progress.
pub const RESIZE_CURSOR: &str = "col-resize";

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitResizeState {
    #[default]
    Idle,
    Dragging,
}

/// Host command toggling the document-level cursor affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    ApplyResizeCursor,
    RestoreCursor,
}

impl CursorCommand {
    /// Value to assign to the document body's `cursor` style.
    #[must_use]
    pub const fn css_cursor(self) -> &'static str {
        match self {
            Self::ApplyResizeCursor => RESIZE_CURSOR,
            Self::RestoreCursor => "",
        }
    }
}

/// Source of live container geometry, read once per move sample.
pub trait ContainerGeometry {
    /// Current container bounds, or `None` when the container is not laid out.
    fn container_bounds(&self) -> Option<ContainerBounds>;
}

impl ContainerGeometry for ContainerBounds {
    fn container_bounds(&self) -> Option<ContainerBounds> {
        Some(*self)
    }
}

/// Geometry that may not exist yet, e.g. a host that has not laid out.
impl<G: ContainerGeometry> ContainerGeometry for Option<G> {
    fn container_bounds(&self) -> Option<ContainerBounds> {
        self.as_ref().and_then(G::container_bounds)
    }
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitResizePhase {
    GestureStart,
    PointerMove,
    GestureEnd,
    ForceIdle,
}

/// Why a signal produced no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitResizeIgnoredReason {
    NotDragging,
    AlreadyDragging,
    ContainerUnavailable,
    OutOfBand,
    Unchanged,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitResizeLogOutcome {
    /// A new width was accepted and should be rendered.
    Applied,
    /// Drag state toggled without a width change.
    StateUpdated,
    Ignored(SplitResizeIgnoredReason),
}

/// Structured record of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitResizeLogEntry {
    pub phase: SplitResizePhase,
    pub sequence: u64,
    pub pointer_x: Option<f64>,
    pub raw_percent: Option<f64>,
    pub outcome: SplitResizeLogOutcome,
}

/// Result of one lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitResizeDispatch {
    /// State after the signal was handled.
    pub state: SplitResizeState,
    /// New pane widths to render, if the width changed.
    pub widths: Option<SplitWidths>,
    pub cursor_command: Option<CursorCommand>,
    pub log: SplitResizeLogEntry,
}

impl SplitResizeDispatch {
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.log.outcome, SplitResizeLogOutcome::Ignored(_))
    }
}

/// Owned resize controller for one split-pane instance.
#[derive(Debug, Clone)]
pub struct SplitResizeController {
    layout: SplitPaneLayout,
    state: SplitResizeState,
    width: PaneWidthPercent,
    next_sequence: u64,
}

impl SplitResizeController {
    /// Construct an idle controller starting at the layout's initial width.
    #[must_use]
    pub fn new(layout: SplitPaneLayout) -> Self {
        Self {
            layout,
            state: SplitResizeState::Idle,
            width: layout.initial,
            next_sequence: 1,
        }
    }

    /// Validate `config` and construct a controller from it.
    pub fn from_config(config: &SplitPaneConfig) -> Result<Self, SplitLayoutError> {
        Ok(Self::new(config.validate()?))
    }

    /// Controller using an editor screen's preset band and starting width.
    #[must_use]
    pub fn for_mode(mode: EditorMode) -> Self {
        Self::new(SplitPaneLayout::for_mode(mode))
    }

    #[must_use]
    pub const fn state(&self) -> SplitResizeState {
        self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SplitResizeState::Dragging)
    }

    /// Current primary-pane width.
    #[must_use]
    pub const fn width(&self) -> PaneWidthPercent {
        self.width
    }

    #[must_use]
    pub fn widths(&self) -> SplitWidths {
        SplitWidths::from_percent(self.width)
    }

    #[must_use]
    pub const fn bounds(&self) -> PaneWidthBounds {
        self.layout.bounds
    }

    #[must_use]
    pub const fn policy(&self) -> ClampPolicy {
        self.layout.policy
    }

    /// Pointer pressed on the divider.
    pub fn on_gesture_start(&mut self) -> SplitResizeDispatch {
        if self.is_dragging() {
            return self.ignored(
                SplitResizePhase::GestureStart,
                SplitResizeIgnoredReason::AlreadyDragging,
                None,
                None,
            );
        }
        self.state = SplitResizeState::Dragging;
        self.toggled(
            SplitResizePhase::GestureStart,
            CursorCommand::ApplyResizeCursor,
        )
    }

    /// Pointer moved anywhere in the document, with the container's current bounds.
    pub fn on_pointer_move(
        &mut self,
        pointer_x: f64,
        container: Option<ContainerBounds>,
    ) -> SplitResizeDispatch {
        if !self.is_dragging() {
            return self.ignored(
                SplitResizePhase::PointerMove,
                SplitResizeIgnoredReason::NotDragging,
                Some(pointer_x),
                None,
            );
        }
        let Some(raw) = container.and_then(|bounds| bounds.percent_at(pointer_x)) else {
            return self.ignored(
                SplitResizePhase::PointerMove,
                SplitResizeIgnoredReason::ContainerUnavailable,
                Some(pointer_x),
                None,
            );
        };
        let Some(width) = self.layout.policy.resolve(self.layout.bounds, raw) else {
            return self.ignored(
                SplitResizePhase::PointerMove,
                SplitResizeIgnoredReason::OutOfBand,
                Some(pointer_x),
                Some(raw),
            );
        };
        if width == self.width {
            return self.ignored(
                SplitResizePhase::PointerMove,
                SplitResizeIgnoredReason::Unchanged,
                Some(pointer_x),
                Some(raw),
            );
        }

        self.width = width;
        let dispatch = SplitResizeDispatch {
            state: self.state,
            widths: Some(SplitWidths::from_percent(width)),
            cursor_command: None,
            log: SplitResizeLogEntry {
                phase: SplitResizePhase::PointerMove,
                sequence: self.next_sequence(),
                pointer_x: Some(pointer_x),
                raw_percent: Some(raw),
                outcome: SplitResizeLogOutcome::Applied,
            },
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            sequence = dispatch.log.sequence,
            pointer_x,
            raw,
            width = width.value(),
            "split width applied"
        );
        dispatch
    }

    /// Like [`Self::on_pointer_move`], reading geometry from `geometry` only
    /// when a gesture is active.
    pub fn on_pointer_move_in<G>(&mut self, pointer_x: f64, geometry: &G) -> SplitResizeDispatch
    where
        G: ContainerGeometry + ?Sized,
    {
        let container = if self.is_dragging() {
            geometry.container_bounds()
        } else {
            None
        };
        self.on_pointer_move(pointer_x, container)
    }

    /// Pointer released anywhere in the document.
    pub fn on_gesture_end(&mut self) -> SplitResizeDispatch {
        self.end(SplitResizePhase::GestureEnd)
    }

    /// End any active gesture regardless of input, e.g. when the pane unmounts.
    pub fn force_idle(&mut self) -> SplitResizeDispatch {
        self.end(SplitResizePhase::ForceIdle)
    }

    fn end(&mut self, phase: SplitResizePhase) -> SplitResizeDispatch {
        if !self.is_dragging() {
            return self.ignored(phase, SplitResizeIgnoredReason::NotDragging, None, None);
        }
        self.state = SplitResizeState::Idle;
        self.toggled(phase, CursorCommand::RestoreCursor)
    }

    fn toggled(&mut self, phase: SplitResizePhase, command: CursorCommand) -> SplitResizeDispatch {
        let dispatch = SplitResizeDispatch {
            state: self.state,
            widths: None,
            cursor_command: Some(command),
            log: SplitResizeLogEntry {
                phase,
                sequence: self.next_sequence(),
                pointer_x: None,
                raw_percent: None,
                outcome: SplitResizeLogOutcome::StateUpdated,
            },
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sequence = dispatch.log.sequence,
            phase = ?phase,
            state = ?self.state,
            width = self.width.value(),
            "split gesture state changed"
        );
        dispatch
    }

    fn ignored(
        &mut self,
        phase: SplitResizePhase,
        reason: SplitResizeIgnoredReason,
        pointer_x: Option<f64>,
        raw_percent: Option<f64>,
    ) -> SplitResizeDispatch {
        let dispatch = SplitResizeDispatch {
            state: self.state,
            widths: None,
            cursor_command: None,
            log: SplitResizeLogEntry {
                phase,
                sequence: self.next_sequence(),
                pointer_x,
                raw_percent,
                outcome: SplitResizeLogOutcome::Ignored(reason),
            },
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            sequence = dispatch.log.sequence,
            phase = ?phase,
            reason = ?reason,
            raw = ?raw_percent,
            "split signal ignored"
        );
        dispatch
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}
