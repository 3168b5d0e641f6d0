#![forbid(unsafe_code)]

//! `deev-web` drives the resizable editor/output split of the Deev web
//! editor screens.
//!
//! Design goals:
//! - **Host-driven input**: the embedding view pushes divider pointer-down and
//!   document pointer-move/up signals; nothing here touches the DOM.
//! - **Owned state**: one [`SplitResizeController`] per split pane, no global
//!   drag flag.
//! - **Fail quiet**: bad geometry and out-of-band samples keep the last good
//!   width instead of surfacing errors.
//!
//! This crate does not bind to `wasm-bindgen`; the host wires
//! [`MountedSplitPane`] to real listeners.

pub mod mount;
pub mod split_resize;

pub use deev_layout::{
    ClampPolicy, ContainerBounds, EditorMode, PaneWidthBounds, PaneWidthPercent, SplitLayoutError,
    SplitPaneConfig, SplitPaneLayout, SplitWidths,
};
pub use mount::{ListenerTarget, MountedSplitPane, PointerListener, SplitPaneHost};
pub use split_resize::{
    ContainerGeometry, CursorCommand, RESIZE_CURSOR, SplitResizeController, SplitResizeDispatch,
    SplitResizeIgnoredReason, SplitResizeLogEntry, SplitResizeLogOutcome, SplitResizePhase,
    SplitResizeState,
};
