#![forbid(unsafe_code)]

//! Mount-scoped listener registration for one split pane.
//!
//! [`MountedSplitPane`] registers the divider and document listeners when it
//! is created and removes them when it is dropped or unmounted, ending any
//! active gesture first so the document cursor is never left in `col-resize`.

use deev_layout::SplitWidths;

use crate::split_resize::{
    ContainerGeometry, CursorCommand, SplitResizeController, SplitResizeDispatch,
};

/// Element a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Divider,
    Document,
}

/// Pointer listeners a split pane needs while mounted.
///
/// Move and release are document-wide so a fast drag survives leaving the
/// divider's hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerListener {
    DividerPointerDown,
    DocumentPointerMove,
    DocumentPointerUp,
}

impl PointerListener {
    pub const ALL: [Self; 3] = [
        Self::DividerPointerDown,
        Self::DocumentPointerMove,
        Self::DocumentPointerUp,
    ];

    #[must_use]
    pub const fn target(self) -> ListenerTarget {
        match self {
            Self::DividerPointerDown => ListenerTarget::Divider,
            Self::DocumentPointerMove | Self::DocumentPointerUp => ListenerTarget::Document,
        }
    }

    /// DOM event name the host should bind.
    #[must_use]
    pub const fn dom_event(self) -> &'static str {
        match self {
            Self::DividerPointerDown => "mousedown",
            Self::DocumentPointerMove => "mousemove",
            Self::DocumentPointerUp => "mouseup",
        }
    }
}

/// Embedding view hosting a split pane.
///
/// Geometry comes from the live container element; cursor and render calls
/// are the side effects of controller dispatches.
pub trait SplitPaneHost: ContainerGeometry {
    fn add_listener(&mut self, listener: PointerListener);
    fn remove_listener(&mut self, listener: PointerListener);
    fn apply_cursor(&mut self, command: CursorCommand);
    /// Primary pane gets `widths.primary_percent`, secondary the rest.
    fn render(&mut self, widths: SplitWidths);
}

/// A split pane between mount and unmount.
pub struct MountedSplitPane<H: SplitPaneHost> {
    // Taken only by `unmount`, which consumes the guard.
    host: Option<H>,
    controller: SplitResizeController,
}

impl<H: SplitPaneHost> MountedSplitPane<H> {
    /// Register listeners on `host` and render the controller's current widths.
    pub fn mount(mut host: H, controller: SplitResizeController) -> Self {
        for listener in PointerListener::ALL {
            host.add_listener(listener);
        }
        host.render(controller.widths());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            listeners = PointerListener::ALL.len(),
            width = controller.width().value(),
            "split pane mounted"
        );
        Self {
            host: Some(host),
            controller,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &SplitResizeController {
        &self.controller
    }

    /// Divider `mousedown`.
    pub fn pointer_down(&mut self) -> SplitResizeDispatch {
        let dispatch = self.controller.on_gesture_start();
        self.forward(&dispatch);
        dispatch
    }

    /// Document `mousemove` at horizontal client coordinate `pointer_x`.
    pub fn pointer_move(&mut self, pointer_x: f64) -> SplitResizeDispatch {
        let dispatch = self.controller.on_pointer_move_in(pointer_x, &self.host);
        self.forward(&dispatch);
        dispatch
    }

    /// Document `mouseup`.
    pub fn pointer_up(&mut self) -> SplitResizeDispatch {
        let dispatch = self.controller.on_gesture_end();
        self.forward(&dispatch);
        dispatch
    }

    /// Tear down listeners and hand the host back.
    pub fn unmount(mut self) -> H {
        self.teardown();
        let Some(host) = self.host.take() else {
            unreachable!("split pane host is present until unmount");
        };
        host
    }

    fn forward(&mut self, dispatch: &SplitResizeDispatch) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        if let Some(command) = dispatch.cursor_command {
            host.apply_cursor(command);
        }
        if let Some(widths) = dispatch.widths {
            host.render(widths);
        }
    }

    fn teardown(&mut self) {
        let dispatch = self.controller.force_idle();
        self.forward(&dispatch);
        let Some(host) = self.host.as_mut() else {
            return;
        };
        for listener in PointerListener::ALL {
            host.remove_listener(listener);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            listeners = PointerListener::ALL.len(),
            width = self.controller.width().value(),
            "split pane unmounted"
        );
    }
}

impl<H: SplitPaneHost> Drop for MountedSplitPane<H> {
    fn drop(&mut self) {
        if self.host.is_some() {
            self.teardown();
        }
    }
}

impl<H: SplitPaneHost + std::fmt::Debug> std::fmt::Debug for MountedSplitPane<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedSplitPane")
            .field("host", &self.host)
            .field("controller", &self.controller)
            .finish()
    }
}
