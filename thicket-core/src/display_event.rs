use crate::models::{
    Handle, Screen, StateAction, WindowChanges, WindowHandle, WindowState, WindowType, Xyhw,
};

/// Notifications from the display server, already translated by the backend.
#[derive(Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    ScreenCreate(Screen<H>),
    MapRequest(MapRequest<H>),
    DestroyNotify(WindowHandle<H>),
    UnmapNotify {
        /// The window the notification was reported on.
        event: WindowHandle<H>,
        /// The window that was unmapped.
        window: WindowHandle<H>,
    },
    ClientMessage(ClientMessage<H>),
    ConfigureRequest(ConfigureRequest<H>),
    ButtonPress(WindowHandle<H>),
    /// A protocol event the backend does not translate, by its raw event code.
    Other(u8),
}

/// A window asking to be shown, with whatever the server could tell about it.
#[derive(Debug, Clone)]
pub struct MapRequest<H: Handle> {
    pub window: WindowHandle<H>,
    /// `None` when the attributes could not be queried.
    pub attributes: Option<WindowAttributes>,
    /// `None` when the geometry could not be queried.
    pub geometry: Option<Xyhw>,
    pub hints: WindowHints<H>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowAttributes {
    pub override_redirect: bool,
}

/// Window properties consulted by the rule resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowHints<H: Handle> {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub window_type: WindowType,
    pub transient_for: Option<WindowHandle<H>>,
    /// Minimum size equals maximum size.
    pub fixed_size: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigureRequest<H: Handle> {
    pub window: WindowHandle<H>,
    pub changes: WindowChanges<H>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClientMessage<H: Handle> {
    pub window: WindowHandle<H>,
    pub kind: ClientMessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMessageKind {
    /// `_NET_WM_STATE`: a message may carry two unrelated states.
    WmState {
        action: StateAction,
        first: Option<WindowState>,
        second: Option<WindowState>,
    },
    /// `_NET_ACTIVE_WINDOW`
    ActiveWindow,
    /// Any other message type, by its raw atom.
    Unsupported(u64),
}
