use crate::models::{DesktopId, Handle, WindowChanges, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// These are responses from the Window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Make a window visible.
    #[serde(bound = "")]
    MapWindow(WindowHandle<H>),

    /// Point the server's input focus at a window.
    #[serde(bound = "")]
    SetInputFocus(WindowHandle<H>),

    /// Forward a configure request, only the fields that are `Some`.
    #[serde(bound = "")]
    ConfigureWindow(WindowHandle<H>, WindowChanges<H>),

    /// Place a window where the layout wants it.
    #[serde(bound = "")]
    MoveResizeWindow(WindowHandle<H>, Xyhw),

    /// Raises a given window.
    #[serde(bound = "")]
    RaiseWindow(WindowHandle<H>),

    /// Move a window out of sight without unmapping it.
    #[serde(bound = "")]
    HideWindow(WindowHandle<H>),

    /// Mirror the fullscreen flag into the window's `_NET_WM_STATE`.
    #[serde(bound = "")]
    SetFullscreenState(WindowHandle<H>, bool),

    /// Publish `_NET_ACTIVE_WINDOW`.
    #[serde(bound = "")]
    SetActiveWindow(Option<WindowHandle<H>>),

    /// Publish `_NET_CURRENT_DESKTOP`.
    SetCurrentDesktop(DesktopId),

    /// Publish `_NET_CLIENT_LIST`.
    #[serde(bound = "")]
    UpdateClientList(Vec<WindowHandle<H>>),
}
