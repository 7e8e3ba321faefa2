use serde::{Deserialize, Serialize};

/// The `_NET_WM_WINDOW_TYPE` of a window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    #[default]
    Normal,
}
