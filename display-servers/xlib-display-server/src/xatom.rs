use std::ffi::CString;
use thicket_core::models::{WindowState, WindowType};
use x11_dl::xlib;

// Specifications can be found here:
// https://specifications.freedesktop.org/wm-spec/1.3/ar01s03.html

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct XAtom {
    pub WMState: xlib::Atom,
    pub NetActiveWindow: xlib::Atom,
    pub NetSupported: xlib::Atom,
    pub NetWMName: xlib::Atom,
    pub NetWMState: xlib::Atom,

    pub NetWMStateModal: xlib::Atom,
    pub NetWMStateSticky: xlib::Atom,
    pub NetWMStateMaximizedVert: xlib::Atom,
    pub NetWMStateMaximizedHorz: xlib::Atom,
    pub NetWMStateShaded: xlib::Atom,
    pub NetWMStateSkipTaskbar: xlib::Atom,
    pub NetWMStateSkipPager: xlib::Atom,
    pub NetWMStateHidden: xlib::Atom,
    pub NetWMStateFullscreen: xlib::Atom,
    pub NetWMStateAbove: xlib::Atom,
    pub NetWMStateBelow: xlib::Atom,
    pub NetWMStateDemandsAttention: xlib::Atom,

    pub NetWMWindowType: xlib::Atom,
    pub NetWMWindowTypeDesktop: xlib::Atom,
    pub NetWMWindowTypeDock: xlib::Atom,
    pub NetWMWindowTypeToolbar: xlib::Atom,
    pub NetWMWindowTypeMenu: xlib::Atom,
    pub NetWMWindowTypeUtility: xlib::Atom,
    pub NetWMWindowTypeSplash: xlib::Atom,
    pub NetWMWindowTypeDialog: xlib::Atom,

    pub NetSupportingWmCheck: xlib::Atom,
    pub NetClientList: xlib::Atom,
    pub NetDesktopViewport: xlib::Atom,
    pub NetNumberOfDesktops: xlib::Atom,
    pub NetCurrentDesktop: xlib::Atom,
    pub NetDesktopNames: xlib::Atom,

    pub UTF8String: xlib::Atom,
}

impl XAtom {
    pub fn net_supported(&self) -> Vec<xlib::Atom> {
        vec![
            self.NetActiveWindow,
            self.NetSupported,
            self.NetWMName,
            self.NetWMState,
            self.NetWMStateFullscreen,
            self.NetWMWindowType,
            self.NetWMWindowTypeDesktop,
            self.NetWMWindowTypeDock,
            self.NetWMWindowTypeToolbar,
            self.NetWMWindowTypeMenu,
            self.NetWMWindowTypeUtility,
            self.NetWMWindowTypeSplash,
            self.NetWMWindowTypeDialog,
            self.NetSupportingWmCheck,
            self.NetClientList,
            self.NetDesktopViewport,
            self.NetNumberOfDesktops,
            self.NetCurrentDesktop,
            self.NetDesktopNames,
        ]
    }

    pub fn get_name(&self, atom: xlib::Atom) -> &str {
        match atom {
            a if a == self.WMState => "WM_STATE",
            a if a == self.NetActiveWindow => "_NET_ACTIVE_WINDOW",
            a if a == self.NetSupported => "_NET_SUPPORTED",
            a if a == self.NetWMName => "_NET_WM_NAME",
            a if a == self.NetWMState => "_NET_WM_STATE",
            a if a == self.NetWMStateFullscreen => "_NET_WM_STATE_FULLSCREEN",
            a if a == self.NetWMWindowType => "_NET_WM_WINDOW_TYPE",
            a if a == self.NetClientList => "_NET_CLIENT_LIST",
            a if a == self.NetNumberOfDesktops => "_NET_NUMBER_OF_DESKTOPS",
            a if a == self.NetCurrentDesktop => "_NET_CURRENT_DESKTOP",
            a if a == self.NetDesktopNames => "_NET_DESKTOP_NAMES",
            _ => "(UNKNOWN)",
        }
    }

    /// The window state a `_NET_WM_STATE_*` atom stands for.
    pub fn window_state(&self, atom: xlib::Atom) -> Option<WindowState> {
        let state = match atom {
            a if a == self.NetWMStateModal => WindowState::Modal,
            a if a == self.NetWMStateSticky => WindowState::Sticky,
            a if a == self.NetWMStateMaximizedVert => WindowState::MaximizedVert,
            a if a == self.NetWMStateMaximizedHorz => WindowState::MaximizedHorz,
            a if a == self.NetWMStateShaded => WindowState::Shaded,
            a if a == self.NetWMStateSkipTaskbar => WindowState::SkipTaskbar,
            a if a == self.NetWMStateSkipPager => WindowState::SkipPager,
            a if a == self.NetWMStateHidden => WindowState::Hidden,
            a if a == self.NetWMStateFullscreen => WindowState::Fullscreen,
            a if a == self.NetWMStateAbove => WindowState::Above,
            a if a == self.NetWMStateBelow => WindowState::Below,
            a if a == self.NetWMStateDemandsAttention => WindowState::DemandsAttention,
            _ => return None,
        };
        Some(state)
    }

    /// The window type a `_NET_WM_WINDOW_TYPE_*` atom stands for.
    pub fn window_type(&self, atom: xlib::Atom) -> WindowType {
        match atom {
            a if a == self.NetWMWindowTypeDesktop => WindowType::Desktop,
            a if a == self.NetWMWindowTypeDock => WindowType::Dock,
            a if a == self.NetWMWindowTypeToolbar => WindowType::Toolbar,
            a if a == self.NetWMWindowTypeMenu => WindowType::Menu,
            a if a == self.NetWMWindowTypeUtility => WindowType::Utility,
            a if a == self.NetWMWindowTypeSplash => WindowType::Splash,
            a if a == self.NetWMWindowTypeDialog => WindowType::Dialog,
            _ => WindowType::Normal,
        }
    }

    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        Self {
            WMState: from(xlib, dpy, "WM_STATE"),
            NetActiveWindow: from(xlib, dpy, "_NET_ACTIVE_WINDOW"),
            NetSupported: from(xlib, dpy, "_NET_SUPPORTED"),
            NetWMName: from(xlib, dpy, "_NET_WM_NAME"),

            NetWMState: from(xlib, dpy, "_NET_WM_STATE"),
            NetWMStateModal: from(xlib, dpy, "_NET_WM_STATE_MODAL"),
            NetWMStateSticky: from(xlib, dpy, "_NET_WM_STATE_STICKY"),
            NetWMStateMaximizedVert: from(xlib, dpy, "_NET_WM_STATE_MAXIMIZED_VERT"),
            NetWMStateMaximizedHorz: from(xlib, dpy, "_NET_WM_STATE_MAXIMIZED_HORZ"),
            NetWMStateShaded: from(xlib, dpy, "_NET_WM_STATE_SHADED"),
            NetWMStateSkipTaskbar: from(xlib, dpy, "_NET_WM_STATE_SKIP_TASKBAR"),
            NetWMStateSkipPager: from(xlib, dpy, "_NET_WM_STATE_SKIP_PAGER"),
            NetWMStateHidden: from(xlib, dpy, "_NET_WM_STATE_HIDDEN"),
            NetWMStateFullscreen: from(xlib, dpy, "_NET_WM_STATE_FULLSCREEN"),
            NetWMStateAbove: from(xlib, dpy, "_NET_WM_STATE_ABOVE"),
            NetWMStateBelow: from(xlib, dpy, "_NET_WM_STATE_BELOW"),
            NetWMStateDemandsAttention: from(xlib, dpy, "_NET_WM_STATE_DEMANDS_ATTENTION"),

            NetWMWindowType: from(xlib, dpy, "_NET_WM_WINDOW_TYPE"),
            NetWMWindowTypeDesktop: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DESKTOP"),
            NetWMWindowTypeDock: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DOCK"),
            NetWMWindowTypeToolbar: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_TOOLBAR"),
            NetWMWindowTypeMenu: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_MENU"),
            NetWMWindowTypeUtility: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_UTILITY"),
            NetWMWindowTypeSplash: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_SPLASH"),
            NetWMWindowTypeDialog: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DIALOG"),

            NetSupportingWmCheck: from(xlib, dpy, "_NET_SUPPORTING_WM_CHECK"),
            NetClientList: from(xlib, dpy, "_NET_CLIENT_LIST"),
            NetDesktopViewport: from(xlib, dpy, "_NET_DESKTOP_VIEWPORT"),
            NetNumberOfDesktops: from(xlib, dpy, "_NET_NUMBER_OF_DESKTOPS"),
            NetCurrentDesktop: from(xlib, dpy, "_NET_CURRENT_DESKTOP"),
            NetDesktopNames: from(xlib, dpy, "_NET_DESKTOP_NAMES"),

            UTF8String: from(xlib, dpy, "UTF8_STRING"),
        }
    }
}

fn from(xlib: &xlib::Xlib, dpy: *mut xlib::Display, s: &str) -> xlib::Atom {
    let Ok(name) = CString::new(s) else {
        return 0;
    };
    unsafe { (xlib.XInternAtom)(dpy, name.as_ptr(), xlib::False) }
}

#[cfg(test)]
impl XAtom {
    /// Distinct atoms without a server connection.
    pub fn numbered() -> Self {
        Self {
            WMState: 100,
            NetActiveWindow: 101,
            NetSupported: 102,
            NetWMName: 103,
            NetWMState: 104,
            NetWMStateModal: 105,
            NetWMStateSticky: 106,
            NetWMStateMaximizedVert: 107,
            NetWMStateMaximizedHorz: 108,
            NetWMStateShaded: 109,
            NetWMStateSkipTaskbar: 110,
            NetWMStateSkipPager: 111,
            NetWMStateHidden: 112,
            NetWMStateFullscreen: 113,
            NetWMStateAbove: 114,
            NetWMStateBelow: 115,
            NetWMStateDemandsAttention: 116,
            NetWMWindowType: 117,
            NetWMWindowTypeDesktop: 118,
            NetWMWindowTypeDock: 119,
            NetWMWindowTypeToolbar: 120,
            NetWMWindowTypeMenu: 121,
            NetWMWindowTypeUtility: 122,
            NetWMWindowTypeSplash: 123,
            NetWMWindowTypeDialog: 124,
            NetSupportingWmCheck: 125,
            NetClientList: 126,
            NetDesktopViewport: 127,
            NetNumberOfDesktops: 128,
            NetCurrentDesktop: 129,
            NetDesktopNames: 130,
            UTF8String: 131,
        }
    }
}
