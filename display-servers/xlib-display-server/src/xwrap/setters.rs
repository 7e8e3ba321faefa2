//! `XWrap` setters.
use crate::{XWrap, XlibWindowHandle};
use std::ffi::CString;
use std::os::raw::{c_long, c_ulong};
use thicket_core::models::{DesktopId, WindowHandle};
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Replaces a window property.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn replace_property_long(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
        data: &[c_long],
    ) {
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                r#type,
                32,
                xlib::PropModeReplace,
                data.as_ptr().cast::<u8>(),
                data.len() as i32,
            );
        }
    }

    /// Sets `_NET_CLIENT_LIST` to the managed windows, in order.
    pub fn set_client_list(&self, windows: &[WindowHandle<XlibWindowHandle>]) {
        let list: Vec<c_long> = windows
            .iter()
            .map(|WindowHandle(XlibWindowHandle(w))| *w as c_long)
            .collect();
        self.replace_property_long(self.root, self.atoms.NetClientList, xlib::XA_WINDOW, &list);
    }

    /// Sets `_NET_ACTIVE_WINDOW`, `None` when no window is active.
    pub fn set_active_window(&self, window: Option<WindowHandle<XlibWindowHandle>>) {
        let value = window.map_or(0, |WindowHandle(XlibWindowHandle(w))| w as c_long);
        self.replace_property_long(
            self.root,
            self.atoms.NetActiveWindow,
            xlib::XA_WINDOW,
            &[value],
        );
    }

    /// Sets the current desktop.
    pub fn set_current_desktop(&self, desktop: DesktopId) {
        self.set_desktop_prop(&[desktop as u32], self.atoms.NetCurrentDesktop);
    }

    /// Sets a desktop property.
    // We allow the lossless cast here so that 32 bit systems may work.
    #[allow(clippy::cast_lossless)]
    pub fn set_desktop_prop(&self, data: &[u32], atom: c_ulong) {
        let x_data: Vec<c_long> = data.iter().map(|x| *x as c_long).collect();
        self.replace_property_long(self.root, atom, xlib::XA_CARDINAL, &x_data);
    }

    /// Sets a desktop property with type `c_ulong`.
    pub fn set_desktop_prop_c_ulong(&self, value: c_ulong, atom: c_ulong, r#type: c_ulong) {
        let data = vec![value as c_long];
        self.replace_property_long(self.root, atom, r#type, &data);
    }

    /// Sets a desktop property with type string.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn set_desktop_prop_string(&self, value: &str, atom: c_ulong, encoding: xlib::Atom) {
        if let Ok(cstring) = CString::new(value) {
            unsafe {
                (self.xlib.XChangeProperty)(
                    self.display,
                    self.root,
                    atom,
                    encoding,
                    8,
                    xlib::PropModeReplace,
                    cstring.as_ptr().cast::<u8>(),
                    value.len() as i32,
                );
            }
        }
    }

    /// Adds or removes a state atom from the `_NET_WM_STATE` of a window.
    pub fn set_state(
        &self,
        handle: WindowHandle<XlibWindowHandle>,
        toggle_to: bool,
        atom: xlib::Atom,
    ) {
        let WindowHandle(XlibWindowHandle(h)) = handle;
        let mut states = self.get_window_states_atoms(h);
        if toggle_to {
            if states.contains(&atom) {
                return;
            }
            states.push(atom);
        } else {
            let Some(index) = states.iter().position(|s| s == &atom) else {
                return;
            };
            states.remove(index);
        }
        self.set_window_states_atoms(h, &states);
    }

    /// Sets the atom states of a window.
    pub fn set_window_states_atoms(&self, window: xlib::Window, states: &[xlib::Atom]) {
        let data: Vec<c_long> = states.iter().map(|x| *x as c_long).collect();
        self.replace_property_long(window, self.atoms.NetWMState, xlib::XA_ATOM, &data);
    }

    /// Sets a windows configuration.
    // `XConfigureWindow`: https://tronche.com/gui/x/xlib/window/XConfigureWindow.html
    pub fn set_window_config(
        &self,
        window: xlib::Window,
        mut window_changes: xlib::XWindowChanges,
        unlock: u32,
    ) {
        unsafe { (self.xlib.XConfigureWindow)(self.display, window, unlock, &mut window_changes) };
    }

    /// Sets the `WM_STATE` of a window.
    pub fn set_wm_states(&self, window: xlib::Window, states: &[c_long]) {
        self.replace_property_long(window, self.atoms.WMState, self.atoms.WMState, states);
    }
}
