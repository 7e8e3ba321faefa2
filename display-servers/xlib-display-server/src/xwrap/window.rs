//! Xlib calls related to a window.
use super::NORMAL_STATE;
use crate::{XWrap, XlibWindowHandle};
use std::os::raw::{c_long, c_ulong};
use thicket_core::models::{StackMode, WindowChanges, WindowHandle, Xyhw};
use x11_dl::xlib;

impl XWrap {
    /// Shows a window we now manage.
    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn setup_managed_window(&self, window: xlib::Window) {
        self.subscribe_to_window_events(window);
        // Make sure there is at least an empty list of _NET_WM_STATE.
        let states = self.get_window_states_atoms(window);
        self.set_window_states_atoms(window, &states);
        // Set WM_STATE to normal state to allow window sharing.
        self.set_wm_states(window, &[NORMAL_STATE]);
        unsafe { (self.xlib.XMapWindow)(self.display, window) };
    }

    /// Focuses a window.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn focus(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                window,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
        }
    }

    /// Applies the fields present in a configure request.
    pub fn configure_window(&self, window: xlib::Window, changes: &WindowChanges<XlibWindowHandle>) {
        let (window_changes, unlock) = into_xwindow_changes(changes);
        self.set_window_config(window, window_changes, unlock);
    }

    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, xyhw: Xyhw) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(self.display, window, xyhw.x, xyhw.y, xyhw.w, xyhw.h);
        }
    }

    /// Moves a window off screen, keeping it mapped.
    // `XMoveWindow`: https://tronche.com/gui/x/xlib/window/XMoveWindow.html
    pub fn hide_window(&self, window: xlib::Window) {
        let Ok(attrs) = self.get_window_attrs(window) else {
            return;
        };
        let x = -2 * (attrs.width + 2 * attrs.border_width);
        unsafe { (self.xlib.XMoveWindow)(self.display, window, x, attrs.y) };
    }

    /// Raise a window.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn move_to_top(&self, handle: &WindowHandle<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(window)) = handle;
        unsafe {
            (self.xlib.XRaiseWindow)(self.display, *window);
        }
    }

    /// Change a windows attributes.
    // `XChangeWindowAttributes`: https://tronche.com/gui/x/xlib/window/XChangeWindowAttributes.html
    pub fn change_window_attributes(
        &self,
        window: xlib::Window,
        mask: c_ulong,
        mut attrs: xlib::XSetWindowAttributes,
    ) {
        unsafe {
            (self.xlib.XChangeWindowAttributes)(self.display, window, mask, &mut attrs);
        }
    }

    /// Subscribe to an event of a window.
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn subscribe_to_event(&self, window: xlib::Window, mask: c_long) {
        unsafe { (self.xlib.XSelectInput)(self.display, window, mask) };
    }

    /// Subscribe to the wanted events of a window.
    /// Unmaps and destroys are then also reported on the window itself.
    pub fn subscribe_to_window_events(&self, window: xlib::Window) {
        let mask = xlib::StructureNotifyMask | xlib::PropertyChangeMask;
        self.subscribe_to_event(window, mask);
    }
}

/// Build the Xlib request for the present fields, with the value mask that unlocks them.
pub fn into_xwindow_changes(
    changes: &WindowChanges<XlibWindowHandle>,
) -> (xlib::XWindowChanges, u32) {
    let mut unlock: u32 = 0;
    let mut window_changes: xlib::XWindowChanges = unsafe { std::mem::zeroed() };
    if let Some(x) = changes.x {
        window_changes.x = x;
        unlock |= u32::from(xlib::CWX);
    }
    if let Some(y) = changes.y {
        window_changes.y = y;
        unlock |= u32::from(xlib::CWY);
    }
    if let Some(w) = changes.width {
        window_changes.width = w as i32;
        unlock |= u32::from(xlib::CWWidth);
    }
    if let Some(h) = changes.height {
        window_changes.height = h as i32;
        unlock |= u32::from(xlib::CWHeight);
    }
    if let Some(border) = changes.border_width {
        window_changes.border_width = border as i32;
        unlock |= u32::from(xlib::CWBorderWidth);
    }
    if let Some(WindowHandle(XlibWindowHandle(sibling))) = changes.sibling {
        window_changes.sibling = sibling;
        unlock |= u32::from(xlib::CWSibling);
    }
    if let Some(mode) = changes.stack_mode {
        window_changes.stack_mode = match mode {
            StackMode::Above => xlib::Above,
            StackMode::Below => xlib::Below,
            StackMode::TopIf => xlib::TopIf,
            StackMode::BottomIf => xlib::BottomIf,
            StackMode::Opposite => xlib::Opposite,
        };
        unlock |= u32::from(xlib::CWStackMode);
    }
    (window_changes, unlock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_present_fields_should_be_unlocked() {
        let changes = WindowChanges {
            x: Some(4),
            height: Some(300),
            ..WindowChanges::default()
        };
        let (window_changes, unlock) = into_xwindow_changes(&changes);
        assert_eq!(unlock, u32::from(xlib::CWX | xlib::CWHeight));
        assert_eq!(window_changes.x, 4);
        assert_eq!(window_changes.height, 300);
    }

    #[test]
    fn stacking_should_keep_sibling_and_mode() {
        let changes = WindowChanges {
            sibling: Some(WindowHandle(XlibWindowHandle(42))),
            stack_mode: Some(StackMode::BottomIf),
            border_width: Some(2),
            ..WindowChanges::default()
        };
        let (window_changes, unlock) = into_xwindow_changes(&changes);
        assert_eq!(
            unlock,
            u32::from(xlib::CWSibling | xlib::CWStackMode | xlib::CWBorderWidth)
        );
        assert_eq!(window_changes.sibling, 42);
        assert_eq!(window_changes.stack_mode, xlib::BottomIf);
        assert_eq!(window_changes.border_width, 2);
    }

    #[test]
    fn an_empty_request_should_unlock_nothing() {
        let (_, unlock) = into_xwindow_changes(&WindowChanges::default());
        assert_eq!(unlock, 0);
    }
}
