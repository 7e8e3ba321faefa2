//! `XWrap` getters.
use super::{XlibError, MAX_PROPERTY_VALUE_LEN};
use crate::{XWrap, XlibWindowHandle};
use std::ffi::CStr;
use std::os::raw::{c_int, c_long, c_uchar, c_uint, c_ulong};
use std::slice;
use thicket_core::models::{Screen, WindowHandle, WindowType, Xyhw};
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Returns the handle of the default root.
    #[must_use]
    pub const fn get_default_root_handle(&self) -> WindowHandle<XlibWindowHandle> {
        WindowHandle(XlibWindowHandle(self.root))
    }

    /// Returns the next `Xevent` of the xserver.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XNextEvent)(self.display, &mut event);
            event
        }
    }

    /// Returns the screen covered by the root window.
    /// # Errors
    ///
    /// Will error if the attributes of the root cannot be queried.
    pub fn get_screen(&self) -> Result<Screen<XlibWindowHandle>, XlibError> {
        let attrs = self
            .get_window_attrs(self.root)
            .map_err(|_| XlibError::RootWindowNotFound)?;
        let xyhw = Xyhw::new(attrs.x, attrs.y, attrs.width as u32, attrs.height as u32);
        Ok(Screen::new(self.get_default_root_handle(), xyhw))
    }

    /// Returns the transient parent of a window.
    // `XGetTransientForHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTransientForHint.html
    #[must_use]
    pub fn get_transient_for(&self, window: xlib::Window) -> Option<xlib::Window> {
        unsafe {
            let mut transient: xlib::Window = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTransientForHint)(self.display, window, &mut transient);
            if status > 0 && transient != 0 {
                Some(transient)
            } else {
                None
            }
        }
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns a windows class `WM_CLASS` as `(instance, class)`.
    // `XGetClassHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetClassHint.html
    #[must_use]
    pub fn get_window_class(&self, window: xlib::Window) -> Option<(String, String)> {
        unsafe {
            let mut class_return: xlib::XClassHint = std::mem::zeroed();
            let status = (self.xlib.XGetClassHint)(self.display, window, &mut class_return);
            if status == 0 {
                return None;
            }
            let read = |ptr: *mut std::os::raw::c_char| {
                if ptr.is_null() {
                    return None;
                }
                let value = CStr::from_ptr(ptr).to_string_lossy().into_owned();
                (self.xlib.XFree)(ptr.cast());
                Some(value)
            };
            let res_name = read(class_return.res_name);
            let res_class = read(class_return.res_class);
            Some((res_name?, res_class?))
        }
    }

    /// Returns the geometry of a window.
    /// # Errors
    ///
    /// Errors if Xlib returns a status of 0.
    // `XGetGeometry`: https://tronche.com/gui/x/xlib/window-information/XGetGeometry.html
    pub fn get_window_geometry(&self, window: xlib::Window) -> Result<Xyhw, XlibError> {
        let mut root_return: xlib::Window = 0;
        let mut x_return: c_int = 0;
        let mut y_return: c_int = 0;
        let mut width_return: c_uint = 0;
        let mut height_return: c_uint = 0;
        let mut border_width_return: c_uint = 0;
        let mut depth_return: c_uint = 0;
        unsafe {
            let status = (self.xlib.XGetGeometry)(
                self.display,
                window,
                &mut root_return,
                &mut x_return,
                &mut y_return,
                &mut width_return,
                &mut height_return,
                &mut border_width_return,
                &mut depth_return,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
        }
        Ok(Xyhw::new(x_return, y_return, width_return, height_return))
    }

    /// Returns the atom states of a window.
    #[must_use]
    pub fn get_window_states_atoms(&self, window: xlib::Window) -> Vec<xlib::Atom> {
        let Ok((prop_return, nitems_return)) =
            self.get_property(window, self.atoms.NetWMState, xlib::XA_ATOM)
        else {
            return vec![];
        };
        unsafe {
            #[allow(clippy::cast_ptr_alignment)]
            let ptr = prop_return.cast::<xlib::Atom>();
            let results = slice::from_raw_parts(ptr, nitems_return as usize).to_vec();
            (self.xlib.XFree)(prop_return.cast_mut().cast());
            results
        }
    }

    /// Returns the type of a window.
    #[must_use]
    pub fn get_window_type(&self, window: xlib::Window) -> WindowType {
        let Ok((prop_return, nitems_return)) =
            self.get_property(window, self.atoms.NetWMWindowType, xlib::XA_ATOM)
        else {
            return WindowType::Normal;
        };
        if nitems_return == 0 {
            return WindowType::Normal;
        }
        #[allow(clippy::cast_ptr_alignment)]
        let atom = unsafe { *prop_return.cast::<xlib::Atom>() };
        unsafe { (self.xlib.XFree)(prop_return.cast_mut().cast()) };
        self.atoms.window_type(atom)
    }

    /// Returns the `WM_STATE` of a window.
    #[must_use]
    pub fn get_wm_state(&self, window: xlib::Window) -> Option<c_long> {
        let (prop_return, nitems_return) = self
            .get_property(window, self.atoms.WMState, self.atoms.WMState)
            .ok()?;
        #[allow(clippy::cast_ptr_alignment)]
        let state = (nitems_return > 0).then(|| unsafe { *prop_return.cast::<c_long>() });
        unsafe { (self.xlib.XFree)(prop_return.cast_mut().cast()) };
        state
    }

    /// Returns whether the `WM_NORMAL_HINTS` of a window pin its size.
    #[must_use]
    pub fn is_fixed_size(&self, window: xlib::Window) -> bool {
        self.get_hint_sizing(window).map_or(false, |size| {
            (size.flags & xlib::PMaxSize) != 0
                && (size.flags & xlib::PMinSize) != 0
                && size.max_width > 0
                && size.max_height > 0
                && size.max_width == size.min_width
                && size.max_height == size.min_height
        })
    }

    // Internal functions.

    /// Returns the `WM_SIZE_HINTS`/`WM_NORMAL_HINTS` of a window.
    // `XGetWMNormalHints`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMNormalHints.html
    fn get_hint_sizing(&self, window: xlib::Window) -> Option<xlib::XSizeHints> {
        let mut xsize: xlib::XSizeHints = unsafe { std::mem::zeroed() };
        let mut msize: c_long = xlib::PSize;
        let status =
            unsafe { (self.xlib.XGetWMNormalHints)(self.display, window, &mut xsize, &mut msize) };
        match status {
            0 => None,
            _ => Some(xsize),
        }
    }

    /// Returns a property of a window, the caller frees it.
    /// # Errors
    ///
    /// Errors if window status = 0.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_property(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Result<(*const c_uchar, c_ulong), XlibError> {
        let mut format_return: i32 = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: c_ulong = 0;
        let mut prop_return: *mut c_uchar = std::ptr::null_mut();
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                r#type,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status == i32::from(xlib::Success) && !prop_return.is_null() {
                return Ok((prop_return, nitems_return));
            }
        };
        Err(XlibError::FailedStatus)
    }
}
