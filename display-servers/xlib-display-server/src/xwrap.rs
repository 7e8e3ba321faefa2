//! A wrapper around calls to xlib and X related functions.
// We allow this _ because if we don't we'll receive an error that it isn't read on _task_guard.
#![allow(clippy::used_underscore_binding)]
// We allow this so that extern "C" functions are not flagged as confusing. The current placement
// allows for easy reading.
#![allow(clippy::items_after_statements)]
use super::xatom::XAtom;
use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_long, c_ulong};
use std::ptr;
use std::slice;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thicket_core::config::Config;
use thicket_core::ThicketError;
use tokio::sync::{oneshot, Notify};
use tokio::time::Duration;

use x11_dl::xlib;

mod getters;
mod setters;
mod window;

type WindowStateConst = c_long;
pub const NORMAL_STATE: WindowStateConst = 1;
pub const ICONIC_STATE: WindowStateConst = 2;
const MAX_PROPERTY_VALUE_LEN: c_long = 4096;

pub const ROOT_EVENT_MASK: c_long =
    xlib::SubstructureRedirectMask | xlib::SubstructureNotifyMask | xlib::ButtonPressMask;

const X_CONFIGUREWINDOW: u8 = 12;
const X_GRABBUTTON: u8 = 28;
const X_SETINPUTFOCUS: u8 = 42;

static OTHER_WM_RUNNING: AtomicBool = AtomicBool::new(false);

// This is allowed for now as const extern fns
// are not yet stable (1.56.0, 16 Sept 2021)
// see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;

    // Windows may vanish between an event and our reaction to it.
    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && ec == xlib::BadMatch)
        || (rc == X_GRABBUTTON && ec == xlib::BadAccess)
        || (rc == X_SETINPUTFOCUS && ec == xlib::BadMatch)
    {
        return 0;
    }
    tracing::warn!("X error {} on request {}", ec, rc);
    0
}

#[derive(Debug, Clone)]
pub enum XlibError {
    FailedStatus,
    RootWindowNotFound,
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    pub atoms: XAtom,
    pub desktop_names: Vec<String>,
    _task_guard: oneshot::Receiver<()>,
    pub task_notify: Arc<Notify>,
}

impl XWrap {
    /// Connect to the X server and claim its root window.
    ///
    /// # Errors
    ///
    /// Fails when Xlib cannot be loaded, the display cannot be opened or another window manager
    /// already owns the root window.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XConnectionNumber`: https://tronche.com/gui/x/xlib/display/display-macros.html#ConnectionNumber
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn new() -> Result<Self, ThicketError> {
        const SERVER: mio::Token = mio::Token(0);
        let xlib = xlib::Xlib::open().map_err(|e| ThicketError::ConnectionFailed(e.to_string()))?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(ThicketError::ConnectionFailed(
                "unable to open the display".to_string(),
            ));
        }

        let fd = unsafe { (xlib.XConnectionNumber)(display) };

        let (guard, _task_guard) = oneshot::channel();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();

        let mut poll = mio::Poll::new()?;
        let mut events = mio::Events::with_capacity(1);
        poll.registry().register(
            &mut mio::unix::SourceFd(&fd),
            SERVER,
            mio::Interest::READABLE,
        )?;
        let timeout = Duration::from_millis(100);
        tokio::task::spawn_blocking(move || loop {
            if guard.is_closed() {
                return;
            }

            if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                tracing::warn!("Xlib socket poll failed with {:?}", err);
                continue;
            }

            events
                .iter()
                .filter(|event| SERVER == event.token())
                .for_each(|_| notify.notify_one());
        });

        let atoms = XAtom::new(&xlib, display);
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };
        if root == 0 {
            return Err(ThicketError::RootWindowNotFound);
        }

        let xw = Self {
            xlib,
            display,
            root,
            atoms,
            desktop_names: vec![],
            _task_guard,
            task_notify,
        };

        // Only one client may select SubstructureRedirect on the root.
        extern "C" fn startup_check_for_other_wm(
            _: *mut xlib::Display,
            _: *mut xlib::XErrorEvent,
        ) -> c_int {
            OTHER_WM_RUNNING.store(true, Ordering::SeqCst);
            0
        }
        unsafe {
            (xw.xlib.XSetErrorHandler)(Some(startup_check_for_other_wm));
            (xw.xlib.XSelectInput)(xw.display, root, xlib::SubstructureRedirectMask);
        };
        xw.sync();
        if OTHER_WM_RUNNING.load(Ordering::SeqCst) {
            return Err(ThicketError::AnotherWindowManager);
        }

        unsafe { (xw.xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };
        xw.sync();
        Ok(xw)
    }

    /// Initialize the xwrapper.
    // `XChangeWindowAttributes`: https://tronche.com/gui/x/xlib/window/XChangeWindowAttributes.html
    // `XDeleteProperty`: https://tronche.com/gui/x/xlib/window-information/XDeleteProperty.html
    pub fn init(&mut self, config: &impl Config) {
        let root = self.root;
        let mut attrs: xlib::XSetWindowAttributes = unsafe { std::mem::zeroed() };
        attrs.event_mask = ROOT_EVENT_MASK;
        self.change_window_attributes(root, xlib::CWEventMask, attrs);
        self.subscribe_to_event(root, ROOT_EVENT_MASK);

        // EWMH compliance.
        let supported: Vec<c_long> = self
            .atoms
            .net_supported()
            .iter()
            .map(|&atom| atom as c_long)
            .collect();
        self.replace_property_long(root, self.atoms.NetSupported, xlib::XA_ATOM, &supported);
        unsafe {
            // Cleanup the client list.
            (self.xlib.XDeleteProperty)(self.display, root, self.atoms.NetClientList);
        }

        self.desktop_names = config.desktop_names();
        self.init_desktops_hints();

        self.sync();
    }

    /// EWMH support used for bars such as polybar.
    // `Xutf8TextListToTextProperty`: https://linux.die.net/man/3/xutf8textlisttotextproperty
    // `XSetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XSetTextProperty.html
    pub fn init_desktops_hints(&self) {
        let names = &self.desktop_names;
        // Set the number of desktop.
        let data = vec![names.len() as u32];
        self.set_desktop_prop(&data, self.atoms.NetNumberOfDesktops);
        // Set a current desktop.
        self.set_current_desktop(0);
        // Set desktop names.
        let cnames: Vec<CString> = names
            .iter()
            .filter_map(|name| CString::new(name.as_str()).ok())
            .collect();
        let mut pointers: Vec<*mut c_char> =
            cnames.iter().map(|c| c.as_ptr().cast_mut()).collect();
        let mut text: xlib::XTextProperty = unsafe { std::mem::zeroed() };
        unsafe {
            (self.xlib.Xutf8TextListToTextProperty)(
                self.display,
                pointers.as_mut_ptr(),
                pointers.len() as i32,
                xlib::XUTF8StringStyle,
                &mut text,
            );
            (self.xlib.XSetTextProperty)(
                self.display,
                self.root,
                &mut text,
                self.atoms.NetDesktopNames,
            );
            (self.xlib.XFree)(text.value.cast());
        }

        // Set the WM NAME.
        self.set_desktop_prop_string("thicket", self.atoms.NetWMName, self.atoms.UTF8String);

        self.set_desktop_prop_c_ulong(
            self.root as c_ulong,
            self.atoms.NetSupportingWmCheck,
            xlib::XA_WINDOW,
        );

        // Set a viewport.
        let data = vec![0_u32, 0_u32];
        self.set_desktop_prop(&data, self.atoms.NetDesktopViewport);
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Returns how many events are waiting.
    // `XPending`: https://tronche.com/gui/x/xlib/event-handling/XPending.html
    #[must_use]
    pub fn queue_len(&self) -> i32 {
        unsafe { (self.xlib.XPending)(self.display) }
    }

    /// Returns the child windows of the root.
    /// # Errors
    ///
    /// Will error if the tree of the root cannot be queried.
    // `XQueryTree`: https://tronche.com/gui/x/xlib/window-information/XQueryTree.html
    pub fn get_all_windows(&self) -> Result<Vec<xlib::Window>, XlibError> {
        unsafe {
            let mut root_return: xlib::Window = 0;
            let mut parent_return: xlib::Window = 0;
            let mut array: *mut xlib::Window = ptr::null_mut();
            let mut length: std::os::raw::c_uint = 0;
            let status: xlib::Status = (self.xlib.XQueryTree)(
                self.display,
                self.root,
                &mut root_return,
                &mut parent_return,
                &mut array,
                &mut length,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
            if array.is_null() {
                return Ok(vec![]);
            }
            let windows = slice::from_raw_parts(array, length as usize).to_vec();
            (self.xlib.XFree)(array.cast());
            Ok(windows)
        }
    }
}
