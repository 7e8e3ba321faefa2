// allow casting types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod event_translate;
mod event_translate_client_message;
mod xatom;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use xwrap::XWrap;

use self::xwrap::ICONIC_STATE;
use event_translate::XEvent;
use futures::prelude::*;
use std::pin::Pin;
use thicket_core::config::Config;
use thicket_core::models::{DesktopId, Handle, WindowHandle, Xyhw};
use thicket_core::{DisplayAction, DisplayEvent, DisplayServer, Result};

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XlibWindowHandle(xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
    initial_events: Vec<DisplayEvent<XlibWindowHandle>>,
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn new(config: &impl Config) -> Result<Self> {
        let mut wrap = XWrap::new()?;

        wrap.init(config); // setup events masks

        let mut instance = Self {
            xw: wrap,
            initial_events: Vec::new(),
        };
        instance.initial_events = instance.initial_events();
        Ok(instance)
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut events = std::mem::take(&mut self.initial_events);

        let events_in_queue = self.xw.queue_len();
        for _ in 0..events_in_queue {
            let xlib_event = self.xw.get_next_event();
            let event = XEvent(&self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                events.push(e);
            }
        }

        events
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<XlibWindowHandle>,
    ) -> Option<DisplayEvent<XlibWindowHandle>> {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &mut self.xw;
        let event: Option<DisplayEvent<XlibWindowHandle>> = match act {
            DisplayAction::MapWindow(h) => from_map_window(xw, h),
            DisplayAction::SetInputFocus(h) => from_set_input_focus(xw, h),
            DisplayAction::ConfigureWindow(h, changes) => {
                let WindowHandle(XlibWindowHandle(window)) = h;
                xw.configure_window(window, &changes);
                None
            }
            DisplayAction::MoveResizeWindow(h, xyhw) => from_move_resize_window(xw, h, xyhw),
            DisplayAction::RaiseWindow(h) => {
                xw.move_to_top(&h);
                None
            }
            DisplayAction::HideWindow(h) => from_hide_window(xw, h),
            DisplayAction::SetFullscreenState(h, fullscreen) => {
                xw.set_state(h, fullscreen, xw.atoms.NetWMStateFullscreen);
                None
            }
            DisplayAction::SetActiveWindow(h) => {
                xw.set_active_window(h);
                None
            }
            DisplayAction::SetCurrentDesktop(desktop) => from_set_current_desktop(xw, desktop),
            DisplayAction::UpdateClientList(windows) => {
                xw.set_client_list(&windows);
                None
            }
        };
        if event.is_some() {
            tracing::trace!("DisplayEvent: {:?}", event);
        }
        event
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

impl XlibDisplayServer {
    /// Return a vec of events for setting up state of WM.
    fn initial_events(&self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut events = vec![];
        match self.xw.get_screen() {
            Ok(screen) => events.push(DisplayEvent::ScreenCreate(screen)),
            Err(err) => tracing::error!("Unable to read the screen geometry: {:?}", err),
        }

        // Tell manager about existing windows.
        events.append(&mut self.find_all_windows());

        events
    }

    fn find_all_windows(&self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut all: Vec<DisplayEvent<XlibWindowHandle>> = Vec::new();
        match self.xw.get_all_windows() {
            Ok(handles) => handles.into_iter().for_each(|handle| {
                let Ok(attrs) = self.xw.get_window_attrs(handle) else {
                    return;
                };
                let iconic = self.xw.get_wm_state(handle) == Some(ICONIC_STATE);
                if attrs.map_state == xlib::IsViewable || iconic {
                    let request = event_translate::map_request(&self.xw, handle);
                    all.push(DisplayEvent::MapRequest(request));
                }
            }),
            Err(err) => {
                tracing::error!("Unable to list the existing windows: {:?}", err);
            }
        }
        all
    }
}

// Display actions.
fn from_map_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.setup_managed_window(window);
    None
}

fn from_set_input_focus(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.focus(window);
    None
}

fn from_move_resize_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    xyhw: Xyhw,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.move_resize_window(window, xyhw);
    None
}

fn from_hide_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.hide_window(window);
    None
}

fn from_set_current_desktop(
    xw: &mut XWrap,
    desktop: DesktopId,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.set_current_desktop(desktop);
    None
}
