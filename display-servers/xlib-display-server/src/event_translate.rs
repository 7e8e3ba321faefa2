use crate::XlibWindowHandle;

use super::{event_translate_client_message, DisplayEvent, XWrap};
use std::os::raw::c_ulong;
use thicket_core::models::{StackMode, WindowChanges, WindowHandle};
use thicket_core::{ConfigureRequest, MapRequest, WindowAttributes, WindowHints};
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a XWrap, pub xlib::XEvent);

impl<'a> From<XEvent<'a>> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.1;

        match raw_event.get_type() {
            // New window asks to be mapped.
            xlib::MapRequest => Some(from_map_request(&x_event)),
            // Window is unmapped.
            xlib::UnmapNotify => Some(from_unmap_event(raw_event)),
            // Window is destroyed.
            xlib::DestroyNotify => Some(from_destroy_notify(raw_event)),
            // Window client message.
            xlib::ClientMessage => from_client_message(&x_event),
            // Window configure request.
            xlib::ConfigureRequest => Some(from_configure_request(raw_event)),
            // Mouse button pressed.
            xlib::ButtonPress => Some(from_button_press(raw_event)),
            other => Some(DisplayEvent::Other(other as u8)),
        }
    }
}

fn from_map_request(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XMapRequestEvent::from(x_event.1);
    DisplayEvent::MapRequest(map_request(x_event.0, event.window))
}

/// Ask the server everything adoption needs to know about a window.
/// Failed queries are left as `None`.
pub fn map_request(xw: &XWrap, window: xlib::Window) -> MapRequest<XlibWindowHandle> {
    let attributes = xw.get_window_attrs(window).ok().map(|attrs| WindowAttributes {
        override_redirect: attrs.override_redirect != 0,
    });
    let geometry = xw.get_window_geometry(window).ok();
    let (instance, class) = xw.get_window_class(window).unzip();
    let hints = WindowHints {
        class,
        instance,
        window_type: xw.get_window_type(window),
        transient_for: xw
            .get_transient_for(window)
            .map(|w| WindowHandle(XlibWindowHandle(w))),
        fixed_size: xw.is_fixed_size(window),
    };
    MapRequest {
        window: WindowHandle(XlibWindowHandle(window)),
        attributes,
        geometry,
        hints,
    }
}

fn from_unmap_event(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XUnmapEvent::from(raw_event);
    DisplayEvent::UnmapNotify {
        event: WindowHandle(XlibWindowHandle(event.event)),
        window: WindowHandle(XlibWindowHandle(event.window)),
    }
}

fn from_destroy_notify(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XDestroyWindowEvent::from(raw_event);
    DisplayEvent::DestroyNotify(WindowHandle(XlibWindowHandle(event.window)))
}

fn from_client_message(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XClientMessageEvent::from(x_event.1);
    event_translate_client_message::from_event(x_event.0, &event)
}

fn from_configure_request(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XConfigureRequestEvent::from(raw_event);
    DisplayEvent::ConfigureRequest(configure_request(&event))
}

/// Keep exactly the fields named in the value mask of the request.
pub fn configure_request(
    event: &xlib::XConfigureRequestEvent,
) -> ConfigureRequest<XlibWindowHandle> {
    let has = |flag: u16| event.value_mask & c_ulong::from(flag) != 0;
    let changes = WindowChanges {
        x: has(xlib::CWX).then_some(event.x),
        y: has(xlib::CWY).then_some(event.y),
        width: has(xlib::CWWidth).then_some(event.width as u32),
        height: has(xlib::CWHeight).then_some(event.height as u32),
        border_width: has(xlib::CWBorderWidth).then_some(event.border_width as u32),
        sibling: has(xlib::CWSibling).then_some(WindowHandle(XlibWindowHandle(event.above))),
        stack_mode: if has(xlib::CWStackMode) {
            stack_mode(event.detail)
        } else {
            None
        },
    };
    ConfigureRequest {
        window: WindowHandle(XlibWindowHandle(event.window)),
        changes,
    }
}

fn stack_mode(detail: i32) -> Option<StackMode> {
    match detail {
        xlib::Above => Some(StackMode::Above),
        xlib::Below => Some(StackMode::Below),
        xlib::TopIf => Some(StackMode::TopIf),
        xlib::BottomIf => Some(StackMode::BottomIf),
        xlib::Opposite => Some(StackMode::Opposite),
        _ => None,
    }
}

fn from_button_press(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XButtonPressedEvent::from(raw_event);
    DisplayEvent::ButtonPress(WindowHandle(XlibWindowHandle(event.window)))
}
