use crate::xatom::XAtom;
use crate::XlibWindowHandle;

use super::{DisplayEvent, XWrap};
use std::convert::TryFrom;
use std::os::raw::c_long;
use thicket_core::models::{StateAction, WindowHandle};
use thicket_core::{ClientMessage, ClientMessageKind};

use x11_dl::xlib;

pub fn from_event(
    xw: &XWrap,
    event: &xlib::XClientMessageEvent,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let atom_name = xw.atoms.get_name(event.message_type);
    tracing::trace!("ClientMessage: {} : {:?}", event.window, atom_name);

    let data = [
        event.data.get_long(0),
        event.data.get_long(1),
        event.data.get_long(2),
    ];
    Some(DisplayEvent::ClientMessage(ClientMessage {
        window: WindowHandle(XlibWindowHandle(event.window)),
        kind: message_kind(&xw.atoms, event.message_type, data),
    }))
}

/// Decode a client message from its type and its first three data longs.
pub fn message_kind(
    atoms: &XAtom,
    message_type: xlib::Atom,
    data: [c_long; 3],
) -> ClientMessageKind {
    if message_type == atoms.NetWMState {
        match StateAction::try_from(i64::from(data[0])) {
            Ok(action) => ClientMessageKind::WmState {
                action,
                first: atoms.window_state(data[1] as xlib::Atom),
                second: atoms.window_state(data[2] as xlib::Atom),
            },
            Err(code) => {
                tracing::debug!("Received an invalid _NET_WM_STATE action ({})", code);
                ClientMessageKind::Unsupported(u64::from(message_type))
            }
        }
    } else if message_type == atoms.NetActiveWindow {
        ClientMessageKind::ActiveWindow
    } else {
        ClientMessageKind::Unsupported(u64::from(message_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thicket_core::models::WindowState;

    fn wm_state(atoms: &XAtom, data: [c_long; 3]) -> ClientMessageKind {
        message_kind(atoms, atoms.NetWMState, data)
    }

    #[test]
    fn fullscreen_should_be_read_from_either_slot() {
        let atoms = XAtom::numbered();
        let fullscreen = atoms.NetWMStateFullscreen as c_long;
        assert_eq!(
            wm_state(&atoms, [2, fullscreen, 0]),
            ClientMessageKind::WmState {
                action: StateAction::Toggle,
                first: Some(WindowState::Fullscreen),
                second: None,
            }
        );
        assert_eq!(
            wm_state(&atoms, [2, atoms.NetWMStateAbove as c_long, fullscreen]),
            ClientMessageKind::WmState {
                action: StateAction::Toggle,
                first: Some(WindowState::Above),
                second: Some(WindowState::Fullscreen),
            }
        );
    }

    #[test]
    fn action_codes_should_map_to_remove_add_toggle() {
        let atoms = XAtom::numbered();
        let fullscreen = atoms.NetWMStateFullscreen as c_long;
        let expected = [StateAction::Remove, StateAction::Add, StateAction::Toggle];
        for (code, action) in expected.into_iter().enumerate() {
            assert_eq!(
                wm_state(&atoms, [code as c_long, fullscreen, 0]),
                ClientMessageKind::WmState {
                    action,
                    first: Some(WindowState::Fullscreen),
                    second: None,
                }
            );
        }
    }

    #[test]
    fn an_invalid_action_code_should_be_unsupported() {
        let atoms = XAtom::numbered();
        let fullscreen = atoms.NetWMStateFullscreen as c_long;
        assert_eq!(
            wm_state(&atoms, [3, fullscreen, 0]),
            ClientMessageKind::Unsupported(u64::from(atoms.NetWMState))
        );
    }

    #[test]
    fn active_window_requests_should_be_recognized() {
        let atoms = XAtom::numbered();
        assert_eq!(
            message_kind(&atoms, atoms.NetActiveWindow, [1, 0, 0]),
            ClientMessageKind::ActiveWindow
        );
    }

    #[test]
    fn unknown_message_types_should_be_unsupported() {
        let atoms = XAtom::numbered();
        assert_eq!(
            message_kind(&atoms, 9999, [0, 0, 0]),
            ClientMessageKind::Unsupported(9999)
        );
    }
}
