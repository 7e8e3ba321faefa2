use crate::display_servers::DisplayServer;
use crate::models::{Client, Handle, Manager, StateAction, WindowHandle, WindowState};
use crate::{ClientMessage, ClientMessageKind, Config};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Handle EWMH requests sent by clients about themselves.
    /// Returns true if the model changed.
    pub fn client_message_handler(&mut self, message: ClientMessage<H>) -> bool {
        let ClientMessage { window, kind } = message;
        let Some(location) = self.state.locate_window(&window) else {
            tracing::trace!("Ignoring {:?} for unmanaged {:?}", kind, window);
            return false;
        };

        match kind {
            ClientMessageKind::WmState {
                action,
                first,
                second,
            } => {
                // The second state sees what the first one did.
                let first = first.map_or(false, |s| self.change_window_state(&window, s, action));
                let second = second.map_or(false, |s| self.change_window_state(&window, s, action));
                first || second
            }
            ClientMessageKind::ActiveWindow => {
                self.state.focus_node(location.desktop, location.node, true)
            }
            ClientMessageKind::Unsupported(atom) => {
                tracing::trace!("Unsupported client message {} for {:?}", atom, window);
                false
            }
        }
    }

    fn change_window_state(
        &mut self,
        window: &WindowHandle<H>,
        state: WindowState,
        action: StateAction,
    ) -> bool {
        let Some(location) = self.state.locate_window(window) else {
            return false;
        };
        match state {
            WindowState::Fullscreen => {
                let Some(current) = self.state.client(location).map(Client::is_fullscreen) else {
                    return false;
                };
                if action.resolve(current) == current {
                    return false;
                }
                self.state.toggle_fullscreen(location);
                true
            }
            other => {
                tracing::debug!("Window state {:?} is not supported", other);
                false
            }
        }
    }
}
