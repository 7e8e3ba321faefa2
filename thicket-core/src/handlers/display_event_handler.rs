use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use crate::{Config, DisplayEvent};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Route one event to its handler.
    /// Returns true if the model changed.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::ScreenCreate(screen) => self.screen_create_handler(screen),
            DisplayEvent::MapRequest(request) => self.map_request_handler(request),
            DisplayEvent::DestroyNotify(handle) => self.window_destroyed_handler(&handle),
            DisplayEvent::UnmapNotify { event, window } => {
                self.window_unmapped_handler(&event, &window)
            }
            DisplayEvent::ClientMessage(message) => self.client_message_handler(message),
            DisplayEvent::ConfigureRequest(request) => self.configure_request_handler(request),

            // Nothing is bound to the mouse yet.
            DisplayEvent::ButtonPress(handle) => {
                tracing::debug!("Button press on {:?}", handle);
                false
            }

            DisplayEvent::Other(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_helpers::{adopt, manager, map_request};
    use crate::models::{WindowHandle, Xyhw};
    use crate::{ClientMessage, ClientMessageKind, ConfigureRequest};

    #[test]
    fn unknown_events_should_be_ignored() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        assert!(!manager.display_event_handler(DisplayEvent::Other(33)));
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.state.client_list(), vec![WindowHandle(1)]);
    }

    #[test]
    fn button_presses_should_not_change_anything() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        assert!(!manager.display_event_handler(DisplayEvent::ButtonPress(WindowHandle(1))));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn each_event_kind_should_reach_its_handler() {
        let mut manager = manager();
        let map = DisplayEvent::MapRequest(map_request(1, None));
        assert!(manager.display_event_handler(map));
        assert!(manager.state.is_managed(&WindowHandle(1)));

        let message = DisplayEvent::ClientMessage(ClientMessage {
            window: WindowHandle(1),
            kind: ClientMessageKind::Unsupported(99),
        });
        assert!(!manager.display_event_handler(message));

        let configure = DisplayEvent::ConfigureRequest(ConfigureRequest {
            window: WindowHandle(1),
            changes: crate::models::WindowChanges {
                width: Some(640),
                ..Default::default()
            },
        });
        assert!(manager.display_event_handler(configure));
        let location = manager.state.locate_window(&WindowHandle(1)).unwrap();
        assert_eq!(
            manager.state.client(location).unwrap().rectangle,
            Xyhw::new(0, 0, 640, 240)
        );

        let destroy = DisplayEvent::DestroyNotify(WindowHandle(1));
        assert!(manager.display_event_handler(destroy));
        assert!(!manager.state.is_managed(&WindowHandle(1)));
    }
}
