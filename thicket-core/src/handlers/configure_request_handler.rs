use crate::display_servers::DisplayServer;
use crate::models::{Client, Handle, Manager, WindowChanges};
use crate::{Config, ConfigureRequest, DisplayAction};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Handle a window asking to be moved, resized or restacked.
    ///
    /// Unmanaged windows get everything they ask for, floating windows everything but their
    /// border, tiled windows nothing. The geometry of a managed window is recorded either way.
    /// Returns true if the model changed.
    pub fn configure_request_handler(&mut self, request: ConfigureRequest<H>) -> bool {
        let ConfigureRequest { window, changes } = request;
        let location = self.state.locate_window(&window);
        let floating = location
            .and_then(|l| self.state.client(l))
            .map(Client::is_floating);

        let forwarded = match floating {
            None => Some(changes),
            Some(true) => Some(WindowChanges {
                border_width: None,
                ..changes
            }),
            Some(false) => None,
        };
        match forwarded {
            Some(forwarded) if !forwarded.is_empty() => {
                self.state
                    .actions
                    .push_back(DisplayAction::ConfigureWindow(window, forwarded));
            }
            Some(_) => {}
            None => tracing::debug!("Not forwarding the configure request of tiled {:?}", window),
        }

        let Some(location) = location else {
            return false;
        };
        let recorded = self
            .state
            .client_mut(location)
            .map_or(false, |client| record_geometry(client, &changes));

        if floating == Some(true) {
            let screen = self.state.screen.xyhw;
            self.state.apply_layout(location.desktop, location.node, screen);
            return true;
        }
        recorded
    }
}

/// Mirror the requested geometry into the record.
/// Returns true if any field was present.
fn record_geometry<H: Handle>(client: &mut Client<H>, changes: &WindowChanges<H>) -> bool {
    let rect = &mut client.rectangle;
    if let Some(x) = changes.x {
        rect.x = x;
    }
    if let Some(y) = changes.y {
        rect.y = y;
    }
    if let Some(w) = changes.width {
        rect.w = w;
    }
    if let Some(h) = changes.height {
        rect.h = h;
    }
    changes.x.is_some() || changes.y.is_some() || changes.width.is_some() || changes.height.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_helpers::{adopt, manager, TestManager};
    use crate::models::{MockHandle, StackMode, WindowHandle, Xyhw};

    fn request(handle: MockHandle, changes: WindowChanges<MockHandle>) -> ConfigureRequest<MockHandle> {
        ConfigureRequest {
            window: WindowHandle(handle),
            changes,
        }
    }

    fn rectangle(manager: &TestManager, handle: MockHandle) -> Xyhw {
        let location = manager.state.locate_window(&WindowHandle(handle)).unwrap();
        manager.state.client(location).unwrap().rectangle
    }

    fn make_floating(manager: &mut TestManager, handle: MockHandle) {
        let location = manager.state.locate_window(&WindowHandle(handle)).unwrap();
        manager.state.toggle_floating(location);
        manager.state.actions.clear();
    }

    #[test]
    fn unmanaged_windows_should_get_every_field_including_the_border() {
        let mut manager = manager();
        let changes = WindowChanges {
            x: Some(5),
            border_width: Some(3),
            sibling: Some(WindowHandle(4)),
            stack_mode: Some(StackMode::Below),
            ..WindowChanges::default()
        };
        assert!(!manager.configure_request_handler(request(9, changes)));
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::ConfigureWindow(WindowHandle(9), changes))
        );
        assert!(!manager.state.is_managed(&WindowHandle(9)));
    }

    #[test]
    fn tiled_windows_should_only_be_recorded() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        let changes = WindowChanges {
            width: Some(400),
            height: Some(300),
            ..WindowChanges::default()
        };
        assert!(manager.configure_request_handler(request(1, changes)));
        assert!(manager.state.actions.is_empty());
        assert_eq!(rectangle(&manager, 1), Xyhw::new(0, 0, 400, 300));
    }

    #[test]
    fn floating_windows_should_keep_their_border() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        make_floating(&mut manager, 1);
        let changes = WindowChanges {
            x: Some(30),
            y: Some(40),
            border_width: Some(8),
            stack_mode: Some(StackMode::Above),
            ..WindowChanges::default()
        };
        assert!(manager.configure_request_handler(request(1, changes)));

        let expected = WindowChanges {
            border_width: None,
            ..changes
        };
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::ConfigureWindow(WindowHandle(1), expected))
        );
        let placed = Xyhw::new(30, 40, 100, 100);
        assert_eq!(rectangle(&manager, 1), placed);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(WindowHandle(1), placed))
        );
    }

    #[test]
    fn a_floating_border_request_alone_should_not_be_forwarded() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        make_floating(&mut manager, 1);
        let changes = WindowChanges {
            border_width: Some(8),
            ..WindowChanges::default()
        };
        manager.configure_request_handler(request(1, changes));
        assert!(!manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::ConfigureWindow(..))));
    }

    #[test]
    fn only_present_fields_should_be_recorded() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        let changes = WindowChanges {
            y: Some(77),
            ..WindowChanges::default()
        };
        manager.configure_request_handler(request(1, changes));
        assert_eq!(rectangle(&manager, 1), Xyhw::new(0, 77, 100, 100));
    }

    #[test]
    fn stacking_only_requests_of_tiled_windows_should_change_nothing() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        let changes = WindowChanges {
            stack_mode: Some(StackMode::Above),
            ..WindowChanges::default()
        };
        assert!(!manager.configure_request_handler(request(1, changes)));
        assert!(manager.state.actions.is_empty());
    }
}
