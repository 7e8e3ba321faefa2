use crate::display_servers::DisplayServer;
use crate::models::{Client, Handle, Manager, WindowHandle, WindowLocation, Xyhw};
use crate::rules::{handle_rules, RuleOutcome};
use crate::state::State;
use crate::{Config, DisplayAction, MapRequest};

/// Geometry of a window the server could not tell us anything about.
const DEFAULT_RECTANGLE: Xyhw = Xyhw::new(0, 0, 320, 240);

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Adopt a window that asks to be mapped.
    /// Returns true if the window is now managed.
    pub fn map_request_handler(&mut self, request: MapRequest<H>) -> bool {
        let MapRequest {
            window,
            attributes,
            geometry,
            hints,
        } = request;

        // Missing attributes do not prevent adoption.
        let override_redirect = attributes.map_or(false, |a| a.override_redirect);
        if override_redirect || self.state.is_managed(&window) {
            tracing::debug!("Not adopting {:?}", window);
            return false;
        }

        let client = Client::new(window, geometry.unwrap_or(DEFAULT_RECTANGLE));
        let RuleOutcome {
            floating,
            transient,
            takes_focus,
        } = handle_rules(&self.state.rules, window, &hints);
        let floating = floating || transient;

        let mut node = State::make_node();
        node.client = Some(client);
        let desktop = self.state.active_desktop;
        let Some(location) = self.state.insert_node(desktop, node) else {
            tracing::warn!("Desktop {} is gone, cannot adopt {:?}", desktop, window);
            return false;
        };

        if floating {
            self.state.toggle_floating(location);
        }

        // At most one window dominates a desktop, the newcomer demotes a fullscreen focus.
        let fullscreen_focus = self
            .state
            .desktop(desktop)
            .and_then(|d| d.focus)
            .map(|node| WindowLocation { desktop, node })
            .filter(|l| self.state.client(*l).map_or(false, Client::is_fullscreen));
        if let Some(focused) = fullscreen_focus {
            self.state.toggle_fullscreen(focused);
        }

        if let Some(client) = self.state.client_mut(location) {
            client.transient = transient;
        }

        if takes_focus {
            self.state.focus_node(desktop, location.node, false);
        }

        self.state.arrange(desktop);
        self.state.actions.push_back(DisplayAction::MapWindow(window));
        self.state
            .actions
            .push_back(DisplayAction::SetInputFocus(window));

        self.state.num_clients += 1;
        self.state.update_client_list();
        true
    }

    /// Forget a window that no longer exists.
    /// Returns true if the window was managed.
    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        match self.state.locate_window(handle) {
            Some(location) => self.release_window(location),
            None => false,
        }
    }

    /// Forget a window that was unmapped.
    ///
    /// Unmaps of children of the root are also reported on the root itself, only the
    /// notification reported on the window proper counts.
    pub fn window_unmapped_handler(
        &mut self,
        event: &WindowHandle<H>,
        window: &WindowHandle<H>,
    ) -> bool {
        if *event == self.state.screen.root {
            return false;
        }
        match self.state.locate_window(window) {
            Some(location) => self.release_window(location),
            None => false,
        }
    }

    fn release_window(&mut self, location: WindowLocation) -> bool {
        let Some(client) = self.state.remove_node(location) else {
            return false;
        };
        tracing::debug!("Released {:?}", client.handle);
        self.state.arrange(location.desktop);
        true
    }
}
