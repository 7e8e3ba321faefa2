//! The application context shared by every handler.

use crate::config::Config;
use crate::models::{
    Client, Desktop, DesktopId, Handle, Node, Screen, WindowHandle, WindowLocation,
};
use crate::rules::WindowRule;
use crate::DisplayAction;
use std::collections::{HashMap, VecDeque};

#[derive(Debug)]
pub struct State<H: Handle> {
    pub desktops: Vec<Desktop<H>>,
    pub active_desktop: DesktopId,
    pub screen: Screen<H>,
    /// Number of windows adopted so far.
    pub num_clients: usize,
    pub actions: VecDeque<DisplayAction<H>>,
    pub rules: Vec<WindowRule>,
    pub border_width: u32,
    pub window_gap: u32,
    pub split_ratio: f32,
    registry: HashMap<WindowHandle<H>, WindowLocation>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        let mut names = config.desktop_names();
        if names.is_empty() {
            tracing::warn!("No desktops configured, creating a single one");
            names.push("1".to_string());
        }
        let desktops = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Desktop::new(id, name))
            .collect();

        Self {
            desktops,
            active_desktop: 0,
            screen: Screen::default(),
            num_clients: 0,
            actions: VecDeque::default(),
            rules: config.window_rules(),
            border_width: config.border_width(),
            window_gap: config.window_gap(),
            split_ratio: config.split_ratio(),
            registry: HashMap::default(),
        }
    }

    #[must_use]
    pub fn desktop(&self, id: DesktopId) -> Option<&Desktop<H>> {
        self.desktops.get(id)
    }

    pub fn desktop_mut(&mut self, id: DesktopId) -> Option<&mut Desktop<H>> {
        self.desktops.get_mut(id)
    }

    /// Find where a managed window lives.
    #[must_use]
    pub fn locate_window(&self, handle: &WindowHandle<H>) -> Option<WindowLocation> {
        let location = *self.registry.get(handle)?;
        // A registry entry whose node is gone would be a broken invariant, never hand it out.
        if self
            .desktop(location.desktop)
            .map_or(false, |d| d.contains(location.node))
        {
            Some(location)
        } else {
            tracing::warn!("Registry entry for {:?} points to a dead node", handle);
            None
        }
    }

    #[must_use]
    pub fn is_managed(&self, handle: &WindowHandle<H>) -> bool {
        self.locate_window(handle).is_some()
    }

    #[must_use]
    pub fn client(&self, location: WindowLocation) -> Option<&Client<H>> {
        self.desktop(location.desktop)?.client(location.node)
    }

    pub fn client_mut(&mut self, location: WindowLocation) -> Option<&mut Client<H>> {
        self.desktop_mut(location.desktop)?.client_mut(location.node)
    }

    #[must_use]
    pub fn make_node() -> Node<H> {
        Node::default()
    }

    /// Attach a node holding a client to a desktop and register its window.
    pub fn insert_node(&mut self, desktop: DesktopId, node: Node<H>) -> Option<WindowLocation> {
        let Some(handle) = node.client.as_ref().map(|c| c.handle) else {
            tracing::warn!("Refusing to insert a node without a client");
            return None;
        };
        let ratio = self.split_ratio;
        let id = self.desktop_mut(desktop)?.insert(node, ratio);
        let location = WindowLocation { desktop, node: id };
        self.registry.insert(handle, location);
        Some(location)
    }

    /// Detach and free a node together with its client, and forget its window.
    pub fn remove_node(&mut self, location: WindowLocation) -> Option<Client<H>> {
        let client = self
            .desktop_mut(location.desktop)?
            .remove(location.node)?;
        self.registry.remove(&client.handle);
        Some(client)
    }

    /// Every managed window, desktop by desktop, in tree order.
    #[must_use]
    pub fn client_list(&self) -> Vec<WindowHandle<H>> {
        self.desktops
            .iter()
            .flat_map(|d| d.clients().map(|c| c.handle).collect::<Vec<_>>())
            .collect()
    }

    pub fn update_client_list(&mut self) {
        let act = DisplayAction::UpdateClientList(self.client_list());
        self.actions.push_back(act);
    }

    /// Flip the floating flag of a client and lay its desktop out again.
    pub fn toggle_floating(&mut self, location: WindowLocation) {
        let Some(client) = self.client_mut(location) else {
            return;
        };
        let floating = !client.is_floating();
        client.set_floating(floating);
        let handle = client.handle;
        tracing::debug!("{:?} floating: {}", handle, floating);
        if floating && self.is_visible(location.desktop) {
            self.actions.push_back(DisplayAction::RaiseWindow(handle));
        }
        self.arrange(location.desktop);
    }

    /// Flip the fullscreen flag of a client, tell the client about it and lay its desktop out
    /// again.
    pub fn toggle_fullscreen(&mut self, location: WindowLocation) {
        let Some(client) = self.client_mut(location) else {
            return;
        };
        let fullscreen = !client.is_fullscreen();
        client.set_fullscreen(fullscreen);
        let handle = client.handle;
        tracing::debug!("{:?} fullscreen: {}", handle, fullscreen);
        self.actions
            .push_back(DisplayAction::SetFullscreenState(handle, fullscreen));
        if fullscreen && self.is_visible(location.desktop) {
            self.actions.push_back(DisplayAction::RaiseWindow(handle));
        }
        self.arrange(location.desktop);
    }

    /// Lay out a whole desktop on the screen.
    pub fn arrange(&mut self, desktop: DesktopId) {
        let root = self.desktop(desktop).and_then(|d| d.root);
        if let Some(root) = root {
            let screen = self.screen.xyhw;
            self.apply_layout(desktop, root, screen);
        }
    }

    #[must_use]
    pub fn is_visible(&self, desktop: DesktopId) -> bool {
        desktop == self.active_desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{MockHandle, Xyhw};

    fn state() -> State<MockHandle> {
        State::new(&TestConfig {
            desktops: vec!["one".to_string(), "two".to_string()],
            rules: vec![],
        })
    }

    fn node(handle: MockHandle) -> Node<MockHandle> {
        let mut node = State::<MockHandle>::make_node();
        node.client = Some(Client::new(WindowHandle(handle), Xyhw::default()));
        node
    }

    #[test]
    fn a_state_without_desktops_should_still_have_one() {
        let state = State::<MockHandle>::new(&TestConfig {
            desktops: vec![],
            rules: vec![],
        });
        assert_eq!(state.desktops.len(), 1);
    }

    #[test]
    fn inserted_windows_should_be_located() {
        let mut state = state();
        let location = state.insert_node(1, node(5)).unwrap();
        assert_eq!(state.locate_window(&WindowHandle(5)), Some(location));
        assert_eq!(location.desktop, 1);
    }

    #[test]
    fn empty_nodes_should_not_be_inserted() {
        let mut state = state();
        assert!(state.insert_node(0, State::make_node()).is_none());
        assert!(state.desktops[0].is_empty());
    }

    #[test]
    fn removed_windows_should_not_be_located() {
        let mut state = state();
        let location = state.insert_node(0, node(5)).unwrap();
        let client = state.remove_node(location).unwrap();
        assert_eq!(client.handle, WindowHandle(5));
        assert_eq!(state.locate_window(&WindowHandle(5)), None);
    }

    #[test]
    fn the_client_list_should_follow_desktop_order() {
        let mut state = state();
        state.insert_node(1, node(3));
        state.insert_node(0, node(1));
        state.insert_node(0, node(2));
        let expected: Vec<_> = [1, 2, 3].into_iter().map(WindowHandle).collect();
        assert_eq!(state.client_list(), expected);
    }

    #[test]
    fn toggling_fullscreen_twice_should_restore_the_flag() {
        let mut state = state();
        let location = state.insert_node(0, node(1)).unwrap();
        state.toggle_fullscreen(location);
        assert!(state.client(location).unwrap().is_fullscreen());
        state.toggle_fullscreen(location);
        assert!(!state.client(location).unwrap().is_fullscreen());
    }
}
