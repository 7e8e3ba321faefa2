use crate::models::{DesktopId, Handle, NodeId};
use crate::state::State;
use crate::DisplayAction;

impl<H: Handle> State<H> {
    /// Move the focus cursor of a desktop to one of its windows.
    ///
    /// With `switch_desktop` the desktop is brought on screen if it is not already, and the
    /// window also receives input focus.
    /// Returns true if the node held a window.
    pub fn focus_node(&mut self, desktop: DesktopId, node: NodeId, switch_desktop: bool) -> bool {
        let Some(handle) = self
            .desktop(desktop)
            .and_then(|d| d.client(node))
            .map(|c| c.handle)
        else {
            return false;
        };
        if let Some(d) = self.desktop_mut(desktop) {
            d.focus = Some(node);
        }

        if switch_desktop && !self.is_visible(desktop) {
            self.switch_desktop(desktop);
        }
        if self.is_visible(desktop) {
            self.actions
                .push_back(DisplayAction::SetActiveWindow(Some(handle)));
        }
        if switch_desktop {
            self.actions.push_back(DisplayAction::SetInputFocus(handle));
        }
        true
    }

    fn switch_desktop(&mut self, desktop: DesktopId) {
        tracing::debug!("Switching from desktop {} to {}", self.active_desktop, desktop);
        let hidden: Vec<_> = self
            .desktop(self.active_desktop)
            .map(|d| d.clients().map(|c| c.handle).collect())
            .unwrap_or_default();
        for handle in hidden {
            self.actions.push_back(DisplayAction::HideWindow(handle));
        }

        self.active_desktop = desktop;
        self.actions
            .push_back(DisplayAction::SetCurrentDesktop(desktop));
        self.arrange(desktop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{Client, MockHandle, Screen, WindowHandle, WindowLocation, Xyhw};

    fn state() -> State<MockHandle> {
        let mut state = State::new(&TestConfig {
            desktops: vec!["one".to_string(), "two".to_string()],
            rules: vec![],
        });
        state.screen = Screen::new(WindowHandle(0), Xyhw::new(0, 0, 1000, 500));
        state
    }

    fn add(state: &mut State<MockHandle>, desktop: DesktopId, handle: MockHandle) -> WindowLocation {
        let mut node = State::make_node();
        node.client = Some(Client::new(WindowHandle(handle), Xyhw::default()));
        state.insert_node(desktop, node).unwrap()
    }

    #[test]
    fn focusing_should_move_the_cursor_and_publish_the_window() {
        let mut state = state();
        let location = add(&mut state, 0, 1);
        assert!(state.focus_node(0, location.node, false));
        assert_eq!(state.desktops[0].focus, Some(location.node));
        assert_eq!(
            state.actions.pop_front(),
            Some(DisplayAction::SetActiveWindow(Some(WindowHandle(1))))
        );
        assert!(state.actions.is_empty());
    }

    #[test]
    fn passive_focus_should_not_switch_desktops() {
        let mut state = state();
        let location = add(&mut state, 1, 2);
        assert!(state.focus_node(1, location.node, false));
        assert_eq!(state.active_desktop, 0);
        assert_eq!(state.desktops[1].focus, Some(location.node));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn activation_should_switch_desktops_and_hide_the_old_one() {
        let mut state = state();
        add(&mut state, 0, 1);
        let location = add(&mut state, 1, 2);
        assert!(state.focus_node(1, location.node, true));
        assert_eq!(state.active_desktop, 1);

        let actions: Vec<_> = state.actions.drain(..).collect();
        assert!(actions.contains(&DisplayAction::HideWindow(WindowHandle(1))));
        assert!(actions.contains(&DisplayAction::SetCurrentDesktop(1)));
        assert!(actions.contains(&DisplayAction::MoveResizeWindow(
            WindowHandle(2),
            Xyhw::new(0, 0, 1000, 500)
        )));
        assert_eq!(
            actions.last(),
            Some(&DisplayAction::SetInputFocus(WindowHandle(2)))
        );
    }

    #[test]
    fn focusing_an_empty_node_should_do_nothing() {
        let mut state = state();
        let location = add(&mut state, 0, 1);
        let parent = {
            add(&mut state, 0, 2);
            state.desktops[0].get(location.node).unwrap().parent.unwrap()
        };
        assert!(!state.focus_node(0, parent, true));
        assert_eq!(state.desktops[0].focus, None);
        assert!(state.actions.is_empty());
    }
}
