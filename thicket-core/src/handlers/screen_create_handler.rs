use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, Screen};
use crate::Config;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Take over the geometry of the screen and lay the visible desktop out on it.
    pub fn screen_create_handler(&mut self, screen: Screen<H>) -> bool {
        tracing::debug!("Screen {:?} at {:?}", screen.root, screen.xyhw);
        self.state.screen = screen;
        let active = self.state.active_desktop;
        self.state.arrange(active);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_helpers::{adopt, manager};
    use crate::models::{WindowHandle, Xyhw};
    use crate::DisplayAction;

    #[test]
    fn a_new_screen_should_relayout_the_active_desktop() {
        let mut manager = manager();
        adopt(&mut manager, 1);
        let smaller = Xyhw::new(0, 0, 800, 600);
        manager.screen_create_handler(Screen::new(WindowHandle(0), smaller));
        assert_eq!(manager.state.screen.xyhw, smaller);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(WindowHandle(1), smaller))
        );
    }
}
