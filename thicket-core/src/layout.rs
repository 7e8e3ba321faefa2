//! Turn a desktop's tree into window placements.
use crate::models::{Desktop, DesktopId, Handle, NodeId, Orientation, WindowHandle, Xyhw};
use crate::state::State;
use crate::DisplayAction;

struct LayoutContext {
    screen: Xyhw,
    window_gap: u32,
    border_width: u32,
}

impl<H: Handle> State<H> {
    /// Recompute the rectangles of a subtree and, when the desktop is visible, tell the display
    /// server where its windows go.
    pub fn apply_layout(&mut self, desktop: DesktopId, node: NodeId, rect: Xyhw) {
        let visible = self.is_visible(desktop);
        let ctx = LayoutContext {
            screen: self.screen.xyhw,
            window_gap: self.window_gap,
            border_width: self.border_width,
        };
        let Some(desktop) = self.desktops.get_mut(desktop) else {
            return;
        };
        let mut placements = vec![];
        layout_node(desktop, node, rect, &ctx, &mut placements);
        if visible {
            placements.into_iter().for_each(|(handle, xyhw)| {
                self.actions
                    .push_back(DisplayAction::MoveResizeWindow(handle, xyhw));
            });
        }
    }
}

fn layout_node<H: Handle>(
    desktop: &mut Desktop<H>,
    id: NodeId,
    rect: Xyhw,
    ctx: &LayoutContext,
    placements: &mut Vec<(WindowHandle<H>, Xyhw)>,
) {
    let Some(node) = desktop.get_mut(id) else {
        return;
    };
    node.rectangle = rect;

    if let Some(client) = &node.client {
        let xyhw = if client.is_fullscreen() {
            ctx.screen
        } else if client.is_floating() {
            client.rectangle
        } else {
            rect.shrink(ctx.window_gap).without_border(ctx.border_width)
        };
        placements.push((client.handle, xyhw));
        return;
    }

    let (first, second) = (node.first_child, node.second_child);
    let (orientation, ratio) = (node.orientation, node.ratio);
    let first_vacant = first.map_or(true, |f| is_vacant(desktop, f));
    let second_vacant = second.map_or(true, |s| is_vacant(desktop, s));

    // A vacant side only holds floating windows, the other side gets everything.
    let (first_rect, second_rect) = if first_vacant || second_vacant {
        (rect, rect)
    } else {
        match orientation {
            Orientation::Vertical => rect.split_vertical(ratio),
            Orientation::Horizontal => rect.split_horizontal(ratio),
        }
    };

    if let Some(first) = first {
        layout_node(desktop, first, first_rect, ctx, placements);
    }
    if let Some(second) = second {
        layout_node(desktop, second, second_rect, ctx, placements);
    }
}

fn is_vacant<H: Handle>(desktop: &Desktop<H>, id: NodeId) -> bool {
    let Some(node) = desktop.get(id) else {
        return true;
    };
    if node.is_leaf() {
        return node.is_floating_leaf();
    }
    node.first_child.map_or(true, |f| is_vacant(desktop, f))
        && node.second_child.map_or(true, |s| is_vacant(desktop, s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{Client, MockHandle, Screen};

    const SCREEN: Xyhw = Xyhw::new(0, 0, 1000, 500);

    fn state() -> State<MockHandle> {
        let mut state = State::new(&TestConfig {
            desktops: vec!["one".to_string(), "two".to_string()],
            rules: vec![],
        });
        state.screen = Screen::new(WindowHandle(0), SCREEN);
        state
    }

    fn add(state: &mut State<MockHandle>, desktop: DesktopId, handle: MockHandle, rect: Xyhw) {
        let mut node = State::make_node();
        node.client = Some(Client::new(WindowHandle(handle), rect));
        state.insert_node(desktop, node);
    }

    fn placements(state: &State<MockHandle>) -> Vec<(MockHandle, Xyhw)> {
        state
            .actions
            .iter()
            .filter_map(|a| match a {
                DisplayAction::MoveResizeWindow(h, xyhw) => Some((h.0, *xyhw)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn a_single_window_should_fill_the_screen() {
        let mut state = state();
        add(&mut state, 0, 1, Xyhw::default());
        state.arrange(0);
        assert_eq!(placements(&state), vec![(1, SCREEN)]);
    }

    #[test]
    fn two_windows_should_share_the_screen() {
        let mut state = state();
        add(&mut state, 0, 1, Xyhw::default());
        state.arrange(0);
        state.actions.clear();
        add(&mut state, 0, 2, Xyhw::default());
        state.arrange(0);
        assert_eq!(
            placements(&state),
            vec![
                (1, Xyhw::new(0, 0, 500, 500)),
                (2, Xyhw::new(500, 0, 500, 500)),
            ]
        );
    }

    #[test]
    fn gaps_and_borders_should_shrink_tiled_windows() {
        let mut state = state();
        state.window_gap = 5;
        state.border_width = 2;
        add(&mut state, 0, 1, Xyhw::default());
        state.arrange(0);
        assert_eq!(placements(&state), vec![(1, Xyhw::new(5, 5, 986, 486))]);
    }

    #[test]
    fn oversized_gaps_should_keep_windows_on_the_screen() {
        let mut state = state();
        state.window_gap = 3_000_000_000;
        state.border_width = u32::MAX;
        add(&mut state, 0, 1, Xyhw::default());
        state.arrange(0);
        assert_eq!(placements(&state), vec![(1, Xyhw::new(500, 250, 1, 1))]);
    }

    #[test]
    fn floating_windows_should_keep_their_rectangle_and_leave_space() {
        let mut state = state();
        add(&mut state, 0, 1, Xyhw::default());
        add(&mut state, 0, 2, Xyhw::new(30, 40, 200, 100));
        let location = state.locate_window(&WindowHandle(2)).unwrap();
        state.toggle_floating(location);
        state.actions.clear();
        state.arrange(0);
        assert_eq!(
            placements(&state),
            vec![(1, SCREEN), (2, Xyhw::new(30, 40, 200, 100))]
        );
    }

    #[test]
    fn fullscreen_windows_should_cover_the_screen() {
        let mut state = state();
        add(&mut state, 0, 1, Xyhw::default());
        add(&mut state, 0, 2, Xyhw::default());
        let location = state.locate_window(&WindowHandle(2)).unwrap();
        state.toggle_fullscreen(location);
        let placed: Vec<_> = placements(&state);
        assert!(placed.contains(&(2, SCREEN)));
        assert!(placed.contains(&(1, Xyhw::new(0, 0, 500, 500))));
    }

    #[test]
    fn hidden_desktops_should_not_move_windows() {
        let mut state = state();
        add(&mut state, 1, 1, Xyhw::default());
        state.arrange(1);
        assert!(placements(&state).is_empty());
        let root = state.desktops[1].root.unwrap();
        assert_eq!(state.desktops[1].get(root).unwrap().rectangle, SCREEN);
    }
}
