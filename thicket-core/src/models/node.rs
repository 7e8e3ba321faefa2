use super::{Client, Handle, Xyhw};
use slotmap::new_key_type;

new_key_type! {
    /// Stable index of a node inside a desktop's arena.
    pub struct NodeId;
}

/// How an internal node divides its rectangle between its children.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Children side by side.
    #[default]
    Vertical,
    /// Children on top of each other.
    Horizontal,
}

/// A position in a desktop's layout tree. Leaves hold a client, internal nodes hold two children.
#[derive(Debug, Clone)]
pub struct Node<H: Handle> {
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub second_child: Option<NodeId>,
    pub orientation: Orientation,
    pub ratio: f32,
    /// The rectangle given to this node by the last layout pass.
    pub rectangle: Xyhw,
    pub client: Option<Client<H>>,
}

impl<H: Handle> Default for Node<H> {
    fn default() -> Self {
        Self {
            parent: None,
            first_child: None,
            second_child: None,
            orientation: Orientation::default(),
            ratio: 0.5,
            rectangle: Xyhw::default(),
            client: None,
        }
    }
}

impl<H: Handle> Node<H> {
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none() && self.second_child.is_none()
    }

    /// Floating leaves do not take any tiled space.
    #[must_use]
    pub fn is_floating_leaf(&self) -> bool {
        self.client.as_ref().map_or(false, Client::is_floating)
    }
}
