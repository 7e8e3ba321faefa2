use super::{Client, DesktopId, Handle, Node, NodeId, Orientation};
use slotmap::SlotMap;

/// An independent layout tree with its own focus cursor.
///
/// Nodes live in an arena and are addressed by generational [`NodeId`]s, so an id that outlived
/// its node resolves to nothing instead of to a recycled slot.
#[derive(Debug, Clone)]
pub struct Desktop<H: Handle> {
    pub id: DesktopId,
    pub name: String,
    pub root: Option<NodeId>,
    pub focus: Option<NodeId>,
    nodes: SlotMap<NodeId, Node<H>>,
}

impl<H: Handle> Desktop<H> {
    #[must_use]
    pub fn new(id: DesktopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            root: None,
            focus: None,
            nodes: SlotMap::with_key(),
        }
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<H>> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<H>> {
        self.nodes.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn client(&self, id: NodeId) -> Option<&Client<H>> {
        self.nodes.get(id)?.client.as_ref()
    }

    pub fn client_mut(&mut self, id: NodeId) -> Option<&mut Client<H>> {
        self.nodes.get_mut(id)?.client.as_mut()
    }

    /// Number of clients on this desktop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.values().filter(|n| n.client.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Leaves in in-order traversal.
    #[must_use]
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = vec![];
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if node.is_leaf() {
                leaves.push(id);
            } else {
                stack.extend(node.second_child);
                stack.extend(node.first_child);
            }
        }
        leaves
    }

    pub fn clients(&self) -> impl Iterator<Item = &Client<H>> + '_ {
        self.leaves()
            .into_iter()
            .filter_map(move |id| self.client(id))
    }

    #[must_use]
    pub fn first_leaf(&self, from: NodeId) -> Option<NodeId> {
        let mut current = from;
        loop {
            let node = self.nodes.get(current)?;
            if node.is_leaf() {
                return Some(current);
            }
            current = node.first_child.or(node.second_child)?;
        }
    }

    #[must_use]
    pub fn last_leaf(&self, from: NodeId) -> Option<NodeId> {
        let mut current = from;
        loop {
            let node = self.nodes.get(current)?;
            if node.is_leaf() {
                return Some(current);
            }
            current = node.second_child.or(node.first_child)?;
        }
    }

    /// Attach a node to the tree. The focused leaf (or the last leaf when nothing is focused) is
    /// split in two: the old leaf becomes the first child, the new node the second one.
    /// Focus is left untouched.
    pub fn insert(&mut self, mut node: Node<H>, ratio: f32) -> NodeId {
        node.parent = None;
        node.first_child = None;
        node.second_child = None;

        let target = self
            .focus
            .filter(|id| self.nodes.get(*id).map_or(false, Node::is_leaf))
            .or_else(|| self.root.and_then(|root| self.last_leaf(root)));
        let Some((target, grand_parent, rectangle)) =
            target.and_then(|id| self.nodes.get(id).map(|n| (id, n.parent, n.rectangle)))
        else {
            let id = self.nodes.insert(node);
            self.root = Some(id);
            return id;
        };

        let orientation = if rectangle.h > rectangle.w {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let parent = self.nodes.insert(Node {
            parent: grand_parent,
            first_child: Some(target),
            orientation,
            ratio,
            rectangle,
            ..Node::default()
        });
        node.parent = Some(parent);
        let id = self.nodes.insert(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.second_child = Some(id);
        }
        if let Some(t) = self.nodes.get_mut(target) {
            t.parent = Some(parent);
        }
        match grand_parent {
            Some(grand_parent) => self.replace_child(grand_parent, target, parent),
            None => self.root = Some(parent),
        }
        id
    }

    /// Detach a leaf from the tree and free it, returning the client it held. Its sibling takes
    /// the place of their parent.
    pub fn remove(&mut self, id: NodeId) -> Option<Client<H>> {
        if !self.nodes.get(id)?.is_leaf() {
            return None;
        }
        let removed = self.nodes.remove(id)?;
        match removed.parent {
            None => {
                self.root = None;
            }
            Some(parent) => {
                let sibling = self.nodes.get(parent).and_then(|p| {
                    if p.first_child == Some(id) {
                        p.second_child
                    } else {
                        p.first_child
                    }
                });
                let grand_parent = self.nodes.remove(parent).and_then(|p| p.parent);
                if let Some(sibling) = sibling {
                    if let Some(s) = self.nodes.get_mut(sibling) {
                        s.parent = grand_parent;
                    }
                    match grand_parent {
                        Some(grand_parent) => self.replace_child(grand_parent, parent, sibling),
                        None => self.root = Some(sibling),
                    }
                    if self.focus == Some(id) {
                        self.focus = self.first_leaf(sibling);
                    }
                }
            }
        }
        if self.focus == Some(id) {
            self.focus = None;
        }
        removed.client
    }

    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if let Some(p) = self.nodes.get_mut(parent) {
            if p.first_child == Some(old) {
                p.first_child = Some(new);
            } else if p.second_child == Some(old) {
                p.second_child = Some(new);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowHandle, Xyhw};

    fn leaf(handle: MockHandle) -> Node<MockHandle> {
        Node {
            client: Some(Client::new(WindowHandle(handle), Xyhw::default())),
            ..Node::default()
        }
    }

    fn handles(desktop: &Desktop<MockHandle>) -> Vec<MockHandle> {
        desktop.clients().map(|c| c.handle.0).collect()
    }

    #[test]
    fn the_first_node_should_become_the_root() {
        let mut desktop = Desktop::new(0, "one");
        let id = desktop.insert(leaf(1), 0.5);
        assert_eq!(desktop.root, Some(id));
        assert_eq!(desktop.focus, None);
        assert_eq!(desktop.len(), 1);
    }

    #[test]
    fn inserting_should_split_the_focused_leaf() {
        let mut desktop = Desktop::new(0, "one");
        let first = desktop.insert(leaf(1), 0.5);
        let _second = desktop.insert(leaf(2), 0.5);
        desktop.focus = Some(first);
        desktop.insert(leaf(3), 0.5);
        assert_eq!(handles(&desktop), vec![1, 3, 2]);
        let parent = desktop.get(first).and_then(|n| n.parent).unwrap();
        assert_eq!(desktop.get(parent).unwrap().first_child, Some(first));
    }

    #[test]
    fn inserting_without_focus_should_split_the_last_leaf() {
        let mut desktop = Desktop::new(0, "one");
        desktop.insert(leaf(1), 0.5);
        desktop.insert(leaf(2), 0.5);
        desktop.insert(leaf(3), 0.5);
        assert_eq!(handles(&desktop), vec![1, 2, 3]);
    }

    #[test]
    fn a_tall_leaf_should_be_split_horizontally() {
        let mut desktop = Desktop::new(0, "one");
        let first = desktop.insert(leaf(1), 0.5);
        desktop.get_mut(first).unwrap().rectangle = Xyhw::new(0, 0, 100, 400);
        desktop.insert(leaf(2), 0.5);
        let root = desktop.root.unwrap();
        assert_eq!(desktop.get(root).unwrap().orientation, Orientation::Horizontal);
    }

    #[test]
    fn removing_should_promote_the_sibling() {
        let mut desktop = Desktop::new(0, "one");
        let first = desktop.insert(leaf(1), 0.5);
        let second = desktop.insert(leaf(2), 0.5);
        let removed = desktop.remove(second).unwrap();
        assert_eq!(removed.handle, WindowHandle(2));
        assert_eq!(desktop.root, Some(first));
        assert_eq!(desktop.get(first).unwrap().parent, None);
        assert!(!desktop.contains(second));
    }

    #[test]
    fn removing_the_focused_leaf_should_focus_its_sibling() {
        let mut desktop = Desktop::new(0, "one");
        desktop.insert(leaf(1), 0.5);
        let second = desktop.insert(leaf(2), 0.5);
        let third = desktop.insert(leaf(3), 0.5);
        desktop.focus = Some(third);
        desktop.remove(third);
        assert_eq!(desktop.focus, Some(second));
    }

    #[test]
    fn removing_the_last_leaf_should_empty_the_desktop() {
        let mut desktop = Desktop::new(0, "one");
        let only = desktop.insert(leaf(1), 0.5);
        desktop.focus = Some(only);
        desktop.remove(only);
        assert!(desktop.is_empty());
        assert_eq!(desktop.focus, None);
        assert_eq!(desktop.len(), 0);
    }

    #[test]
    fn internal_nodes_cannot_be_removed() {
        let mut desktop = Desktop::new(0, "one");
        desktop.insert(leaf(1), 0.5);
        desktop.insert(leaf(2), 0.5);
        let root = desktop.root.unwrap();
        assert!(desktop.remove(root).is_none());
        assert_eq!(desktop.len(), 2);
    }
}
