//! Read-only handles to the nodes of an [`OrderedTree`](crate::OrderedTree).

use std::fmt;
use std::ptr::NonNull;

use crate::tree::Node;

/// The identity of a node for as long as it's in a tree. Two handles with the same `NodeId` refer
/// to the same node.
///
/// Nodes never move once they're allocated so this is derived from the node's address. An id
/// carries no lifetime though, so once its node is removed the same id may be handed out again.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of<T>(node: &Node<T>) -> Self {
        Self(node as *const Node<T> as usize)
    }

    pub(crate) fn from_ptr<T>(node: NonNull<Node<T>>) -> Self {
        Self(node.as_ptr() as usize)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:#x})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A borrowed handle to one node of a tree. It exposes the node's key and the identities of the
/// nodes it's linked to.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

/// Manual implementations so handles are `Copy` even when `T` isn't.
impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.node.key)
            .field("id", &self.id())
            .field("parent", &self.parent_id())
            .field("left", &self.left_id())
            .field("right", &self.right_id())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        Self { node }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// This node's identity.
    pub fn id(&self) -> NodeId {
        NodeId::of(self.node)
    }

    /// The identity of the node holding this one as a child, or `None` for the root.
    pub fn parent_id(&self) -> Option<NodeId> {
        self.node.parent.map(NodeId::from_ptr)
    }

    /// The left child, holding smaller keys.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_deref().map(NodeRef::new)
    }

    /// The right child, holding larger keys.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_deref().map(NodeRef::new)
    }

    /// The identity of the left child.
    pub fn left_id(&self) -> Option<NodeId> {
        self.left().map(|n| n.id())
    }

    /// The identity of the right child.
    pub fn right_id(&self) -> Option<NodeId> {
        self.right().map(|n| n.id())
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}
