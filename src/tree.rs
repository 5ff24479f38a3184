//! The tree itself: who owns which node and the operations that change the shape of the tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting the same key again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was there to remove.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ptr::NonNull;

use tracing::{instrument, trace};

use crate::node::NodeRef;

/// A slot that can own a node: the root of a tree or one of a node's two children.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree of unique keys. This can be used for inserting, finding, and
/// removing keys and for visiting them in several orders.
///
/// Nodes are never rebalanced so the shape of the tree depends entirely on the order keys were
/// inserted in.
pub struct OrderedTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

// SAFETY: The only thing stopping these from being derived is `Node::parent`, which is never
// dereferenced. It's only turned into a `NodeId` for comparisons and printing. Everything else a
// tree owns is a `T` or a `Box` of one, so sending or sharing the tree is as safe as doing so with
// its keys.
unsafe impl<T: Send> Send for OrderedTree<T> {}
unsafe impl<T: Sync> Sync for OrderedTree<T> {}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        // Letting `Box` drop each subtree recursively overflows the stack on long, list-shaped
        // trees so detach every node before it's dropped.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_deref().map(|root| root.clone_boxed(None)),
            len: self.len,
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree with just a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let balanced: OrderedTree<_> = [2, 1, 3].into();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// // Sorted input degrades into a list.
    /// let list: OrderedTree<_> = [1, 2, 3].into();
    /// assert_eq!(list.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// A handle to the root node, if there is one.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(NodeRef::new)
    }

    /// The smallest key in the tree.
    pub fn first(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.leftmost().key)
    }

    /// The largest key in the tree.
    pub fn last(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.rightmost().key)
    }

    /// Moves every key out into a new tree, leaving this one empty. This is the same as
    /// [`std::mem::take`].
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Drops every key in the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Potentially finds the stored key equal to the given one. If no node has the corresponding
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<String> = ["b".to_string(), "a".to_string()].into();
    ///
    /// assert_eq!(tree.find("a").map(String::as_str), Some("a"));
    /// assert_eq!(tree.find("z"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|node| node.key())
    }

    /// Like [`OrderedTree::find`] but returns a handle to the whole node so its links can be
    /// inspected.
    pub fn find_node<Q>(&self, key: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root
            .as_deref()
            .and_then(|root| root.find(key))
            .map(NodeRef::new)
    }

    /// Whether the tree holds a key equal to the given one.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Inserts the given key into the tree. Returns `false`, leaving the tree untouched, if an
    /// equal key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = match self.root.as_deref_mut() {
            Some(root) => root.insert(key),
            None => {
                self.root = Some(Node::new_boxed(key, None));
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        trace!(inserted, len = self.len, "insert finished");

        inserted
    }

    /// Removes the node holding a key equal to the given one. Returns `false`, leaving the tree
    /// untouched, if there is no such key.
    ///
    /// A node with two children isn't unlinked itself. Instead it takes over the key of its
    /// in-order successor (the smallest key in its right subtree) and that successor's node is
    /// unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into();
    /// let root = tree.root().unwrap().id();
    ///
    /// assert!(tree.remove(&2));
    ///
    /// // The root node stays where it was but now holds its successor's key.
    /// assert_eq!(tree.root().unwrap().id(), root);
    /// assert_eq!(tree.root().unwrap().key(), &3);
    /// assert!(!tree.remove(&2));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = Node::remove(&mut self.root, key);
        if removed {
            self.len -= 1;
        }
        trace!(removed, len = self.len, "remove finished");

        removed
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    /// Inserts every key in order. Keys that are already present are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedTree<T>
where
    T: Ord,
{
    fn from(keys: [T; N]) -> Self {
        keys.into_iter().collect()
    }
}

pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// The node holding this one as a child, or `None` for the root. This is only ever recorded,
    /// never followed.
    pub(crate) parent: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn new_boxed(key: T, parent: Option<NonNull<Self>>) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            parent,
        })
    }

    /// Copies this whole subtree. The copies' parent links point at the other copies, never back
    /// into the original.
    fn clone_boxed(&self, parent: Option<NonNull<Self>>) -> Box<Self>
    where
        T: Clone,
    {
        let mut node = Self::new_boxed(self.key.clone(), parent);
        // The `Box` keeps the node at this address for as long as it lives.
        let this = NonNull::from(&*node);
        node.left = self.left.as_deref().map(|left| left.clone_boxed(Some(this)));
        node.right = self.right.as_deref().map(|right| right.clone_boxed(Some(this)));
        node
    }

    fn height(link: &Link<T>) -> usize {
        link.as_deref().map_or(0, |node| {
            let left_height = Self::height(&node.left);
            let right_height = Self::height(&node.right);
            left_height.max(right_height) + 1
        })
    }

    fn leftmost(&self) -> &Self {
        match self.left.as_deref() {
            Some(left) => left.leftmost(),
            None => self,
        }
    }

    fn rightmost(&self) -> &Self {
        match self.right.as_deref() {
            Some(right) => right.rightmost(),
            None => self,
        }
    }

    fn find<Q>(&self, key: &Q) -> Option<&Self>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(key)),
        }
    }

    fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = match key.cmp(&self.key) {
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(key),
                None => {
                    let parent = NonNull::from(&*self);
                    self.left = Some(Self::new_boxed(key, Some(parent)));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(key),
                None => {
                    let parent = NonNull::from(&*self);
                    self.right = Some(Self::new_boxed(key, Some(parent)));
                    true
                }
            },
        };

        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(self.key < right.key);
            }
        }

        inserted
    }

    /// Removes `key` from the subtree owned by `slot`, replacing the contents of `slot` if the
    /// node it owns is the one being unlinked.
    fn remove<Q>(slot: &mut Link<T>, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node) = slot.as_deref_mut() else {
            return false;
        };
        match key.cmp(node.key.borrow()) {
            Ordering::Less => Self::remove(&mut node.left, key),
            Ordering::Greater => Self::remove(&mut node.right, key),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                // The successor is the leftmost node of the right subtree so it has no left child
                // and is always unlinked directly.
                if let Some(successor) = Self::take_leftmost(&mut node.right) {
                    node.key = successor;
                }
                true
            }
            Ordering::Equal => {
                Self::unlink(slot);
                true
            }
        }
    }

    /// Unlinks the leftmost node of the subtree owned by `slot` and returns its key.
    fn take_leftmost(slot: &mut Link<T>) -> Option<T> {
        let node = slot.as_deref_mut()?;
        if node.left.is_some() {
            return Self::take_leftmost(&mut node.left);
        }
        Self::unlink(slot).map(|leftmost| leftmost.key)
    }

    /// Takes the node out of `slot` and puts its only child (if any) in its place, re-parenting
    /// that child to whatever owned the removed node. The removed node must not have two
    /// children.
    fn unlink(slot: &mut Link<T>) -> Option<Box<Self>> {
        let mut removed = slot.take()?;
        debug_assert!(
            removed.left.is_none() || removed.right.is_none(),
            "unlinked a node with two children"
        );

        let mut child = removed.left.take().or_else(|| removed.right.take());
        if let Some(child) = child.as_deref_mut() {
            child.parent = removed.parent;
        }
        *slot = child;

        Some(removed)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and removes we have the same set of keys in both.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut OrderedTree<K>, set: &mut BTreeSet<K>)
    where
        K: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    assert_eq!(bst.insert(k.clone()), set.insert(k.clone()));
                }
                Op::Remove(k) => {
                    assert_eq!(bst.remove(k), set.remove(k));
                }
                Op::Iter => {
                    let mut keys = Vec::new();
                    bst.in_order(|k| keys.push(k));
                    assert!(keys.iter().copied().eq(set.iter()));
                }
            }
            assert_eq!(bst.len(), set.len());
            assert_eq!(bst.validate(), Ok(()));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = OrderedTree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|key| tree.find(key) == Some(key))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: OrderedTree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.find(x) == Some(x))
        }
    }

    quickcheck::quickcheck! {
        fn removing_everything_empties_the_tree(xs: Vec<i8>, order: Vec<i8>) -> bool {
            let mut tree: OrderedTree<_> = xs.iter().copied().collect();

            for x in order.iter().chain(&xs) {
                tree.remove(x);
            }

            tree.is_empty() && tree.height() == 0 && tree.root().is_none()
        }
    }

    quickcheck::quickcheck! {
        fn height_never_exceeds_len(xs: Vec<i8>) -> bool {
            let tree: OrderedTree<_> = xs.into_iter().collect();

            tree.height() <= tree.len() && (tree.len() == 0) == (tree.height() == 0)
        }
    }
}
