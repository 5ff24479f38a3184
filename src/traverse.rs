//! Read-only walks over every key of a tree.
//!
//! Each walk pushes keys into a visitor as it goes rather than handing out an iterator. Calling
//! one again walks the tree again from the root.

use std::collections::VecDeque;

use crate::node::NodeRef;
use crate::tree::{Link, OrderedTree};

impl<T> OrderedTree<T> {
    /// Visits the left subtree, then the key, then the right subtree. This yields keys in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 3, 1].into();
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|key| keys.push(*key));
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        in_order(&self.root, &mut f);
    }

    /// Visits the key, then the left subtree, then the right subtree.
    pub fn pre_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        pre_order(&self.root, &mut f);
    }

    /// Visits the left subtree, then the right subtree, then the key.
    pub fn post_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        post_order(&self.root, &mut f);
    }

    /// Visits nodes breadth first: the root, then all of its children, then all of their children
    /// and so on, left to right within each level. The visitor also receives the level of each
    /// node, starting with 1 for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [50, 39, 65, 70].into();
    ///
    /// let mut visited = Vec::new();
    /// tree.level_order(|node, level| visited.push((*node.key(), level)));
    /// assert_eq!(visited, [(50, 1), (39, 2), (65, 2), (70, 3)]);
    /// ```
    pub fn level_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(NodeRef<'a, T>, usize),
    {
        let Some(root) = self.root.as_deref() else {
            return;
        };

        let mut queue = VecDeque::new();
        queue.push_back((root, 1));

        while let Some((node, level)) = queue.pop_front() {
            f(NodeRef::new(node), level);

            if let Some(left) = node.left.as_deref() {
                queue.push_back((left, level + 1));
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back((right, level + 1));
            }
        }
    }
}

fn in_order<'a, T>(link: &'a Link<T>, f: &mut impl FnMut(&'a T)) {
    if let Some(node) = link.as_deref() {
        in_order(&node.left, f);
        f(&node.key);
        in_order(&node.right, f);
    }
}

fn pre_order<'a, T>(link: &'a Link<T>, f: &mut impl FnMut(&'a T)) {
    if let Some(node) = link.as_deref() {
        f(&node.key);
        pre_order(&node.left, f);
        pre_order(&node.right, f);
    }
}

fn post_order<'a, T>(link: &'a Link<T>, f: &mut impl FnMut(&'a T)) {
    if let Some(node) = link.as_deref() {
        post_order(&node.left, f);
        post_order(&node.right, f);
        f(&node.key);
    }
}
