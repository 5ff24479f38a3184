//! Structural self-checks.

use thiserror::Error;

use crate::node::{NodeId, NodeRef};
use crate::tree::{Link, OrderedTree};

/// A broken invariant found by [`OrderedTree::validate`].
///
/// None of the tree's own operations should ever produce one of these. They exist so tests (and
/// anyone debugging a tree) can check the whole structure in one call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A node's key isn't strictly between the keys of the ancestors it sits under.
    #[error("node {node} is out of order with respect to its ancestors")]
    OutOfOrder {
        /// The misplaced node.
        node: NodeId,
    },

    /// A node's parent link doesn't point at the node holding it.
    #[error("node {node} records parent {found:?} but is held by {expected:?}")]
    ParentMismatch {
        /// The node with the stale link.
        node: NodeId,
        /// The node actually holding it, `None` for the root.
        expected: Option<NodeId>,
        /// What the node's parent link says.
        found: Option<NodeId>,
    },

    /// The tree's length doesn't match the number of nodes reachable from the root.
    #[error("tree records {recorded} keys but {counted} are reachable")]
    LenMismatch {
        /// What [`OrderedTree::len`] reports.
        recorded: usize,
        /// How many nodes were found.
        counted: usize,
    },
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Walks the whole tree checking that keys are ordered, that every parent link points at the
    /// node holding it and that [`OrderedTree::len`] is accurate.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (0..10).rev().collect();
    /// tree.remove(&5);
    ///
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        let mut counted = 0;
        check(&self.root, None, None, None, &mut counted)?;

        if counted != self.len {
            return Err(InvariantError::LenMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

/// Checks the subtree in `link`, whose keys must lie strictly between `lower` and `upper` and whose
/// root must be held by `parent`.
fn check<'a, T>(
    link: &'a Link<T>,
    parent: Option<NodeId>,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
    counted: &mut usize,
) -> Result<(), InvariantError>
where
    T: Ord,
{
    let Some(node) = link.as_deref() else {
        return Ok(());
    };
    let handle = NodeRef::new(node);
    let id = handle.id();

    if handle.parent_id() != parent {
        return Err(InvariantError::ParentMismatch {
            node: id,
            expected: parent,
            found: handle.parent_id(),
        });
    }
    if lower.is_some_and(|lower| node.key <= *lower) || upper.is_some_and(|upper| node.key >= *upper)
    {
        return Err(InvariantError::OutOfOrder { node: id });
    }
    *counted += 1;

    check(&node.left, Some(id), lower, Some(&node.key), counted)?;
    check(&node.right, Some(id), Some(&node.key), upper, counted)
}
