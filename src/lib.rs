//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes
//! remember their parent, mostly for educational and debugging purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. [`OrderedTree`] does not rebalance
//! itself, so inserting keys in sorted order produces a tree shaped like a
//! linked list with `O(N)` operations.
//!
//! Every node also keeps a non-owning back-reference to its parent. It is never
//! followed; it only exists so that [`OrderedTree::debug_print_level_order`] and
//! [`OrderedTree::validate`] can show and check how the nodes are linked.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = [50, 39, 65].into();
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(50));
//! assert_eq!(tree.len(), 3);
//!
//! let mut levels = Vec::new();
//! tree.level_order(|node, level| levels.push((*node.key(), level)));
//! assert_eq!(levels, [(50, 1), (39, 2), (65, 2)]);
//!
//! assert!(tree.remove(&50));
//! assert_eq!(tree.to_string(), "tree::size = 2. contents = { 39, 65, } ");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod print;
mod traverse;
mod tree;


pub use error::InvariantError;
pub use node::{NodeId, NodeRef};
pub use print::LevelOrderPrinter;
pub use tree::OrderedTree;
