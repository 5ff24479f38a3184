//! Human readable renderings of a tree.

use std::fmt;

use tracing::debug;

use crate::node::{NodeId, NodeRef};
use crate::tree::OrderedTree;

/// How a [`LevelOrderPrinter`] writes each node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rendering {
    /// Just the key.
    Plain,
    /// The key plus the identities of the node and everything it's linked to.
    Diagnostic,
}

/// Writes the nodes of a level order walk into a sink, one per line, printing a
/// `current level = N` header whenever the level changes.
///
/// # Examples
///
/// ```
/// use ordered_tree::{LevelOrderPrinter, OrderedTree};
///
/// let tree: OrderedTree<_> = [50, 39, 65].into();
///
/// let mut out = String::new();
/// let mut printer = LevelOrderPrinter::new(&mut out);
/// tree.level_order(|node, level| printer.visit(node, level).unwrap());
///
/// assert_eq!(
///     out,
///     "\ncurrent level = 1\n50, \n\ncurrent level = 2\n39, \n65, \n"
/// );
/// ```
pub struct LevelOrderPrinter<'w, W> {
    sink: &'w mut W,
    rendering: Rendering,
    current_level: usize,
    visited: usize,
}

impl<'w, W> LevelOrderPrinter<'w, W>
where
    W: fmt::Write,
{
    /// A printer that writes only each node's key.
    pub fn new(sink: &'w mut W) -> Self {
        Self::with_rendering(sink, Rendering::Plain)
    }

    /// A printer that writes each node's key along with its identity and the identities of its
    /// parent and children.
    pub fn diagnostic(sink: &'w mut W) -> Self {
        Self::with_rendering(sink, Rendering::Diagnostic)
    }

    fn with_rendering(sink: &'w mut W, rendering: Rendering) -> Self {
        Self {
            sink,
            rendering,
            current_level: 0,
            visited: 0,
        }
    }

    /// The level of the node visited last, or 0 before anything has been visited.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// How many nodes have been written so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Writes one node found at `level`.
    pub fn visit<T>(&mut self, node: NodeRef<'_, T>, level: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        if level != self.current_level {
            self.current_level = level;
            write!(self.sink, "\ncurrent level = {level}\n")?;
        }

        match self.rendering {
            Rendering::Plain => write!(self.sink, "{}, ", node.key())?,
            Rendering::Diagnostic => write!(
                self.sink,
                " {{[{}]:parent={}, this={}, left={}, right={}}}",
                node.key(),
                MaybeId(node.parent_id()),
                node.id(),
                MaybeId(node.left_id()),
                MaybeId(node.right_id()),
            )?,
        }
        self.visited += 1;

        self.sink.write_char('\n')
    }
}

/// Renders a possibly missing link.
struct MaybeId(Option<NodeId>);

impl fmt::Display for MaybeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("nullptr"),
        }
    }
}

impl<T> OrderedTree<T>
where
    T: fmt::Display,
{
    /// Writes every key level by level, see [`LevelOrderPrinter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1].into();
    ///
    /// let mut out = String::new();
    /// tree.print_level_order(&mut out).unwrap();
    /// assert_eq!(out, "\ncurrent level = 1\n2, \n\ncurrent level = 2\n1, \n\n");
    /// ```
    pub fn print_level_order<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        self.write_level_order(LevelOrderPrinter::new(w))?;
        w.write_char('\n')
    }

    /// Writes every node level by level along with how it's linked to the rest of the tree. This
    /// is meant for debugging the tree itself.
    pub fn debug_print_level_order<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        self.write_level_order(LevelOrderPrinter::diagnostic(w))
    }

    fn write_level_order<W>(&self, mut printer: LevelOrderPrinter<'_, W>) -> fmt::Result
    where
        W: fmt::Write,
    {
        let mut result = Ok(());
        self.level_order(|node, level| {
            if result.is_ok() {
                result = printer.visit(node, level);
            }
        });
        debug!(
            visited = printer.visited(),
            rendering = ?printer.rendering,
            "printed tree in level order"
        );

        result
    }
}

/// Writes the number of keys followed by every key in ascending order.
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tree::size = {}. contents = {{ ", self.len())?;

        let mut result = Ok(());
        self.in_order(|key| {
            if result.is_ok() {
                result = write!(f, "{key}, ");
            }
        });
        result?;

        f.write_str("} ")
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::with_capacity(self.len());
        self.in_order(|key| keys.push(key));
        f.debug_set().entries(keys).finish()
    }
}
