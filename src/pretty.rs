//! Renders a tree sideways with box drawing connectors. The right subtree is drawn above its
//! parent and the left subtree below it, so reading the output top to bottom gives the values
//! in descending order.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let tree = Tree::from_values(vec![5, 3, 8, 1]);
//!
//! let expected = "\
//! │       ┌── 8
//! │   ┌── 5
//! └── 3
//!     └── 1
//! ";
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

/// Writes the subtree rooted at `node` to `out`, one line per node. Nothing is written for an
/// absent subtree.
pub fn pretty_print<T, W>(node: Option<&Node<T>>, out: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    match node {
        Some(node) => print_node(node, "", true, out),
        None => Ok(()),
    }
}

/// `prefix` carries the vertical rails of every ancestor and `is_left` says which side of
/// its parent `node` hangs from.
fn print_node<T, W>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        print_node(right, &prefix, false, out)?;
    }

    writeln!(
        out,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        print_node(left, &prefix, true, out)?;
    }

    Ok(())
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pretty_print(self.root(), f)
    }
}
