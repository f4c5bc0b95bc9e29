//! This crate exposes a Binary Search Tree (BST) that is built balanced, is allowed to drift
//! out of balance as values are inserted and deleted, and is put back into shape only when
//! asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). A tree built from sorted data by
//! repeatedly picking the middle element as the subtree root has a height of
//! `floor(lg N)`. Inserting and deleting values one at a time does not preserve that
//! shape (inserting ascending values degrades the tree into a chain) so
//! [`Tree::rebalance`][tree::Tree::rebalance] rebuilds the whole tree from its sorted
//! values.
//!
//! ## Modules
//!
//! - [`tree`] holds the [`Tree`][tree::Tree] and its [`Node`][tree::Node]s.
//! - [`pretty`] renders a tree sideways for debugging.
//! - [`generate`] produces random collections of values to build trees from.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod generate;
pub mod pretty;
pub mod tree;

pub use tree::{Node, Tree};
