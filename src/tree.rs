//! A Binary Search Tree that owns its nodes outright. Each [`Node`] owns its two children
//! through `Option<Box<Node>>` links and the [`Tree`] owns the root link, so there are no
//! parent pointers, no sharing, and dropping a subtree drops everything beneath it.
//!
//! Mutating operations are written as recursive functions that take ownership of a link and
//! hand back the (possibly different) subtree root for the caller to store back into its own
//! link. Neither [`insert`][Tree::insert] nor [`delete`][Tree::delete] rebalance the tree;
//! that only happens when [`rebalance`][Tree::rebalance] is called.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! // Duplicates are dropped and the values are sorted before the tree is built.
//! let mut tree = Tree::from_values(vec![5, 3, 8, 3, 1]);
//! assert_eq!(tree.values(), vec![&1, &3, &5, &8]);
//! assert!(tree.is_balanced());
//!
//! // Ascending inserts pile up on the right hand side.
//! for x in [9, 10, 11, 12] {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Until the tree is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.tree_height(), Some(3));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ptr;

/// An owning, possibly empty, reference to a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over unique values. The values are both the keys used for ordering
/// and the payload.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

/// A `Node` holds a single value and up to two children. Every value in the left subtree is
/// less than `value` and every value in the right subtree is greater than it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node of the tree, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Checks if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.pre_order_for_each(|_| count += 1);
        count
    }

    /// The height of the root node, or `None` for an empty tree.
    pub fn tree_height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Visits every node breadth first: top to bottom, and left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_values(1..=5);
    /// let mut visited = Vec::new();
    /// tree.level_order_for_each(|node| visited.push(*node.value()));
    ///
    /// assert_eq!(visited, vec![3, 1, 4, 2, 5]);
    /// ```
    pub fn level_order_for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut queue: VecDeque<&'a Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            f(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Visits every node in ascending order of value: left subtree, node, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_values(vec![5, 3, 8, 1]);
    /// let mut visited = Vec::new();
    /// tree.in_order_for_each(|node| visited.push(*node.value()));
    ///
    /// assert_eq!(visited, vec![1, 3, 5, 8]);
    /// ```
    pub fn in_order_for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.in_order(&mut f);
        }
    }

    /// Visits every node before its children: node, left subtree, right subtree.
    pub fn pre_order_for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.pre_order(&mut f);
        }
    }

    /// Visits every node after its children: left subtree, right subtree, node.
    pub fn post_order_for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.post_order(&mut f);
        }
    }

    /// References to every value in ascending order.
    pub fn values(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.in_order_for_each(|node| values.push(node.value()));
        values
    }

    /// Consumes the tree, returning its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut values = Vec::new();
        drain_in_order(self.root.take(), &mut values);
        values
    }

    /// Checks that, for every node, the heights of its two subtrees differ by at most one.
    /// An empty tree is balanced.
    ///
    /// Heights are recomputed at every node so this is `O(N^2)` in the worst case.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// The number of edges between the root and `node`. The node is matched by identity, not
    /// by value, so a node from some other tree is never found.
    pub fn depth_of(&self, node: &Node<T>) -> Option<usize> {
        self.root().and_then(|root| root.depth_of(node))
    }

    /// Rebuilds the tree from its sorted values so that it satisfies the AVL balance property
    /// and has a height of `floor(lg N)`. The previous nodes are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=5 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.tree_height(), Some(4));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.tree_height(), Some(2));
    /// assert_eq!(tree.values(), vec![&1, &2, &3, &4, &5]);
    /// ```
    pub fn rebalance(&mut self) {
        let mut values = Vec::new();
        drain_in_order(self.root.take(), &mut values);
        self.root = build(values.len(), &mut values.into_iter());
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a balanced tree from an arbitrary collection. Duplicate values are dropped.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort();
        values.dedup();
        Self {
            root: build(values.len(), &mut values.into_iter()),
        }
    }

    /// Inserts the value as a new leaf. Inserting a value that is already present does
    /// nothing. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![1, 3, 5, 8]);
    /// tree.insert(4);
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.values(), vec![&1, &3, &4, &5, &8]);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root = insert(self.root.take(), value);
    }

    /// Deletes the value from the tree. Deleting a value that isn't present does nothing. The
    /// tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![1, 3, 5, 8]);
    /// tree.delete(&3);
    /// tree.delete(&42);
    ///
    /// assert_eq!(tree.values(), vec![&1, &5, &8]);
    /// ```
    pub fn delete(&mut self, value: &T) {
        self.root = delete(self.root.take(), value);
    }

    /// Finds the node holding the value. If no node has it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_values(vec![1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.find(&5).map(|node| node.height()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.root().and_then(|root| root.find(value))
    }

    /// Checks if the value is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The height of the node holding the value, or `None` if no node has it.
    pub fn height(&self, value: &T) -> Option<usize> {
        self.find(value).map(Node::height)
    }

    /// The depth of the node holding the value, or `None` if no node has it.
    pub fn depth(&self, value: &T) -> Option<usize> {
        self.find(value).and_then(|node| self.depth_of(node))
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Inserts each value in turn without rebalancing.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Checks if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The in-order successor of this node within its own subtree: the leftmost node of the
    /// right subtree. Nodes without a right child have no successor here.
    pub fn successor(&self) -> Option<&Node<T>> {
        let mut current = self.right()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current)
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    pub fn height(&self) -> usize {
        // Both children absent gives 1 + -1.
        (1 + height_of(&self.left).max(height_of(&self.right))) as usize
    }

    /// Checks the AVL balance property for every node in this subtree.
    pub fn is_balanced(&self) -> bool {
        (height_of(&self.left) - height_of(&self.right)).abs() <= 1
            && self.left().map_or(true, Node::is_balanced)
            && self.right().map_or(true, Node::is_balanced)
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left()?.find(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find(value),
        }
    }

    /// Searches both subtrees for `target`, preferring the left one.
    fn depth_of(&self, target: &Node<T>) -> Option<usize> {
        if ptr::eq(self, target) {
            return Some(0);
        }

        self.left()
            .and_then(|left| left.depth_of(target))
            .or_else(|| self.right().and_then(|right| right.depth_of(target)))
            .map(|depth| depth + 1)
    }

    fn in_order<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(left) = self.left() {
            left.in_order(f);
        }
        f(self);
        if let Some(right) = self.right() {
            right.in_order(f);
        }
    }

    fn pre_order<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node<T>),
    {
        f(self);
        if let Some(left) = self.left() {
            left.pre_order(f);
        }
        if let Some(right) = self.right() {
            right.pre_order(f);
        }
    }

    fn post_order<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(left) = self.left() {
            left.post_order(f);
        }
        if let Some(right) = self.right() {
            right.post_order(f);
        }
        f(self);
    }
}

/// Height of a possibly absent subtree, where an absent subtree is -1 tall.
fn height_of<T>(link: &Link<T>) -> isize {
    match link {
        None => -1,
        Some(node) => node.height() as isize,
    }
}

/// Builds a balanced subtree from the next `len` values of a sorted, duplicate free iterator.
///
/// For the values at indices `[start, end]` the subtree root is the one at
/// `floor((start + end) / 2)`, which leaves `(len - 1) / 2` values for the left subtree.
/// The subtrees are built left to right so the values can be moved out of the iterator in order.
fn build<T, I>(len: usize, values: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build(left_len, values);
    let value = values.next()?;
    let right = build(len - 1 - left_len, values);

    Some(Box::new(Node { value, left, right }))
}

fn insert<T>(link: Link<T>, value: T) -> Link<T>
where
    T: Ord,
{
    let mut node = match link {
        None => return Some(Box::new(Node::new(value))),
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = insert(node.left.take(), value),
        Ordering::Equal => {}
        Ordering::Greater => node.right = insert(node.right.take(), value),
    }

    Some(node)
}

fn delete<T>(link: Link<T>, value: &T) -> Link<T>
where
    T: Ord,
{
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left, None) => return left,

            // With two children the successor's value replaces this node's value and the
            // successor itself is removed from the right subtree.
            (left, Some(right)) => {
                let (successor, rest) = take_leftmost(right);
                node.value = successor;
                node.left = left;
                node.right = rest;
            }
        },
    }

    Some(node)
}

/// Removes the leftmost node of a subtree, returning its value and what remains of the
/// subtree. The leftmost node has no left child so it is replaced by its right child.
fn take_leftmost<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (value, rest) = take_leftmost(left);
            node.left = rest;
            (value, Some(node))
        }
    }
}

/// Moves every value of a subtree into `out` in ascending order.
fn drain_in_order<T>(link: Link<T>, out: &mut Vec<T>) {
    if let Some(node) = link {
        let Node { value, left, right } = *node;
        drain_in_order(left, out);
        out.push(value);
        drain_in_order(right, out);
    }
}
