use rebalance_bst::{Node, Tree};

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                tree.delete(x);
                set.remove(x);
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

/// Checks every node lies strictly between the bounds set by its ancestors.
fn is_bst<T: Ord>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
    match node {
        None => true,
        Some(node) => {
            let value = node.value();
            lower.map_or(true, |lower| lower < value)
                && upper.map_or(true, |upper| value < upper)
                && is_bst(node.left(), lower, Some(value))
                && is_bst(node.right(), Some(value), upper)
        }
    }
}

fn floor_lg(n: usize) -> usize {
    n.ilog2() as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    let mut set: BTreeSet<_> = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set);

    is_bst(tree.root(), None, None)
        && tree.values().into_iter().eq(set.iter())
        && set.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn build_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let expected: BTreeSet<_> = xs.into_iter().collect();

    tree.into_sorted_vec().into_iter().eq(expected)
}

#[quickcheck]
fn build_is_balanced_and_minimal(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);
    let len = tree.len();

    tree.is_balanced() && tree.tree_height() == (len > 0).then(|| floor_lg(len))
}

#[quickcheck]
fn rebalance_restores_balance(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);
    tree.extend(xs);

    let before: Vec<i8> = tree.values().into_iter().copied().collect();
    tree.rebalance();
    let len = tree.len();

    tree.is_balanced()
        && tree.tree_height() == (len > 0).then(|| floor_lg(len))
        && tree.values().into_iter().copied().eq(before)
}

#[quickcheck]
fn insert_duplicate_is_noop(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let before = tree.clone().into_sorted_vec();

    tree.extend(xs);

    tree.into_sorted_vec() == before
}

#[quickcheck]
fn delete_removes_only_that_value(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let mut expected: BTreeSet<_> = xs.into_iter().collect();

    tree.delete(&x);
    expected.remove(&x);

    !tree.contains(&x)
        && is_bst(tree.root(), None, None)
        && tree.into_sorted_vec().into_iter().eq(expected)
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    do_ops(&ops, &mut tree, &mut set);

    let mut level_order = Vec::new();
    tree.level_order_for_each(|node| level_order.push(*node.value()));
    let mut in_order = Vec::new();
    tree.in_order_for_each(|node| in_order.push(*node.value()));
    let mut pre_order = Vec::new();
    tree.pre_order_for_each(|node| pre_order.push(*node.value()));
    let mut post_order = Vec::new();
    tree.post_order_for_each(|node| post_order.push(*node.value()));

    let same_values = |visited: &[i8]| {
        visited.len() == set.len()
            && visited.iter().collect::<HashSet<_>>() == set.iter().collect::<HashSet<_>>()
    };

    same_values(&level_order)
        && same_values(&pre_order)
        && same_values(&post_order)
        && in_order.windows(2).all(|w| w[0] < w[1])
        && in_order.into_iter().eq(set.iter().copied())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.height(x).is_none() && tree.depth(x).is_none())
}

#[quickcheck]
fn heights_and_depths_fit_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    let tree_height = match tree.tree_height() {
        Some(height) => height,
        None => return xs.is_empty(),
    };

    let mut ok = true;
    tree.pre_order_for_each(|node| {
        let depth = tree.depth(node.value());
        let height = tree.height(node.value());
        let children_one_deeper = node
            .left()
            .into_iter()
            .chain(node.right())
            .all(|child| tree.depth_of(child) == depth.map(|d| d + 1));

        ok &= matches!((depth, height), (Some(d), Some(h)) if d + h <= tree_height);
        ok &= children_one_deeper;
    });

    ok && tree.root().and_then(|root| tree.depth_of(root)) == Some(0)
}
