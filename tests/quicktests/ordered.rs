use std::collections::BTreeMap;

use bintree::discipline::{Tree, TreeKind, Unconstrained};
use bintree::node::Link;
use bintree::traversal::{self, SearchAlgorithm, TraversalKind};
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::Op;

/// Applies a set of operations to a tree and to a multiset of keys.
/// This way we can ensure that after a random smattering of inserts
/// and deletes the tree holds exactly what the multiset does.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                *counts.entry(k).or_default() += 1;
            }
            Op::Delete(k) => {
                tree.delete(&k);
                if let Some(n) = counts.get_mut(&k) {
                    *n -= 1;
                    if *n == 0 {
                        counts.remove(&k);
                    }
                }
            }
        }
    }
}

fn expand(counts: &BTreeMap<i8, usize>) -> Vec<i8> {
    counts
        .iter()
        .flat_map(|(&k, &n)| std::iter::repeat(k).take(n))
        .collect()
}

/// Recomputes every height, returning `None` if a recorded height is stale or a node is out of
/// balance.
fn checked_height(link: &Link<i8>) -> Option<usize> {
    match link {
        None => Some(0),
        Some(node) => {
            let left = checked_height(&node.left)?;
            let right = checked_height(&node.right)?;
            let height = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height() == height).then_some(height)
        }
    }
}

#[quickcheck]
fn bst_inorder_matches_multiset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(TreeKind::Bst);
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    traversal::inorder(tree.root()) == expand(&counts)
}

#[quickcheck]
fn avl_inorder_matches_multiset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    traversal::inorder(tree.root()) == expand(&counts)
}

#[quickcheck]
fn avl_balanced_after_every_op(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    let mut counts = BTreeMap::new();

    ops.iter().all(|op| {
        do_ops(std::slice::from_ref(op), &mut tree, &mut counts);
        checked_height(tree.root()).is_some()
    })
}

#[quickcheck]
fn unconstrained_insert_keeps_every_key(xs: Vec<i8>, seed: u64) -> bool {
    let strategy = Box::new(Unconstrained::new(StdRng::seed_from_u64(seed)));
    let mut tree = Tree::with_strategy(TreeKind::Unconstrained, None, strategy);
    for &x in &xs {
        tree.insert(x);
    }

    let mut expected = xs;
    expected.sort_unstable();
    let mut found = traversal::preorder(tree.root());
    found.sort_unstable();
    found == expected
}

#[quickcheck]
fn bst_search_is_a_root_path(xs: Vec<i8>, target: i8) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    for &x in &xs {
        tree.insert(x);
    }

    let steps = tree.search_plan(SearchAlgorithm::Bst, &target);
    let found = steps.as_slice().last() == Some(&target);
    steps.len() <= bintree::node::height(tree.root()) && found == tree.contains(&target)
}

#[quickcheck]
fn searches_stop_at_target(xs: Vec<i8>, target: i8) -> bool {
    let mut tree = Tree::new(TreeKind::Bst);
    for &x in &xs {
        tree.insert(x);
    }

    [SearchAlgorithm::Dfs, SearchAlgorithm::Bfs].into_iter().all(|algorithm| {
        let steps = tree.search_plan(algorithm, &target);
        if tree.contains(&target) {
            steps.as_slice().last() == Some(&target)
                && steps.iter().filter(|&&s| s == target).count() == 1
        } else {
            steps.len() == tree.len()
        }
    })
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    for &x in &xs {
        tree.insert(x);
    }

    let mut expected = traversal::inorder(tree.root());
    expected.sort_unstable();
    [TraversalKind::Preorder, TraversalKind::Postorder]
        .into_iter()
        .all(|kind| {
            let mut steps = tree.traversal_plan(kind).as_slice().to_vec();
            steps.sort_unstable();
            steps == expected
        })
}
