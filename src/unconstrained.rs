//! A binary tree with no ordering discipline at all. Where a key ends up is decided by a fair coin
//! flip at every level, so the shape is random and nothing can be found by comparison.
//!
//! Deletion walks the tree the same way: at each node that doesn't hold the key a fresh coin picks
//! the side to keep looking. A key that exists off that random path is simply not found and the
//! tree comes back unchanged.
//!
//! # Examples
//!
//! ```
//! use bintree::{node, unconstrained};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut root = None;
//! for key in [4, 9, 2] {
//!     root = unconstrained::insert(root, key, &mut rng);
//! }
//!
//! assert_eq!(node::len(&root), 3);
//! assert_eq!(root.map(|n| n.value), Some(4));
//! ```

use rand::Rng;

use crate::node::{Link, Node};
use crate::util::{excise, Excision};

/// Returns the root of the tree after inserting `key` at the end of a random walk.
pub fn insert<K, R>(link: Link<K>, key: K, rng: &mut R) -> Link<K>
where
    R: Rng + ?Sized,
{
    match link {
        None => Some(Node::boxed(key)),
        Some(mut node) => {
            if rng.gen::<bool>() {
                node.left = insert(node.left.take(), key, rng);
            } else {
                node.right = insert(node.right.take(), key, rng);
            }
            Some(node)
        }
    }
}

/// Returns the root of the tree after deleting the first node holding `key` met on a random walk.
///
/// A two-child match copies up its in-order successor's value and then deletes that value from
/// the right subtree with the same random walk, which can miss it too.
pub fn delete<K, R>(link: Link<K>, key: &K, rng: &mut R) -> Link<K>
where
    K: PartialEq + Clone,
    R: Rng + ?Sized,
{
    let mut node = link?;
    if node.value == *key {
        return match excise(node, |right, successor| delete(right, successor, rng)) {
            Excision::Replaced(link) => link,
            Excision::Retained(node) => Some(node),
        };
    }

    if rng.gen::<bool>() {
        node.left = delete(node.left.take(), key, rng);
    } else {
        node.right = delete(node.right.take(), key, rng);
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{self, tests::branch, tests::leaf};
    use crate::traversal::preorder;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_insert_keeps_every_key() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut tree = None;
        for k in 0..50 {
            tree = insert(tree, k, &mut rng);
        }

        let mut values = preorder(&tree);
        values.sort_unstable();
        assert_eq!(values, (0..50).collect::<Vec<_>>());
        assert_eq!(tree.as_ref().map(|n| n.value), Some(0));
    }

    #[test]
    fn test_insert_follows_the_coin() {
        // `StepRng` with a zero increment always yields zero, which is `false` for `gen::<bool>`.
        let mut always_right = StepRng::new(0, 0);
        let mut tree = None;
        for k in [1, 2, 3] {
            tree = insert(tree, k, &mut always_right);
        }

        let root = tree.as_deref().unwrap();
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().and_then(|n| n.right.as_ref()).map(|n| n.value), Some(3));
    }

    #[test]
    fn test_delete_root_match_needs_no_coin() {
        let mut rng = StdRng::seed_from_u64(1);
        let tree = branch(1, leaf(2), None);

        assert_eq!(preorder(&delete(tree, &1, &mut rng)), [2]);
    }

    #[test]
    fn test_delete_two_children_copies_successor() {
        let mut rng = StdRng::seed_from_u64(1);
        // 5's right subtree has minimum 6 at its left-most leaf, directly below 9.
        let tree = branch(5, leaf(3), branch(9, leaf(6), None));
        let tree = delete(tree, &5, &mut rng);
        let root = tree.as_deref().unwrap();

        assert_eq!(root.value, 6);
        // 9 doesn't match 6 so the walk picks a side; 6 only survives if the coin went right.
        assert!(node::len(&tree) == 3 || node::len(&tree) == 4);
    }

    #[test]
    fn test_delete_may_miss() {
        let mut always_right = StepRng::new(0, 0);
        let tree = branch(1, leaf(2), leaf(3));

        // 2 is on the left but the walk only ever goes right.
        let after = delete(tree.clone(), &2, &mut always_right);
        assert_eq!(after, tree);

        let after = delete(tree, &3, &mut always_right);
        assert_eq!(preorder(&after), [1, 2]);
    }
}
