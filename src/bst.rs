//! An unbalanced Binary Search Tree. Keys smaller than a node go left, everything else (ties
//! included) goes right. Nothing is ever rotated so inserting sorted keys degrades into a list.
//!
//! # Examples
//!
//! ```
//! use bintree::{bst, traversal};
//!
//! let mut root = None;
//! for key in [5, 3, 8] {
//!     root = bst::insert(root, key);
//! }
//! assert_eq!(traversal::inorder(&root), [3, 5, 8]);
//!
//! root = bst::delete(root, &5);
//! assert_eq!(traversal::inorder(&root), [3, 8]);
//! ```

use std::cmp::Ordering;

use crate::node::{Link, Node};
use crate::util::{excise, Excision};

/// Returns the root of the tree after inserting `key`.
pub fn insert<K>(link: Link<K>, key: K) -> Link<K>
where
    K: Ord,
{
    match link {
        None => Some(Node::boxed(key)),
        Some(mut node) => {
            if key < node.value {
                node.left = insert(node.left.take(), key);
            } else {
                node.right = insert(node.right.take(), key);
            }
            Some(node)
        }
    }
}

/// Returns the root of the tree after deleting one node holding `key`. If no node holds `key`
/// the tree comes back unchanged.
pub fn delete<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord + Clone,
{
    let mut node = link?;
    match key.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => {
            return match excise(node, |right, successor| delete(right, successor)) {
                Excision::Replaced(link) => link,
                Excision::Retained(node) => Some(node),
            }
        }
    }
    Some(node)
}

/// Finds the node holding `key` by ordered descent.
pub fn find<'a, K>(link: &'a Link<K>, key: &K) -> Option<&'a Node<K>>
where
    K: Ord,
{
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match key.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}
