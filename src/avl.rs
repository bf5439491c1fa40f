//! A self-balancing Binary Search Tree (specifically, an AVL tree). Insertion and deletion work
//! like [`crate::bst`] and then, on the way back up, every node on the path recomputes its height
//! and is rotated if its children's heights differ by more than one.
//!
//! # Examples
//!
//! ```
//! use bintree::avl;
//!
//! let mut root = None;
//! for key in [1, 2, 3] {
//!     root = avl::insert(root, key);
//! }
//!
//! // Inserting in order would give a list in a plain BST. Here it gets rotated.
//! let root = root.unwrap();
//! assert_eq!(root.value, 2);
//! assert_eq!(root.left.map(|n| n.value), Some(1));
//! assert_eq!(root.right.map(|n| n.value), Some(3));
//! ```

use std::cmp::Ordering;

use tracing::debug;

use crate::node::{balance_factor, Link, Node};
use crate::util::{excise, Excision};

/// Returns the root of the tree after inserting `key` and restoring balance on the insertion
/// path.
pub fn insert<K>(link: Link<K>, key: K) -> Link<K>
where
    K: Ord + Clone,
{
    let mut node = match link {
        None => return Some(Node::boxed(key)),
        Some(node) => node,
    };

    let inserted = key.clone();
    if key < node.value {
        node.left = insert(node.left.take(), key);
    } else {
        node.right = insert(node.right.take(), key);
    }
    node.update_height();
    Some(rebalance_insert(node, &inserted))
}

/// Returns the root of the tree after deleting one node holding `key` and restoring balance on
/// the deletion path. If no node holds `key` the tree comes back unchanged.
pub fn delete<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord + Clone,
{
    let mut node = link?;
    match key.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match excise(node, |right, successor| delete(right, successor)) {
            // A surviving child is already balanced.
            Excision::Replaced(link) => return link,
            Excision::Retained(retained) => node = retained,
        },
    }
    node.update_height();
    Some(rebalance_delete(node))
}

/// Rotates `node` if its children's heights differ by more than one, picking single or double
/// rotation by where `key` sits relative to the heavy child. Equal keys go right, so a key equal
/// to the right child's value counts as outside. An inner grandchild that does not exist (only
/// possible on a tree that was already out of balance) falls back to the single rotation.
fn rebalance_insert<K: Ord>(mut node: Box<Node<K>>, key: &K) -> Box<Node<K>> {
    let balance = node.balance_factor();
    if balance > 1 {
        if let Some(left) = node.left.as_deref() {
            if *key >= left.value && left.right.is_some() {
                node.left = node.left.take().map(rotate_left);
            }
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if let Some(right) = node.right.as_deref() {
            if *key < right.value && right.left.is_some() {
                node.right = node.right.take().map(rotate_right);
            }
        }
        return rotate_left(node);
    }
    node
}

/// Rotates `node` if its children's heights differ by more than one. A heavy child that leans the
/// other way is rotated first. A child with balance factor 0 only occurs after deletion and takes
/// the single rotation.
fn rebalance_delete<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let balance = node.balance_factor();
    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Rotates the left child up to become the root. The left child's right subtree becomes the old
/// root's left subtree. Heights are fixed child-before-parent.
///
/// # Panics
///
/// If `node` has no left child. Callers only rotate right when the left side is taller.
pub fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = node
        .left
        .take()
        .expect("rotate_right called on a node without a left child");
    debug!(height = node.height, "rotating right");

    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}

/// Rotates the right child up to become the root. The right child's left subtree becomes the old
/// root's right subtree. Heights are fixed child-before-parent.
///
/// # Panics
///
/// If `node` has no right child. Callers only rotate left when the right side is taller.
pub fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = node
        .right
        .take()
        .expect("rotate_left called on a node without a right child");
    debug!(height = node.height, "rotating left");

    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}
