//! The node structure shared by every tree discipline.
//!
//! A tree is nothing more than a [`Link`]: an optional, exclusively owned root `Node`. Each
//! `Node` owns its two children the same way, so the structure is a strict tree with no shared
//! subtrees and no parent pointers. Operations that restructure a tree take the old root by value
//! and hand back the new one, which callers must store in place of the old.
//!
//! # Examples
//!
//! ```
//! use bintree::node::{self, Node};
//!
//! let mut root = Some(Box::new(Node::new(2)));
//! if let Some(n) = root.as_deref_mut() {
//!     n.left = Some(Box::new(Node::new(1)));
//! }
//!
//! assert_eq!(node::len(&root), 2);
//! assert_eq!(node::find(&root, &1).map(|n| n.value), Some(1));
//! ```

use std::fmt;

/// An owning, possibly absent, reference to a subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// Which child slot of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// One vertex of a tree. `height` is only kept meaningful by the AVL discipline; the other
/// disciplines leave it alone.
///
/// Two nodes are equal when their values and subtrees are, whatever heights they have recorded.
#[derive(Clone, Debug)]
pub struct Node<K> {
    /// The value stored at this node.
    pub value: K,
    /// The left subtree.
    pub left: Link<K>,
    /// The right subtree.
    pub right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K: PartialEq> PartialEq for Node<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.left == other.left && self.right == other.right
    }
}

impl<K: Eq> Eq for Node<K> {}

impl<K> Node<K> {
    /// Construct a new childless `Node` holding `value`.
    pub fn new(value: K) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Construct a new childless `Node` already boxed for use in a [`Link`].
    pub fn boxed(value: K) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The recorded height of this node. Only trustworthy for AVL trees or after
    /// [`refresh_heights`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recomputes this node's height from its children's recorded heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child slot on `side`.
    pub fn child(&self, side: Side) -> &Link<K> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// The child slot on `side`, mutably.
    pub fn child_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Height of a possibly absent subtree. An absent subtree has height 0.
pub fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// Balance factor of a possibly absent subtree. An absent subtree is balanced.
pub fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Walks left-most children to the node holding the minimum value of `node`'s subtree.
pub fn min_value_node<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

/// Finds the first node (in pre-order) holding `value`. This makes no ordering assumptions so it
/// works for every discipline.
pub fn find<'a, K>(link: &'a Link<K>, value: &K) -> Option<&'a Node<K>>
where
    K: PartialEq,
{
    let mut stack: Vec<&Node<K>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        if node.value == *value {
            return Some(node);
        }
        // Right first so the left subtree is searched first.
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    None
}

/// Mutable version of [`find`].
pub fn find_mut<'a, K>(link: &'a mut Link<K>, value: &K) -> Option<&'a mut Node<K>>
where
    K: PartialEq,
{
    let node = link.as_deref_mut()?;
    if node.value == *value {
        return Some(node);
    }
    if let Some(found) = find_mut(&mut node.left, value) {
        return Some(found);
    }
    find_mut(&mut node.right, value)
}

/// Whether any node holds `value`.
pub fn contains<K>(link: &Link<K>, value: &K) -> bool
where
    K: PartialEq,
{
    find(link, value).is_some()
}

/// Number of nodes in the tree.
pub fn len<K>(link: &Link<K>) -> usize {
    link.as_ref()
        .map_or(0, |n| 1 + len(&n.left) + len(&n.right))
}

/// Recomputes every recorded height bottom-up and returns the height of `link`. Needed after
/// structural edits that bypass the AVL discipline (manual building, importing).
pub fn refresh_heights<K>(link: &mut Link<K>) -> usize {
    match link.as_deref_mut() {
        None => 0,
        Some(node) => {
            let left = refresh_heights(&mut node.left);
            let right = refresh_heights(&mut node.right);
            node.height = 1 + left.max(right);
            node.height
        }
    }
}
