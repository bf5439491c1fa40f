//! One tree, one discipline. A [`Tree`] pairs a root with the [`Strategy`] chosen for it when it
//! was created, so callers insert and delete without branching on the kind of tree again.
//!
//! # Examples
//!
//! ```
//! use bintree::discipline::{Tree, TreeKind};
//! use bintree::traversal::TraversalKind;
//!
//! let mut tree = Tree::new(TreeKind::Avl);
//! for key in [1, 2, 3] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.root().as_ref().map(|n| n.value), Some(2));
//! assert_eq!(tree.traversal_plan(TraversalKind::Inorder).as_slice(), [1, 2, 3]);
//!
//! tree.delete(&2);
//! assert_eq!(tree.len(), 2);
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::node::{self, Link};
use crate::traversal::{self, SearchAlgorithm, TraversalKind, TraversalPlan};
use crate::{avl, bst, unconstrained};

/// The rules governing where keys go.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// Plain binary tree, sides picked at random.
    Unconstrained,
    /// Binary Search Tree without rebalancing.
    Bst,
    /// Self-balancing AVL tree.
    Avl,
}

impl TreeKind {
    /// Every kind, in menu order.
    pub const ALL: [TreeKind; 3] = [Self::Unconstrained, Self::Bst, Self::Avl];

    /// Whether trees of this kind keep smaller values to the left.
    pub fn is_ordered(self) -> bool {
        !matches!(self, Self::Unconstrained)
    }

    /// A fresh strategy for this kind. The unconstrained one draws from an entropy seeded RNG.
    pub fn strategy<K>(self) -> Box<dyn Strategy<K>>
    where
        K: Ord + Clone,
    {
        match self {
            Self::Unconstrained => Box::new(Unconstrained::new(StdRng::from_entropy())),
            Self::Bst => Box::new(Bst),
            Self::Avl => Box::new(Avl),
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unconstrained => "binary",
            Self::Bst => "BST",
            Self::Avl => "AVL",
        })
    }
}

/// Insertion and deletion under one discipline. Both take the current root and return the new
/// one.
pub trait Strategy<K> {
    /// Returns the root after inserting `key`.
    fn insert(&mut self, root: Link<K>, key: K) -> Link<K>;

    /// Returns the root after deleting `key`.
    fn delete(&mut self, root: Link<K>, key: &K) -> Link<K>;
}

/// Random placement. Owns the RNG that flips its coins.
#[derive(Debug)]
pub struct Unconstrained<R = StdRng> {
    rng: R,
}

impl<R> Unconstrained<R> {
    /// Flips coins with `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<K, R> Strategy<K> for Unconstrained<R>
where
    K: PartialEq + Clone,
    R: Rng,
{
    fn insert(&mut self, root: Link<K>, key: K) -> Link<K> {
        unconstrained::insert(root, key, &mut self.rng)
    }

    fn delete(&mut self, root: Link<K>, key: &K) -> Link<K> {
        unconstrained::delete(root, key, &mut self.rng)
    }
}

/// Ordered placement, no rebalancing.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bst;

impl<K: Ord + Clone> Strategy<K> for Bst {
    fn insert(&mut self, root: Link<K>, key: K) -> Link<K> {
        bst::insert(root, key)
    }

    fn delete(&mut self, root: Link<K>, key: &K) -> Link<K> {
        bst::delete(root, key)
    }
}

/// Ordered placement with AVL rebalancing.
#[derive(Copy, Clone, Debug, Default)]
pub struct Avl;

impl<K: Ord + Clone> Strategy<K> for Avl {
    fn insert(&mut self, root: Link<K>, key: K) -> Link<K> {
        avl::insert(root, key)
    }

    fn delete(&mut self, root: Link<K>, key: &K) -> Link<K> {
        avl::delete(root, key)
    }
}

/// A root together with the discipline that governs it.
pub struct Tree<K> {
    kind: TreeKind,
    root: Link<K>,
    strategy: Box<dyn Strategy<K>>,
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("kind", &self.kind)
            .field("root", &self.root)
            .finish()
    }
}

impl<K: Ord + Clone> Tree<K> {
    /// An empty tree of the given kind.
    pub fn new(kind: TreeKind) -> Self {
        Self::from_root(kind, None)
    }

    /// Adopts an existing root, e.g. one built by hand or imported.
    pub fn from_root(kind: TreeKind, root: Link<K>) -> Self {
        Self::with_strategy(kind, root, kind.strategy())
    }
}

impl<K> Tree<K> {
    /// Adopts `root` with a caller supplied strategy, e.g. a seeded [`Unconstrained`].
    pub fn with_strategy(kind: TreeKind, root: Link<K>, strategy: Box<dyn Strategy<K>>) -> Self {
        Self {
            kind,
            root,
            strategy,
        }
    }

    /// The discipline this tree follows.
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// The current root.
    pub fn root(&self) -> &Link<K> {
        &self.root
    }

    /// Gives up the root, discarding the strategy.
    pub fn into_root(self) -> Link<K> {
        self.root
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        node::len(&self.root)
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` under this tree's discipline.
    pub fn insert(&mut self, key: K)
    where
        K: fmt::Debug,
    {
        debug!(kind = %self.kind, ?key, "insert");
        self.root = self.strategy.insert(self.root.take(), key);
    }

    /// Deletes `key` under this tree's discipline. Missing keys leave an ordered tree unchanged.
    pub fn delete(&mut self, key: &K)
    where
        K: fmt::Debug,
    {
        debug!(kind = %self.kind, ?key, "delete");
        self.root = self.strategy.delete(self.root.take(), key);
    }

    /// Whether any node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        node::contains(&self.root, key)
    }

    /// See [`traversal::traversal_plan`].
    pub fn traversal_plan(&self, kind: TraversalKind) -> TraversalPlan<K>
    where
        K: Clone,
    {
        traversal::traversal_plan(&self.root, kind)
    }

    /// See [`traversal::search_plan`].
    pub fn search_plan(&self, algorithm: SearchAlgorithm, target: &K) -> TraversalPlan<K>
    where
        K: Ord + Clone,
    {
        traversal::search_plan(&self.root, algorithm, target)
    }
}
