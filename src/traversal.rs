//! Producers of visitation orders. None of these touch the tree; each returns the values in the
//! order a traversal or search would visit them, ready to be played back one step at a time by a
//! [`Stepper`][crate::stepper::Stepper].
//!
//! # Examples
//!
//! ```
//! use bintree::{bst, traversal};
//! use bintree::traversal::{SearchAlgorithm, TraversalKind};
//!
//! let root = [5, 3, 8, 1, 4, 7, 9]
//!     .into_iter()
//!     .fold(None, |root, key| bst::insert(root, key));
//!
//! let plan = traversal::traversal_plan(&root, TraversalKind::Preorder);
//! assert_eq!(plan.as_slice(), [5, 3, 1, 4, 8, 7, 9]);
//!
//! let plan = traversal::search_plan(&root, SearchAlgorithm::Bst, &7);
//! assert_eq!(plan.as_slice(), [5, 8, 7]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::node::{Link, Node};

/// The three depth-first orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

/// The ways of looking for a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Pre-order depth-first search.
    Dfs,
    /// Level-order breadth-first search.
    Bfs,
    /// Ordered descent. Only meaningful on BST and AVL trees.
    Bst,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        })
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Bst => "bst",
        })
    }
}

/// An ordered, finite sequence of values to visit. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalPlan<K> {
    steps: Vec<K>,
}

impl<K> Default for TraversalPlan<K> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<K> TraversalPlan<K> {
    /// Wraps an already computed visitation order.
    pub fn new(steps: Vec<K>) -> Self {
        Self { steps }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there is nothing to visit.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The value visited at step `index`.
    pub fn get(&self, index: usize) -> Option<&K> {
        self.steps.get(index)
    }

    /// All steps in order.
    pub fn as_slice(&self) -> &[K] {
        &self.steps
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.steps.iter()
    }
}

impl<K> From<Vec<K>> for TraversalPlan<K> {
    fn from(steps: Vec<K>) -> Self {
        Self::new(steps)
    }
}

/// Builds the plan for a full traversal.
pub fn traversal_plan<K>(link: &Link<K>, kind: TraversalKind) -> TraversalPlan<K>
where
    K: Clone,
{
    let steps = match kind {
        TraversalKind::Preorder => preorder(link),
        TraversalKind::Inorder => inorder(link),
        TraversalKind::Postorder => postorder(link),
    };
    TraversalPlan::new(steps)
}

/// Builds the plan for a search. The plan ends at the first visit of `target`, or covers the
/// whole search space when `target` isn't there.
pub fn search_plan<K>(link: &Link<K>, algorithm: SearchAlgorithm, target: &K) -> TraversalPlan<K>
where
    K: Clone + Ord,
{
    let steps = match algorithm {
        SearchAlgorithm::Dfs => dfs_search_steps(link, target),
        SearchAlgorithm::Bfs => bfs_search_steps(link, target),
        SearchAlgorithm::Bst => bst_search_steps(link, target),
    };
    TraversalPlan::new(steps)
}

/// `[node] + preorder(left) + preorder(right)`.
pub fn preorder<K: Clone>(link: &Link<K>) -> Vec<K> {
    let mut out = Vec::new();
    walk(link, TraversalKind::Preorder, &mut out);
    out
}

/// `inorder(left) + [node] + inorder(right)`.
pub fn inorder<K: Clone>(link: &Link<K>) -> Vec<K> {
    let mut out = Vec::new();
    walk(link, TraversalKind::Inorder, &mut out);
    out
}

/// `postorder(left) + postorder(right) + [node]`.
pub fn postorder<K: Clone>(link: &Link<K>) -> Vec<K> {
    let mut out = Vec::new();
    walk(link, TraversalKind::Postorder, &mut out);
    out
}

fn walk<K: Clone>(link: &Link<K>, kind: TraversalKind, out: &mut Vec<K>) {
    let Some(node) = link.as_deref() else {
        return;
    };
    if kind == TraversalKind::Preorder {
        out.push(node.value.clone());
    }
    walk(&node.left, kind, out);
    if kind == TraversalKind::Inorder {
        out.push(node.value.clone());
    }
    walk(&node.right, kind, out);
    if kind == TraversalKind::Postorder {
        out.push(node.value.clone());
    }
}

/// Pre-order visits up to and including the first node holding `target`.
pub fn dfs_search_steps<K>(link: &Link<K>, target: &K) -> Vec<K>
where
    K: Clone + PartialEq,
{
    let mut steps = Vec::new();
    let mut stack: Vec<&Node<K>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        steps.push(node.value.clone());
        if node.value == *target {
            break;
        }
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    steps
}

/// Level-order visits up to and including the first node holding `target`.
pub fn bfs_search_steps<K>(link: &Link<K>, target: &K) -> Vec<K>
where
    K: Clone + PartialEq,
{
    let mut steps = Vec::new();
    let mut queue: VecDeque<&Node<K>> = link.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        steps.push(node.value.clone());
        if node.value == *target {
            break;
        }
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    steps
}

/// The path an ordered descent takes looking for `target`: left when `target` is smaller, right
/// otherwise, stopping on a match or when it falls off the tree.
pub fn bst_search_steps<K>(link: &Link<K>, target: &K) -> Vec<K>
where
    K: Clone + Ord,
{
    let mut steps = Vec::new();
    let mut current = link.as_deref();
    while let Some(node) = current {
        steps.push(node.value.clone());
        if node.value == *target {
            break;
        }
        current = if *target < node.value {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
    }
    steps
}

/// Present values grouped by depth, root first.
pub fn level_values<K: Clone>(link: &Link<K>) -> Vec<Vec<K>> {
    let mut levels = Vec::new();
    let mut current: Vec<&Node<K>> = link.as_deref().into_iter().collect();
    while !current.is_empty() {
        levels.push(current.iter().map(|n| n.value.clone()).collect());
        current = current
            .iter()
            .flat_map(|&n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
            .collect();
    }
    levels
}
