//! This crate builds, edits, serializes and walks binary trees under three disciplines, and plays
//! the walks back one step at a time.
//!
//! ## Disciplines
//!
//! Every tree is made of the same [`Node`](node::Node)s. What differs is where keys go:
//!
//! 1. An *unconstrained* binary tree places each key by flipping a coin at every level, so it
//!    has no ordering at all.
//! 2. A Binary Search Tree keeps, for every `Node`, smaller values in its left subtree and
//!    values greater than or equal to its own in its right subtree.
//! 3. An AVL tree is a Binary Search Tree that also keeps, for every `Node`, the heights of its
//!    two subtrees within one of each other by rotating after each insert and delete.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching an ordered tree takes `O(height)`, where `height` is the longest path from the root
//! to a leaf. The AVL discipline keeps that height `O(lg N)` for `N` nodes. Ordered trees also
//! yield their keys sorted when visited left subtree, then node, then right subtree.
//!
//! ## Walking a tree
//!
//! [`traversal`] turns a tree into a [`TraversalPlan`](traversal::TraversalPlan): the values in
//! the order a traversal or search visits them. A [`Stepper`](stepper::Stepper) plays such a plan
//! on a cadence set by its speed, and can be paused, resumed and restarted. A
//! [`Session`](session::Session) ties the current tree and its playback together.
//!
//! ```
//! use bintree::discipline::{Tree, TreeKind};
//! use bintree::traversal::{SearchAlgorithm, TraversalKind};
//!
//! let mut tree = Tree::new(TreeKind::Bst);
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.traversal_plan(TraversalKind::Postorder).as_slice(), [1, 4, 3, 7, 9, 8, 5]);
//! assert_eq!(tree.search_plan(SearchAlgorithm::Bst, &7).as_slice(), [5, 8, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
pub mod builder;
pub mod cli;
pub mod codec;
pub mod config;
pub mod discipline;
pub mod error;
pub mod node;
pub mod scheduler;
pub mod session;
pub mod stepper;
pub mod traversal;
pub mod unconstrained;

mod util;
