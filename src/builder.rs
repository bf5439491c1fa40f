//! Ways to get a tree in the first place: random samples or node by node.
//!
//! # Examples
//!
//! ```
//! use bintree::builder::{self, ManualBuilder};
//! use bintree::discipline::TreeKind;
//! use bintree::error::BuildError;
//! use bintree::node::Side;
//!
//! let mut rng = rand::thread_rng();
//! let tree = builder::build_random_tree(TreeKind::Avl, 10, 1, 100, &mut rng).unwrap();
//! assert_eq!(tree.len(), 10);
//!
//! // Not enough distinct values between 1 and 5.
//! let err = builder::build_random_tree(TreeKind::Bst, 10, 1, 5, &mut rng).unwrap_err();
//! assert_eq!(err, BuildError::Range { count: 10, min: 1, max: 5 });
//!
//! let mut manual = ManualBuilder::new(TreeKind::Bst);
//! manual.create_root(5).unwrap();
//! manual.add_child(5, Side::Left, 3).unwrap();
//! assert_eq!(
//!     manual.add_child(3, Side::Right, 7),
//!     Err(BuildError::OrderViolation { value: 7, kind: TreeKind::Bst })
//! );
//! assert_eq!(manual.finish().unwrap().len(), 2);
//! ```

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::discipline::{Tree, TreeKind, Unconstrained};
use crate::error::{BuildError, InputError, Result};
use crate::node::{self, refresh_heights, Link, Node, Side};

/// Parses user input as an integer value, ignoring surrounding whitespace.
pub fn parse_value(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse()
        .map_err(|_| InputError::NotAnInteger {
            input: input.to_string(),
        })
}

/// `count` distinct values from `min..=max` in random order.
///
/// Fails without sampling when `count` is 0, when `min >= max`, or when the range holds fewer
/// than `count` values.
pub fn sample_unique<R>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>, BuildError>
where
    R: Rng + ?Sized,
{
    if count == 0 {
        return Err(BuildError::InvalidCount);
    }
    if min >= max {
        return Err(BuildError::InvalidBounds { min, max });
    }
    let span = i128::from(max) - i128::from(min) + 1;
    if span < count as i128 {
        return Err(BuildError::Range { count, min, max });
    }

    // Sampled offsets come back shuffled, which decides the shape of ordered trees.
    let span = usize::try_from(span).unwrap_or(usize::MAX);
    Ok(index::sample(rng, span, count)
        .into_iter()
        .map(|offset| (i128::from(min) + offset as i128) as i64)
        .collect())
}

/// A tree of `kind` holding `count` distinct random values from `min..=max`, inserted in random
/// order. Nothing is built unless the whole sample can be drawn.
pub fn build_random_tree<R>(
    kind: TreeKind,
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Tree<i64>, BuildError>
where
    R: Rng + ?Sized,
{
    let keys = sample_unique(count, min, max, rng)?;
    let mut tree = match kind {
        TreeKind::Unconstrained => {
            let coin = StdRng::seed_from_u64(rng.gen());
            Tree::with_strategy(kind, None, Box::new(Unconstrained::new(coin)))
        }
        _ => Tree::new(kind),
    };
    for key in keys {
        tree.insert(key);
    }
    info!(%kind, count, min, max, "built random tree");
    Ok(tree)
}

/// One accepted edit, as listed while building by hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildStep {
    /// The root was created.
    Root(i64),
    /// `value` became the `side` child of `parent`.
    Child {
        /// Value of the parent node.
        parent: i64,
        /// Slot the value went into.
        side: Side,
        /// The new value.
        value: i64,
    },
    /// The children of this node were swapped.
    Swapped(i64),
}

/// Builds a tree one node at a time, rejecting edits that would break the tree's discipline.
/// A rejected edit leaves the tree untouched.
///
/// Ordering is checked against every ancestor, not just the parent. Balance is not enforced for
/// AVL trees; later AVL inserts and deletes rebalance only along their own paths.
#[derive(Debug)]
pub struct ManualBuilder {
    kind: TreeKind,
    root: Link<i64>,
    history: Vec<BuildStep>,
}

impl ManualBuilder {
    /// Starts an empty tree of `kind`.
    pub fn new(kind: TreeKind) -> Self {
        Self {
            kind,
            root: None,
            history: Vec::new(),
        }
    }

    /// The discipline edits are checked against.
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// The tree so far.
    pub fn root(&self) -> &Link<i64> {
        &self.root
    }

    /// Every accepted edit, oldest first.
    pub fn history(&self) -> &[BuildStep] {
        &self.history
    }

    /// Creates the root node.
    pub fn create_root(&mut self, value: i64) -> Result<(), BuildError> {
        if self.root.is_some() {
            return Err(BuildError::RootExists);
        }
        self.root = Some(Node::boxed(value));
        self.history.push(BuildStep::Root(value));
        debug!(value, "manual root");
        Ok(())
    }

    /// Puts `value` into the empty `side` slot of the node holding `parent`.
    pub fn add_child(&mut self, parent: i64, side: Side, value: i64) -> Result<(), BuildError> {
        if self.root.is_none() {
            return Err(BuildError::NoRoot);
        }
        let (lower, upper) =
            slot_bounds(&self.root, parent, None, None).ok_or(BuildError::ParentNotFound(parent))?;
        let parent_node =
            node::find(&self.root, &parent).ok_or(BuildError::ParentNotFound(parent))?;
        if parent_node.child(side).is_some() {
            return Err(BuildError::SlotOccupied { parent, side });
        }
        if node::contains(&self.root, &value) {
            return Err(BuildError::DuplicateValue(value));
        }
        if self.kind.is_ordered() {
            let (lower, upper) = match side {
                Side::Left => (lower, Some(parent)),
                Side::Right => (Some(parent), upper),
            };
            let fits = lower.map_or(true, |l| value > l) && upper.map_or(true, |u| value < u);
            if !fits {
                return Err(BuildError::OrderViolation {
                    value,
                    kind: self.kind,
                });
            }
        }

        if let Some(parent_node) = node::find_mut(&mut self.root, &parent) {
            *parent_node.child_mut(side) = Some(Node::boxed(value));
        }
        refresh_heights(&mut self.root);
        self.history.push(BuildStep::Child { parent, side, value });
        debug!(parent, %side, value, "manual child");
        Ok(())
    }

    /// Swaps the left and right subtrees of the node holding `value`. Only allowed where there is
    /// no ordering to break.
    pub fn swap_children(&mut self, value: i64) -> Result<(), BuildError> {
        if self.kind.is_ordered() {
            return Err(BuildError::SwapNotAllowed(self.kind));
        }
        if self.root.is_none() {
            return Err(BuildError::NoRoot);
        }
        let target =
            node::find_mut(&mut self.root, &value).ok_or(BuildError::ParentNotFound(value))?;
        if target.is_leaf() {
            return Err(BuildError::NothingToSwap(value));
        }
        std::mem::swap(&mut target.left, &mut target.right);
        refresh_heights(&mut self.root);
        self.history.push(BuildStep::Swapped(value));
        Ok(())
    }

    /// The finished tree. A tree needs at least a root.
    pub fn finish(self) -> Result<Tree<i64>, BuildError> {
        if self.root.is_none() {
            return Err(BuildError::NoRoot);
        }
        info!(kind = %self.kind, nodes = node::len(&self.root), "built tree by hand");
        Ok(Tree::from_root(self.kind, self.root))
    }
}

/// Exclusive bounds inherited by the node holding `target`: every ancestor it sits left of is an
/// upper bound, every ancestor it sits right of a lower bound.
fn slot_bounds(
    link: &Link<i64>,
    target: i64,
    lower: Option<i64>,
    upper: Option<i64>,
) -> Option<(Option<i64>, Option<i64>)> {
    let node = link.as_deref()?;
    if node.value == target {
        return Some((lower, upper));
    }
    slot_bounds(&node.left, target, lower, Some(node.value))
        .or_else(|| slot_bounds(&node.right, target, Some(node.value), upper))
}
