//! Everything one viewer of a tree holds at once: the tree, the playback over it and the clock
//! that drives that playback.
//!
//! A [`Session`] is the only place these live, so replacing the tree and cancelling whatever was
//! being played over the old one happen together.
//!
//! # Examples
//!
//! ```
//! use bintree::discipline::TreeKind;
//! use bintree::session::Session;
//! use bintree::stepper::{PlaybackState, StepEvent};
//! use bintree::traversal::TraversalKind;
//!
//! let mut session = Session::default();
//! session.replace_tree(TreeKind::Bst, [5, 3, 8]);
//!
//! let mut seen: Vec<StepEvent<i64>> = Vec::new();
//! session.start_traversal(TraversalKind::Inorder);
//! while let Some(fired) = session.scheduler_mut().pop_next() {
//!     session.fire(fired.ticket, &mut seen);
//! }
//!
//! assert_eq!(session.stepper().visited(), [3, 5, 8]);
//! assert_eq!(session.stepper().state(), PlaybackState::Completed);
//! ```

use rand::Rng;
use tracing::info;

use crate::builder::{self, ManualBuilder};
use crate::codec::{self, Level};
use crate::config::PlaybackConfig;
use crate::discipline::{Tree, TreeKind};
use crate::error::{BuildError, FormatError, InputError, Result, SpeedError};
use crate::node::Link;
use crate::scheduler::{Scheduler, Ticket, TimerQueue};
use crate::stepper::{StepObserver, StepOutcome, Stepper};
use crate::traversal::{SearchAlgorithm, TraversalKind};

/// The current tree and its playback.
#[derive(Debug)]
pub struct Session<S = TimerQueue> {
    tree: Tree<i64>,
    stepper: Stepper<i64>,
    scheduler: S,
}

impl Default for Session<TimerQueue> {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Session<TimerQueue> {
    /// An empty BST session on a virtual clock.
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_scheduler(config, TimerQueue::new())
    }
}

impl<S: Scheduler> Session<S> {
    /// An empty BST session whose steps are scheduled on `scheduler`.
    pub fn with_scheduler(config: PlaybackConfig, scheduler: S) -> Self {
        Self {
            tree: Tree::new(TreeKind::Bst),
            stepper: Stepper::new(config),
            scheduler,
        }
    }

    /// The current tree.
    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }

    /// Playback over the current tree.
    pub fn stepper(&self) -> &Stepper<i64> {
        &self.stepper
    }

    /// The clock.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The clock, for whoever pumps it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Swaps in `tree`. Playback over the old tree is cancelled.
    pub fn set_tree(&mut self, tree: Tree<i64>) {
        self.stepper.cancel();
        info!(kind = %tree.kind(), nodes = tree.len(), "tree replaced");
        self.tree = tree;
    }

    /// Replaces the tree with one of `kind` holding `keys`, inserted in order.
    pub fn replace_tree(&mut self, kind: TreeKind, keys: impl IntoIterator<Item = i64>) {
        let mut tree = Tree::new(kind);
        for key in keys {
            tree.insert(key);
        }
        self.set_tree(tree);
    }

    /// Replaces the tree with a random one. On error the current tree and playback are untouched.
    pub fn build_random<R>(
        &mut self,
        kind: TreeKind,
        count: usize,
        min: i64,
        max: i64,
        rng: &mut R,
    ) -> Result<(), BuildError>
    where
        R: Rng + ?Sized,
    {
        let tree = builder::build_random_tree(kind, count, min, max, rng)?;
        self.set_tree(tree);
        Ok(())
    }

    /// Replaces the tree with a hand built one.
    pub fn finish_manual(&mut self, builder: ManualBuilder) -> Result<(), BuildError> {
        let tree = builder.finish()?;
        self.set_tree(tree);
        Ok(())
    }

    /// Inserts `key` under the current discipline, cancelling playback.
    pub fn insert(&mut self, key: i64) {
        self.stepper.cancel();
        self.tree.insert(key);
    }

    /// Deletes `key` under the current discipline, cancelling playback.
    pub fn delete(&mut self, key: i64) {
        self.stepper.cancel();
        self.tree.delete(&key);
    }

    /// [`insert`][Self::insert] from user text. Nothing changes unless it parses.
    pub fn insert_input(&mut self, input: &str) -> Result<(), InputError> {
        let key = builder::parse_value(input)?;
        self.insert(key);
        Ok(())
    }

    /// [`delete`][Self::delete] from user text. Nothing changes unless it parses.
    pub fn delete_input(&mut self, input: &str) -> Result<(), InputError> {
        let key = builder::parse_value(input)?;
        self.delete(key);
        Ok(())
    }

    /// Starts playing a traversal of the current tree, discarding any earlier run.
    pub fn start_traversal(&mut self, kind: TraversalKind) -> Ticket {
        let plan = self.tree.traversal_plan(kind);
        info!(%kind, "traversal requested");
        self.stepper.start(plan, &mut self.scheduler)
    }

    /// Starts playing a search for `target`, discarding any earlier run.
    pub fn start_search(&mut self, algorithm: SearchAlgorithm, target: i64) -> Ticket {
        let plan = self.tree.search_plan(algorithm, &target);
        info!(%algorithm, target, "search requested");
        self.stepper.start(plan, &mut self.scheduler)
    }

    /// Hands a fired timer back to the stepper.
    pub fn fire(&mut self, ticket: Ticket, observer: &mut impl StepObserver<i64>) -> StepOutcome {
        self.stepper.fire(ticket, &mut self.scheduler, observer)
    }

    /// See [`Stepper::pause`].
    pub fn pause(&mut self) -> bool {
        self.stepper.pause()
    }

    /// See [`Stepper::resume`].
    pub fn resume(&mut self, observer: &mut impl StepObserver<i64>) -> StepOutcome {
        self.stepper.resume(&mut self.scheduler, observer)
    }

    /// See [`Stepper::toggle_pause`].
    pub fn toggle_pause(&mut self, observer: &mut impl StepObserver<i64>) -> StepOutcome {
        self.stepper.toggle_pause(&mut self.scheduler, observer)
    }

    /// See [`Stepper::set_speed`].
    pub fn set_speed(&mut self, speed: u8) -> Result<(), SpeedError> {
        self.stepper.set_speed(speed)
    }

    /// See [`codec::export_levels`].
    pub fn export_levels(&self) -> Vec<Level<i64>> {
        codec::export_levels(self.tree.root())
    }

    /// Replaces the tree with one read from levels. Heights are recomputed for `kind`.
    pub fn import_levels(
        &mut self,
        kind: TreeKind,
        levels: &[Level<i64>],
    ) -> Result<(), FormatError> {
        let root = codec::import_levels(levels)?;
        self.adopt(kind, root);
        Ok(())
    }

    /// See [`codec::export_flat_file`].
    pub fn export_flat_file(&self) -> Vec<String> {
        codec::export_flat_file(self.tree.root())
    }

    /// Replaces the tree with one read from flat file lines.
    pub fn import_flat_file<L>(&mut self, kind: TreeKind, lines: L) -> Result<(), FormatError>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let root = codec::import_flat_file(lines)?;
        self.adopt(kind, root);
        Ok(())
    }

    /// See [`codec::render_levels`].
    pub fn render_levels(&self) -> String {
        codec::render_levels(self.tree.root())
    }

    fn adopt(&mut self, kind: TreeKind, root: Link<i64>) {
        self.set_tree(Tree::from_root(kind, root));
    }
}
