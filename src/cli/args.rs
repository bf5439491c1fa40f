//! Argument definitions for the `bintree` binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::PlaybackConfig;
use crate::discipline::TreeKind;
use crate::traversal::{SearchAlgorithm, TraversalKind};

/// Build, edit and walk binary trees, BSTs and AVL trees
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log to stderr: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Playback cadence shared by every subcommand.
    #[command(flatten)]
    pub playback: PlaybackArgs,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Playback cadence. Steps are `max(min_delay, (100 - speed) * scale)` apart.
#[derive(Args, Debug, Clone)]
pub struct PlaybackArgs {
    /// Playback speed, 0 (slowest) to 100
    #[arg(
        long,
        env = "BINTREE_SPEED",
        default_value_t = 50,
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub speed: u8,

    /// Shortest pause between steps, in milliseconds
    #[arg(long, env = "BINTREE_MIN_DELAY_MS", default_value_t = 100, global = true)]
    pub min_delay_ms: u64,

    /// Milliseconds of pause per speed unit below 100
    #[arg(long, env = "BINTREE_SCALE_MS", default_value_t = 10, global = true)]
    pub scale_ms: u64,
}

impl PlaybackArgs {
    /// The playback constants these arguments describe.
    pub fn config(&self) -> PlaybackConfig {
        PlaybackConfig {
            min_delay: Duration::from_millis(self.min_delay_ms),
            scale: Duration::from_millis(self.scale_ms),
            default_speed: self.speed,
            ..PlaybackConfig::default()
        }
    }
}

/// Tree discipline, as named on the command line.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum KindArg {
    /// No ordering, random placement
    Binary,
    /// Binary search tree
    Bst,
    /// Self-balancing AVL tree
    Avl,
}

impl From<KindArg> for TreeKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Binary => TreeKind::Unconstrained,
            KindArg::Bst => TreeKind::Bst,
            KindArg::Avl => TreeKind::Avl,
        }
    }
}

/// Traversal order.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrderArg {
    /// Node, left subtree, right subtree
    Preorder,
    /// Left subtree, node, right subtree
    Inorder,
    /// Left subtree, right subtree, node
    Postorder,
}

impl From<OrderArg> for TraversalKind {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Preorder => TraversalKind::Preorder,
            OrderArg::Inorder => TraversalKind::Inorder,
            OrderArg::Postorder => TraversalKind::Postorder,
        }
    }
}

/// Search algorithm.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchArg {
    /// Depth-first, pre-order
    Dfs,
    /// Breadth-first, level by level
    Bfs,
    /// Ordered descent from the root
    Bst,
}

impl From<SearchArg> for SearchAlgorithm {
    fn from(algorithm: SearchArg) -> Self {
        match algorithm {
            SearchArg::Dfs => SearchAlgorithm::Dfs,
            SearchArg::Bfs => SearchAlgorithm::Bfs,
            SearchArg::Bst => SearchAlgorithm::Bst,
        }
    }
}

/// A tree stored as a flat file, and the discipline to treat it with.
#[derive(Args, Debug, Clone)]
pub struct TreeFile {
    /// Flat file of `parent,left,right` lines
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Discipline used for edits and ordered searches
    #[arg(short, long, value_enum, default_value_t = KindArg::Bst)]
    pub kind: KindArg,
}

/// What to do.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a random tree of unique values
    Build {
        /// Tree discipline
        #[arg(short, long, value_enum, default_value_t = KindArg::Bst)]
        kind: KindArg,
        /// Number of nodes
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Smallest value, inclusive
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,
        /// Largest value, inclusive
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i64,
        /// Seed for a reproducible tree
        #[arg(long)]
        seed: Option<u64>,
        /// Write the flat file here instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },

    /// Build a tree edit by edit
    Manual {
        /// Tree discipline
        #[arg(short, long, value_enum, default_value_t = KindArg::Bst)]
        kind: KindArg,
        /// Root value
        #[arg(long, allow_negative_numbers = true)]
        root: String,
        /// Child to add, as PARENT:left|right:VALUE
        #[arg(short, long = "child", value_name = "PARENT:SIDE:VALUE")]
        children: Vec<String>,
        /// Swap the children of this node afterwards (binary trees only)
        #[arg(long, allow_negative_numbers = true)]
        swap: Vec<String>,
        /// Write the flat file here instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },

    /// Print a flat file's values level by level
    Show {
        /// The tree to read
        #[command(flatten)]
        tree: TreeFile,
    },

    /// Insert a value and print the resulting flat file
    Insert {
        /// The tree to read
        #[command(flatten)]
        tree: TreeFile,
        /// Value to insert
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Write the flat file here instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },

    /// Delete a value and print the resulting flat file
    Delete {
        /// The tree to read
        #[command(flatten)]
        tree: TreeFile,
        /// Value to delete
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Write the flat file here instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },

    /// Play a traversal step by step
    Traverse {
        /// Visiting order
        #[arg(value_enum)]
        order: OrderArg,
        /// The tree to read
        #[command(flatten)]
        tree: TreeFile,
    },

    /// Play a search step by step
    Search {
        /// How to look
        #[arg(value_enum)]
        algorithm: SearchArg,
        /// Value to look for
        #[arg(allow_negative_numbers = true)]
        target: String,
        /// The tree to read
        #[command(flatten)]
        tree: TreeFile,
    },

    /// Convert a flat file to level lists with `null` placeholders
    ExportLevels {
        /// Flat file to convert
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Convert level lists back to a flat file
    ImportLevels {
        /// Level lists, one comma-separated level per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Write the flat file here instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
}
