//! Errors surfaced by tree construction, serialization and playback.
//!
//! Every failure here is local and recoverable: the tree or session that
//! produced it is left exactly as it was before the call.

use thiserror::Error;

use crate::discipline::TreeKind;
use crate::node::Side;

/// Text that should have been an integer wasn't.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input, trimmed, does not parse as an `i64`.
    #[error("not a valid integer: {input:?}")]
    NotAnInteger {
        /// The offending text.
        input: String,
    },
}

/// Rejections from random or manual tree construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The value range can't supply `count` distinct values.
    #[error("range {min}..={max} cannot supply {count} unique values")]
    Range {
        /// Values asked for.
        count: usize,
        /// Smallest value, inclusive.
        min: i64,
        /// Largest value, inclusive.
        max: i64,
    },

    /// Fewer than one node was asked for.
    #[error("node count must be at least 1")]
    InvalidCount,

    /// The range is empty or a single value.
    #[error("minimum {min} must be less than maximum {max}")]
    InvalidBounds {
        /// Requested minimum.
        min: i64,
        /// Requested maximum.
        max: i64,
    },

    /// `create_root` on a builder that already has one.
    #[error("root already exists")]
    RootExists,

    /// A child was added before the root.
    #[error("add a root first")]
    NoRoot,

    /// No node holds the named parent value.
    #[error("no node with value {0}")]
    ParentNotFound(i64),

    /// The parent already has a child on that side.
    #[error("{side} child slot of {parent} is occupied")]
    SlotOccupied {
        /// Value of the parent node.
        parent: i64,
        /// The occupied side.
        side: Side,
    },

    /// The value falls outside the bounds its ancestors impose.
    #[error("value {value} violates ordering for a {kind} tree")]
    OrderViolation {
        /// The rejected value.
        value: i64,
        /// Discipline whose ordering it breaks.
        kind: TreeKind,
    },

    /// The value is already somewhere in the tree.
    #[error("value {0} is already in the tree")]
    DuplicateValue(i64),

    /// Swapping would break an ordered discipline.
    #[error("children can't be swapped in a {0} tree")]
    SwapNotAllowed(TreeKind),

    /// The node is a leaf.
    #[error("node {0} has no children to swap")]
    NothingToSwap(i64),
}

/// Malformed serialized input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A token is neither a value nor `null` where one is allowed.
    #[error("line {line}: bad token {token:?}")]
    BadToken {
        /// One-based line number.
        line: usize,
        /// The token as written.
        token: String,
    },

    /// A flat-file record without exactly three fields.
    #[error("line {line}: expected `parent,left,right`")]
    BadLine {
        /// One-based line number.
        line: usize,
    },

    /// A level's width is not twice the present entries above it.
    #[error("level {level}: expected {expected} entries, found {found}")]
    LevelWidth {
        /// Zero-based level index.
        level: usize,
        /// Entries the level above calls for.
        expected: usize,
        /// Entries actually given.
        found: usize,
    },

    /// The first level is not a single value.
    #[error("level 0 must hold exactly one entry")]
    RootLevel,

    /// A value is placed twice.
    #[error("value {0} appears more than once")]
    DuplicateValue(String),

    /// Records that no chain of parents connects to the root.
    #[error("{0} record(s) are not reachable from the root")]
    Detached(usize),
}

/// Playback speed outside `0..=max_speed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeedError {
    /// The requested speed is above the configured maximum.
    #[error("speed {speed} exceeds maximum {max}")]
    OutOfRange {
        /// Requested speed.
        speed: u8,
        /// Configured maximum.
        max: u8,
    },
}

/// Any error the crate produces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`InputError`].
    #[error(transparent)]
    Input(#[from] InputError),

    /// See [`BuildError`].
    #[error(transparent)]
    Build(#[from] BuildError),

    /// See [`FormatError`].
    #[error(transparent)]
    Format(#[from] FormatError),

    /// See [`SpeedError`].
    #[error(transparent)]
    Speed(#[from] SpeedError),
}

/// Result defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
