//! Flat encodings of a tree.
//!
//! Two formats are supported:
//!
//! * **Levels**: breadth-first layers where every present node at one level contributes two
//!   entries (its children, `None` when absent) to the next. Parent/child correspondence is
//!   recovered purely from position. The layer that would hold only the leaves' absent children
//!   is not written, so the last level always has a value in it. Import accepts it either way.
//! * **Flat file**: one `parent,left,right` line per node, written in pre-order, with the literal
//!   `null` for an absent child. Values must be unique since lines are matched up by value.
//!
//! # Examples
//!
//! ```
//! use bintree::{bst, codec};
//!
//! let root = [5, 3, 8, 1].into_iter().fold(None, |root, key| bst::insert(root, key));
//!
//! let levels = codec::export_levels(&root);
//! assert_eq!(levels, [vec![Some(5)], vec![Some(3), Some(8)], vec![Some(1), None, None, None]]);
//!
//! let lines = codec::export_flat_file(&root);
//! assert_eq!(lines, ["5,3,8", "3,1,null", "1,null,null", "8,null,null"]);
//!
//! let back = codec::import_flat_file::<i64, _>(&lines).unwrap();
//! assert_eq!(codec::export_flat_file(&back), lines);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;
use std::str::FromStr;

use tracing::debug;

use crate::error::FormatError;
use crate::node::{refresh_heights, Link, Node};
use crate::traversal::level_values;

/// Token standing in for an absent child.
pub const NULL: &str = "null";

/// One breadth-first layer: values or placeholders for absent children.
pub type Level<K> = Vec<Option<K>>;

/// Breadth-first layers of the tree. Level `i + 1` holds the two child slots of every present node
/// of level `i`, in order. A final layer of only placeholders is left off.
pub fn export_levels<K: Clone>(link: &Link<K>) -> Vec<Level<K>> {
    let mut levels = Vec::new();
    let mut current: Vec<Option<&Node<K>>> = match link.as_deref() {
        Some(root) => vec![Some(root)],
        None => return levels,
    };

    while current.iter().any(Option::is_some) {
        levels.push(current.iter().map(|&n| n.map(|n| n.value.clone())).collect());
        current = current
            .iter()
            .flatten()
            .flat_map(|&n| [n.left.as_deref(), n.right.as_deref()])
            .collect();
    }
    levels
}

/// Rebuilds a tree from [`export_levels`] output.
///
/// Every level after the first must hold exactly two entries per present entry of the level
/// before it. A missing last level just means the bottom nodes have no children.
pub fn import_levels<K: Clone>(levels: &[Level<K>]) -> Result<Link<K>, FormatError> {
    let Some(first) = levels.first() else {
        return Ok(None);
    };
    if first.len() != 1 {
        return Err(FormatError::RootLevel);
    }
    for (i, pair) in levels.windows(2).enumerate() {
        let expected = 2 * pair[0].iter().flatten().count();
        if pair[1].len() != expected {
            return Err(FormatError::LevelWidth {
                level: i + 1,
                expected,
                found: pair[1].len(),
            });
        }
    }

    // Assemble bottom-up so each level's nodes can simply take ownership of the level below.
    let mut below: Vec<Link<K>> = Vec::new();
    for level in levels.iter().rev() {
        let mut children = below.into_iter();
        below = level
            .iter()
            .map(|entry| {
                entry.as_ref().map(|value| {
                    let mut node = Node::boxed(value.clone());
                    node.left = children.next().flatten();
                    node.right = children.next().flatten();
                    node
                })
            })
            .collect();
    }

    let mut root = below.into_iter().next().flatten();
    refresh_heights(&mut root);
    Ok(root)
}

/// Renders levels one per line, entries comma separated, absent children as `null`.
pub fn format_levels<K: Display>(levels: &[Level<K>]) -> String {
    let mut out = String::new();
    for level in levels {
        let line: Vec<String> = level.iter().map(|e| Token(e.as_ref()).to_string()).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Parses the output of [`format_levels`]. Blank lines are skipped.
pub fn parse_levels<K: FromStr>(text: &str) -> Result<Vec<Level<K>>, FormatError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split(',')
                .map(|token| parse_slot(token, i + 1))
                .collect()
        })
        .collect()
}

/// Present values per depth, one line each, as shown next to a drawn tree.
pub fn render_levels<K: Clone + Display>(link: &Link<K>) -> String {
    let mut out = String::new();
    for level in level_values(link) {
        let line: Vec<String> = level.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(", "));
        out.push('\n');
    }
    out
}

/// `parent,left,right` lines in pre-order: a node, then its whole left subtree, then its whole
/// right subtree.
pub fn export_flat_file<K: Display>(link: &Link<K>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack: Vec<&Node<K>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        lines.push(format!(
            "{},{},{}",
            node.value,
            Token(node.left.as_ref().map(|n| &n.value)),
            Token(node.right.as_ref().map(|n| &n.value)),
        ));
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    lines
}

/// [`export_flat_file`] joined into newline terminated text.
pub fn to_flat_text<K: Display>(link: &Link<K>) -> String {
    export_flat_file(link)
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

/// Rebuilds a tree from `parent,left,right` lines. The first line's parent is the root. Blank
/// lines are skipped and a child without a line of its own is a leaf.
///
/// A value may be a child at most once and never a child of anything if it's the root. Every
/// line must be reachable from the root.
pub fn import_flat_file<K, S>(lines: impl IntoIterator<Item = S>) -> Result<Link<K>, FormatError>
where
    K: FromStr + Clone + Eq + Hash + Display,
    S: AsRef<str>,
{
    let mut records: HashMap<K, (Option<K>, Option<K>)> = HashMap::new();
    let mut children: HashSet<K> = HashSet::new();
    let mut root = None;

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let line_no = i + 1;
        let [parent, left, right] = split_record(line, line_no)?;
        let parent = parse_slot::<K>(parent, line_no)?.ok_or_else(|| FormatError::BadToken {
            line: line_no,
            token: NULL.to_string(),
        })?;
        let left = parse_slot::<K>(left, line_no)?;
        let right = parse_slot::<K>(right, line_no)?;

        for child in left.iter().chain(right.iter()) {
            if !children.insert(child.clone()) {
                return Err(FormatError::DuplicateValue(child.to_string()));
            }
        }
        if records.contains_key(&parent) {
            return Err(FormatError::DuplicateValue(parent.to_string()));
        }
        root.get_or_insert_with(|| parent.clone());
        records.insert(parent, (left, right));
    }

    let Some(root) = root else {
        return Ok(None);
    };
    if children.contains(&root) {
        return Err(FormatError::DuplicateValue(root.to_string()));
    }

    let mut tree = Some(assemble(root, &mut records));
    if !records.is_empty() {
        return Err(FormatError::Detached(records.len()));
    }
    let height = refresh_heights(&mut tree);
    debug!(height, "imported flat file");
    Ok(tree)
}

/// Builds the subtree rooted at `value`, consuming its record. Each value is a child at most once
/// so every record is consumed at most once.
fn assemble<K>(value: K, records: &mut HashMap<K, (Option<K>, Option<K>)>) -> Box<Node<K>>
where
    K: Eq + Hash,
{
    let (left, right) = records.remove(&value).unwrap_or((None, None));
    let mut node = Node::boxed(value);
    node.left = left.map(|v| assemble(v, records));
    node.right = right.map(|v| assemble(v, records));
    node
}

fn split_record(line: &str, line_no: usize) -> Result<[&str; 3], FormatError> {
    let mut tokens = line.split(',');
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(p), Some(l), Some(r), None) => Ok([p, l, r]),
        _ => Err(FormatError::BadLine { line: line_no }),
    }
}

fn parse_slot<K: FromStr>(token: &str, line_no: usize) -> Result<Option<K>, FormatError> {
    let token = token.trim();
    if token == NULL {
        return Ok(None);
    }
    token.parse().map(Some).map_err(|_| FormatError::BadToken {
        line: line_no,
        token: token.to_string(),
    })
}

/// Displays a value or the `null` placeholder.
struct Token<'a, K>(Option<&'a K>);

impl<K: Display> Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL),
        }
    }
}
