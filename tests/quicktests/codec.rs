use std::collections::HashSet;

use bintree::codec;
use bintree::discipline::{Tree, TreeKind, Unconstrained};
use bintree::node::Link;
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A randomly shaped tree of at most 50 nodes.
fn random_shape(xs: &[i16], seed: u64) -> Link<i16> {
    let strategy = Box::new(Unconstrained::new(StdRng::seed_from_u64(seed)));
    let mut tree = Tree::with_strategy(TreeKind::Unconstrained, None, strategy);
    for &x in xs.iter().take(50) {
        tree.insert(x);
    }
    tree.into_root()
}

fn unique(xs: Vec<i16>) -> Vec<i16> {
    let mut seen = HashSet::new();
    xs.into_iter().filter(|x| seen.insert(*x)).collect()
}

#[quickcheck]
fn levels_round_trip(xs: Vec<i16>, seed: u64) -> bool {
    let root = random_shape(&xs, seed);
    codec::import_levels(&codec::export_levels(&root)) == Ok(root)
}

#[quickcheck]
fn level_text_round_trip(xs: Vec<i16>, seed: u64) -> bool {
    let levels = codec::export_levels(&random_shape(&xs, seed));
    codec::parse_levels::<i16>(&codec::format_levels(&levels)) == Ok(levels)
}

#[quickcheck]
fn flat_file_round_trip(xs: Vec<i16>, seed: u64) -> bool {
    let root = random_shape(&unique(xs), seed);
    let lines = codec::export_flat_file(&root);
    let imported: Result<Link<i16>, _> = codec::import_flat_file(&lines);
    imported == Ok(root)
}

#[quickcheck]
fn flat_file_has_one_line_per_node(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    for x in unique(xs) {
        tree.insert(x);
    }

    let text = codec::to_flat_text(tree.root());
    text.lines().count() == tree.len() && (text.is_empty() || text.ends_with('\n'))
}
