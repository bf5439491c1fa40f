use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::codec;
use bintree::discipline::{Tree, TreeKind};
use bintree::node::Link;
use bintree::traversal::{SearchAlgorithm, TraversalKind};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Orders `xs` so that inserting them one by one into a plain BST yields a full tree: each
/// midpoint comes before everything on either side of it.
fn balanced_order(xs: &[i32], out: &mut Vec<i32>) {
    if xs.is_empty() {
        return;
    }
    let mid = xs.len() / 2;
    out.push(xs[mid]);
    balanced_order(&xs[..mid], out);
    balanced_order(&xs[mid + 1..], out);
}

/// Even values only, so odd values are guaranteed misses.
fn full_tree(kind: TreeKind, num_levels: u32) -> Link<i32> {
    let xs: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32)
        .map(|x| 2 * x)
        .collect();
    let mut order = Vec::with_capacity(xs.len());
    balanced_order(&xs, &mut order);

    let mut tree = Tree::new(kind);
    for x in order {
        tree.insert(x);
    }
    tree.into_root()
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// disciplines before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let largest_element_in_tree = 2 * (num_nodes_in_full_tree(num_levels) as i32 - 1);

        for kind in TreeKind::ALL {
            let root = full_tree(kind, num_levels);
            let id = BenchmarkId::new(kind.to_string(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(Tree::from_root(kind, root.clone()));
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "inorder-plan", |tree, _| {
        black_box(tree.traversal_plan(TraversalKind::Inorder));
    });
    bench_helper(c, "bfs-search-plan", |tree, i| {
        black_box(tree.search_plan(SearchAlgorithm::Bfs, &i));
    });
    bench_helper(c, "bst-search-plan", |tree, i| {
        black_box(tree.search_plan(SearchAlgorithm::Bst, &i));
    });

    bench_helper(c, "flat-file-round-trip", |tree, _| {
        let lines = codec::export_flat_file(tree.root());
        let root: Link<i32> = codec::import_flat_file(&lines).unwrap();
        black_box(root);
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
