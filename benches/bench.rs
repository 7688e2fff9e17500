use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::Tree;

/// Returns how many nodes fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Nothing rebalances,
/// so this comes out as a single right spine as tall as the tree is big: the
/// worst case for every query.
fn get_degenerate_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for key in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(key as i32);
    }

    tree
}

/// Builds a tree by inserting keys in midpoint-first order so that, with no
/// self-balancing at all, the tree still comes out with `num_levels` full
/// levels.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let keys = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &keys);

    tree
}

/// Recursive helper for [`get_balanced_tree`]. The recursion depth is the
/// number of levels, not the number of nodes.
fn fill_balanced_tree(tree: &mut Tree<i32>, keys: &[i32]) {
    if !keys.is_empty() {
        let mid = keys.len() / 2;
        tree.insert(keys[mid]);
        fill_balanced_tree(tree, &keys[..mid]);
        fill_balanced_tree(tree, &keys[mid + 1..]);
    }
}

/// Helper to bench one query closure as its own group, run against balanced
/// and degenerate trees of several sizes.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let largest_key_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;

        let tree_tests = [
            ("degenerate", get_degenerate_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_key_in_tree);

            group.bench_function(id, |b| {
                b.iter(|| {
                    f(&tree, black_box(largest_key_in_tree));
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i));
    });
    bench_helper(c, "search-miss", |tree, i| {
        let _node = black_box(tree.search(&(i + 1)));
    });

    bench_helper(c, "minimum", |tree, _| {
        let _node = black_box(tree.minimum());
    });
    bench_helper(c, "maximum", |tree, _| {
        let _node = black_box(tree.maximum());
    });

    bench_helper(c, "successor-walk", |tree, _| {
        let mut visited = 0usize;
        let mut current = tree.minimum().ok();
        while let Some(node) = current {
            visited += 1;
            current = node.successor();
        }
        black_box(visited);
    });
    bench_helper(c, "inorder-walk", |tree, _| {
        black_box(tree.iter_inorder().count());
    });

    // Building measures insert on its own, plus one teardown per iteration
    // since each built tree drops at the end of the closure.
    let mut group = c.benchmark_group("build");
    for num_levels in [3, 7, 11] {
        let num_nodes = num_nodes_in_full_tree(num_levels);
        group.bench_with_input(
            BenchmarkId::new("ascending", num_nodes),
            &num_nodes,
            |b, _| b.iter(|| black_box(get_degenerate_tree(num_levels))),
        );
        group.bench_with_input(
            BenchmarkId::new("midpoint", num_nodes),
            &num_nodes,
            |b, _| b.iter(|| black_box(get_balanced_tree(num_levels))),
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
