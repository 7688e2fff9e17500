//! Property tests that exercise the tree exclusively through its public API.

use bstree::{Tree, TreeError};

/// Builds a tree from `keys` and returns it with the keys sorted.
fn tree_and_sorted(keys: Vec<i16>) -> (Tree<i16>, Vec<i16>) {
    let mut tree = Tree::new();
    for key in &keys {
        tree.insert(*key);
    }
    let mut sorted = keys;
    sorted.sort_unstable();
    (tree, sorted)
}

quickcheck::quickcheck! {
    fn inorder_yields_the_sorted_multiset(keys: Vec<i16>) -> bool {
        let (tree, sorted) = tree_and_sorted(keys);
        tree.assert_invariants();

        tree.len() == sorted.len() && tree.iter_inorder().copied().eq(sorted.into_iter())
    }
}

quickcheck::quickcheck! {
    fn search_agrees_with_a_reference_set(keys: Vec<i16>, probes: Vec<i16>) -> bool {
        let (tree, sorted) = tree_and_sorted(keys);

        probes.into_iter().all(|probe| match tree.search(&probe) {
            Ok(found) => *found.key() == probe && sorted.binary_search(&probe).is_ok(),
            Err(TreeError::NotFound) => sorted.binary_search(&probe).is_err(),
            Err(TreeError::EmptyTree) => false,
        })
    }
}

quickcheck::quickcheck! {
    fn extremes_match_the_ends_of_inorder(keys: Vec<i16>) -> bool {
        let (tree, sorted) = tree_and_sorted(keys);

        let minimum = tree.minimum().ok().map(|n| *n.key());
        let maximum = tree.maximum().ok().map(|n| *n.key());

        minimum == sorted.first().copied() && maximum == sorted.last().copied()
    }
}

quickcheck::quickcheck! {
    fn successor_walk_visits_every_key_ascending(keys: Vec<i16>) -> bool {
        let (tree, sorted) = tree_and_sorted(keys);

        let mut walked = Vec::with_capacity(sorted.len());
        let mut current = tree.minimum().ok();
        while let Some(node) = current {
            walked.push(*node.key());
            current = node.successor();
        }

        walked == sorted
    }
}

quickcheck::quickcheck! {
    fn clear_leaves_an_empty_reusable_tree(keys: Vec<i16>, again: Vec<i16>) -> bool {
        let (mut tree, _) = tree_and_sorted(keys);
        tree.clear();

        if !tree.is_empty() || tree.minimum() != Err(TreeError::EmptyTree) {
            return false;
        }

        let mut sorted = again.clone();
        sorted.sort_unstable();
        for key in again {
            tree.insert(key);
        }
        tree.assert_invariants();

        tree.iter_inorder().copied().eq(sorted.into_iter())
    }
}
