use avltree::{AvlTree, TraversalOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEED: u64 = 42;
const OPERATIONS: usize = 5000;
const KEY_SPACE: i32 = 500;

/// Worst-case AVL height for `n` nodes.
fn height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}

#[test]
fn test_random_operations_match_btreeset() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut tree = AvlTree::new();
    let mut reference = BTreeSet::new();

    for step in 0..OPERATIONS {
        let key = rng.gen_range(0..KEY_SPACE);
        match rng.gen_range(0..10) {
            0..=5 => assert_eq!(tree.insert(key), reference.insert(key), "insert {}", key),
            6..=8 => assert_eq!(tree.delete(&key), reference.remove(&key), "delete {}", key),
            _ => assert_eq!(
                tree.search(&key).map(|node| node.key),
                reference.get(&key).copied(),
                "search {}",
                key
            ),
        }

        if step % 250 == 0 {
            if let Err(e) = tree.check_invariants_detailed() {
                panic!("invariant broken after step {}: {}", step, e);
            }
        }
    }

    assert!(tree.check_invariants());
    assert_eq!(tree.node_count(), reference.len());
    assert_eq!(
        tree.traverse_to_vec(TraversalOrder::InOrder),
        reference.iter().copied().collect::<Vec<_>>()
    );
    assert_eq!(tree.first(), reference.first());
    assert_eq!(tree.last(), reference.last());
}

#[test]
fn test_sequential_inserts_stay_within_height_bound() {
    let mut tree = AvlTree::new();
    for n in 1..=4096usize {
        tree.insert(n as i32);
        if n.is_power_of_two() {
            assert!(
                tree.depth() as f64 <= height_bound(n),
                "depth {} exceeds bound for {} nodes",
                tree.depth(),
                n
            );
        }
    }
    assert!(tree.check_invariants());
    // ascending inserts only ever trigger single left rotations
    let metrics = tree.metrics_snapshot();
    assert_eq!(metrics.right_rotations, 0);
    assert!(metrics.left_rotations > 0);
}

#[test]
fn test_undo_everything_after_random_inserts() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let mut tree = AvlTree::new();
    let mut inserted = 0;
    for _ in 0..300 {
        if tree.insert(rng.gen_range(-1000..1000)) {
            inserted += 1;
        }
    }
    assert_eq!(tree.node_count(), inserted);

    let mut undone = 0;
    while tree.undo().is_some() {
        undone += 1;
    }
    assert_eq!(undone, inserted);
    assert!(tree.is_empty());
}
