//! Balancing primitives: heights, balance factors and rotations.
//!
//! There is exactly one rotation, parameterized by [`Direction`]. The compound
//! Left-Right and Right-Left fixes are two single rotations applied in
//! sequence, so both single counters move when they run.

use std::fmt::Debug;

use crate::events::EventSink;
use crate::history::HistoryEntry;
use crate::metrics::MetricsCollector;
use crate::types::{Direction, Node, RotationCase, EMPTY_HEIGHT};

/// Height of a possibly empty subtree.
pub fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(EMPTY_HEIGHT, |node| node.height)
}

/// height(left) - height(right), or 0 for the empty subtree.
pub fn balance_factor<K>(node: Option<&Node<K>>) -> i32 {
    node.map_or(0, |node| {
        height(node.left()) as i32 - height(node.right()) as i32
    })
}

/// Rotate `node` towards `direction` and return the new subtree root.
///
/// For `Direction::Right` the left child is lifted: `x = node.left`,
/// `node.left = x.right`, `x.right = node`. The demoted node's height is
/// recomputed before the lifted one. A node without the child to lift is
/// returned unchanged and nothing is recorded.
pub fn rotate<K: Debug, M: MetricsCollector + ?Sized>(
    mut node: Box<Node<K>>,
    direction: Direction,
    metrics: &mut M,
) -> Box<Node<K>> {
    let lifted_side = direction.opposite();
    let Some(mut pivot) = node.take_child(lifted_side) else {
        return node;
    };

    node.set_child(lifted_side, pivot.take_child(direction));
    node.update_height();
    tracing::debug!(
        key = ?node.key,
        pivot = ?pivot.key,
        direction = direction.as_str(),
        "rotation"
    );
    pivot.set_child(direction, Some(node));
    pivot.update_height();

    metrics.record_rotation(direction.into());
    pivot
}

/// Imbalance case after inserting `key` below `node`, decided by the side the
/// key landed on.
pub fn insert_case<K: Ord>(node: &Node<K>, key: &K) -> Option<RotationCase> {
    let balance = balance_factor(Some(node));
    if balance > 1 {
        let left = node.left()?;
        if *key < left.key {
            Some(RotationCase::LeftLeft)
        } else if *key > left.key {
            Some(RotationCase::LeftRight)
        } else {
            None
        }
    } else if balance < -1 {
        let right = node.right()?;
        if *key > right.key {
            Some(RotationCase::RightRight)
        } else if *key < right.key {
            Some(RotationCase::RightLeft)
        } else {
            None
        }
    } else {
        None
    }
}

/// Imbalance case after a deletion below `node`, decided by the taller
/// child's own balance factor.
pub fn delete_case<K>(node: &Node<K>) -> Option<RotationCase> {
    let balance = balance_factor(Some(node));
    if balance > 1 {
        if balance_factor(node.left()) >= 0 {
            Some(RotationCase::LeftLeft)
        } else {
            Some(RotationCase::LeftRight)
        }
    } else if balance < -1 {
        if balance_factor(node.right()) <= 0 {
            Some(RotationCase::RightRight)
        } else {
            Some(RotationCase::RightLeft)
        }
    } else {
        None
    }
}

/// Record the case against the triggering node, then apply its rotation(s).
pub(crate) fn restore<K: Clone + Debug, M: MetricsCollector>(
    mut node: Box<Node<K>>,
    case: RotationCase,
    parent: Option<&K>,
    events: &mut EventSink<'_, K, M>,
) -> Box<Node<K>> {
    events.record(|| HistoryEntry::Rotation {
        key: node.key.clone(),
        parent: parent.cloned(),
        case,
    });

    let heavy = case.heavy_side();
    if case.is_compound() {
        if let Some(child) = node.take_child(heavy) {
            node.set_child(heavy, Some(rotate(child, heavy, events.metrics())));
        }
        events.metrics().record_rotation(case.into());
    }
    rotate(node, heavy.opposite(), events.metrics())
}
