//! DELETE operations for AvlTree.
//!
//! Standard BST deletion: nodes with at most one child are spliced out, nodes
//! with two children take their in-order successor's key and the successor is
//! removed from the right subtree. Rebalancing on the way up is decided by the
//! taller child's own balance factor.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::Instant;

use crate::balance::{delete_case, restore};
use crate::error::{AvlTreeError, ModifyResult};
use crate::events::EventSink;
use crate::history::{DeleteReason, HistoryEntry};
use crate::metrics::MetricsCollector;
use crate::types::{AvlTree, Direction, Link};

impl<K: Ord + Clone + Debug, M: MetricsCollector> AvlTree<K, M> {
    /// Remove a key, rebalancing as needed. Returns `false` if it was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, TraversalOrder};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert_all([10, 20, 30, 40, 50, 25]);
    /// assert!(tree.delete(&30));
    /// assert!(!tree.delete(&30));
    /// assert_eq!(tree.traverse_to_vec(TraversalOrder::InOrder), vec![10, 20, 25, 40, 50]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        let started = Instant::now();
        let removed = self.delete_with(key, true);
        let elapsed = started.elapsed();
        self.metrics.record_duration(elapsed);
        tracing::trace!(key = ?key, removed, ?elapsed, "delete");
        removed
    }

    /// Delete with invariant checks before and after.
    ///
    /// An absent key is reported as [`AvlTreeError::KeyNotFound`].
    pub fn try_delete(&mut self, key: &K) -> ModifyResult<()> {
        self.validate_for_operation("delete")?;
        if !self.delete(key) {
            return Err(AvlTreeError::KeyNotFound);
        }
        self.validate_for_operation("delete")
    }

    /// Delete without timing; `record = false` keeps the history untouched.
    pub(crate) fn delete_with(&mut self, key: &K, record: bool) -> bool {
        let (root, mut events) = self.parts(record);
        let (new_root, removed) = delete_node(
            root.take(),
            key,
            None,
            DeleteReason::OneOrNoChildren,
            &mut events,
        );
        *root = new_root;
        removed
    }
}

/// Remove `key` below `link`. `splice_reason` labels the entry recorded when
/// a node with at most one child is spliced out.
fn delete_node<K: Ord + Clone + Debug, M: MetricsCollector>(
    link: Link<K>,
    key: &K,
    parent: Option<&K>,
    splice_reason: DeleteReason,
    events: &mut EventSink<'_, K, M>,
) -> (Link<K>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };
    events.comparison();

    let direction = match key.cmp(&node.key) {
        Ordering::Less => Some(Direction::Left),
        Ordering::Greater => Some(Direction::Right),
        Ordering::Equal => None,
    };

    let mut node = match direction {
        Some(direction) => {
            let child = node.take_child(direction);
            let (child, removed) = delete_node(child, key, Some(&node.key), splice_reason, events);
            node.set_child(direction, child);
            if !removed {
                return (Some(node), false);
            }
            node
        }
        None => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                events.record(|| HistoryEntry::Delete {
                    key: node.key.clone(),
                    parent: parent.cloned(),
                    reason: DeleteReason::TwoChildren,
                });
                node.key = right.min_key().clone();
                let (right, _) = delete_node(
                    Some(right),
                    &node.key,
                    Some(&node.key),
                    DeleteReason::SuccessorRelocated,
                    events,
                );
                node.left = Some(left);
                node.right = right;
                node
            }
            (left, right) => {
                events.record(|| HistoryEntry::Delete {
                    key: node.key.clone(),
                    parent: parent.cloned(),
                    reason: splice_reason,
                });
                match left.or(right) {
                    Some(child) => child,
                    None => return (None, true),
                }
            }
        },
    };

    node.update_height();
    match delete_case(&node) {
        Some(case) => (Some(restore(node, case, parent, events)), true),
        None => (Some(node), true),
    }
}

#[cfg(test)]
mod tests {
    use crate::history::{DeleteReason, HistoryEntry};
    use crate::types::{AvlTree, TraversalOrder};

    #[test]
    fn test_delete_leaf_and_absent() {
        let mut tree = AvlTree::new();
        tree.insert_all([2, 1, 3]);
        assert!(tree.delete(&1));
        assert!(!tree.delete(&1));
        assert_eq!(tree.traverse_to_vec(TraversalOrder::InOrder), vec![2, 3]);
        assert_eq!(
            tree.history().most_recent(),
            Some(&HistoryEntry::Delete {
                key: 1,
                parent: Some(2),
                reason: DeleteReason::OneOrNoChildren
            })
        );
    }

    #[test]
    fn test_delete_only_node_empties_tree() {
        let mut tree = AvlTree::new();
        tree.insert(7);
        assert!(tree.delete(&7));
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let mut tree = AvlTree::new();
        tree.insert_all([10, 20, 30, 40, 50, 25]);
        // the Right-Left fix at 20 leaves 30 at the root
        assert_eq!(tree.root().map(|node| node.key), Some(30));
        tree.delete(&30);
        assert_eq!(tree.root().map(|node| node.key), Some(40));

        let entries = tree.history_entries();
        let deletes: Vec<_> = entries
            .iter()
            .filter(|entry| matches!(entry, HistoryEntry::Delete { .. }))
            .collect();
        assert_eq!(
            deletes,
            vec![
                &HistoryEntry::Delete {
                    key: 40,
                    parent: Some(40),
                    reason: DeleteReason::SuccessorRelocated
                },
                &HistoryEntry::Delete {
                    key: 30,
                    parent: None,
                    reason: DeleteReason::TwoChildren
                },
            ]
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_delete_rebalances() {
        let mut tree = AvlTree::new();
        tree.insert_all([20, 10, 30, 40]);
        let rotations_before = tree.metrics_snapshot().total_rotations();
        tree.delete(&10);
        // 20 becomes right heavy and rotates left
        assert_eq!(tree.root().map(|node| node.key), Some(30));
        assert_eq!(tree.metrics_snapshot().total_rotations(), rotations_before + 1);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_try_delete_reports_missing_key() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        assert_eq!(tree.try_delete(&2), Err(crate::AvlTreeError::KeyNotFound));
        assert_eq!(tree.try_delete(&1), Ok(()));
    }
}
