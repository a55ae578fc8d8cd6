//! AVL tree implementation in Rust with a step history and undo.
//!
//! This crate provides a self-balancing binary search tree that records every
//! structural event (insertions, deletions, rotations, searches) in a
//! most-recent-first history, can undo the last user operation, and reports
//! comparisons, rotations and latencies to a pluggable metrics collector.

mod balance;
mod construction;
mod delete_operations;
mod error;
mod events;
mod get_operations;
mod history;
mod insert_operations;
mod iteration;
mod metrics;
mod node;
mod types;
mod validation;

pub mod input;

pub use balance::{balance_factor, delete_case, height, insert_case, rotate};
pub use construction::TreeConfig;
pub use error::{AvlTreeError, InitResult, KeyResult, ModifyResult, TreeResultExt};
pub use history::{DeleteReason, HistoryEntry, HistoryLog};
pub use iteration::{Traversal, TraversalReport};
pub use metrics::{Metrics, MetricsCollector, MetricsSnapshot, RotationKind};
pub use types::{AvlTree, Direction, Link, Node, RotationCase, TraversalOrder};

use std::fmt::Debug;
use std::time::Instant;

impl<K: Ord + Clone + Debug, M: MetricsCollector> AvlTree<K, M> {
    // ============================================================================
    // UNDO
    // ============================================================================

    /// Reverse the most recent insertion or deletion.
    ///
    /// The history is popped through the most recent `Add` or user `Delete`
    /// entry; rotation, search and successor entries above it go with it. The
    /// reversing delete/insert is not itself recorded. Returns the reversed
    /// entry, or `None` (changing nothing) when there is nothing to undo.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, HistoryEntry};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert_all([1, 2, 3]);
    /// let undone = tree.undo();
    /// assert_eq!(undone, Some(HistoryEntry::Add { key: 3, parent: Some(2) }));
    /// assert!(!tree.contains(&3));
    /// assert_eq!(tree.history().len(), 2);
    /// ```
    pub fn undo(&mut self) -> Option<HistoryEntry<K>> {
        let started = Instant::now();
        let entry = self.history.remove_last_operation()?;
        match &entry {
            HistoryEntry::Add { key, .. } => {
                self.delete_with(key, false);
            }
            HistoryEntry::Delete { key, .. } => {
                self.insert_with(key, false);
            }
            HistoryEntry::Rotation { .. } | HistoryEntry::Search { .. } => {}
        }
        let elapsed = started.elapsed();
        self.metrics.record_duration(elapsed);
        tracing::trace!(entry = ?entry, ?elapsed, "undo");
        Some(entry)
    }
}

impl<K, M: MetricsCollector> AvlTree<K, M> {
    /// Counters as of now.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl<K, M> AvlTree<K, M> {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Number of levels in the tree (0 when empty), recomputed by a full walk.
    pub fn depth(&self) -> usize {
        Self::depth_recursive(self.root.as_deref())
    }

    fn depth_recursive(node: Option<&Node<K>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::depth_recursive(node.left()).max(Self::depth_recursive(node.right()))
        })
    }

    /// Number of nodes, recomputed by a full walk.
    pub fn node_count(&self) -> usize {
        Self::count_recursive(self.root.as_deref())
    }

    fn count_recursive(node: Option<&Node<K>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::count_recursive(node.left()) + Self::count_recursive(node.right())
        })
    }

    /// Alias for [`node_count`](Self::node_count).
    pub fn len(&self) -> usize {
        self.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Borrow the history log, newest entry first.
    pub fn history(&self) -> &HistoryLog<K> {
        &self.history
    }
}

impl<K: Clone, M> AvlTree<K, M> {
    /// Owned snapshot of the history, newest entry first.
    pub fn history_entries(&self) -> Vec<HistoryEntry<K>> {
        self.history.entries()
    }
}
