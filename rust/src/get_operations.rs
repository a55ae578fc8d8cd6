//! GET operations for AvlTree.
//!
//! `search` is the instrumented lookup: it counts a comparison per visited
//! node and records the visited path in the history. The other lookups are
//! plain reads that touch neither the history nor the collector.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::Instant;

use crate::error::{AvlTreeError, KeyResult};
use crate::history::HistoryEntry;
use crate::metrics::MetricsCollector;
use crate::types::{AvlTree, Node};

impl<K: Ord + Clone + Debug, M: MetricsCollector> AvlTree<K, M> {
    // ============================================================================
    // INSTRUMENTED SEARCH
    // ============================================================================

    /// Find the node holding `key`, recording the root-to-node path.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, HistoryEntry};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert_all([20, 10, 30, 25]);
    /// assert_eq!(tree.search(&25).map(|node| node.key), Some(25));
    /// assert!(matches!(
    ///     tree.history().most_recent(),
    ///     Some(HistoryEntry::Search { path, found: true, .. }) if *path == vec![20, 30, 25]
    /// ));
    /// assert!(tree.search(&99).is_none());
    /// ```
    pub fn search(&mut self, key: &K) -> Option<&Node<K>> {
        let started = Instant::now();
        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        let found = loop {
            let Some(node) = current else {
                break None;
            };
            self.metrics.record_comparison();
            path.push(node.key.clone());
            current = match key.cmp(&node.key) {
                Ordering::Equal => break Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        };

        let hit = found.is_some();
        if self.config.record_history {
            // the parent of a hit is the step before it; a miss would attach
            // under the last visited node
            let parent = if hit {
                path.len().checked_sub(2).and_then(|i| path.get(i))
            } else {
                path.last()
            }
            .cloned();
            self.history.append(HistoryEntry::Search {
                key: key.clone(),
                parent,
                path,
                found: hit,
            });
        }

        let elapsed = started.elapsed();
        self.metrics.record_duration(elapsed);
        tracing::trace!(key = ?key, found = hit, ?elapsed, "search");
        found
    }

    /// Like [`search`](Self::search) but reports a miss as
    /// [`AvlTreeError::KeyNotFound`].
    pub fn search_item(&mut self, key: &K) -> KeyResult<&Node<K>> {
        self.search(key).ok_or(AvlTreeError::KeyNotFound)
    }
}

impl<K: Ord, M> AvlTree<K, M> {
    // ============================================================================
    // PLAIN LOOKUPS
    // ============================================================================

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Find the node for `key` without recording anything.
    pub fn get(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root().map(Node::min_key)
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root().map(Node::max_key)
    }
}

impl<K: Ord + Clone, M> AvlTree<K, M> {
    /// Keys visited from the root towards `key`, ending at `key` if present.
    pub fn path_to(&self, key: &K) -> Vec<K> {
        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            path.push(node.key.clone());
            current = match key.cmp(&node.key) {
                Ordering::Equal => break,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        path
    }
}
