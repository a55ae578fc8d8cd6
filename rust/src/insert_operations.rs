//! INSERT operations for AvlTree.
//!
//! Recursive descent to the empty slot, then height recomputation and at most
//! one rebalancing step per level on the way back up. The side the new key
//! landed on decides between the outer (single) and inner (compound) cases.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::Instant;

use crate::balance::{insert_case, restore};
use crate::error::{AvlTreeError, ModifyResult};
use crate::events::EventSink;
use crate::history::HistoryEntry;
use crate::metrics::MetricsCollector;
use crate::types::{AvlTree, Direction, Link, Node};

impl<K: Ord + Clone + Debug, M: MetricsCollector> AvlTree<K, M> {
    /// Insert a key, rebalancing as needed.
    ///
    /// Returns `false` and changes nothing (no history entry either) if the
    /// key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let started = Instant::now();
        let inserted = self.insert_with(&key, true);
        let elapsed = started.elapsed();
        self.metrics.record_duration(elapsed);
        tracing::trace!(key = ?key, inserted, ?elapsed, "insert");
        inserted
    }

    /// Insert every key in order; returns how many were new.
    pub fn insert_all<I: IntoIterator<Item = K>>(&mut self, keys: I) -> usize {
        keys.into_iter().filter(|key| self.insert(key.clone())).count()
    }

    /// Insert with invariant checks before and after.
    ///
    /// Unlike [`insert`](Self::insert), a duplicate key is reported as
    /// [`AvlTreeError::DuplicateKey`].
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        self.validate_for_operation("insert")?;
        if self.contains(&key) {
            return Err(AvlTreeError::duplicate_key(&key));
        }
        self.insert(key);
        self.validate_for_operation("insert")
    }

    /// Insert without timing; `record = false` keeps the history untouched.
    pub(crate) fn insert_with(&mut self, key: &K, record: bool) -> bool {
        let (root, mut events) = self.parts(record);
        let (new_root, inserted) = insert_node(root.take(), key, None, &mut events);
        *root = Some(new_root);
        inserted
    }
}

/// Insert `key` below `link` and return the (possibly rotated) subtree root
/// together with whether a node was added.
fn insert_node<K: Ord + Clone + Debug, M: MetricsCollector>(
    link: Link<K>,
    key: &K,
    parent: Option<&K>,
    events: &mut EventSink<'_, K, M>,
) -> (Box<Node<K>>, bool) {
    events.comparison();
    let Some(mut node) = link else {
        events.record(|| HistoryEntry::Add {
            key: key.clone(),
            parent: parent.cloned(),
        });
        return (Box::new(Node::new(key.clone())), true);
    };

    let direction = match key.cmp(&node.key) {
        Ordering::Less => Direction::Left,
        Ordering::Greater => Direction::Right,
        Ordering::Equal => return (node, false),
    };

    let child = node.take_child(direction);
    let (child, inserted) = insert_node(child, key, Some(&node.key), events);
    node.set_child(direction, Some(child));
    if !inserted {
        return (node, false);
    }

    node.update_height();
    match insert_case(&node, key) {
        Some(case) => (restore(node, case, parent, events), true),
        None => (node, true),
    }
}
