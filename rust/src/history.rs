//! Step history for AvlTree.
//!
//! Every structural event (and every search) is prepended to a
//! [`HistoryLog`], most recent first. Undo removes one user-level operation at
//! a time: the log is popped through the most recent `Add` or user `Delete`
//! entry, discarding the rotations, searches and successor relocations
//! recorded on top of it.

use std::collections::VecDeque;
use std::fmt;

use crate::types::RotationCase;

/// Why a node left the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteReason {
    /// Spliced out and replaced by its only child, or by nothing.
    OneOrNoChildren,
    /// Replaced by its in-order successor's key.
    TwoChildren,
    /// The in-order successor's original node, removed after its key moved up.
    SuccessorRelocated,
}

impl DeleteReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DeleteReason::OneOrNoChildren => "Node had one or no children",
            DeleteReason::TwoChildren => "Node had two children",
            DeleteReason::SuccessorRelocated => "In-order successor moved up",
        }
    }
}

/// One recorded event. `parent` is `None` at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry<K> {
    Add {
        key: K,
        parent: Option<K>,
    },
    Delete {
        key: K,
        parent: Option<K>,
        reason: DeleteReason,
    },
    Rotation {
        key: K,
        parent: Option<K>,
        case: RotationCase,
    },
    Search {
        key: K,
        parent: Option<K>,
        path: Vec<K>,
        found: bool,
    },
}

impl<K> HistoryEntry<K> {
    pub fn key(&self) -> &K {
        match self {
            HistoryEntry::Add { key, .. }
            | HistoryEntry::Delete { key, .. }
            | HistoryEntry::Rotation { key, .. }
            | HistoryEntry::Search { key, .. } => key,
        }
    }

    pub fn parent(&self) -> Option<&K> {
        match self {
            HistoryEntry::Add { parent, .. }
            | HistoryEntry::Delete { parent, .. }
            | HistoryEntry::Rotation { parent, .. }
            | HistoryEntry::Search { parent, .. } => parent.as_ref(),
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            HistoryEntry::Add { .. } => "Inserted as a new node",
            HistoryEntry::Delete { reason, .. } => reason.as_str(),
            HistoryEntry::Rotation { case, .. } => case.label(),
            HistoryEntry::Search { found: true, .. } => "Node found",
            HistoryEntry::Search { found: false, .. } => "Node not found",
        }
    }

    /// True for entries that undo can reverse.
    pub fn is_undoable(&self) -> bool {
        match self {
            HistoryEntry::Add { .. } => true,
            HistoryEntry::Delete { reason, .. } => *reason != DeleteReason::SuccessorRelocated,
            HistoryEntry::Rotation { .. } | HistoryEntry::Search { .. } => false,
        }
    }
}

struct ParentLabel<'a, K>(Option<&'a K>);

impl<K: fmt::Display> fmt::Display for ParentLabel<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => write!(f, "{}", key),
            None => f.write_str("none"),
        }
    }
}

impl<K: fmt::Display> fmt::Display for HistoryEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Add { key, parent } => write!(
                f,
                "Added node with key {} under parent {}. Reason: {}",
                key,
                ParentLabel(parent.as_ref()),
                self.reason()
            ),
            HistoryEntry::Delete { key, parent, .. } => write!(
                f,
                "Deleted node with key {} under parent {}. Reason: {}",
                key,
                ParentLabel(parent.as_ref()),
                self.reason()
            ),
            HistoryEntry::Rotation { key, case, .. } => write!(
                f,
                "Performed {} rotation on node with key {}. Reason: {}",
                case.rotation_name(),
                key,
                self.reason()
            ),
            HistoryEntry::Search {
                key, path, found, ..
            } => {
                write!(f, "Searched for node with key {}. Path: ", key)?;
                for (i, step) in path.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{}", step)?;
                }
                f.write_str(if *found {
                    ". Node found."
                } else {
                    ". Node not found."
                })
            }
        }
    }
}

/// Most-recent-first event log, optionally bounded.
#[derive(Debug, Clone)]
pub struct HistoryLog<K> {
    entries: VecDeque<HistoryEntry<K>>,
    limit: Option<usize>,
}

impl<K> Default for HistoryLog<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HistoryLog<K> {
    /// Unbounded log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            limit: None,
        }
    }

    /// Log that keeps at most `limit` entries, dropping the oldest.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend an entry.
    pub fn append(&mut self, entry: HistoryEntry<K>) {
        self.entries.push_front(entry);
        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                self.entries.truncate(limit);
                tracing::debug!(limit, "history limit reached, dropped oldest entry");
            }
        }
    }

    /// The newest entry, if any.
    pub fn most_recent(&self) -> Option<&HistoryEntry<K>> {
        self.entries.front()
    }

    pub fn remove_most_recent(&mut self) -> Option<HistoryEntry<K>> {
        self.entries.pop_front()
    }

    /// Pop entries through the most recent undoable one and return it.
    ///
    /// If no undoable entry exists the log is left untouched.
    pub fn remove_last_operation(&mut self) -> Option<HistoryEntry<K>> {
        let position = self.entries.iter().position(HistoryEntry::is_undoable)?;
        self.entries.drain(..position);
        self.entries.pop_front()
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry<K>> + '_ {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Clone> HistoryLog<K> {
    /// Owned snapshot, newest first.
    pub fn entries(&self) -> Vec<HistoryEntry<K>> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(key: i32) -> HistoryEntry<i32> {
        HistoryEntry::Add { key, parent: None }
    }

    fn rotation(key: i32) -> HistoryEntry<i32> {
        HistoryEntry::Rotation {
            key,
            parent: None,
            case: RotationCase::RightRight,
        }
    }

    #[test]
    fn test_append_is_most_recent_first() {
        let mut log = HistoryLog::new();
        log.append(add(1));
        log.append(add(2));
        assert_eq!(log.most_recent(), Some(&add(2)));
        assert_eq!(log.entries(), vec![add(2), add(1)]);
        assert_eq!(log.remove_most_recent(), Some(add(2)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_remove_last_operation_discards_sub_steps() {
        let mut log = HistoryLog::new();
        log.append(add(10));
        log.append(add(20));
        log.append(add(30));
        log.append(rotation(10));

        assert_eq!(log.remove_last_operation(), Some(add(30)));
        assert_eq!(log.entries(), vec![add(20), add(10)]);
    }

    #[test]
    fn test_remove_last_operation_skips_successor_relocation() {
        let mut log = HistoryLog::new();
        let user_delete = HistoryEntry::Delete {
            key: 30,
            parent: Some(20),
            reason: DeleteReason::TwoChildren,
        };
        log.append(user_delete.clone());
        log.append(HistoryEntry::Delete {
            key: 40,
            parent: Some(40),
            reason: DeleteReason::SuccessorRelocated,
        });
        assert_eq!(log.remove_last_operation(), Some(user_delete));
        assert!(log.is_empty());
    }

    #[test]
    fn test_remove_last_operation_without_undoable_entry_keeps_log() {
        let mut log = HistoryLog::new();
        log.append(rotation(5));
        assert_eq!(log.remove_last_operation(), None);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut log = HistoryLog::with_limit(Some(2));
        for key in 1..=3 {
            log.append(add(key));
        }
        assert_eq!(log.entries(), vec![add(3), add(2)]);
    }

    #[test]
    fn test_display_lines() {
        assert_eq!(
            HistoryEntry::Add { key: 5, parent: Some(10) }.to_string(),
            "Added node with key 5 under parent 10. Reason: Inserted as a new node"
        );
        assert_eq!(
            HistoryEntry::Delete {
                key: 10,
                parent: None,
                reason: DeleteReason::OneOrNoChildren
            }
            .to_string(),
            "Deleted node with key 10 under parent none. Reason: Node had one or no children"
        );
        assert_eq!(
            HistoryEntry::Rotation {
                key: 30,
                parent: None,
                case: RotationCase::LeftRight
            }
            .to_string(),
            "Performed left-right rotation on node with key 30. Reason: Left-Right case"
        );
        assert_eq!(
            HistoryEntry::Search {
                key: 25,
                parent: Some(30),
                path: vec![20, 30, 25],
                found: true
            }
            .to_string(),
            "Searched for node with key 25. Path: 20 -> 30 -> 25. Node found."
        );
    }
}
