//! Event routing for the recursive engine.
//!
//! The insert/delete/search recursions report through an [`EventSink`] that
//! borrows the tree's history and collector for the duration of one call. A
//! silent sink drops history entries but still forwards metrics; undo uses it
//! so that reversing an operation does not log a new one.

use crate::history::{HistoryEntry, HistoryLog};
use crate::metrics::MetricsCollector;
use crate::types::{AvlTree, Link};

pub(crate) struct EventSink<'a, K, M> {
    history: Option<&'a mut HistoryLog<K>>,
    metrics: &'a mut M,
}

impl<'a, K, M: MetricsCollector> EventSink<'a, K, M> {
    pub(crate) fn recording(history: &'a mut HistoryLog<K>, metrics: &'a mut M) -> Self {
        Self {
            history: Some(history),
            metrics,
        }
    }

    pub(crate) fn silent(metrics: &'a mut M) -> Self {
        Self {
            history: None,
            metrics,
        }
    }

    pub(crate) fn comparison(&mut self) {
        self.metrics.record_comparison();
    }

    pub(crate) fn metrics(&mut self) -> &mut M {
        &mut *self.metrics
    }

    /// Append an entry; the closure only runs when history is being kept.
    pub(crate) fn record(&mut self, entry: impl FnOnce() -> HistoryEntry<K>) {
        if let Some(history) = self.history.as_deref_mut() {
            history.append(entry());
        }
    }
}

impl<K, M: MetricsCollector> AvlTree<K, M> {
    /// Split the tree into its root link and a sink over history and metrics.
    ///
    /// History is only kept when both the caller and the configuration ask
    /// for it.
    pub(crate) fn parts(&mut self, record: bool) -> (&mut Link<K>, EventSink<'_, K, M>) {
        let events = if record && self.config.record_history {
            EventSink::recording(&mut self.history, &mut self.metrics)
        } else {
            EventSink::silent(&mut self.metrics)
        };
        (&mut self.root, events)
    }
}
