//! Construction, configuration and reset for AvlTree.
//!
//! A tree is built from a validated [`TreeConfig`] and a metrics collector.
//! `reset` rebuilds the owned state in place instead of replacing the tree.

use crate::error::{AvlTreeError, InitResult};
use crate::history::HistoryLog;
use crate::metrics::{Metrics, MetricsCollector};
use crate::types::AvlTree;

/// Tree settings.
///
/// # Examples
///
/// ```
/// use avltree::{AvlTree, TreeConfig};
///
/// let config = TreeConfig::default().history_limit(64);
/// let tree = AvlTree::<i64>::with_config(config).unwrap();
/// assert!(tree.is_empty());
///
/// assert!(AvlTree::<i64>::with_config(TreeConfig::default().history_limit(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Append history entries for structural events and searches.
    pub record_history: bool,
    /// Keep at most this many history entries.
    pub max_history: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            max_history: None,
        }
    }
}

impl TreeConfig {
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.max_history = Some(limit);
        self
    }

    pub fn validate(&self) -> InitResult<()> {
        if self.max_history == Some(0) {
            return Err(AvlTreeError::invalid_config(
                "history_limit",
                "must keep at least one entry",
            ));
        }
        Ok(())
    }
}

impl<K> AvlTree<K, Metrics> {
    /// Create an empty tree with the default configuration and counters.
    pub fn new() -> Self {
        Self::from_parts(TreeConfig::default(), Metrics::new())
    }

    /// Create an empty tree with a validated configuration.
    pub fn with_config(config: TreeConfig) -> InitResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, Metrics::new()))
    }
}

impl<K> Default for AvlTree<K, Metrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, M: MetricsCollector> AvlTree<K, M> {
    /// Create an empty tree that reports to `collector`.
    pub fn with_collector(collector: M) -> Self {
        Self::from_parts(TreeConfig::default(), collector)
    }

    /// Create an empty tree with both a configuration and a collector.
    pub fn with_config_and_collector(config: TreeConfig, collector: M) -> InitResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, collector))
    }

    fn from_parts(config: TreeConfig, mut collector: M) -> Self {
        collector.reset();
        Self {
            root: None,
            history: HistoryLog::with_limit(config.max_history),
            metrics: collector,
            config,
        }
    }

    /// Drop every node, clear the history and zero the collector.
    pub fn reset(&mut self) {
        self.root = None;
        self.history = HistoryLog::with_limit(self.config.max_history);
        self.metrics.reset();
        tracing::trace!("tree reset");
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Borrow the collector.
    pub fn collector(&self) -> &M {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert!(config.record_history);
        assert_eq!(config.max_history, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_history_limit_is_rejected() {
        let err = AvlTree::<i32>::with_config(TreeConfig::default().history_limit(0)).unwrap_err();
        assert!(matches!(err, AvlTreeError::InvalidConfig(_)));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut tree = AvlTree::new();
        for key in [3, 1, 2] {
            tree.insert(key);
        }
        tree.reset();
        assert!(tree.is_empty());
        assert!(tree.history().is_empty());
        assert!(tree.metrics_snapshot().is_zero());
    }
}
