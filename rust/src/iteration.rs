//! Iterator implementations for AvlTree.
//!
//! All three depth-first orders share one explicit-stack iterator. A stack
//! frame is either a subtree still to expand or a node whose key is ready to
//! be yielded; the order only changes how an expanded subtree is pushed.

use std::fmt;

use crate::types::{AvlTree, Node, TraversalOrder};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

enum Frame<'a, K> {
    Expand(&'a Node<K>),
    Yield(&'a K),
}

/// Lazy depth-first traversal over keys.
pub struct Traversal<'a, K> {
    order: TraversalOrder,
    stack: Vec<Frame<'a, K>>,
}

impl<'a, K> Traversal<'a, K> {
    pub fn new(root: Option<&'a Node<K>>, order: TraversalOrder) -> Self {
        Self {
            order,
            stack: root.map(Frame::Expand).into_iter().collect(),
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Yield(key) => return Some(key),
                Frame::Expand(node) => {
                    // pushed in reverse of the visit order
                    let left = node.left().map(Frame::Expand);
                    let right = node.right().map(Frame::Expand);
                    let this = Some(Frame::Yield(&node.key));
                    let frames = match self.order {
                        TraversalOrder::PreOrder => [right, left, this],
                        TraversalOrder::InOrder => [right, this, left],
                        TraversalOrder::PostOrder => [this, right, left],
                    };
                    self.stack.extend(frames.into_iter().flatten());
                }
            }
        }
    }
}

// ============================================================================
// AVLTREE TRAVERSAL METHODS
// ============================================================================

impl<K, M> AvlTree<K, M> {
    /// Lazily visit every key in `order`. Call again to restart.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, K> {
        Traversal::new(self.root.as_deref(), order)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Traversal<'_, K> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Render the three traversals for display.
    pub fn traversal_report(&self) -> TraversalReport<'_, K, M> {
        TraversalReport { tree: self }
    }
}

impl<K: Clone, M> AvlTree<K, M> {
    /// Eager form of [`traverse`](Self::traverse).
    pub fn traverse_to_vec(&self, order: TraversalOrder) -> Vec<K> {
        self.traverse(order).cloned().collect()
    }
}

/// Display adapter printing one line per traversal order.
pub struct TraversalReport<'a, K, M> {
    tree: &'a AvlTree<K, M>,
}

impl<K: fmt::Display, M> fmt::Display for TraversalReport<'_, K, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, order) in TraversalOrder::ALL.into_iter().enumerate() {
            if line > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", order.label())?;
            for key in self.tree.traverse(order) {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AvlTree<i32> {
        let mut tree = AvlTree::new();
        tree.insert_all([39, 7, 11, 72, 50, -17, 71, 70, 68, 14, 9, 94, 96]);
        tree
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = sample();
        let keys = tree.traverse_to_vec(TraversalOrder::InOrder);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.len(), 13);
    }

    #[test]
    fn test_orders_on_small_tree() {
        let mut tree = AvlTree::new();
        tree.insert_all([2, 1, 3]);
        assert_eq!(tree.traverse_to_vec(TraversalOrder::PreOrder), vec![2, 1, 3]);
        assert_eq!(tree.traverse_to_vec(TraversalOrder::InOrder), vec![1, 2, 3]);
        assert_eq!(tree.traverse_to_vec(TraversalOrder::PostOrder), vec![1, 3, 2]);
    }

    #[test]
    fn test_pre_order_starts_at_root_and_post_order_ends_there() {
        let tree = sample();
        let root = tree.root().map(|node| node.key);
        assert_eq!(tree.traverse(TraversalOrder::PreOrder).next().copied(), root);
        assert_eq!(tree.traverse(TraversalOrder::PostOrder).last().copied(), root);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let tree = sample();
        let first: Vec<_> = tree.keys().collect();
        let second: Vec<_> = tree.keys().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_tree_traversal() {
        let tree = AvlTree::<i32>::new();
        assert_eq!(tree.keys().next(), None);
    }

    #[test]
    fn test_report_lines() {
        let mut tree = AvlTree::new();
        tree.insert_all([2, 1, 3]);
        assert_eq!(
            tree.traversal_report().to_string(),
            "Pre-order: 2 1 3\nIn-order: 1 2 3\nPost-order: 1 3 2"
        );
    }
}
