//! Validation and debugging utilities for AvlTree.
//!
//! Invariant checking walks the whole tree, so it is O(n) and meant for
//! tests, the checked `try_*` operations, and debugging.

use std::fmt::{self, Debug, Write as _};

use crate::balance::{balance_factor, height};
use crate::error::{AvlTreeError, InitResult, TreeResult};
use crate::types::{AvlTree, Node, EMPTY_DEPTH};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord + Debug, M> AvlTree<K, M> {
    /// Check if the tree maintains the BST and AVL invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_node(self.root(), None, None)
            .map_err(|e| e.to_string())?;

        let visited = self.keys().count();
        if visited != self.node_count() {
            return Err(format!(
                "Traversal visited {} keys but tree has {} nodes",
                visited,
                self.node_count()
            ));
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> InitResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| AvlTreeError::data_integrity(operation, &e))
    }

    /// Recursively check ordering bounds, stored heights, balance and caches.
    fn check_node(
        &self,
        node: Option<&Node<K>>,
        min_key: Option<&K>,
        max_key: Option<&K>,
    ) -> TreeResult<()> {
        let Some(node) = node else {
            return Ok(());
        };

        if min_key.is_some_and(|min| node.key <= *min) {
            return Err(AvlTreeError::data_integrity(
                "Ordering",
                &format!("{:?} is not greater than {:?}", node.key, min_key),
            ));
        }
        if max_key.is_some_and(|max| node.key >= *max) {
            return Err(AvlTreeError::data_integrity(
                "Ordering",
                &format!("{:?} is not less than {:?}", node.key, max_key),
            ));
        }

        self.check_node(node.left(), min_key, Some(&node.key))?;
        self.check_node(node.right(), Some(&node.key), max_key)?;

        let expected_height = 1 + height(node.left()).max(height(node.right()));
        if node.height != expected_height {
            return Err(AvlTreeError::data_integrity(
                "Height",
                &format!(
                    "node {:?} stores {} but children give {}",
                    node.key, node.height, expected_height
                ),
            ));
        }

        let balance = balance_factor(Some(node));
        if balance.abs() > 1 {
            return Err(AvlTreeError::data_integrity(
                "Balance",
                &format!("node {:?} has balance factor {}", node.key, balance),
            ));
        }

        let child_depth = |child: Option<&Node<K>>| child.map_or(EMPTY_DEPTH, |n| n.depth);
        let expected_depth = child_depth(node.left()).max(child_depth(node.right())) + 1;
        if node.balance != balance || node.depth != expected_depth {
            return Err(AvlTreeError::data_integrity(
                "Display cache",
                &format!(
                    "node {:?} caches depth {} balance {}, expected {} and {}",
                    node.key, node.depth, node.balance, expected_depth, balance
                ),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<K: fmt::Display, M> AvlTree<K, M> {
    /// Indented dump of the tree, right subtree first so it reads rotated.
    pub fn render_structure(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root.as_deref() {
            Self::render_node(root, 0, &mut out);
        }
        out
    }

    /// Prints the tree structure for debugging.
    pub fn print_structure(&self) {
        println!("Tree structure:");
        print!("{}", self.render_structure());
    }

    fn render_node(node: &Node<K>, level: usize, out: &mut String) {
        if let Some(right) = node.right() {
            Self::render_node(right, level + 1, out);
        }
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "{}{} (h={}, b={})",
            "    ".repeat(level),
            node.key,
            node.height,
            node.balance
        );
        if let Some(left) = node.left() {
            Self::render_node(left, level + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{AvlTree, Direction, Node};

    #[test]
    fn test_balanced_tree_validates() {
        let mut tree = AvlTree::new();
        tree.insert_all(1..=100);
        assert_eq!(tree.validate(), Ok(()));
        assert!(tree.validate_for_operation("test").is_ok());
    }

    #[test]
    fn test_detects_unbalanced_chain() {
        let mut tree = AvlTree::<i32>::new();
        let mut top = Box::new(Node::new(1));
        let mut middle = Box::new(Node::new(2));
        middle.set_child(Direction::Right, Some(Box::new(Node::new(3))));
        middle.update_height();
        top.set_child(Direction::Right, Some(middle));
        top.update_height();
        tree.root = Some(top);

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.contains("Balance"), "{}", err);
    }

    #[test]
    fn test_detects_ordering_violation() {
        let mut tree = AvlTree::<i32>::new();
        let mut top = Box::new(Node::new(5));
        top.set_child(Direction::Left, Some(Box::new(Node::new(9))));
        top.update_height();
        tree.root = Some(top);
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_stale_height() {
        let mut tree = AvlTree::<i32>::new();
        let mut top = Box::new(Node::new(5));
        top.set_child(Direction::Left, Some(Box::new(Node::new(1))));
        tree.root = Some(top);
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.contains("Height"), "{}", err);
    }

    #[test]
    fn test_render_structure() {
        let mut tree = AvlTree::new();
        tree.insert_all([2, 1, 3]);
        assert_eq!(
            tree.render_structure(),
            "    3 (h=1, b=0)\n2 (h=2, b=0)\n    1 (h=1, b=0)\n"
        );
    }
}
