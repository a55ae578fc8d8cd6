//! Node implementation for AvlTree.
//!
//! Accessors, child selection by [`Direction`], and height maintenance. The
//! depth/balance display caches are refreshed together with the height so a
//! node's caches are valid whenever its height is.

use crate::balance::{balance_factor, height};
use crate::types::{Direction, Link, Node, EMPTY_DEPTH};

impl<K> Node<K> {
    /// Create a leaf holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            depth: 0,
            balance: 0,
            left: None,
            right: None,
        }
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    pub fn key(&self) -> &K {
        &self.key
    }

    /// 1-based height of this subtree.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cached display depth (leaf = 0).
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Cached display balance, height(left) - height(right).
    pub fn balance(&self) -> i32 {
        self.balance
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Borrow the child on `direction`.
    pub fn child(&self, direction: Direction) -> Option<&Node<K>> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub(crate) fn child_link_mut(&mut self, direction: Direction) -> &mut Link<K> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Detach and return the child on `direction`.
    pub(crate) fn take_child(&mut self, direction: Direction) -> Link<K> {
        self.child_link_mut(direction).take()
    }

    pub(crate) fn set_child(&mut self, direction: Direction, child: Link<K>) {
        *self.child_link_mut(direction) = child;
    }

    // ============================================================================
    // HEIGHT MAINTENANCE
    // ============================================================================

    /// Recompute the height from the children, then the display caches.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
        self.refresh_display();
    }

    /// Recompute depth and balance from the children's current state.
    pub(crate) fn refresh_display(&mut self) {
        let depth_of = |child: Option<&Node<K>>| child.map_or(EMPTY_DEPTH, |node| node.depth);
        self.depth = depth_of(self.left()).max(depth_of(self.right())) + 1;
        self.balance = balance_factor(Some(self));
    }

    /// Smallest key in this subtree (the in-order successor when called on a
    /// right child).
    pub fn min_key(&self) -> &K {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        &current.key
    }

    /// Largest key in this subtree.
    pub fn max_key(&self) -> &K {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        &current.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Link<i32> {
        Some(Box::new(Node::new(key)))
    }

    #[test]
    fn test_new_node_is_leaf() {
        let node = Node::new(5);
        assert_eq!(node.height(), 1);
        assert_eq!(node.depth(), 0);
        assert_eq!(node.balance(), 0);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_update_height_refreshes_caches() {
        let mut node = Node::new(10);
        node.set_child(Direction::Left, leaf(5));
        node.update_height();
        assert_eq!(node.height(), 2);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.balance(), 1);

        node.set_child(Direction::Right, leaf(15));
        node.update_height();
        assert_eq!(node.balance(), 0);
        assert_eq!(node.child(Direction::Right).map(|n| n.key), Some(15));
    }

    #[test]
    fn test_min_and_max_key() {
        let mut node = Node::new(10);
        node.set_child(Direction::Left, leaf(5));
        node.set_child(Direction::Right, leaf(15));
        assert_eq!(*node.min_key(), 5);
        assert_eq!(*node.max_key(), 15);
        assert_eq!(node.take_child(Direction::Left).map(|n| n.key), Some(5));
        assert!(node.left().is_none());
    }
}
