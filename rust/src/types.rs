//! Core types and data structures for AvlTree.
//!
//! This module contains the node type, the tree wrapper, and the small enums
//! that drive the generic rotation and traversal code.

use crate::construction::TreeConfig;
use crate::history::HistoryLog;
use crate::metrics::{Metrics, RotationKind};

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Owned link to a child subtree. `None` is the empty subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// Height of the empty subtree.
pub const EMPTY_HEIGHT: usize = 0;

/// Cached depth of the empty subtree.
pub const EMPTY_DEPTH: i32 = -1;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// AVL tree with an undoable step history and pluggable instrumentation.
///
/// The tree keeps the AVL property (|height(left) - height(right)| <= 1 at
/// every node) after every insertion and deletion. Each structural event is
/// appended to a most-recent-first history that drives [`AvlTree::undo`], and
/// every comparison and rotation is reported to a [`MetricsCollector`].
///
/// # Type Parameters
///
/// * `K` - Key type; must be `Ord + Clone + Debug`
/// * `M` - Metrics collector, [`Metrics`] by default
///
/// # Examples
///
/// ```
/// use avltree::{AvlTree, TraversalOrder};
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert_eq!(tree.root().map(|node| node.key), Some(20));
/// assert_eq!(tree.traverse_to_vec(TraversalOrder::PreOrder), vec![20, 10, 30]);
/// assert_eq!(tree.metrics_snapshot().left_rotations, 1);
///
/// tree.undo();
/// assert_eq!(tree.traverse_to_vec(TraversalOrder::InOrder), vec![10, 20]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Deletion**: O(log n)
/// - **Search**: O(log n)
/// - **Undo**: O(log n) plus the number of discarded sub-step entries
/// - **depth / node_count / validation**: O(n), recomputed on every call
///
/// [`MetricsCollector`]: crate::MetricsCollector
#[derive(Debug)]
pub struct AvlTree<K, M = Metrics> {
    /// The root node of the tree.
    pub(crate) root: Link<K>,
    /// Structural events, most recent first.
    pub(crate) history: HistoryLog<K>,
    /// Observer notified of comparisons, rotations and timings.
    pub(crate) metrics: M,
    /// Settings validated at construction.
    pub(crate) config: TreeConfig,
}

/// A single tree element.
///
/// Children are owned exclusively; the parent is never stored and is only
/// passed down the call stack where history entries need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub key: K,
    /// 1-based height of the subtree rooted here.
    pub(crate) height: usize,
    /// Display cache: leaf = 0, parent = max(child depths) + 1.
    pub(crate) depth: i32,
    /// Display cache: height(left) - height(right).
    pub(crate) balance: i32,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Side of a node. Rotations are written once and mirrored through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The mirrored side.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl From<Direction> for RotationKind {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => RotationKind::Left,
            Direction::Right => RotationKind::Right,
        }
    }
}

/// The four imbalance shapes and the rotation each one needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationCase {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl RotationCase {
    /// The side that is too tall.
    pub fn heavy_side(self) -> Direction {
        match self {
            RotationCase::LeftLeft | RotationCase::LeftRight => Direction::Left,
            RotationCase::RightRight | RotationCase::RightLeft => Direction::Right,
        }
    }

    /// True for the inner cases that need two single rotations.
    pub fn is_compound(self) -> bool {
        matches!(self, RotationCase::LeftRight | RotationCase::RightLeft)
    }

    /// Human-readable case label used as the history reason.
    pub fn label(self) -> &'static str {
        match self {
            RotationCase::LeftLeft => "Left-Left case",
            RotationCase::LeftRight => "Left-Right case",
            RotationCase::RightRight => "Right-Right case",
            RotationCase::RightLeft => "Right-Left case",
        }
    }

    /// Name of the rotation performed for this case.
    pub fn rotation_name(self) -> &'static str {
        match self {
            RotationCase::LeftLeft => "right",
            RotationCase::LeftRight => "left-right",
            RotationCase::RightRight => "left",
            RotationCase::RightLeft => "right-left",
        }
    }
}

impl From<RotationCase> for RotationKind {
    fn from(case: RotationCase) -> Self {
        match case {
            RotationCase::LeftLeft => RotationKind::Right,
            RotationCase::LeftRight => RotationKind::LeftRight,
            RotationCase::RightRight => RotationKind::Left,
            RotationCase::RightLeft => RotationKind::RightLeft,
        }
    }
}

/// Order in which [`AvlTree::traverse`] visits keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "Pre-order",
            TraversalOrder::InOrder => "In-order",
            TraversalOrder::PostOrder => "Post-order",
        }
    }
}
