//! Instrumentation for AvlTree operations.
//!
//! The tree reports every comparison, rotation and operation latency to a
//! [`MetricsCollector`] it owns. [`Metrics`] is the counting implementation
//! used by default; callers can inject their own collector through
//! [`AvlTree::with_collector`](crate::AvlTree::with_collector).
//!
//! Rotation counting is additive: a compound Left-Right rotation counts one
//! left rotation, one right rotation and one left-right rotation. Nothing is
//! ever decremented.

use std::time::Duration;

/// Rotation kinds tracked by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationKind {
    Left,
    Right,
    LeftRight,
    RightLeft,
}

/// Observer of engine events. No method can fail.
pub trait MetricsCollector {
    fn record_rotation(&mut self, kind: RotationKind);

    fn record_comparison(&mut self);

    fn record_duration(&mut self, elapsed: Duration);

    /// Return every counter to zero.
    fn reset(&mut self);

    /// Point-in-time copy of the counters for display.
    fn snapshot(&self) -> MetricsSnapshot;
}

/// Read-only copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub left_rotations: u64,
    pub right_rotations: u64,
    pub left_right_rotations: u64,
    pub right_left_rotations: u64,
    pub comparisons: u64,
    pub last_operation: Duration,
}

impl MetricsSnapshot {
    /// Duration of the last public operation in fractional milliseconds.
    pub fn last_operation_ms(&self) -> f64 {
        self.last_operation.as_secs_f64() * 1000.0
    }

    /// Sum of all rotation counters.
    pub fn total_rotations(&self) -> u64 {
        self.left_rotations
            + self.right_rotations
            + self.left_right_rotations
            + self.right_left_rotations
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Default collector: plain counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    counters: MetricsSnapshot,
}

macro_rules! rotation_counters {
    ($($kind:ident => $field:ident),* $(,)?) => {
        paste::paste! {
            impl Metrics {
                $(
                    #[doc = "Number of `" $kind "` rotations recorded since the last reset."]
                    pub fn [<$field _rotations>](&self) -> u64 {
                        self.counters.[<$field _rotations>]
                    }
                )*

                fn counter_mut(&mut self, kind: RotationKind) -> &mut u64 {
                    match kind {
                        $(RotationKind::$kind => &mut self.counters.[<$field _rotations>],)*
                    }
                }
            }
        }
    };
}

rotation_counters! {
    Left => left,
    Right => right,
    LeftRight => left_right,
    RightLeft => right_left,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(&self) -> u64 {
        self.counters.comparisons
    }

    pub fn last_operation(&self) -> Duration {
        self.counters.last_operation
    }
}

impl MetricsCollector for Metrics {
    fn record_rotation(&mut self, kind: RotationKind) {
        *self.counter_mut(kind) += 1;
    }

    fn record_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    fn record_duration(&mut self, elapsed: Duration) {
        self.counters.last_operation = elapsed;
    }

    fn reset(&mut self) {
        self.counters = MetricsSnapshot::default();
    }

    fn snapshot(&self) -> MetricsSnapshot {
        self.counters
    }
}
