/// Tuning knobs for `DynamicQuadTree`.

use crate::error::{Error, Result};

/// Quadtree configuration
///
/// The defaults suit a few hundred thousand entities spread over a
/// continent-sized map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// A leaf holding this many entities splits on the next insert
    pub partition_threshold: usize,

    /// An internal node whose subtree holds at most this many entities
    /// collapses back into a leaf. Must be lower than `partition_threshold`.
    pub balance_threshold: usize,

    /// Leaves at this depth never split (root = 0). Bounds recursion when
    /// many entities share one position.
    pub max_depth: u32,

    /// When true, a collapse re-checks the next ancestor, and so on up the
    /// chain. When false, only the immediate parent of the touched leaf is
    /// checked per removal.
    pub cascade_balance: bool,
}

impl QuadTreeConfig {
    /// Default split trigger
    pub const DEFAULT_PARTITION_THRESHOLD: usize = 35;
    /// Default merge trigger
    pub const DEFAULT_BALANCE_THRESHOLD: usize = 20;
    /// Default depth guard
    pub const DEFAULT_MAX_DEPTH: u32 = 24;
    /// Highest accepted depth guard. Well past the point where f32 child
    /// extents stop halving.
    pub const MAX_DEPTH_LIMIT: u32 = 64;

    /// Set both thresholds
    pub fn with_thresholds(mut self, partition_threshold: usize, balance_threshold: usize) -> Self {
        self.partition_threshold = partition_threshold;
        self.balance_threshold = balance_threshold;
        self
    }

    /// Set the depth guard
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable multi-level balancing
    pub fn with_cascade_balance(mut self, cascade_balance: bool) -> Self {
        self.cascade_balance = cascade_balance;
        self
    }

    /// Check the threshold invariants.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `partition_threshold` is zero,
    /// `balance_threshold >= partition_threshold` (the tree would split and
    /// merge on alternating insert/remove pairs), or `max_depth` exceeds
    /// `MAX_DEPTH_LIMIT`.
    pub fn validate(&self) -> Result<()> {
        if self.partition_threshold == 0 {
            return Err(Error::InvalidConfig(
                "partition_threshold must be greater than zero".to_string(),
            ));
        }
        if self.balance_threshold >= self.partition_threshold {
            return Err(Error::InvalidConfig(format!(
                "balance_threshold ({}) must be lower than partition_threshold ({})",
                self.balance_threshold, self.partition_threshold
            )));
        }
        if self.max_depth > Self::MAX_DEPTH_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "max_depth ({}) must not exceed {}",
                self.max_depth, Self::MAX_DEPTH_LIMIT
            )));
        }
        Ok(())
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            partition_threshold: Self::DEFAULT_PARTITION_THRESHOLD,
            balance_threshold: Self::DEFAULT_BALANCE_THRESHOLD,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            cascade_balance: false,
        }
    }
}

#[cfg(test)]
#[path = "quadtree_config_tests.rs"]
mod tests;
