/// Quadtree node types.
///
/// Nodes live in a `SlotMap` arena owned by `DynamicQuadTree`. A parent
/// owns its children through their keys; the child's `parent` key is a
/// plain back-link with no ownership. Keys are versioned, so a key to a
/// node that was merged away stops resolving instead of aliasing a new one.

use rustc_hash::FxHashMap;
use slotmap::new_key_type;
use crate::entity::{EntityGuid, EntityRef};
use crate::geometry::BoundingBox;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable handle to a quadtree node.
    ///
    /// Handed to entities as their back-reference. Becomes invalid when the
    /// node is merged into its parent or the tree is cleared.
    pub struct NodeKey;
}

/// Entities held directly by a leaf, keyed by identity
pub type Bucket = FxHashMap<EntityGuid, EntityRef>;

/// Leaf or internal; exactly one at any time
pub enum NodeState {
    /// Holds entities directly
    Leaf {
        /// Entities whose position maps to this leaf
        bucket: Bucket,
    },
    /// Holds four children and no entities (NE, SE, SW, NW)
    Internal {
        /// Child keys in `Quadrant` order
        children: [NodeKey; 4],
    },
}

/// A single node in the quadtree arena
pub struct QuadNode {
    /// X/Y extent of this node; Z always spans the full range
    pub(crate) bounds: BoundingBox,
    /// Parent node (None for the root)
    pub(crate) parent: Option<NodeKey>,
    /// Root = 0
    pub(crate) depth: u32,
    /// Entities in this subtree
    pub(crate) entity_count: usize,
    pub(crate) state: NodeState,
}

impl QuadNode {
    /// Create a leaf owning `bucket`
    pub(crate) fn leaf(
        bounds: BoundingBox,
        parent: Option<NodeKey>,
        depth: u32,
        bucket: Bucket,
    ) -> Self {
        Self {
            bounds,
            parent,
            depth,
            entity_count: bucket.len(),
            state: NodeState::Leaf { bucket },
        }
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Cached number of entities in this subtree
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Leaf { .. })
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    /// Child keys, or None for a leaf
    pub fn children(&self) -> Option<[NodeKey; 4]> {
        match self.state {
            NodeState::Internal { children } => Some(children),
            NodeState::Leaf { .. } => None,
        }
    }

    /// Bucket, or None for an internal node
    pub fn bucket(&self) -> Option<&Bucket> {
        match &self.state {
            NodeState::Leaf { bucket } => Some(bucket),
            NodeState::Internal { .. } => None,
        }
    }

    pub(crate) fn bucket_mut(&mut self) -> Option<&mut Bucket> {
        match &mut self.state {
            NodeState::Leaf { bucket } => Some(bucket),
            NodeState::Internal { .. } => None,
        }
    }
}
