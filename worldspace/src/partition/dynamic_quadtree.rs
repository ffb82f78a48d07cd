/// DynamicQuadTree - adaptive quadtree over the X/Y plane.
///
/// Leaves split into four children when they overflow
/// (`partition_threshold`) and internal nodes collapse back into a leaf
/// when their subtree drops to `balance_threshold` entities or fewer.
///
/// Every node caches `entity_count`, which equals the bucket size for a
/// leaf and the sum of the four children for an internal node. All
/// mutating paths keep this exact; `validate` checks it.
///
/// Entities are never written to directly. After any move between
/// leaves the new leaf key is posted to the entity's mailbox.

use glam::Vec3;
use slotmap::SlotMap;
use crate::entity::{EntityGuid, EntityMessage, EntityRef, WorldEntity};
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Containment, Quadrant, SearchArea};
use crate::{world_bail, world_debug, world_err, world_trace};
use super::quadtree_config::QuadTreeConfig;
use super::quadtree_node::{Bucket, NodeKey, NodeState, QuadNode};
use super::space_partition::{Criteria, SpacePartition};

const SOURCE: &str = "worldspace::DynamicQuadTree";

/// Dynamic quadtree spatial partition.
///
/// Constructed over fixed root bounds. Heights are ignored for placement:
/// every node spans the whole Z range.
pub struct DynamicQuadTree {
    /// Arena of all live nodes
    nodes: SlotMap<NodeKey, QuadNode>,
    /// Root node key (changes only on `clear`)
    root: NodeKey,
    config: QuadTreeConfig,
}

impl DynamicQuadTree {
    /// Create an empty tree with the default configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `bounds` has no positive finite X/Y area.
    pub fn new(bounds: BoundingBox) -> Result<Self> {
        Self::with_config(bounds, QuadTreeConfig::default())
    }

    /// Create an empty tree.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` fails validation or `bounds` has no
    /// positive finite X/Y area.
    pub fn with_config(bounds: BoundingBox, config: QuadTreeConfig) -> Result<Self> {
        config.validate().map_err(|err| world_err!(SOURCE, err))?;
        if !bounds.is_valid_area() {
            world_bail!(SOURCE, Error::InvalidConfig(format!(
                "root bounds must have a positive finite area, got {:?}", bounds
            )));
        }

        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(QuadNode::leaf(
            bounds.with_full_height(),
            None,
            0,
            Bucket::default(),
        ));

        Ok(Self { nodes, root, config })
    }

    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Root bounds (full height)
    pub fn bounds(&self) -> &BoundingBox {
        &self.nodes[self.root].bounds
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Look up a node; None once it has been merged away
    pub fn node(&self, key: NodeKey) -> Option<&QuadNode> {
        self.nodes.get(key)
    }

    /// Number of live nodes (leaves and internal)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root is currently a leaf
    pub fn is_leaf(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// Deepest leaf depth (root = 0)
    pub fn depth(&self) -> u32 {
        self.nodes.values().map(QuadNode::depth).max().unwrap_or(0)
    }

    /// Leaf a position maps to, or None if outside the root bounds
    pub fn leaf_containing(&self, position: Vec3) -> Option<NodeKey> {
        if self.bounds().contains_point_xy(position) {
            Some(self.descend(self.root, position))
        } else {
            None
        }
    }

    /// Remove an entity using its back-reference.
    ///
    /// If `node` is still a live leaf holding the entity, removal needs no
    /// descent and works even when the entity has drifted across a node
    /// boundary. Otherwise falls back to `remove_entity`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` if neither the hint nor positional descent finds it.
    pub fn remove_entity_at(&mut self, entity: &dyn WorldEntity, node: NodeKey) -> Result<()> {
        let guid = entity.guid();
        if self.detach(node, guid) {
            return Ok(());
        }
        self.remove_entity(entity)
    }

    /// Walk the whole tree and panic on any structural inconsistency.
    ///
    /// Checks the count invariant, parent links, depths, and that the four
    /// children of every internal node tile its X/Y bounds.
    ///
    /// # Panics
    ///
    /// Panics if any invariant is violated (a bug in the tree, never a
    /// caller error).
    pub fn validate(&self) {
        assert!(self.nodes[self.root].parent.is_none(), "root must not have a parent");
        let total = self.check_subtree(self.root);
        assert_eq!(total, self.nodes[self.root].entity_count, "root count mismatch");

        let reachable = self.count_reachable(self.root);
        assert_eq!(reachable, self.nodes.len(), "arena holds unreachable nodes");
    }

    // ===== INTERNAL =====

    /// Follow quadrant arithmetic from `from` down to a leaf
    fn descend(&self, from: NodeKey, position: Vec3) -> NodeKey {
        let mut key = from;
        loop {
            let node = &self.nodes[key];
            match node.state {
                NodeState::Leaf { .. } => return key,
                NodeState::Internal { children } => {
                    key = children[node.bounds.quadrant_of(position).index()];
                }
            }
        }
    }

    /// Add or subtract one entity along the ancestor chain of `from`
    fn propagate_count(&mut self, from: NodeKey, grow: bool) {
        let mut cursor = Some(from);
        while let Some(key) = cursor {
            let node = &mut self.nodes[key];
            if grow {
                node.entity_count += 1;
            } else {
                node.entity_count -= 1;
            }
            cursor = node.parent;
        }
    }

    /// Split a leaf into four children and move its bucket into them.
    ///
    /// The node's own count does not change: the entities only move down.
    fn partition(&mut self, key: NodeKey) {
        let node = &mut self.nodes[key];
        let bucket = match &mut node.state {
            NodeState::Leaf { bucket } => std::mem::take(bucket),
            NodeState::Internal { .. } => return,
        };
        let bounds = node.bounds;
        let depth = node.depth;
        let moved = bucket.len();

        let mut child_buckets: [Bucket; 4] = Default::default();
        for (guid, entity) in bucket {
            let quadrant = bounds.quadrant_of(entity.position());
            child_buckets[quadrant.index()].insert(guid, entity);
        }

        let mut children = [NodeKey::default(); 4];
        for (quadrant, child_bucket) in Quadrant::ALL.into_iter().zip(child_buckets) {
            children[quadrant.index()] = self.nodes.insert_with_key(|child| {
                for entity in child_bucket.values() {
                    entity.post_async(EntityMessage::NodeAssigned(Some(child)));
                }
                QuadNode::leaf(bounds.quadrant(quadrant), Some(key), depth + 1, child_bucket)
            });
        }

        self.nodes[key].state = NodeState::Internal { children };
        debug_assert_eq!(
            self.nodes[key].entity_count,
            children.iter().map(|&c| self.nodes[c].entity_count).sum::<usize>(),
            "partition lost entities",
        );

        world_debug!(SOURCE, "Partitioned {:?} at depth {} ({} entities)", key, depth, moved);
    }

    /// Pull an entity out of a leaf bucket and fix the counts.
    /// Posts nothing and does not balance.
    fn take(&mut self, leaf: NodeKey, guid: EntityGuid) -> Option<EntityRef> {
        let entity = self.nodes
            .get_mut(leaf)
            .and_then(QuadNode::bucket_mut)
            .and_then(|bucket| bucket.remove(&guid))?;
        self.propagate_count(leaf, false);
        Some(entity)
    }

    /// Take an entity out of a specific leaf.
    ///
    /// Returns false (and changes nothing) if `leaf` is not a live leaf
    /// holding `guid`. On success updates counts, clears the entity's
    /// back-reference and balances the parent.
    fn detach(&mut self, leaf: NodeKey, guid: EntityGuid) -> bool {
        let Some(entity) = self.take(leaf, guid) else {
            return false;
        };
        entity.post_async(EntityMessage::NodeAssigned(None));
        world_trace!(SOURCE, "Removed entity {} from {:?}", guid, leaf);

        if let Some(parent) = self.nodes[leaf].parent {
            self.balance_from(parent);
        }
        true
    }

    /// Place an entity in the leaf `position` maps to, splitting as needed.
    ///
    /// Every check runs before the first mutation, so an error leaves the
    /// tree untouched. `position` is the caller's snapshot; the entity is
    /// not asked again.
    fn insert(&mut self, entity: EntityRef, position: Vec3) -> Result<NodeKey> {
        let guid = entity.guid();
        if !self.bounds().contains_point_xy(position) {
            world_bail!(SOURCE, Error::OutOfBounds { guid, position });
        }

        let mut leaf = self.descend(self.root, position);
        loop {
            let node = &self.nodes[leaf];
            match &node.state {
                NodeState::Internal { .. } => {
                    // Just partitioned: continue below it
                    leaf = self.descend(leaf, position);
                    continue;
                }
                NodeState::Leaf { bucket } => {
                    if bucket.contains_key(&guid) {
                        world_bail!(SOURCE, Error::DuplicateEntity(guid));
                    }
                    if bucket.len() < self.config.partition_threshold {
                        break;
                    }
                    if node.depth >= self.config.max_depth {
                        if bucket.len() == self.config.partition_threshold {
                            world_debug!(
                                SOURCE,
                                "Leaf {:?} reached max depth {}, growing past the partition threshold",
                                leaf, node.depth
                            );
                        }
                        break;
                    }
                }
            }
            self.partition(leaf);
        }

        if let Some(bucket) = self.nodes[leaf].bucket_mut() {
            bucket.insert(guid, entity.clone());
        }
        self.propagate_count(leaf, true);
        entity.post_async(EntityMessage::NodeAssigned(Some(leaf)));
        Ok(leaf)
    }

    /// Missing entities are an ordinary outcome: logged at Debug, not Error
    fn not_found(guid: EntityGuid) -> Error {
        let err = Error::EntityNotFound(guid);
        world_debug!(SOURCE, "{}", err);
        err
    }

    /// Balance `start`, then its ancestors while collapses keep happening
    /// and cascading is enabled.
    fn balance_from(&mut self, start: NodeKey) {
        let mut cursor = Some(start);
        while let Some(key) = cursor {
            if !self.balance_if_needed(key) || !self.config.cascade_balance {
                break;
            }
            cursor = self.nodes[key].parent;
        }
    }

    /// Collapse an internal node into a leaf if its subtree is small enough.
    ///
    /// Gathers entities from every descendant (not only direct children,
    /// which may themselves still be internal). Returns true on collapse.
    fn balance_if_needed(&mut self, key: NodeKey) -> bool {
        let node = &self.nodes[key];
        let children = match node.state {
            NodeState::Internal { children } => children,
            NodeState::Leaf { .. } => return false,
        };
        if node.entity_count > self.config.balance_threshold {
            return false;
        }

        let mut bucket = Bucket::default();
        let mut pending = children.to_vec();
        let mut removed_nodes = 0;
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.nodes.remove(child) {
                removed_nodes += 1;
                match removed.state {
                    NodeState::Leaf { bucket: child_bucket } => bucket.extend(child_bucket),
                    NodeState::Internal { children } => pending.extend(children),
                }
            }
        }

        let node = &mut self.nodes[key];
        debug_assert_eq!(node.entity_count, bucket.len(), "balance lost entities");
        for entity in bucket.values() {
            entity.post_async(EntityMessage::NodeAssigned(Some(key)));
        }
        let gathered = bucket.len();
        node.state = NodeState::Leaf { bucket };

        world_debug!(
            SOURCE,
            "Balanced {:?} at depth {} ({} entities, {} nodes merged)",
            key, node.depth, gathered, removed_nodes
        );
        true
    }

    /// Recursive query; returns true once `limit` is reached.
    ///
    /// `inside` is set once an ancestor was classified as fully contained
    /// by the area, so the per-entity area test can be skipped.
    fn search(
        &self,
        key: NodeKey,
        criteria: Criteria<'_>,
        area: &SearchArea,
        inside: bool,
        limit: Option<usize>,
        results: &mut Vec<EntityRef>,
    ) -> bool {
        match &self.nodes[key].state {
            NodeState::Leaf { bucket } => {
                for entity in bucket.values() {
                    if (inside || area.contains_point(entity.position())) && criteria(entity.as_ref()) {
                        results.push(entity.clone());
                        if limit.is_some_and(|max| results.len() >= max) {
                            return true;
                        }
                    }
                }
                false
            }
            NodeState::Internal { children } => {
                for &child in children {
                    let child_inside = inside || match area.classify(&self.nodes[child].bounds) {
                        Containment::Disjoint => continue,
                        Containment::Intersects => false,
                        Containment::Contains => true,
                    };
                    if self.search(child, criteria, area, child_inside, limit, results) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Validate one subtree, returning its real entity count
    fn check_subtree(&self, key: NodeKey) -> usize {
        let node = &self.nodes[key];
        match &node.state {
            NodeState::Leaf { bucket } => {
                assert_eq!(
                    node.entity_count, bucket.len(),
                    "leaf {:?} caches {} entities but holds {}", key, node.entity_count, bucket.len()
                );
                bucket.len()
            }
            NodeState::Internal { children } => {
                let mut sum = 0;
                for (quadrant, &child) in Quadrant::ALL.into_iter().zip(children) {
                    let child_node = &self.nodes[child];
                    assert_eq!(child_node.parent, Some(key), "child {:?} has a wrong parent link", child);
                    assert_eq!(child_node.depth, node.depth + 1, "child {:?} has a wrong depth", child);
                    assert_eq!(
                        child_node.bounds, node.bounds.quadrant(quadrant),
                        "child {:?} does not cover the {:?} quadrant of {:?}", child, quadrant, key
                    );
                    sum += self.check_subtree(child);
                }
                assert_eq!(
                    node.entity_count, sum,
                    "internal {:?} caches {} entities but its children hold {}", key, node.entity_count, sum
                );
                sum
            }
        }
    }

    fn count_reachable(&self, key: NodeKey) -> usize {
        1 + self.nodes[key]
            .children()
            .map_or(0, |children| children.iter().map(|&c| self.count_reachable(c)).sum::<usize>())
    }
}

// ===== SPACE PARTITION TRAIT =====

impl SpacePartition for DynamicQuadTree {
    fn add_entity(&mut self, entity: EntityRef) -> Result<NodeKey> {
        let guid = entity.guid();
        let position = entity.position();
        let leaf = self.insert(entity, position)?;
        world_trace!(SOURCE, "Added entity {} to {:?}", guid, leaf);
        Ok(leaf)
    }

    fn remove_entity(&mut self, entity: &dyn WorldEntity) -> Result<()> {
        let guid = entity.guid();
        let removed = match self.leaf_containing(entity.position()) {
            Some(leaf) => self.detach(leaf, guid),
            None => false,
        };
        if !removed {
            return Err(Self::not_found(guid));
        }
        Ok(())
    }

    fn update_entity(&mut self, entity: EntityRef, previous_position: Vec3) -> Result<NodeKey> {
        let guid = entity.guid();
        let position = entity.position();
        if !self.bounds().contains_point_xy(position) {
            world_bail!(SOURCE, Error::OutOfBounds { guid, position });
        }

        let old_leaf = self.leaf_containing(previous_position)
            .filter(|&leaf| {
                self.nodes[leaf].bucket().is_some_and(|bucket| bucket.contains_key(&guid))
            });
        let Some(old_leaf) = old_leaf else {
            return Err(Self::not_found(guid));
        };

        if self.descend(self.root, position) == old_leaf {
            return Ok(old_leaf);
        }

        // Insert before taking it out, so a rejected insert keeps the old
        // placement. Splits only touch the target leaf, never old_leaf.
        let new_leaf = self.insert(entity, position)?;
        self.take(old_leaf, guid);
        if let Some(parent) = self.nodes[old_leaf].parent {
            self.balance_from(parent);
        }
        world_trace!(SOURCE, "Moved entity {} from {:?} to {:?}", guid, old_leaf, new_leaf);

        // A collapse may have absorbed the new leaf
        Ok(self.descend(self.root, position))
    }

    fn find_entities(
        &self,
        criteria: Criteria<'_>,
        area: &SearchArea,
        max_count: Option<usize>,
    ) -> Vec<EntityRef> {
        let mut results = Vec::new();
        if max_count == Some(0) {
            return results;
        }
        let inside = match area.classify(self.bounds()) {
            Containment::Disjoint => return results,
            Containment::Intersects => false,
            Containment::Contains => true,
        };
        self.search(self.root, criteria, area, inside, max_count, &mut results);
        results
    }

    fn entity_count(&self) -> usize {
        self.nodes[self.root].entity_count
    }

    fn clear(&mut self) {
        for node in self.nodes.values() {
            if let Some(bucket) = node.bucket() {
                for entity in bucket.values() {
                    entity.post_async(EntityMessage::NodeAssigned(None));
                }
            }
        }

        let bounds = *self.bounds();
        self.nodes.clear();
        self.root = self.nodes.insert(QuadNode::leaf(bounds, None, 0, Bucket::default()));
        world_debug!(SOURCE, "Cleared partition");
    }
}

#[cfg(test)]
#[path = "dynamic_quadtree_tests.rs"]
mod tests;
