/// Mock entity for tests and tooling (no simulation server required)
///
/// Bundles everything a real world entity would own: an identity, a
/// movable position, a mailbox and the back-reference slot the mailbox
/// feeds. `pump()` plays the part of the entity's own tick.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use glam::Vec3;
use crate::partition::NodeKey;
use super::{EntityGuid, EntityMessage, Mailbox, WorldEntity};

static NEXT_GUID: AtomicU64 = AtomicU64::new(1);

/// In-memory entity with an explicit message pump
pub struct MockEntity {
    guid: EntityGuid,
    position: RwLock<Vec3>,
    mailbox: Mailbox,
    node: Mutex<Option<NodeKey>>,
}

impl MockEntity {
    /// Create an entity with a fresh process-unique guid
    pub fn new(position: Vec3) -> Arc<Self> {
        let guid = EntityGuid(NEXT_GUID.fetch_add(1, Ordering::Relaxed));
        Self::with_guid(guid, position)
    }

    /// Create an entity with an explicit guid
    pub fn with_guid(guid: EntityGuid, position: Vec3) -> Arc<Self> {
        Arc::new(Self {
            guid,
            position: RwLock::new(position),
            mailbox: Mailbox::new(),
            node: Mutex::new(None),
        })
    }

    /// Move the entity. The partition is NOT notified.
    pub fn set_position(&self, position: Vec3) {
        *self.position.write().unwrap_or_else(PoisonError::into_inner) = position;
    }

    /// Apply pending partition messages to the back-reference slot.
    ///
    /// Returns the number of messages applied.
    pub fn pump(&self) -> usize {
        let mut node = self.node.lock().unwrap_or_else(PoisonError::into_inner);
        self.mailbox.drain_into(&mut node)
    }

    /// Back-reference as of the last `pump()`
    pub fn node(&self) -> Option<NodeKey> {
        *self.node.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages posted but not yet pumped
    pub fn pending_messages(&self) -> usize {
        self.mailbox.pending()
    }
}

impl WorldEntity for MockEntity {
    fn guid(&self) -> EntityGuid {
        self.guid
    }

    fn position(&self) -> Vec3 {
        *self.position.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn post_async(&self, message: EntityMessage) {
        self.mailbox.post(message);
    }
}
