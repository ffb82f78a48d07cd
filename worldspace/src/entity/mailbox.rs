/// Per-entity message queue.
///
/// The partition posts `EntityMessage`s from whatever thread owns the tree;
/// the entity's own context drains them at a safe point of its tick and
/// applies them to its back-reference slot. No field is ever written across
/// the boundary directly.

use crossbeam_channel::{Receiver, Sender};
use crate::partition::NodeKey;
use super::EntityMessage;

/// Unbounded multi-producer mailbox owned by one entity
pub struct Mailbox {
    sender: Sender<EntityMessage>,
    receiver: Receiver<EntityMessage>,
}

impl Mailbox {
    /// Create an empty mailbox
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }

    /// Post a message without blocking
    pub fn post(&self, message: EntityMessage) {
        // Cannot fail: the receiver lives as long as the mailbox
        let _ = self.sender.send(message);
    }

    /// Sender handle for posting from another thread
    pub fn sender(&self) -> Sender<EntityMessage> {
        self.sender.clone()
    }

    /// Number of messages waiting to be applied
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Apply every queued message, in posting order, to a back-reference slot.
    ///
    /// Returns the number of messages applied.
    pub fn drain_into(&self, node: &mut Option<NodeKey>) -> usize {
        let mut applied = 0;
        for message in self.receiver.try_iter() {
            match message {
                EntityMessage::NodeAssigned(assigned) => *node = assigned,
            }
            applied += 1;
        }
        applied
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mailbox_tests.rs"]
mod tests;
