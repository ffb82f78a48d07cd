/// Tests for Mailbox

use super::*;
use slotmap::SlotMap;
use std::thread;

fn make_keys(count: usize) -> Vec<NodeKey> {
    let mut sm = SlotMap::<NodeKey, ()>::with_key();
    (0..count).map(|_| sm.insert(())).collect()
}

// ============================================================================
// Tests: Posting and draining
// ============================================================================

#[test]
fn test_new_mailbox_is_empty() {
    let mailbox = Mailbox::new();
    assert_eq!(mailbox.pending(), 0);

    let mut node = None;
    assert_eq!(mailbox.drain_into(&mut node), 0);
    assert!(node.is_none());
}

#[test]
fn test_post_is_not_applied_until_drained() {
    let keys = make_keys(1);
    let mailbox = Mailbox::default();
    let mut node = None;

    mailbox.post(EntityMessage::NodeAssigned(Some(keys[0])));
    assert_eq!(mailbox.pending(), 1);
    assert!(node.is_none());

    assert_eq!(mailbox.drain_into(&mut node), 1);
    assert_eq!(node, Some(keys[0]));
    assert_eq!(mailbox.pending(), 0);
}

#[test]
fn test_drain_applies_in_posting_order() {
    let keys = make_keys(3);
    let mailbox = Mailbox::new();
    let mut node = None;

    mailbox.post(EntityMessage::NodeAssigned(Some(keys[0])));
    mailbox.post(EntityMessage::NodeAssigned(Some(keys[1])));
    mailbox.post(EntityMessage::NodeAssigned(None));
    mailbox.post(EntityMessage::NodeAssigned(Some(keys[2])));

    assert_eq!(mailbox.drain_into(&mut node), 4);
    assert_eq!(node, Some(keys[2]));
}

#[test]
fn test_cleared_reference() {
    let keys = make_keys(1);
    let mailbox = Mailbox::new();
    let mut node = Some(keys[0]);

    mailbox.post(EntityMessage::NodeAssigned(None));
    mailbox.drain_into(&mut node);
    assert!(node.is_none());
}

// ============================================================================
// Tests: Cross-thread posting
// ============================================================================

#[test]
fn test_sender_posts_from_other_thread() {
    let keys = make_keys(1);
    let key = keys[0];
    let mailbox = Mailbox::new();
    let sender = mailbox.sender();

    thread::spawn(move || {
        sender.send(EntityMessage::NodeAssigned(Some(key))).unwrap();
    })
    .join()
    .unwrap();

    let mut node = None;
    mailbox.drain_into(&mut node);
    assert_eq!(node, Some(key));
}
