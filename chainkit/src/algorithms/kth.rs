//! Access and removal of the k-th node counted from the tail (`k = 1` is the last node).
//!
//! Both operations make a single pass: a lead pointer gets a head start of `k` links, then lead
//! and trail move in lockstep until the lead runs off the end.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/kth_test.rs"]
mod kth_test;

use super::traversal::StepGuard;
use crate::models::{NodeArena, NodeId};
use crate::utils::ListResult;

/// Returns the k-th node from the end, or `None` when `k <= 0` or `k` exceeds list length.
pub fn kth_from_end(arena: &NodeArena, head: Option<NodeId>, k: isize) -> ListResult<Option<NodeId>> {
    let Some(k) = usize::try_from(k).ok().filter(|&k| k > 0) else {
        return Ok(None);
    };

    let mut guard = StepGuard::new(arena);
    let mut lead = head;

    for _ in 0..k {
        let Some(node) = lead else {
            return Ok(None);
        };

        guard.step()?;
        lead = arena.next(node);
    }

    let mut trail = head;
    while let Some(node) = lead {
        guard.step()?;
        lead = arena.next(node);
        trail = arena.advance(trail);
    }

    Ok(trail)
}

/// Unlinks the k-th node from the end and returns the new head.
///
/// The list is returned untouched when `k <= 0` or `k` exceeds list length. Removing the head
/// (`k` equal to list length) returns the former second node. The removed node keeps no link.
pub fn remove_kth_from_end(arena: &mut NodeArena, head: Option<NodeId>, k: isize) -> ListResult<Option<NodeId>> {
    let Some(k) = usize::try_from(k).ok().filter(|&k| k > 0) else {
        return Ok(head);
    };

    let mut guard = StepGuard::new(arena);
    let mut lead = Cursor::Sentinel;

    for _ in 0..k {
        let Some(next) = lead.advance(arena, head) else {
            return Ok(head);
        };

        guard.step()?;
        lead = next;
    }

    // trail stops on the predecessor of the target
    let mut trail = Cursor::Sentinel;
    while let Some(next) = lead.advance(arena, head) {
        guard.step()?;
        lead = next;
        trail = trail.advance(arena, head).unwrap_or(trail);
    }

    let Some(Cursor::Node(target)) = trail.advance(arena, head) else {
        return Ok(head);
    };

    let successor = arena.take_next(target);
    match trail {
        Cursor::Sentinel => Ok(successor),
        Cursor::Node(predecessor) => {
            arena.set_next(predecessor, successor);
            Ok(head)
        }
    }
}

/// A pointer position which can also sit on a virtual node before the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Sentinel,
    Node(NodeId),
}

impl Cursor {
    fn advance(self, arena: &NodeArena, head: Option<NodeId>) -> Option<Cursor> {
        match self {
            Cursor::Sentinel => head.map(Cursor::Node),
            Cursor::Node(node) => arena.next(node).map(Cursor::Node),
        }
    }
}
