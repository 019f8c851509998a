//! Middle node search with slow and fast pointers.
//!
//! For an even amount of nodes there are two middle candidates: [`middle_node`] returns the
//! second one (index `n / 2`), [`first_middle_node`] returns the first one (index `n / 2 - 1`).
//! For an odd amount both return the exact middle.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/middle_test.rs"]
mod middle_test;

use super::traversal::StepGuard;
use crate::models::{NodeArena, NodeId};
use crate::utils::ListResult;

/// Returns the middle node, preferring the second candidate for even lengths.
pub fn middle_node(arena: &NodeArena, head: Option<NodeId>) -> ListResult<Option<NodeId>> {
    let mut guard = StepGuard::new(arena);
    let mut slow = head;
    let mut fast = head;

    while let Some(next) = arena.advance(fast) {
        guard.step()?;
        guard.step()?;

        slow = arena.advance(slow);
        fast = arena.next(next);
    }

    Ok(slow)
}

/// Returns the middle node, preferring the first candidate for even lengths.
pub fn first_middle_node(arena: &NodeArena, head: Option<NodeId>) -> ListResult<Option<NodeId>> {
    let mut guard = StepGuard::new(arena);
    let mut slow = head;
    let mut fast = head;

    while let Some(after_next) = arena.advance(arena.advance(fast)) {
        guard.step()?;
        guard.step()?;

        slow = arena.advance(slow);
        fast = Some(after_next);
    }

    Ok(slow)
}
