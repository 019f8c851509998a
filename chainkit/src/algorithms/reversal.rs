//! In place list reversal.
//!
//! Both forms check that the list terminates before rewiring anything, so a rejected cyclic list
//! is left exactly as it was.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/reversal_test.rs"]
mod reversal_test;

use super::traversal::length;
use crate::models::{NodeArena, NodeId};
use crate::utils::{ListError, ListResult};

/// Default maximum call depth of [`reverse_recursive`].
pub const DEFAULT_RECURSION_LIMIT: usize = 10_000;

/// Upper bound for any requested call depth: deeper recursion does not fit a default main thread stack.
pub const MAX_RECURSION_LIMIT: usize = 50_000;

/// Reverses the list with a `prev`/`curr` loop and returns the new head (the former tail).
///
/// O(n) time, O(1) memory. This is the form to use for lists of unknown size.
pub fn reverse_iterative(arena: &mut NodeArena, head: Option<NodeId>) -> ListResult<Option<NodeId>> {
    length(arena, head)?;

    let mut prev = None;
    let mut curr = head;

    while let Some(node) = curr {
        curr = arena.set_next(node, prev);
        prev = Some(node);
    }

    Ok(prev)
}

/// Reverses the list recursively with [`DEFAULT_RECURSION_LIMIT`] as maximum depth.
pub fn reverse_recursive(arena: &mut NodeArena, head: Option<NodeId>) -> ListResult<Option<NodeId>> {
    reverse_recursive_with_limit(arena, head, DEFAULT_RECURSION_LIMIT)
}

/// Reverses the list recursively and returns the new head.
///
/// Uses one stack frame per node, so lists longer than `limit` are rejected with
/// [`ListError::RecursionLimit`] before any link changes. `limit` is clamped to [`MAX_RECURSION_LIMIT`].
pub fn reverse_recursive_with_limit(
    arena: &mut NodeArena,
    head: Option<NodeId>,
    limit: usize,
) -> ListResult<Option<NodeId>> {
    let limit = limit.min(MAX_RECURSION_LIMIT);
    let depth = length(arena, head)?;
    if depth > limit {
        return Err(ListError::RecursionLimit { depth, limit });
    }

    Ok(head.map(|node| reverse_from(arena, node)))
}

fn reverse_from(arena: &mut NodeArena, node: NodeId) -> NodeId {
    let Some(next) = arena.next(node) else {
        return node;
    };

    let new_head = reverse_from(arena, next);
    arena.set_next(next, Some(node));
    arena.set_next(node, None);

    new_head
}
