//! Single pointer traversal primitives.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/traversal_test.rs"]
mod traversal_test;

use crate::models::{NodeArena, NodeId};
use crate::utils::{ListError, ListResult};

/// Counts pointer moves of a traversal which must not run around a cycle.
///
/// An acyclic chain in an arena of `n` nodes is at most `n` nodes long, so a pointer which makes
/// more than `n` moves is going around a cycle.
pub(crate) struct StepGuard {
    steps: usize,
    limit: usize,
}

impl StepGuard {
    pub fn new(arena: &NodeArena) -> Self {
        Self { steps: 0, limit: arena.len() }
    }

    pub fn step(&mut self) -> ListResult<()> {
        self.steps += 1;

        if self.steps > self.limit { Err(ListError::CyclicInput { steps: self.steps }) } else { Ok(()) }
    }
}

/// Returns amount of nodes in the list. Fails on cyclic input.
pub fn length(arena: &NodeArena, head: Option<NodeId>) -> ListResult<usize> {
    let mut walk = arena.walk(head);
    let count = walk.by_ref().count();
    walk.ensure_complete()?;

    Ok(count)
}

/// Returns the node at 0-based `index`, or `None` if the list is shorter.
///
/// Tolerates cycles: the walk is bounded by `index` itself.
pub fn node_at(arena: &NodeArena, head: Option<NodeId>, index: usize) -> Option<NodeId> {
    (0..index).try_fold(head?, |node, _| arena.next(node))
}

/// Returns the last node of the list. Fails on cyclic input, as there is no last node.
pub fn last_node(arena: &NodeArena, head: Option<NodeId>) -> ListResult<Option<NodeId>> {
    let mut walk = arena.walk(head);
    let last = walk.by_ref().last();
    walk.ensure_complete()?;

    Ok(last)
}

/// Collects node values in list order. Fails on cyclic input.
pub fn collect_values(arena: &NodeArena, head: Option<NodeId>) -> ListResult<Vec<i32>> {
    let mut walk = arena.walk(head);
    let values = walk.by_ref().map(|node| arena.value(node)).collect();
    walk.ensure_complete()?;

    Ok(values)
}
