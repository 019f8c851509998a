//! Search for the node where two lists merge.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/intersection_test.rs"]
mod intersection_test;

use super::traversal::length;
use crate::models::{NodeArena, NodeId};
use crate::utils::ListResult;

/// Returns the first node shared by two acyclic lists, compared by identity, or `None` if the
/// lists do not merge.
pub fn intersection_node(
    arena: &NodeArena,
    first: Option<NodeId>,
    second: Option<NodeId>,
) -> ListResult<Option<NodeId>> {
    let first_length = length(arena, first)?;
    let second_length = length(arena, second)?;

    let (mut longer, mut shorter, offset) = if first_length >= second_length {
        (first, second, first_length - second_length)
    } else {
        (second, first, second_length - first_length)
    };

    // align both pointers at the same distance from the common end
    for _ in 0..offset {
        longer = arena.advance(longer);
    }

    while longer != shorter {
        longer = arena.advance(longer);
        shorter = arena.advance(shorter);
    }

    Ok(longer)
}
