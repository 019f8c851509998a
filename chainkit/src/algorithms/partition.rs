//! Stable partitioning: nodes are detached one by one and appended to sub-chains, which are
//! joined at the end. Every sub-chain keeps the relative order its nodes had in the input.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/partition_test.rs"]
mod partition_test;

use super::traversal::length;
use crate::models::{NodeArena, NodeId};
use crate::utils::ListResult;
use std::cmp::Ordering;

/// Moves nodes matching `predicate` in front of the others and returns the new head.
pub fn segregate_by<P>(arena: &mut NodeArena, head: Option<NodeId>, predicate: P) -> ListResult<Option<NodeId>>
where
    P: Fn(i32) -> bool,
{
    length(arena, head)?;

    let mut segments = [Segment::default(); 2];
    distribute(arena, head, &mut segments, |value| if predicate(value) { 0 } else { 1 });

    Ok(Segment::join(arena, segments))
}

/// Moves nodes with even values in front of nodes with odd values.
pub fn segregate_even_odd(arena: &mut NodeArena, head: Option<NodeId>) -> ListResult<Option<NodeId>> {
    segregate_by(arena, head, |value| value % 2 == 0)
}

/// Rearranges the list into nodes less than `pivot`, equal to it and greater than it.
pub fn partition_around(arena: &mut NodeArena, head: Option<NodeId>, pivot: i32) -> ListResult<Option<NodeId>> {
    length(arena, head)?;

    let mut segments = [Segment::default(); 3];
    distribute(arena, head, &mut segments, |value| match value.cmp(&pivot) {
        Ordering::Less => 0,
        Ordering::Equal => 1,
        Ordering::Greater => 2,
    });

    Ok(Segment::join(arena, segments))
}

/// A sub-chain assembled from detached nodes, tracked by both ends.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Segment {
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl Segment {
    /// Appends a detached node to the tail.
    pub fn append(&mut self, arena: &mut NodeArena, node: NodeId) {
        match self.tail {
            Some(tail) => {
                arena.set_next(tail, Some(node));
            }
            None => self.head = Some(node),
        }

        self.tail = Some(node);
    }

    /// Concatenates segments in order, terminates the result and returns its head.
    pub fn join<I>(arena: &mut NodeArena, segments: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut joined = Segment::default();

        for segment in segments {
            let Some(head) = segment.head else {
                continue;
            };

            match joined.tail {
                Some(tail) => {
                    arena.set_next(tail, Some(head));
                }
                None => joined.head = Some(head),
            }
            joined.tail = segment.tail;
        }

        if let Some(tail) = joined.tail {
            arena.set_next(tail, None);
        }

        joined.head
    }
}

/// Walks an acyclic chain once and appends each node to the segment chosen by `bucket_fn`.
///
/// The successor is taken from a node before the node is appended anywhere.
pub(crate) fn distribute<F>(arena: &mut NodeArena, head: Option<NodeId>, segments: &mut [Segment], bucket_fn: F)
where
    F: Fn(i32) -> usize,
{
    let mut current = head;

    while let Some(node) = current {
        current = arena.take_next(node);
        let bucket = bucket_fn(arena.value(node));
        segments[bucket].append(arena, node);
    }
}
