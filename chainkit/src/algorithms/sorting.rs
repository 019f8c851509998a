//! Linear sorting of lists whose values come from a small alphabet `0..value_count`
//! (the classic case is `0`, `1` and `2`).

#[cfg(test)]
#[path = "../../tests/unit/algorithms/sorting_test.rs"]
mod sorting_test;

use super::partition::{Segment, distribute};
use crate::models::{NodeArena, NodeId};
use crate::utils::{ListError, ListResult};
use serde::Deserialize;

/// Default size of value alphabet: values `0`, `1` and `2`.
pub const DEFAULT_VALUE_COUNT: usize = 3;

/// Largest accepted size of value alphabet: one counter or sub-chain is allocated per value.
pub const MAX_VALUE_COUNT: usize = 1 << 16;

/// Specifies how a bounded value list is sorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortStrategy {
    /// Counts values, then overwrites payloads in order. Nodes keep their positions, so payloads
    /// no longer stay with the node they were stored in.
    Counting,
    /// Moves nodes into one sub-chain per value and joins them. Payloads stay with their nodes
    /// and equal values keep their relative order.
    #[default]
    Relinking,
}

/// Sorts a list whose values all lie in `0..value_count` and returns the new head.
///
/// Fails with [`ListError::ValueOutOfRange`] before changing anything if some value is outside
/// of the range, and with [`ListError::ValueCountLimit`] if `value_count` exceeds [`MAX_VALUE_COUNT`].
pub fn sort_bounded_values(
    arena: &mut NodeArena,
    head: Option<NodeId>,
    value_count: usize,
    strategy: SortStrategy,
) -> ListResult<Option<NodeId>> {
    let counts = count_values(arena, head, value_count)?;

    match strategy {
        SortStrategy::Counting => {
            overwrite_values(arena, head, &counts);
            Ok(head)
        }
        SortStrategy::Relinking => {
            let mut segments = vec![Segment::default(); value_count];
            distribute(arena, head, &mut segments, |value| value as usize);

            Ok(Segment::join(arena, segments))
        }
    }
}

fn count_values(arena: &NodeArena, head: Option<NodeId>, value_count: usize) -> ListResult<Vec<usize>> {
    if value_count > MAX_VALUE_COUNT {
        return Err(ListError::ValueCountLimit { value_count, limit: MAX_VALUE_COUNT });
    }

    let mut counts = vec![0; value_count];
    let mut walk = arena.walk(head);

    for node in walk.by_ref() {
        let value = arena.value(node);
        let bucket = usize::try_from(value)
            .ok()
            .filter(|&bucket| bucket < value_count)
            .ok_or(ListError::ValueOutOfRange { value, value_count })?;

        counts[bucket] += 1;
    }
    walk.ensure_complete()?;

    Ok(counts)
}

fn overwrite_values(arena: &mut NodeArena, head: Option<NodeId>, counts: &[usize]) {
    let sorted = counts.iter().enumerate().flat_map(|(value, &count)| std::iter::repeat_n(value as i32, count));

    let mut current = head;
    for value in sorted {
        let Some(node) = current else {
            break;
        };

        arena.set_value(node, value);
        current = arena.next(node);
    }
}
