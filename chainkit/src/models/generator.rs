#[cfg(test)]
#[path = "../../tests/unit/models/generator_test.rs"]
mod generator_test;

use super::{NodeArena, NodeId};
use crate::utils::{ListResult, Random};

/// Generates `size` values uniformly distributed on the closed interval [min, max].
pub fn generate_values(random: &dyn Random, size: usize, min: i32, max: i32) -> Vec<i32> {
    (0..size).map(|_| random.uniform_int(min, max)).collect()
}

/// Allocates a random acyclic list of `size` nodes and returns its head.
pub fn generate_list(arena: &mut NodeArena, random: &dyn Random, size: usize, min: i32, max: i32) -> Option<NodeId> {
    arena.from_values(generate_values(random, size, min, max))
}

/// Allocates a random list of `size` nodes whose tail links back to a randomly chosen node.
///
/// Returns list head and the index of the cycle entry.
pub fn generate_cyclic_list(
    arena: &mut NodeArena,
    random: &dyn Random,
    size: usize,
    min: i32,
    max: i32,
) -> ListResult<(Option<NodeId>, usize)> {
    let head = generate_list(arena, random, size, min, max);
    if size == 0 {
        return Ok((head, 0));
    }

    let max_index = i32::try_from(size - 1).unwrap_or(i32::MAX);
    let entry_index = random.uniform_int(0, max_index) as usize;
    arena.close_cycle(head, entry_index)?;

    Ok((head, entry_index))
}
