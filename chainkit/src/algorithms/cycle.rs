//! Cycle detection and localization.
//!
//! All functions here accept cyclic lists. Floyd's tortoise and hare is the reference method:
//! a slow pointer moves one link per round, a fast one two links; they can only meet inside a
//! cycle. If `L` is the distance from head to the cycle entry, `C` the cycle length and `x` the
//! distance from entry to the meeting node, then `L ≡ -x (mod C)`, so walking `L` links from both
//! head and meeting node arrives at the entry simultaneously.
//!
//! Brent's method and a visited-set walk are provided as alternative strategies.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/cycle_test.rs"]
mod cycle_test;

use crate::models::{NodeArena, NodeId};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Specifies a method used to find a cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleStrategy {
    /// Floyd's tortoise and hare: O(1) memory.
    #[default]
    Floyd,
    /// Brent's power of two search: O(1) memory, fewer link reads.
    Brent,
    /// Remembers every visited node: O(n) memory.
    Visited,
}

/// Describes the cycle of a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleInfo {
    /// The node where the tail links back into the list.
    pub entry: NodeId,
    /// Amount of nodes in the cycle.
    pub length: usize,
    /// Amount of nodes before the entry.
    pub tail_length: usize,
}

/// Returns true if following links from `head` revisits a node.
pub fn has_cycle(arena: &NodeArena, head: Option<NodeId>) -> bool {
    find_meeting_node(arena, head).is_some()
}

/// Returns the node where the cycle starts, or `None` for an acyclic list.
pub fn detect_cycle_start(arena: &NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let meeting = find_meeting_node(arena, head)?;

    find_entry(arena, head?, meeting).map(|(entry, _)| entry)
}

/// Returns amount of nodes in the cycle, 0 for an acyclic list.
pub fn cycle_length(arena: &NodeArena, head: Option<NodeId>) -> usize {
    find_meeting_node(arena, head).map_or(0, |meeting| measure_loop(arena, meeting))
}

/// Unlinks the cycle tail from the cycle entry, turning the list into an acyclic one.
///
/// Returns the (unchanged) head. Does nothing for an acyclic list.
pub fn break_cycle(arena: &mut NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    if let Some(entry) = detect_cycle_start(arena, head) {
        let mut tail = entry;
        while let Some(next) = arena.next(tail).filter(|&next| next != entry) {
            tail = next;
        }

        arena.take_next(tail);
    }

    head
}

/// Finds the cycle using the given strategy and describes it.
pub fn detect_cycle(arena: &NodeArena, head: Option<NodeId>, strategy: CycleStrategy) -> Option<CycleInfo> {
    match strategy {
        CycleStrategy::Floyd => detect_with_floyd(arena, head),
        CycleStrategy::Brent => detect_with_brent(arena, head),
        CycleStrategy::Visited => detect_with_visited(arena, head),
    }
}

fn detect_with_floyd(arena: &NodeArena, head: Option<NodeId>) -> Option<CycleInfo> {
    let meeting = find_meeting_node(arena, head)?;
    let (entry, tail_length) = find_entry(arena, head?, meeting)?;

    Some(CycleInfo { entry, length: measure_loop(arena, meeting), tail_length })
}

fn detect_with_brent(arena: &NodeArena, head: Option<NodeId>) -> Option<CycleInfo> {
    let head = head?;

    // phase 1: teleport the tortoise to the hare at each power of two until the hare catches it
    let mut power = 1_usize;
    let mut length = 1_usize;
    let mut tortoise = head;
    let mut hare = arena.next(head)?;

    while tortoise != hare {
        if power == length {
            tortoise = hare;
            power *= 2;
            length = 0;
        }

        hare = arena.next(hare)?;
        length += 1;
    }

    // phase 2: a hare which is exactly one cycle ahead meets the tortoise at the entry
    let mut hare = head;
    for _ in 0..length {
        hare = arena.next(hare)?;
    }

    let mut tortoise = head;
    let mut tail_length = 0;
    while tortoise != hare {
        tortoise = arena.next(tortoise)?;
        hare = arena.next(hare)?;
        tail_length += 1;
    }

    Some(CycleInfo { entry: tortoise, length, tail_length })
}

fn detect_with_visited(arena: &NodeArena, head: Option<NodeId>) -> Option<CycleInfo> {
    let mut positions = FxHashMap::default();
    let mut current = head;
    let mut position = 0;

    while let Some(node) = current {
        if let Some(&entry_position) = positions.get(&node) {
            return Some(CycleInfo { entry: node, length: position - entry_position, tail_length: entry_position });
        }

        positions.insert(node, position);
        position += 1;
        current = arena.next(node);
    }

    None
}

/// Runs the first phase of Floyd's algorithm and returns a node inside the cycle.
fn find_meeting_node(arena: &NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let mut slow = head?;
    let mut fast = head?;

    loop {
        fast = arena.next(arena.next(fast)?)?;
        slow = arena.next(slow)?;

        if slow == fast {
            return Some(slow);
        }
    }
}

/// Runs the second phase of Floyd's algorithm: returns the entry and its distance from head.
fn find_entry(arena: &NodeArena, head: NodeId, meeting: NodeId) -> Option<(NodeId, usize)> {
    let mut from_head = head;
    let mut from_meeting = meeting;
    let mut distance = 0;

    while from_head != from_meeting {
        from_head = arena.next(from_head)?;
        from_meeting = arena.next(from_meeting)?;
        distance += 1;
    }

    Some((from_head, distance))
}

fn measure_loop(arena: &NodeArena, start: NodeId) -> usize {
    std::iter::successors(arena.next(start), |&node| arena.next(node)).take_while(|&node| node != start).count() + 1
}
