#[cfg(test)]
#[path = "../../tests/unit/models/arena_test.rs"]
mod arena_test;

use crate::utils::{ListError, ListResult};
use std::fmt;

/// A handle to a node stored in [`NodeArena`].
///
/// Two handles are equal only when they refer to the same node, regardless of payload values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the position of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A list node: an integer payload and an optional link to the next node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: i32,
    next: Option<NodeId>,
}

impl Node {
    /// Returns node payload.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns outgoing link.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Owns every node of one or many lists.
///
/// Nodes are never removed individually: unlinking a node only changes links, the storage is
/// released when the arena is dropped. Handles from another arena must not be mixed in: accessors
/// panic on a handle which does not belong to this arena.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with space for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Returns total amount of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes were allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a detached node.
    pub fn push(&mut self, value: i32) -> NodeId {
        self.nodes.push(Node { value, next: None });
        NodeId(self.nodes.len() - 1)
    }

    /// Allocates a chain of nodes holding `values` in order and returns its head.
    pub fn from_values<I>(&mut self, values: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut head = None;
        let mut tail: Option<NodeId> = None;

        for value in values {
            let node = self.push(value);
            match tail {
                Some(tail) => self.nodes[tail.0].next = Some(node),
                None => head = Some(node),
            }
            tail = Some(node);
        }

        head
    }

    /// Returns node by its handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns node payload.
    pub fn value(&self, id: NodeId) -> i32 {
        self.nodes[id.0].value
    }

    /// Overwrites node payload and returns the previous one.
    pub fn set_value(&mut self, id: NodeId, value: i32) -> i32 {
        std::mem::replace(&mut self.nodes[id.0].value, value)
    }

    /// Returns outgoing link of the node.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    /// Advances an optional cursor by one link: `None` stays `None`.
    pub fn advance(&self, cursor: Option<NodeId>) -> Option<NodeId> {
        cursor.and_then(|id| self.next(id))
    }

    /// Replaces outgoing link and returns the previous one, so the remainder of the chain is
    /// never lost when a node is rewired.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.nodes[id.0].next, next)
    }

    /// Detaches node from its successor and returns the successor.
    pub fn take_next(&mut self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next.take()
    }

    /// Returns a bounded single pointer walk starting from `head`.
    pub fn walk(&self, head: Option<NodeId>) -> Walk<'_> {
        Walk { arena: self, current: head, steps: 0 }
    }

    /// Links the last node of an acyclic list to the node at `index` and returns that node.
    pub fn close_cycle(&mut self, head: Option<NodeId>, index: usize) -> ListResult<Option<NodeId>> {
        let mut entry = None;
        let mut tail = None;
        let mut length = 0;

        let mut walk = self.walk(head);
        for node in walk.by_ref() {
            if length == index {
                entry = Some(node);
            }
            tail = Some(node);
            length += 1;
        }
        walk.ensure_complete()?;

        match (tail, entry) {
            (Some(tail), Some(entry)) => {
                self.set_next(tail, Some(entry));
                Ok(Some(entry))
            }
            (None, _) => Ok(None),
            (Some(_), None) => Err(ListError::IndexOutOfBounds { index, length }),
        }
    }
}

/// An iterator over node handles which follows `next` links.
///
/// The walk stops after as many steps as the arena has nodes: an acyclic chain can never be
/// longer, so a walk which still has a node to visit at that point is going around a cycle.
pub struct Walk<'a> {
    arena: &'a NodeArena,
    current: Option<NodeId>,
    steps: usize,
}

impl Walk<'_> {
    /// Returns true if the walk was cut by the step guard rather than by the end of the chain.
    pub fn is_truncated(&self) -> bool {
        self.current.is_some() && self.steps >= self.arena.len()
    }

    /// Fails with [`ListError::CyclicInput`] if the walk was truncated.
    pub fn ensure_complete(&self) -> ListResult<()> {
        if self.is_truncated() { Err(ListError::CyclicInput { steps: self.steps }) } else { Ok(()) }
    }
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        if self.steps >= self.arena.len() {
            return None;
        }

        self.steps += 1;
        self.current = self.arena.next(id);

        Some(id)
    }
}
