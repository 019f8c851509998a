//! This crate exposes two-pointer and link rewiring algorithms over singly linked lists.
//!
//! Nodes live in a [`models::NodeArena`] and are addressed by [`models::NodeId`] handles, so a list
//! is simply its head handle (`Option<NodeId>`). Handles compare by identity, which is what the
//! structural algorithms (cycle membership, intersection) rely on.
//!
//! A list may be cyclic. Functions which are designed for cycles say so; every other traversal is
//! bounded by the arena size and fails with [`utils::ListError::CyclicInput`] instead of looping.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod config;
pub mod models;
pub mod prelude;
pub mod report;
pub mod utils;
