//! A collection of list algorithms, from single pointer walks to composite rewiring routines.
//!
//! Read-only algorithms take `&NodeArena`, rewiring ones take `&mut NodeArena`: the borrow checker
//! therefore rules out running a rewiring algorithm while another one observes the same lists.

pub mod cycle;
pub mod intersection;
pub mod kth;
pub mod middle;
pub mod partition;
pub mod reversal;
pub mod sorting;
pub mod traversal;
