//! This module reimports a common used types.

pub use crate::models::NodeArena;
pub use crate::models::NodeId;

pub use crate::algorithms::cycle::{CycleInfo, CycleStrategy};
pub use crate::algorithms::cycle::{break_cycle, cycle_length, detect_cycle, detect_cycle_start, has_cycle};
pub use crate::algorithms::intersection::intersection_node;
pub use crate::algorithms::kth::{kth_from_end, remove_kth_from_end};
pub use crate::algorithms::middle::{first_middle_node, middle_node};
pub use crate::algorithms::partition::{partition_around, segregate_by, segregate_even_odd};
pub use crate::algorithms::reversal::{reverse_iterative, reverse_recursive, reverse_recursive_with_limit};
pub use crate::algorithms::sorting::{SortStrategy, sort_bounded_values};
pub use crate::algorithms::traversal::{collect_values, last_node, length, node_at};

pub use crate::config::AlgorithmConfig;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{ListError, ListResult};
