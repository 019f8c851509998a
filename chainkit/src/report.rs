//! Provides a structural summary of a list which is written through the environment logger.

#[cfg(test)]
#[path = "../tests/unit/report_test.rs"]
mod report_test;

use crate::algorithms::cycle::detect_cycle;
use crate::algorithms::middle::{first_middle_node, middle_node};
use crate::algorithms::traversal::collect_values;
use crate::models::{NodeArena, NodeId};
use crate::utils::{Environment, ListResult};
use serde::Serialize;

/// Describes list shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    /// Every distinct node value in walk order; a cycle is listed once.
    pub values: Vec<i32>,
    /// Amount of distinct nodes.
    pub nodes: usize,
    /// Cycle details, if the list is cyclic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleSummary>,
    /// Value of the second middle node of an acyclic list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<i32>,
    /// Value of the first middle node of an acyclic list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_middle: Option<i32>,
}

/// Describes a cycle found in a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    /// 0-based position of the entry node.
    pub entry_index: usize,
    /// Value of the entry node.
    pub entry_value: i32,
    /// Amount of nodes in the cycle.
    pub length: usize,
}

/// Analyzes the list with the configured cycle strategy and logs findings.
pub fn describe_list(arena: &NodeArena, head: Option<NodeId>, environment: &Environment) -> ListResult<ListSummary> {
    let logger = environment.logger.as_ref();
    let strategy = environment.config.cycle_strategy;

    let summary = match detect_cycle(arena, head, strategy) {
        Some(info) => {
            let nodes = info.tail_length + info.length;
            let values = arena.walk(head).take(nodes).map(|node| arena.value(node)).collect();

            logger(&format!(
                "cyclic list ({strategy:?}): {} node(s) lead to entry {} (value {}), cycle of {} node(s)",
                info.tail_length,
                info.entry,
                arena.value(info.entry),
                info.length
            ));

            ListSummary {
                values,
                nodes,
                cycle: Some(CycleSummary {
                    entry_index: info.tail_length,
                    entry_value: arena.value(info.entry),
                    length: info.length,
                }),
                middle: None,
                first_middle: None,
            }
        }
        None => {
            let values = collect_values(arena, head)?;
            let middle = middle_node(arena, head)?.map(|node| arena.value(node));
            let first_middle = first_middle_node(arena, head)?.map(|node| arena.value(node));

            logger(&format!(
                "acyclic list of {} node(s), middle: {middle:?}, first middle: {first_middle:?}",
                values.len()
            ));

            ListSummary { nodes: values.len(), values, cycle: None, middle, first_middle }
        }
    };

    Ok(summary)
}
