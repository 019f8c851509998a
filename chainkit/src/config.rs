//! Algorithm configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::algorithms::cycle::CycleStrategy;
use crate::algorithms::reversal::DEFAULT_RECURSION_LIMIT;
use crate::algorithms::sorting::{DEFAULT_VALUE_COUNT, SortStrategy};
use crate::utils::GenericResult;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Specifies settings of algorithms which have alternatives or limits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlgorithmConfig {
    /// Maximum list length accepted by recursive reversal. Default is 10000, values above 50000 are clamped.
    pub max_recursion_depth: usize,
    /// Size of value alphabet for bounded value sort. Default is 3, at most 65536.
    pub value_count: usize,
    /// Bounded value sort strategy. Default is relinking.
    pub sort_strategy: SortStrategy,
    /// Cycle detection strategy. Default is Floyd's.
    pub cycle_strategy: CycleStrategy,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_RECURSION_LIMIT,
            value_count: DEFAULT_VALUE_COUNT,
            sort_strategy: SortStrategy::default(),
            cycle_strategy: CycleStrategy::default(),
        }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<AlgorithmConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
