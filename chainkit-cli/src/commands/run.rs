#[cfg(test)]
#[path = "../../tests/unit/commands/run_test.rs"]
mod run_test;

use super::*;
use chainkit::config::read_config;
use chainkit::prelude::*;
use chainkit::report::describe_list;
use clap::{Arg, Command};
use std::io::BufReader;

const OPERATION_ARG_NAME: &str = "OPERATION";
const VALUES_ARG_NAME: &str = "values";
const CYCLE_AT_ARG_NAME: &str = "cycle-at";
const K_ARG_NAME: &str = "k";
const PIVOT_ARG_NAME: &str = "pivot";
const CONFIG_ARG_NAME: &str = "config";

const OPERATIONS: [&str; 12] = [
    "describe",
    "cycle-start",
    "break-cycle",
    "middle",
    "first-middle",
    "kth",
    "remove-kth",
    "reverse",
    "reverse-recursive",
    "segregate",
    "sort",
    "partition",
];

pub fn get_run_app() -> Command {
    Command::new("run")
        .about("Builds a list from values and runs an algorithm on it")
        .arg(
            Arg::new(OPERATION_ARG_NAME)
                .help("Specifies algorithm to run")
                .required(true)
                .value_parser(OPERATIONS)
                .index(1),
        )
        .arg(
            Arg::new(VALUES_ARG_NAME)
                .help("Comma separated list values, e.g. 1,2,3")
                .short('v')
                .long(VALUES_ARG_NAME)
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(CYCLE_AT_ARG_NAME)
                .help("Links the last node back to the node at the given 0-based index")
                .short('c')
                .long(CYCLE_AT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(K_ARG_NAME)
                .help("Position counted from the end (1 is the last node)")
                .short('k')
                .long(K_ARG_NAME)
                .required(false)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(PIVOT_ARG_NAME)
                .help("Pivot value for three-way partition")
                .short('p')
                .long(PIVOT_ARG_NAME)
                .required(false)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
}

pub fn run_operation(matches: &ArgMatches) -> Result<(), String> {
    let operation =
        matches.get_one::<String>(OPERATION_ARG_NAME).ok_or_else(|| "operation is not specified".to_string())?;
    let values = matches
        .get_one::<String>(VALUES_ARG_NAME)
        .ok_or_else(|| "list values are not specified".to_string())
        .and_then(|values| parse_values(values))?;

    let args = OperationArgs {
        cycle_at: parse_int_value::<usize>(matches, CYCLE_AT_ARG_NAME, "cycle entry index")?,
        k: parse_int_value::<isize>(matches, K_ARG_NAME, "position from the end")?,
        pivot: parse_int_value::<i32>(matches, PIVOT_ARG_NAME, "pivot")?,
    };

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            open_file(path, "config").and_then(|file| read_config(BufReader::new(file)).map_err(|err| err.to_string()))
        })
        .transpose()?
        .unwrap_or_default();

    let environment = Environment::default().with_config(config);

    execute_operation(operation, values.as_slice(), &args, &environment).map(|output| println!("{output}"))
}

/// Optional parameters of list operations.
#[derive(Debug, Default)]
pub(crate) struct OperationArgs {
    pub cycle_at: Option<usize>,
    pub k: Option<isize>,
    pub pivot: Option<i32>,
}

/// Builds a list from `values`, runs the operation and returns a printable result.
pub(crate) fn execute_operation(
    operation: &str,
    values: &[i32],
    args: &OperationArgs,
    environment: &Environment,
) -> Result<String, String> {
    let mut arena = NodeArena::with_capacity(values.len());
    let head = arena.from_values(values.iter().copied());

    if let Some(index) = args.cycle_at {
        arena.close_cycle(head, index).map_err(|err| format!("cannot create cycle: '{err}'"))?;
    }

    if operation == "describe" {
        let summary = describe_list(&arena, head, environment).map_err(|err| err.to_string())?;
        return serde_json::to_string_pretty(&summary).map_err(|err| format!("cannot serialize summary: '{err}'"));
    }

    let config = &environment.config;

    let result = match operation {
        "cycle-start" => Ok(format_node(&arena, detect_cycle_start(&arena, head))),
        "break-cycle" => {
            let head = break_cycle(&mut arena, head);
            format_list(&arena, head)
        }
        "middle" => middle_node(&arena, head).map(|node| format_node(&arena, node)),
        "first-middle" => first_middle_node(&arena, head).map(|node| format_node(&arena, node)),
        "kth" => kth_from_end(&arena, head, get_required(args.k, K_ARG_NAME)?).map(|node| format_node(&arena, node)),
        "remove-kth" => remove_kth_from_end(&mut arena, head, get_required(args.k, K_ARG_NAME)?)
            .and_then(|head| format_list(&arena, head)),
        "reverse" => reverse_iterative(&mut arena, head).and_then(|head| format_list(&arena, head)),
        "reverse-recursive" => reverse_recursive_with_limit(&mut arena, head, config.max_recursion_depth)
            .and_then(|head| format_list(&arena, head)),
        "segregate" => segregate_even_odd(&mut arena, head).and_then(|head| format_list(&arena, head)),
        "sort" => sort_bounded_values(&mut arena, head, config.value_count, config.sort_strategy)
            .and_then(|head| format_list(&arena, head)),
        "partition" => partition_around(&mut arena, head, get_required(args.pivot, PIVOT_ARG_NAME)?)
            .and_then(|head| format_list(&arena, head)),
        _ => return Err(format!("unknown operation: '{operation}'")),
    };

    result.map_err(|err| format!("cannot run '{operation}': '{err}'"))
}

fn get_required<T>(value: Option<T>, arg_name: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("argument '--{arg_name}' is required for this operation"))
}

fn format_list(arena: &NodeArena, head: Option<NodeId>) -> ListResult<String> {
    collect_values(arena, head).map(|values| format_values(values.as_slice()))
}

fn format_node(arena: &NodeArena, node: Option<NodeId>) -> String {
    node.map_or_else(|| "none".to_string(), |node| format!("node {node} with value {}", arena.value(node)))
}
