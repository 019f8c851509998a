#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use chainkit::models::{NodeArena, generate_cyclic_list, generate_list};
use chainkit::prelude::{Environment, Random};
use clap::{Arg, ArgAction, Command};

const SIZE_ARG_NAME: &str = "size";
const MIN_ARG_NAME: &str = "min";
const MAX_ARG_NAME: &str = "max";
const CYCLE_ARG_NAME: &str = "cycle";

const DEFAULT_MIN_VALUE: i32 = 0;
const DEFAULT_MAX_VALUE: i32 = 9;

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates random list values which can be passed to run command")
        .arg(Arg::new(SIZE_ARG_NAME).help("Amount of nodes in the list").short('s').long(SIZE_ARG_NAME).required(true))
        .arg(
            Arg::new(MIN_ARG_NAME)
                .help("Minimal node value (inclusive)")
                .long(MIN_ARG_NAME)
                .required(false)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(MAX_ARG_NAME)
                .help("Maximal node value (inclusive)")
                .long(MAX_ARG_NAME)
                .required(false)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(CYCLE_ARG_NAME)
                .help("Links the tail to a randomly chosen node and reports its index")
                .long(CYCLE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "list size")?
        .ok_or_else(|| "list size is not specified".to_string())?;
    let min = parse_int_value::<i32>(matches, MIN_ARG_NAME, "min value")?.unwrap_or(DEFAULT_MIN_VALUE);
    let max = parse_int_value::<i32>(matches, MAX_ARG_NAME, "max value")?.unwrap_or(DEFAULT_MAX_VALUE);
    let is_cyclic = matches.get_flag(CYCLE_ARG_NAME);

    let environment = Environment::default();

    generate_output(environment.random.as_ref(), size, min, max, is_cyclic).map(|output| println!("{output}"))
}

/// Generates list values and, for a cyclic list, the cycle entry index in the form accepted by `run`.
pub(crate) fn generate_output(
    random: &dyn Random,
    size: usize,
    min: i32,
    max: i32,
    is_cyclic: bool,
) -> Result<String, String> {
    if min > max {
        return Err(format!("min value {min} is greater than max value {max}"));
    }

    let mut arena = NodeArena::with_capacity(size);

    let (head, entry_index) = if is_cyclic {
        generate_cyclic_list(&mut arena, random, size, min, max)
            .map(|(head, entry_index)| (head, Some(entry_index).filter(|_| size > 0)))
            .map_err(|err| format!("cannot generate cyclic list: '{err}'"))?
    } else {
        (generate_list(&mut arena, random, size, min, max), None)
    };

    let values = arena.walk(head).take(size).map(|node| arena.value(node).to_string()).collect::<Vec<_>>().join(",");

    Ok(match entry_index {
        Some(entry_index) => format!("--values {values} --cycle-at {entry_index}"),
        None => format!("--values {values}"),
    })
}
