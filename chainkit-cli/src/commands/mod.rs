use clap::ArgMatches;
use std::fs::File;
use std::str::FromStr;

pub mod generate;
pub mod run;

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Parses comma separated list values, e.g. `1, 2,3`.
fn parse_values(input: &str) -> Result<Vec<i32>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<i32>().map_err(|err| format!("cannot parse list value '{value}': '{err}'")))
        .collect()
}

fn format_values(values: &[i32]) -> String {
    format!("[{}]", values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", "))
}
