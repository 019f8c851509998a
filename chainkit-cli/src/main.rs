//! A command line interface to chainkit list algorithms.

mod commands;

use clap::Command;
use commands::generate::{get_generate_app, run_generate};
use commands::run::{get_run_app, run_operation};
use std::process;

fn main() {
    let matches = Command::new("chainkit")
        .about("Runs two-pointer and rewiring algorithms on singly linked lists")
        .subcommand_required(true)
        .subcommand(get_run_app())
        .subcommand(get_generate_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => run_operation(run_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
