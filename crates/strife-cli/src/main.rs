// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Strife CLI - random numbers from scheduler races.

use std::env;
use std::process;

use strife_compose::MagnitudeComposer;
use strife_entropy::RaceCohort;

mod help;
mod output;

fn main() {
    output::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        help::print_usage();
        return;
    }

    if args.len() > 2 {
        eprintln!(
            "{}: expected one upper bound, got {} arguments",
            output::error_label(),
            args.len() - 1
        );
        process::exit(1);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            help::print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("strife 0.1.0");
        }
        raw => cmd_generate(raw),
    }
}

fn cmd_generate(raw: &str) {
    // Negative bounds are accepted; only the magnitude matters.
    let upper_bound: i64 = match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("{}: not an integer: {}", output::error_label(), raw);
            process::exit(1);
        }
    };

    let mut composer = MagnitudeComposer::new(RaceCohort::new());
    match composer.random_with_digits_of(upper_bound.unsigned_abs()) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("{}: {}", output::error_label(), e);
            process::exit(1);
        }
    }
}
