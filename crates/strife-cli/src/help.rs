// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Help text for the CLI.

use crate::output;

pub fn print_usage() {
    println!(
        "{} {} - random numbers from scheduler races",
        output::title("Strife"),
        output::version("0.1.0")
    );
    println!();
    println!(
        "{}: {} {}",
        output::section_header("Usage"),
        output::command("strife"),
        output::arg("<upper-bound>")
    );
    println!();
    println!("{}", output::section_header("Arguments:"));
    println!(
        "  {}  Integer magnitude target; the sign is ignored.",
        output::arg("<upper-bound>")
    );
    println!(
        "                 Prints a random value with up to that many digits,"
    );
    println!("                 reduced modulo the bound.");
    println!();
    println!("{}", output::section_header("Commands:"));
    println!("  {}     Show this help", output::command("help"));
    println!("  {}  Show version", output::command("version"));
    println!();
    println!("Each pair of digits costs one full race of 20 threads, so large");
    println!("bounds are deliberately slow.");
}
