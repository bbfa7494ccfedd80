//! The `energia` binary. The CLI lives in `cli/`; this file only invokes `cli::run()` and
//! handles process termination.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
