//! Command-line interface for gni-to-cmake.
//!
//! Usage:
//!   gni-to-cmake `<input.gni>` `<output.cmake>` `<path-prefix>`

use clap::{Arg, Command};
use gni_to_cmake::{convert, provenance_header};
use std::path::PathBuf;
use std::process;
use std::{env, fs};

fn build_command() -> Command {
    Command::new("gni-to-cmake")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Best-effort regex translation of a GN build file into CMake")
        .after_help(
            "The translation is a fixed sequence of regex substitutions. It only \
             supports a few constructs and assumes the input is auto-formatted, \
             so the output may need a bit of manual fixup.",
        )
        .arg(
            Arg::new("input")
                .help("Path of the input .gni file")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path of the output .cmake file")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("path-prefix")
                .help("Path to prepend to each file name (can be the empty string)")
                .required(true)
                .index(3),
        )
}

fn main() {
    // Usage errors exit with status 1; --help and --version exit with 0.
    let matches = build_command().try_get_matches().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    let input: &PathBuf = matches.get_one("input").expect("input is required");
    let output: &PathBuf = matches.get_one("output").expect("output is required");
    let prefix: &String = matches
        .get_one("path-prefix")
        .expect("path-prefix is required");

    let source = fs::read_to_string(input).unwrap_or_else(|err| {
        eprintln!("Error reading {}: {}", input.display(), err);
        process::exit(1);
    });

    let body = convert(&source, prefix);
    let args: Vec<String> = env::args().collect();
    let contents = format!("{}{}", provenance_header(&args), body);

    fs::write(output, contents).unwrap_or_else(|err| {
        eprintln!("Error writing {}: {}", output.display(), err);
        process::exit(1);
    });
}
