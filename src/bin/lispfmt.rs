//! Command-line interface for lispfmt
//!
//! Reindents each named file, or standard input when no files are given, and
//! prints the result. Each file is an independent unit of work: a read
//! failure is reported and turns the exit status nonzero, but the remaining
//! files are still processed.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::io::Read;
use std::process::ExitCode;

use lispfmt::{parse, reindent};

fn main() -> ExitCode {
    let matches = Command::new("lispfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reindent s-expression source, two spaces per nesting level")
        .arg(
            Arg::new("files")
                .help("Files to reformat; reads standard input when omitted")
                .value_name("FILE")
                .num_args(0..),
        )
        .arg(
            Arg::new("parse")
                .long("parse")
                .action(ArgAction::SetTrue)
                .help("Print the parsed tree as JSON instead of reformatting"),
        )
        .get_matches();

    let parse_only = matches.get_flag("parse");
    let files: Vec<String> = matches
        .get_many::<String>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut status = ExitCode::SUCCESS;

    if files.is_empty() {
        if let Err(err) = run_stdin(parse_only) {
            eprintln!("lispfmt: {:#}", err);
            status = ExitCode::FAILURE;
        }
    } else {
        for path in &files {
            if let Err(err) = run_file(path, parse_only) {
                eprintln!("lispfmt: {:#}", err);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

fn run_file(path: &str, parse_only: bool) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path))?;
    tracing::debug!("read {} bytes from {}", source.len(), path);
    print_transformed(&source, parse_only)
}

fn run_stdin(parse_only: bool) -> anyhow::Result<()> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read standard input")?;
    print_transformed(&source, parse_only)
}

fn print_transformed(source: &str, parse_only: bool) -> anyhow::Result<()> {
    if parse_only {
        let doc = parse(source)?;
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", reindent(source));
    }
    Ok(())
}
