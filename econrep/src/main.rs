//! # econrep
//!
//! A CLI tool for generating ranked reports from macroeconomic CSV data.
//!
//! ## Overview
//!
//! econrep is built on top of econreplib and provides a command-line
//! interface over its pipeline: load the named CSV files, aggregate them
//! for the chosen report, rank the results, and print a bordered table
//! followed by a summary.
//!
//! ## Usage
//!
//! ```bash
//! # Average GDP per country, largest first
//! econrep --files gdp_2023.csv gdp_2024.csv --report average-gdp
//!
//! # Lowest unemployment first, top 10 only
//! econrep --files jobs.csv --report average-unemployment --sort asc --limit 10
//!
//! # Population totals per continent
//! econrep --files world.csv --report population-by-continent
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use econreplib::{
    aggregate_rows, read_files, QueryOptions, ReportKind, ReportQuerySet, SortDirection,
};

mod render;

const AFTER_HELP: &str = "\
Available reports:
  average-gdp              Average GDP by country
  average-unemployment     Average unemployment by country
  population-by-continent  Total population by continent

Examples:
  econrep --files gdp_2023.csv gdp_2024.csv --report average-gdp
  econrep --files jobs.csv --report average-unemployment --sort asc --limit 10
";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("econrep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate ranked reports from macroeconomic CSV data")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("files")
                .long("files")
                .required(true)
                .action(ArgAction::Append)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("CSV files to process (merged in the given order)"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .required(true)
                .value_parser(ReportKind::ALL.map(|kind| kind.as_str()))
                .help("Report to generate"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .default_value("desc")
                .value_parser(["asc", "desc"])
                .help("Sort order for report values"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .help("Keep only the first N rows (non-positive keeps all)"),
        )
}

/// Run the report described by the parsed arguments.
fn run(matches: &ArgMatches) -> Result<ExitCode, anyhow::Error> {
    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let kind: ReportKind = matches
        .get_one::<String>("report")
        .map(|s| s.as_str())
        .unwrap_or_default()
        .parse()?;
    let direction = match matches.get_one::<String>("sort").map(|s| s.as_str()) {
        Some("asc") => SortDirection::Ascending,
        _ => SortDirection::Descending,
    };
    let limit = matches
        .get_one::<i64>("limit")
        .copied()
        .filter(|n| *n > 0)
        .map(|n| n as usize);

    println!("Processing {} files...", files.len());

    let rows = read_files(&files, &kind.required_columns())?;
    let result = aggregate_rows(&rows, kind);

    if result.is_empty() {
        println!("No data to display. Check the input files.");
        return Ok(ExitCode::FAILURE);
    }

    let mut options = QueryOptions::new().direction(direction);
    if let Some(limit) = limit {
        options = options.limit(limit);
    }

    let queryset = ReportQuerySet::from_result(result, &options);
    println!("{}", render::render_report(kind, &queryset));

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
