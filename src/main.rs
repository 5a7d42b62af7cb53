use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{arg, value_parser, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use u_unload::app::{run, OutputFormat, RunConfig};

fn cli() -> Command {
    Command::new("u-unload")
        .about("Selects the non-overlapping train unloadings with maximum total reward")
        .arg(
            arg!(-i --input [FILE] "Path to the request file (default: stdin)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-f --format [FORMAT] "Output format: text or json")
                .default_value("text")
                .value_parser(value_parser!(OutputFormat)),
        )
        .arg(
            arg!(--strict "Reject duplicate IDs, negative arrivals and non-positive durations")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(--kpi "Log selection KPIs to stderr").action(ArgAction::SetTrue))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn config_from(matches: &ArgMatches) -> RunConfig {
    RunConfig::default()
        .with_format(
            matches
                .get_one::<OutputFormat>("format")
                .copied()
                .unwrap_or_default(),
        )
        .with_strict(matches.get_flag("strict"))
        .with_kpi(matches.get_flag("kpi"))
}

fn open_input(matches: &ArgMatches) -> Result<Box<dyn Read>> {
    match matches.get_one::<PathBuf>("input") {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn main() -> Result<ExitCode> {
    let matches = cli().get_matches();
    enable_tracing();

    let config = config_from(&matches);
    let input = open_input(&matches)?;
    let outcome = run(input, io::stdout().lock(), &config)?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
