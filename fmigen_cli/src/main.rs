//! fmigen CLI
//!
//! Entry point for the fmigen command-line tool. Reads an FMI model description
//! and writes a header declaring a typed accessor class for the model.

mod args;

use std::process::ExitCode;

use clap::CommandFactory;
use fmigen_common::{FmiGenError, Result};
use fmigen_model::{DocumentLoader, XmlDocumentLoader, extract_variables};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::Args;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print the deduplicated variable table as JSON.
fn list_variables(args: &Args) -> Result<()> {
    let doc = XmlDocumentLoader::new().load(&args.xml)?;
    let set = extract_variables(&doc)?;
    let json = serde_json::to_string_pretty(&set.variables)
        .map_err(|e| FmiGenError::output(format!("failed to serialize variables: {e}")))?;
    println!("{json}");
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    if args.list {
        return list_variables(args);
    }
    let config = args.to_config();
    debug!("Configuration: {:?}", config);
    fmigen_header::generate(&config)?;
    Ok(())
}

/// Executes fmigen.
///
/// With no arguments, prints usage and exits successfully. Clap reports
/// malformed invocations; generation failures exit with status 1.
fn main() -> ExitCode {
    let argv: Vec<_> = std::env::args_os().collect();
    if argv.len() <= 1 {
        if let Err(e) = Args::command().print_help() {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let args = match Args::parse_normalized(argv) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
