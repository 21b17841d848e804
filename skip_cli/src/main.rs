mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use cli::{SkipsCli, SkipsCliCommand};
use errors::CliError;

fn main() -> ExitCode {
    let cli = SkipsCli::parse();
    initialize_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::debug(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: SkipsCli) -> Result<(), CliError> {
    let format = cli.format;

    match cli.command {
        SkipsCliCommand::List {
            filters,
            params,
            page,
            per_page,
        } => commands::list_skips(&cli.catalog, &filters, &params, page, per_page, format),
        SkipsCliCommand::Stats { filters, filtered } => {
            commands::show_stats(&cli.catalog, &filters, filtered, format)
        }
        SkipsCliCommand::Get { id } => commands::get_skip(&cli.catalog, id, format),
        SkipsCliCommand::Categories => {
            commands::list_categories(format);
            Ok(())
        }
    }
}

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
