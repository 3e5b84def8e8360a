//! `hello_args` entry point: preprocess the arguments, layer the settings,
//! and print them.

use hello_args::cli::CommandLine;
use hello_args::error::{HelloArgsError, Result, is_display_request};
use hello_args::settings::{AppSettings, working_directory};
use hello_args::{logging, report};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let log_filter = logging::init();
    let cli = parse_command_line()?;
    log_filter.set_verbose(cli.is_verbose());
    let base_dir = working_directory()?;
    let settings = AppSettings::load(&cli, &base_dir)?;
    tracing::debug!(
        standalone = settings.is_standalone,
        debug = settings.is_debug,
        "settings resolved"
    );
    report::print_report(&settings)?;
    Ok(())
}

fn parse_command_line() -> Result<CommandLine> {
    match CommandLine::try_parse_env() {
        Err(HelloArgsError::CliParsing(err)) if is_display_request(&err) => err.exit(),
        other => other,
    }
}
