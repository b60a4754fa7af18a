mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::debug;

use cli::Cli;
use config::{LogLevel, UserConfig};
use error::ExitStatus;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            e.print()?;
            return Ok(ExitStatus::InvalidArguments.into());
        }
        Err(e) => {
            // --help and --version
            e.print()?;
            return Ok(ExitStatus::Success.into());
        }
    };
    let config = UserConfig::load();
    logging::init(config.log_level, LogLevel::from_verbosity(cli.global.verbose));
    debug!(?cli, "parsed arguments");

    let format = cli.global.output_format(config.json);
    let catalog = kde_colors_theme::system_catalog();

    let status = match commands::execute(&cli.command, &catalog, &config, format)
        .and_then(|rendered| output::write_output(&rendered, cli.global.output.as_deref()))
    {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_status()
        }
    };

    Ok(status.into())
}
