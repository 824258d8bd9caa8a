// Entrypoint for the CLI application.
// - Keeps `main` small: parse args, resolve paths, run the two stages.
// - Exit code 2 when the logo could not be downloaded or saved.

use clap::Parser;
use fetch_logo::{api::LogoClient, app, cli::Cli, logging, paths::ProjectPaths};
use std::process::ExitCode;

const FAILURE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    logging::init_logging();

    // clap prints usage and exits with status 2 on bad arguments.
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error downloading or saving logo: {}", err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let paths = ProjectPaths::from_executable()?;
    tracing::debug!("project paths: {:?}", paths);

    let client = LogoClient::new()?;
    let report = app::run(&client, &cli.url, &paths)?;
    if !report.config_updated {
        tracing::warn!("logo saved but config.json was not updated");
    }
    Ok(())
}
