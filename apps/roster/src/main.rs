use std::io;

use team_roster::cli::{CliResult, Prompter, Session};
use team_roster::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> CliResult<()> {
    // Load configuration (.env first, then process environment)
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut session = Session::new(config);

    session.run(&mut prompter)
}
