use anyhow::Result;

use tennis_analytics::cli::{Cli, Command};
use tennis_analytics::config::settings::AppConfig;
use tennis_analytics::{handle_init, handle_query, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let port = match &cli.command {
        Command::Serve { port } => *port,
        _ => None,
    };
    let config = AppConfig::new().with_overrides(cli.database.as_deref(), port);

    match cli.command {
        Command::Serve { .. } => handle_serve(config),
        Command::Init => handle_init(&config),
        ref query => handle_query(&config, query),
    }
}
