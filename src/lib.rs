pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;
use rusqlite::{Connection, OpenFlags};
use serde::Serialize;

use crate::analytics::{resolver, PlayerRef};
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::setup;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    let mut conn = open_database(&config.database.path, OpenFlags::default())?;
    let report = setup::bootstrap(&mut conn)?;

    for table in setup::TABLES {
        info!("{}: {} rows", table, setup::count_rows(&conn, table)?);
    }
    print_json(&report)
}

/// Runs one read-only command against an existing database and prints its
/// result. A missing file is an error; only `init` creates databases.
pub fn handle_query(config: &AppConfig, command: &Command) -> Result<()> {
    let conn = open_existing_database(&config.database.path)?;

    match command {
        Command::Resolve { name } => print_json(&resolver::resolve_player_id(&conn, name)?),
        Command::Record { player } => {
            print_json(&analytics::player_record(&conn, &PlayerRef::parse(player))?)
        }
        Command::H2h { first, second } => print_json(&analytics::head_to_head(
            &conn,
            &PlayerRef::parse(first),
            &PlayerRef::parse(second),
        )?),
        Command::Draw { tournament_id } => {
            print_json(&analytics::tournament_draw(&conn, *tournament_id)?)
        }
        Command::Surfaces { player } => {
            print_json(&analytics::surface_breakdown(&conn, &PlayerRef::parse(player))?)
        }
        Command::Stats { match_id } => print_json(&analytics::match_stats(&conn, *match_id)?),
        Command::Tables => print_json(&setup::list_tables(&conn)?),
        Command::Describe { table } => print_json(&setup::describe_table(&conn, table)?),
        Command::Serve { .. } | Command::Init => {
            anyhow::bail!("{:?} is not a query command", command)
        }
    }
}

fn open_existing_database(path: &str) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    open_database(path, flags).with_context(|| format!("Run `init` to create {path}"))
}

fn open_database(path: &str, flags: OpenFlags) -> Result<Connection> {
    let conn = Connection::open_with_flags(path, flags)
        .with_context(|| format!("Failed to open database {path}"))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
