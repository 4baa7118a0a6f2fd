use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis-analytics backend")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or tennis.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Create the schema and seed empty tables
    Init,
    /// Look up a player id by "First Last" name
    Resolve { name: String },
    /// Win/loss record of a player (name or id)
    Record { player: String },
    /// Match history between two players (names or ids)
    H2h { first: String, second: String },
    /// Tournament draw, final first
    Draw { tournament_id: i64 },
    /// Win/loss record per court surface
    Surfaces { player: String },
    /// Per-player statistics of one match
    Stats { match_id: i64 },
    /// List tables in the database
    Tables,
    /// Show the columns of a table
    Describe { table: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_head_to_head_with_global_database() {
        let cli = Cli::parse_from([
            "tennis_analytics",
            "h2h",
            "Rafael Nadal",
            "2",
            "--database",
            "other.db",
        ]);

        assert_eq!(cli.database.as_deref(), Some("other.db"));
        assert_eq!(
            cli.command,
            Command::H2h {
                first: "Rafael Nadal".to_string(),
                second: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_serve_port_is_optional() {
        let cli = Cli::parse_from(["tennis_analytics", "serve"]);
        assert_eq!(cli.command, Command::Serve { port: None });
    }
}
