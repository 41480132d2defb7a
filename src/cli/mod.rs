//! CLI parser and command dispatch.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "flags")]
#[command(about = "Moderation-flag intake service for generated images")]
#[command(version)]
pub struct Cli {
    /// SQLite database file (overrides FLAGS_DATABASE)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema and exit
    InitDb,

    /// Start the flag ingestion server
    Serve {
        /// Bind address: port, host, or host:port (default 0.0.0.0:$PORT)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Show stored flag count and recent entries
    Status {
        /// Number of recent flags to display
        #[arg(long, default_value_t = 5)]
        limit: i64,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(database) = cli.database {
        settings = settings.with_database(database);
    }
    tracing::debug!(
        verbose = cli.verbose,
        database = %settings.database_path.display(),
        "resolved configuration"
    );

    match cli.command {
        Commands::InitDb => commands::cmd_init_db(&settings),
        Commands::Serve { bind } => commands::cmd_serve(&settings, bind.as_deref()).await,
        Commands::Status { limit } => commands::cmd_status(&settings, limit).await,
    }
}
