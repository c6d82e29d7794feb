//! `caddyshack` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — apply migrations and start the web server.
//! - `migrate` — run pending database migrations.
//!
//! Log verbosity follows `RUST_LOG` (default `info,sqlx=warn`).

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "caddyshack",
    about = "Golf bag inventory web application",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply migrations, then serve the web UI.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Run pending database migrations.
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    /// SQLite connection string.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://caddyshack.db")]
    database_url: String,
    /// Pool ceiling.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

impl DatabaseArgs {
    async fn connect(&self) -> anyhow::Result<db::DbPool> {
        let pool = db::pool::create_pool(&self.database_url, self.max_connections)
            .await
            .with_context(|| format!("failed to connect to {}", self.database_url))?;
        db::pool::run_migrations(&pool)
            .await
            .context("migration failed")?;
        Ok(pool)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database } => {
            let pool = database.connect().await?;
            info!("Starting web server on {bind}");
            api::serve(&bind, pool)
                .await
                .with_context(|| format!("server on {bind} failed"))?;
        }
        Command::Migrate { database } => {
            info!("Running migrations against {}", database.database_url);
            database.connect().await?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
