use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod snapshot;

#[derive(Parser)]
#[command(name = "judo")]
#[command(about = "Pools and standings for youth judo tournaments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tournament snapshot (categories, clubs, participants, fights) as JSON
    #[arg(long, env = "JUDO_SNAPSHOT")]
    snapshot: PathBuf,

    /// Number given to the first pool of each regenerated category
    #[arg(long, env = "JUDO_FIRST_POOL", default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
    first_pool: i32,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the snapshot and report problems
    Validate,
    /// Regenerate pools, discarding the fights of regenerated categories
    Pools {
        /// Only this category; all categories when omitted
        #[arg(short, long)]
        category: Option<String>,

        /// Write the updated snapshot here instead of overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Club standings and participants still waiting for a scored fight
    Stats {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Per-pool progress and ranking for one category
    Standings {
        #[arg(short, long)]
        category: String,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Mat tables: which pool runs where, and referee sign-off
    Tables {
        #[command(subcommand)]
        action: TableAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Put a pool on a table, or move it to another one
    Assign {
        #[arg(short, long)]
        category: String,

        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
        pool: i32,

        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
        table: i32,

        /// Position of the pool in the table's queue
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
        order: i32,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Sign off a finished pool
    Validate {
        #[arg(short, long)]
        category: String,

        #[arg(short, long)]
        pool: i32,

        /// Withdraw a previous sign-off
        #[arg(long)]
        reopen: bool,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Pools queued on one table
    Show {
        #[arg(short, long)]
        table: i32,

        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("judo={},tournament={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Validate => {
            commands::validate::handle_validate(&cli.snapshot).await?;
        }
        Commands::Pools { category, output } => {
            commands::pools::handle_pools(
                &cli.snapshot,
                category.as_deref(),
                cli.first_pool,
                output.as_deref(),
            )
            .await?;
        }
        Commands::Stats { output } => {
            commands::stats::handle_stats(&cli.snapshot, output.as_deref()).await?;
        }
        Commands::Standings { category, output } => {
            commands::standings::handle_standings(&cli.snapshot, &category, output.as_deref()).await?;
        }
        Commands::Tables { action } => match action {
            TableAction::Assign {
                category,
                pool,
                table,
                order,
                output,
            } => {
                commands::tables::handle_assign(
                    &cli.snapshot,
                    &category,
                    pool,
                    table,
                    order,
                    output.as_deref(),
                )
                .await?;
            }
            TableAction::Validate {
                category,
                pool,
                reopen,
                output,
            } => {
                commands::tables::handle_validate_pool(
                    &cli.snapshot,
                    &category,
                    pool,
                    reopen,
                    output.as_deref(),
                )
                .await?;
            }
            TableAction::Show { table, output } => {
                commands::tables::handle_show(&cli.snapshot, table, output.as_deref()).await?;
            }
        },
    }

    Ok(())
}
