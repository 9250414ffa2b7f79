//! CLI for pagecheck.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pagecheck_core::config;
use pagecheck_core::fetch_page::Fetcher;
use pagecheck_core::store::Store;

use commands::{run_add, run_check, run_completions, run_list, run_man, run_show};

/// Top-level CLI for pagecheck.
#[derive(Debug, Parser)]
#[command(name = "pagecheck")]
#[command(about = "pagecheck: track sites and check their title, h1 and meta description", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Register a URL (only scheme and host are kept).
    Add {
        /// Absolute http:// or https:// URL.
        url: String,
    },

    /// List tracked URLs with their latest check.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show one tracked URL and its full check history.
    Show {
        /// URL identifier.
        id: i64,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Fetch a tracked URL now and record title, h1 and description.
    Check {
        /// URL identifier.
        id: i64,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // These never touch config or the database.
        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = Store::open(cfg.resolved_database_path().as_deref()).await?;

        match cli.command {
            CliCommand::Add { url } => run_add(&db, &url).await?,
            CliCommand::List { json } => run_list(&db, json).await?,
            CliCommand::Show { id, json } => run_show(&db, id, json).await?,
            CliCommand::Check { id } => {
                let fetcher = Fetcher::new(cfg.fetch.clone());
                run_check(&db, &fetcher, id).await?;
            }
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
