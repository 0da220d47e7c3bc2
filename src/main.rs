mod cli;
mod commands;
mod mcp;
mod pdf;
mod split_plan;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::Split {
            path,
            pages,
            output_dir,
            trim_covers,
        } => {
            commands::split::run(&path, output_dir.as_deref(), &pages, trim_covers)?;
        }
    }

    Ok(())
}
