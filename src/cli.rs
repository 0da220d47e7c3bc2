use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutpdf")]
#[command(about = "Splits a PDF into contiguous page ranges at given start pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Show page count and the ranges available for splitting
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Cut a PDF at the given start pages, one output file per range
    #[command(alias = "cut")]
    Split {
        /// PDF file to split
        path: PathBuf,

        /// Comma-separated start pages (e.g., "1,5,12,20")
        pages: String,

        /// Output directory (defaults to the source file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Exclude the first two and last two pages before splitting;
        /// start pages then count from the first kept page
        #[arg(short, long)]
        trim_covers: bool,
    },
}
