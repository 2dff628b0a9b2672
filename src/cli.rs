use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfslice")]
#[command(about = "Split a PDF into page ranges or merge PDFs into one file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a page range from a PDF, into one file or one file per page
    Split {
        /// PDF file to split
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file or directory (derived from the input name if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// First page of the range (1-indexed, inclusive)
        #[arg(short, long, default_value_t = 1)]
        start: u32,

        /// Last page of the range (inclusive, defaults to the last page)
        #[arg(short, long)]
        end: Option<u32>,

        /// Merge the extracted pages into a single PDF file
        #[arg(short, long)]
        merge: bool,
    },

    /// Combine PDF files and/or directories of PDFs into one file
    Merge {
        /// PDF files or directories containing PDFs, in output order
        #[arg(long, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Output file (defaults to documents_merged.pdf)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Choose the operation and its arguments interactively
    Simple,
}
