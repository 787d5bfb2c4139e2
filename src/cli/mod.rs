// src/cli/mod.rs
// Headless maintenance commands; no subcommand launches the GUI.

pub mod export;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "insightgrid")]
#[command(about = "InsightGrid - comparative literature analysis matrix", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export a serialized matrix and document list to CSV without the GUI
    Export {
        /// Path to the matrix JSON (array of {name, insights} records)
        #[arg(long)]
        matrix: PathBuf,

        /// Path to the document list JSON
        #[arg(long)]
        documents: PathBuf,

        /// Output CSV path
        #[arg(long)]
        out: PathBuf,
    },
}
