use anyhow::*;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::quiz::RawTable;

pub mod generate;
pub mod merge;


pub use self::generate::GenerateArgs;
pub use self::merge::MergeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "quiz-maker",
    version,
    about = "Merge CSV question banks and turn them into a Word quiz with its answer key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sample questions and write the quiz document
    Generate(GenerateArgs),
    /// Write the merged and deduplicated question bank as CSV
    Merge(MergeArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Generate(args) => generate::run(args),
            Command::Merge(args) => merge::run(args),
        }
    }
}

fn open_tables(paths: &[PathBuf]) -> Result<Vec<RawTable>> {
    if paths.is_empty() {
        return Err(anyhow!("At least one CSV file is required"));
    }
    paths
        .iter()
        .map(|path| {
            let table = RawTable::open(Path::new(path))?;
            debug!(
                "Read {} rows and {} columns from {}",
                table.get_rows().len(),
                table.column_count(),
                path.display()
            );
            Ok(table)
        })
        .collect()
}
