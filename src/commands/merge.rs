use anyhow::*;
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::quiz::{ingest, QuestionSet};

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// CSV files holding question, options A to D and answer, in that column order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Where to write the merged CSV (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let tables = super::open_tables(&args.files)?;
    let set = ingest(&tables).context("Could not build question set")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            write_questions(&set, file)?;
            info!("Wrote {} questions to {}", set.len(), path.display());
        }
        None => write_questions(&set, io::stdout().lock())?,
    }
    Ok(())
}

pub fn write_questions<W: Write>(set: &QuestionSet, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for question in set.get_questions() {
        csv_writer.serialize(question)?;
    }
    csv_writer.flush()?;
    Ok(())
}
