use anyhow::*;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::document::{Composer, QuizDocument};
use crate::quiz::{ingest, sample, RawTable};
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// CSV files holding question, options A to D and answer, in that column order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// How many questions to include (defaults to 10, or fewer if the bank is smaller)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Print the +1 / -1/3 / 0 marking scheme under the title
    #[arg(long)]
    pub negative_marking: bool,

    /// Where to write the quiz document
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fix the random selection
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let settings = Settings {
        negative_marking: args.negative_marking,
        ..Default::default()
    };
    let tables = super::open_tables(&args.files)?;

    let document = match args.seed {
        Some(seed) => build_quiz(&tables, &settings, args.count, &mut StdRng::seed_from_u64(seed)),
        None => build_quiz(&tables, &settings, args.count, &mut rand::thread_rng()),
    }?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&document.file_name));
    fs::write(&path, &document.bytes)
        .with_context(|| format!("Could not write quiz to {}", path.display()))?;
    info!("Wrote {} ({})", path.display(), document.content_type);
    println!("Quiz written to {}", path.display());
    Ok(())
}

pub fn build_quiz<R: Rng + ?Sized>(
    tables: &[RawTable],
    settings: &Settings,
    requested: Option<usize>,
    rng: &mut R,
) -> Result<QuizDocument> {
    let set = ingest(tables).context("Could not build question set")?;
    println!("Loaded {} unique questions!", set.len());

    let count = settings.question_count(requested, set.len());
    let selection = sample(&set, count, rng).context("Could not pick questions")?;

    let composer = Composer::new(settings);
    let document = composer
        .compose(&selection, settings.negative_marking)
        .context("Could not compose quiz")?;
    Ok(document)
}
