use anyhow::{Context, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::quiz::error::QuizError;

pub mod question;

pub use question::{Question, RawQuestion};

#[cfg(test)]
mod tests;

/// Question, four options and the answer. Any column past these is ignored.
pub const QUESTION_COLUMNS: usize = 6;

#[derive(Clone, Debug, Default)]
pub struct RawTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new<S: Into<String>>(name: S, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn open(source: &Path) -> Result<RawTable> {
        let file =
            File::open(source).with_context(|| format!("Could not open {}", source.display()))?;
        RawTable::from_reader(source.display().to_string(), file)
            .with_context(|| format!("Could not read table from {}", source.display()))
    }

    pub fn from_reader<S: Into<String>, R: Read>(name: S, reader: R) -> Result<RawTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(RawTable::new(name, headers, rows))
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_rows(&self) -> &Vec<Vec<String>> {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Merges every table into a single set of complete questions. When a
/// question text appears more than once, its earliest complete row wins,
/// scanning tables in order and then rows in order.
pub fn ingest(tables: &[RawTable]) -> Result<QuestionSet, QuizError> {
    for table in tables {
        let columns = table.column_count();
        if columns < QUESTION_COLUMNS {
            return Err(QuizError::MalformedInput {
                table: table.get_name().to_owned(),
                columns,
            });
        }
    }

    let mut incomplete_rows = 0;
    let mut total_rows = 0;
    let complete = tables
        .iter()
        .inspect(|table| {
            debug!(
                "Merging {} rows from {}",
                table.get_rows().len(),
                table.get_name()
            )
        })
        .flat_map(|table| table.get_rows().iter())
        .map(|row| RawQuestion::from_row(row))
        .inspect(|_| total_rows += 1)
        .filter_map(|raw_question| {
            let question = raw_question.into_question();
            if question.is_none() {
                incomplete_rows += 1;
            }
            question
        });

    let questions: Vec<Question> = complete
        .unique_by(|question| question.question.clone())
        .collect();

    if incomplete_rows > 0 {
        warn!("Dropped {} incomplete rows", incomplete_rows);
    }
    info!(
        "Loaded {} unique questions out of {} rows",
        questions.len(),
        total_rows
    );

    if questions.is_empty() {
        return Err(QuizError::EmptyResult);
    }

    Ok(QuestionSet { questions })
}
